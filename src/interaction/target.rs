//! The struck nucleus and the nucleon inside it

use crate::geometry::FourVector;
use crate::pdg;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    pdg: i32,
    z: i32,
    a: i32,
    hit_nucleon: Option<i32>,
    hit_nucleon_p4: FourVector,
    hit_nucleon_radius: f64,
}

impl Target {
    /// Creates a target from the PDG code of a nucleus or a single nucleon.
    /// The hit nucleon is initially unset and at rest.
    pub fn new(pdg: i32) -> Self {
        Target {
            pdg,
            z: pdg::ion_z(pdg),
            a: pdg::ion_a(pdg),
            hit_nucleon: None,
            hit_nucleon_p4: FourVector::new(0.0, 0.0, 0.0, 0.0),
            hit_nucleon_radius: 0.0,
        }
    }

    pub fn with_hit_nucleon(self, nucleon: i32) -> Self {
        let m = pdg::mass(nucleon).unwrap_or(crate::constants::NUCLEON_MASS);
        Target {
            hit_nucleon: Some(nucleon),
            hit_nucleon_p4: FourVector::new(m, 0.0, 0.0, 0.0),
            ..self
        }
    }

    pub fn pdg(&self) -> i32 {
        self.pdg
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    pub fn a(&self) -> i32 {
        self.a
    }

    pub fn n(&self) -> i32 {
        self.a - self.z
    }

    /// Composite nuclei have A > 1
    pub fn is_nucleus(&self) -> bool {
        self.a > 1
    }

    /// Mass of the target nucleus (or nucleon)
    pub fn mass(&self) -> f64 {
        pdg::nuclear_mass(self.a, self.z)
    }

    pub fn hit_nucleon(&self) -> Option<i32> {
        self.hit_nucleon
    }

    /// On-shell mass of the hit nucleon
    pub fn hit_nucleon_mass(&self) -> f64 {
        self.hit_nucleon
            .and_then(pdg::mass)
            .unwrap_or(crate::constants::NUCLEON_MASS)
    }

    /// Four-momentum of the hit nucleon, which may be off shell
    pub fn hit_nucleon_p4(&self) -> FourVector {
        self.hit_nucleon_p4
    }

    pub fn set_hit_nucleon_p4(&mut self, p4: FourVector) {
        self.hit_nucleon_p4 = p4;
    }

    pub fn hit_nucleon_radius(&self) -> f64 {
        self.hit_nucleon_radius
    }

    pub fn set_hit_nucleon_radius(&mut self, r: f64) {
        self.hit_nucleon_radius = r;
    }

    /// PDG code and mass of the nucleus left behind when the
    /// hit nucleon is removed, in its ground state.
    pub fn remnant(&self) -> (i32, f64) {
        let z = if self.hit_nucleon.map_or(false, pdg::is_proton) {
            self.z - 1
        } else {
            self.z
        };
        let a = self.a - 1;
        (pdg::ion_pdg(a, z), pdg::nuclear_mass(a, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_remnants() {
        let c12 = Target::new(pdg::ion_pdg(12, 6));
        assert!(c12.is_nucleus());
        assert_eq!(c12.n(), 6);

        let (code, m) = c12.with_hit_nucleon(pdg::NEUTRON).remnant();
        assert_eq!(code, pdg::ion_pdg(11, 6));
        // separation energy of a neutron from C12 is ~18.7 MeV
        let sn = m + crate::constants::NEUTRON_MASS - c12.mass();
        println!("S_n(C12) = {:.3} MeV", 1.0e3 * sn);
        assert!(sn > 0.010 && sn < 0.030);

        let (code, _) = c12.with_hit_nucleon(pdg::PROTON).remnant();
        assert_eq!(code, pdg::ion_pdg(11, 5));
    }

    #[test]
    fn free_nucleon() {
        let p = Target::new(pdg::PROTON).with_hit_nucleon(pdg::PROTON);
        assert!(!p.is_nucleus());
        assert!((p.hit_nucleon_p4().mass() - crate::constants::PROTON_MASS).abs() < 1.0e-12);
    }
}
