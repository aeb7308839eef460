//! Global relativistic Fermi gas

use rand::prelude::*;
use crate::interaction::Target;
use crate::pdg;
use super::{NuclearModel, NucleonState, isotropic};

// Fermi momentum and removal energy (both GeV) for symmetric nuclei,
// indexed by mass number
const FERMI_GAS_TABLE: [(i32, f64, f64); 8] = [
    (4, 0.169, 0.0170),
    (12, 0.221, 0.0250),
    (16, 0.225, 0.0270),
    (27, 0.239, 0.0280),
    (40, 0.251, 0.0295),
    (56, 0.260, 0.0360),
    (120, 0.245, 0.0420),
    (208, 0.245, 0.0440),
];

/// Parameters of the table row with the closest mass number
pub(super) fn fermi_gas_parameters(a: i32) -> (f64, f64) {
    let (_, kf, eb) = FERMI_GAS_TABLE.iter()
        .min_by_key(|(aa, _, _)| (aa - a).abs())
        .copied()
        .unwrap_or((0, 0.25, 0.025));
    (kf, eb)
}

/// Nucleons fill a sphere of radius k_F in momentum space,
/// independently of position, and all have the same removal energy.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FermiGas {
    fermi_momentum: Option<f64>,
    removal_energy: Option<f64>,
}

impl FermiGas {
    pub fn new() -> Self {
        Default::default()
    }

    /// Overrides the tabulated Fermi momentum
    pub fn with_fermi_momentum(self, kf: f64) -> Self {
        FermiGas { fermi_momentum: Some(kf), ..self }
    }

    /// Overrides the tabulated removal energy
    pub fn with_removal_energy(self, eb: f64) -> Self {
        FermiGas { removal_energy: Some(eb), ..self }
    }

    fn removal_energy(&self, target: &Target) -> f64 {
        self.removal_energy.unwrap_or_else(|| fermi_gas_parameters(target.a()).1)
    }
}

impl NuclearModel for FermiGas {
    fn generate_nucleon<R: Rng>(&self, target: &Target, radius: f64, rng: &mut R) -> NucleonState {
        if !target.is_nucleus() {
            return NucleonState::at_rest();
        }
        let nucleon = target.hit_nucleon().unwrap_or(pdg::NEUTRON);
        let kf = self.fermi_momentum(target, nucleon, radius);
        // |p|^2 d|p| uniform up to kF
        let p = kf * rng.gen::<f64>().cbrt();
        NucleonState::new(isotropic(p, rng), self.removal_energy(target))
    }

    fn fermi_momentum(&self, target: &Target, nucleon_pdg: i32, _radius: f64) -> f64 {
        if !target.is_nucleus() {
            return 0.0;
        }
        let kf = self.fermi_momentum.unwrap_or_else(|| fermi_gas_parameters(target.a()).0);
        // Asymmetric nuclei: kF scales with the cube root of the species fraction
        let (n, a) = if pdg::is_proton(nucleon_pdg) {
            (target.z(), target.a())
        } else {
            (target.n(), target.a())
        };
        kf * (2.0 * n as f64 / a as f64).cbrt()
    }
}

#[cfg(test)]
mod tests {
    use rand_xoshiro::*;
    use super::*;

    #[test]
    fn momenta_below_fermi_surface() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let model = FermiGas::new();
        let c12 = Target::new(pdg::ion_pdg(12, 6)).with_hit_nucleon(pdg::NEUTRON);
        let kf = model.fermi_momentum(&c12, pdg::NEUTRON, 0.0);
        assert!((kf - 0.221).abs() < 1.0e-12);

        let n = 50_000;
        let states: Vec<NucleonState> = (0..n)
            .map(|_| model.generate_nucleon(&c12, 0.0, &mut rng))
            .collect();
        assert!(states.iter().all(|s| s.momentum() <= kf));
        assert!(states.iter().all(|s| s.removal_energy() == 0.025));

        // <p^2> = 3 kF^2 / 5
        let mean_sqr = states.iter().map(|s| s.momentum().powi(2)).sum::<f64>() / (n as f64);
        let error = (mean_sqr - 0.6 * kf * kf).abs() / (0.6 * kf * kf);
        println!("<p^2> = {:.4e}, expected = {:.4e}, error = {:.3e}", mean_sqr, 0.6 * kf * kf, error);
        assert!(error < 0.01);
    }

    #[test]
    fn free_nucleon_is_at_rest() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let model = FermiGas::new().with_fermi_momentum(0.3);
        let p = Target::new(pdg::PROTON).with_hit_nucleon(pdg::PROTON);
        assert_eq!(model.generate_nucleon(&p, 0.0, &mut rng), NucleonState::at_rest());
        assert_eq!(model.fermi_momentum(&p, pdg::PROTON, 0.0), 0.0);
    }

    #[test]
    fn neutron_rich_nuclei() {
        let model = FermiGas::new();
        let pb = Target::new(pdg::ion_pdg(208, 82));
        let kf_p = model.fermi_momentum(&pb, pdg::PROTON, 0.0);
        let kf_n = model.fermi_momentum(&pb, pdg::NEUTRON, 0.0);
        assert!(kf_n > kf_p);
    }
}
