//! Local Fermi gas: the Fermi momentum follows the nuclear density

use rand::prelude::*;
use crate::interaction::Target;
use crate::pdg;
use super::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LocalFermiGas {
    removal_energy: Option<f64>,
}

impl LocalFermiGas {
    pub fn new() -> Self {
        Default::default()
    }

    /// Overrides the tabulated removal energy
    pub fn with_removal_energy(self, eb: f64) -> Self {
        LocalFermiGas { removal_energy: Some(eb) }
    }
}

impl NuclearModel for LocalFermiGas {
    fn generate_nucleon<R: Rng>(&self, target: &Target, radius: f64, rng: &mut R) -> NucleonState {
        if !target.is_nucleus() {
            return NucleonState::at_rest();
        }
        let nucleon = target.hit_nucleon().unwrap_or(pdg::NEUTRON);
        let kf = self.fermi_momentum(target, nucleon, radius);
        let p = kf * rng.gen::<f64>().cbrt();
        let eb = self.removal_energy
            .unwrap_or_else(|| fermi_gas::fermi_gas_parameters(target.a()).1);
        NucleonState::new(isotropic(p, rng), eb)
    }

    fn fermi_momentum(&self, target: &Target, nucleon_pdg: i32, radius: f64) -> f64 {
        if !target.is_nucleus() {
            return 0.0;
        }
        let fraction = if pdg::is_proton(nucleon_pdg) {
            target.z() as f64 / target.a() as f64
        } else {
            target.n() as f64 / target.a() as f64
        };
        let rho = NuclearDensity::new(target).at(radius);
        fermi_momentum_from_density(fraction * rho)
    }
}

#[cfg(test)]
mod tests {
    use rand_xoshiro::*;
    use super::*;

    #[test]
    fn fermi_momentum_falls_with_radius() {
        let model = LocalFermiGas::new();
        let fe = Target::new(pdg::ion_pdg(56, 26));
        let kf: Vec<f64> = [0.0, 2.0, 4.0, 6.0, 8.0].iter()
            .map(|r| model.fermi_momentum(&fe, pdg::PROTON, *r))
            .collect();
        println!("kF(r) = {:?}", kf);
        assert!(kf.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn sampled_momenta_respect_local_fermi_surface() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let model = LocalFermiGas::new().with_removal_energy(0.02);
        let o16 = Target::new(pdg::ion_pdg(16, 8)).with_hit_nucleon(pdg::PROTON);
        for &r in &[0.0, 2.5, 4.0] {
            let kf = model.fermi_momentum(&o16, pdg::PROTON, r);
            for _i in 0..1000 {
                let state = model.generate_nucleon(&o16, r, &mut rng);
                assert!(state.momentum() <= kf);
                assert_eq!(state.removal_energy(), 0.02);
            }
        }
    }
}
