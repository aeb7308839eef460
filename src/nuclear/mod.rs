//! Nuclear ground-state models, which supply the momentum and
//! removal energy of the struck nucleon

use enum_dispatch::enum_dispatch;
use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::geometry::ThreeVector;
use crate::interaction::Target;

mod binding;
mod density;
mod fermi_gas;
mod local_fermi_gas;

pub use binding::*;
pub use density::*;
pub use fermi_gas::*;
pub use local_fermi_gas::*;

/// Momentum and removal energy of a nucleon drawn from a nuclear model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NucleonState {
    p: ThreeVector,
    removal_energy: f64,
}

impl NucleonState {
    pub fn new(p: ThreeVector, removal_energy: f64) -> Self {
        NucleonState { p, removal_energy }
    }

    /// A free nucleon: at rest and unbound
    pub fn at_rest() -> Self {
        NucleonState::new(ThreeVector::new(0.0, 0.0, 0.0), 0.0)
    }

    /// Magnitude of the nucleon momentum
    pub fn momentum(&self) -> f64 {
        self.p.norm()
    }

    pub fn momentum3(&self) -> ThreeVector {
        self.p
    }

    pub fn removal_energy(&self) -> f64 {
        self.removal_energy
    }

    pub fn set_momentum3(&mut self, p: ThreeVector) {
        self.p = p;
    }

}

/// Represents the initial state of nucleons inside a nucleus.
#[enum_dispatch]
pub trait NuclearModel {
    /// Pseudorandomly samples the momentum and removal energy of a
    /// nucleon, located at distance `radius` (fm) from the centre
    /// of `target`, from the model's distributions.
    fn generate_nucleon<R: Rng>(&self, target: &Target, radius: f64, rng: &mut R) -> NucleonState;

    /// Fermi momentum of nucleons of type `nucleon_pdg` at distance
    /// `radius` from the centre of `target`.
    fn fermi_momentum(&self, target: &Target, nucleon_pdg: i32, radius: f64) -> f64;
}

/// The nuclear models available to the generator
#[enum_dispatch(NuclearModel)]
#[derive(Clone, Debug)]
pub enum NuclearModelKind {
    FermiGas,
    LocalFermiGas,
}

impl std::str::FromStr for NuclearModelKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fermi-gas" | "rfg" => Ok(FermiGas::new().into()),
            "local-fermi-gas" | "lfg" => Ok(LocalFermiGas::new().into()),
            _ => Err(format!("'{}' is not a recognised nuclear model (expected fermi-gas or local-fermi-gas)", s)),
        }
    }
}

impl NuclearModelKind {
    /// Overrides the tabulated removal energy (GeV)
    pub fn with_removal_energy(self, eb: f64) -> Self {
        match self {
            NuclearModelKind::FermiGas(m) => m.with_removal_energy(eb).into(),
            NuclearModelKind::LocalFermiGas(m) => m.with_removal_energy(eb).into(),
        }
    }

    /// Overrides the tabulated Fermi momentum (GeV) of the global
    /// Fermi gas. The local Fermi gas takes it from the density.
    pub fn with_fermi_momentum(self, kf: f64) -> Self {
        match self {
            NuclearModelKind::FermiGas(m) => m.with_fermi_momentum(kf).into(),
            other => other,
        }
    }
}

/// Samples an isotropically oriented vector of magnitude `mag`.
fn isotropic<R: Rng>(mag: f64, rng: &mut R) -> ThreeVector {
    loop {
        let v = ThreeVector::new(
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
        );
        if v.norm_sqr() > 0.0 {
            break mag * v.normalize();
        }
    }
}

/// Fermi momentum (GeV) of a species with number density `rho` (fm^-3)
fn fermi_momentum_from_density(rho: f64) -> f64 {
    crate::constants::HBAR_C * (3.0 * std::f64::consts::PI.powi(2) * rho.max(0.0)).cbrt()
}

#[cfg(test)]
mod tests {
    use rand_xoshiro::*;
    use super::*;

    #[test]
    fn isotropic_directions() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let n = 100_000;
        let mean = (0..n)
            .map(|_| isotropic(1.0, &mut rng))
            .fold(ThreeVector::new(0.0, 0.0, 0.0), |a, b| a + b) / (n as f64);
        println!("<n> = {}", mean);
        assert!(mean.norm() < 0.01);
    }

    #[test]
    fn dispatch_by_name() {
        let model: NuclearModelKind = "lfg".parse().unwrap();
        let c12 = Target::new(crate::pdg::ion_pdg(12, 6));
        let kf = model.fermi_momentum(&c12, crate::pdg::PROTON, 0.0);
        println!("kF(C12, r = 0) = {:.3} GeV", kf);
        assert!(kf > 0.2 && kf < 0.3);
        assert!("shell-model".parse::<NuclearModelKind>().is_err());
    }

    #[test]
    fn overridden_parameters() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let c12 = Target::new(crate::pdg::ion_pdg(12, 6)).with_hit_nucleon(crate::pdg::NEUTRON);

        let model: NuclearModelKind = "rfg".parse().unwrap();
        let model = model.with_removal_energy(0.05).with_fermi_momentum(0.3);
        assert_eq!(model.fermi_momentum(&c12, crate::pdg::NEUTRON, 0.0), 0.3);
        let p_max = (0..10_000)
            .map(|_| model.generate_nucleon(&c12, 0.0, &mut rng))
            .inspect(|n| assert_eq!(n.removal_energy(), 0.05))
            .map(|n| n.momentum())
            .fold(0.0f64, |a, b| a.max(b));
        println!("p_max = {:.4} GeV", p_max);
        assert!(p_max > 0.29 && p_max <= 0.3);

        // the local Fermi momentum is fixed by the density
        let model: NuclearModelKind = "lfg".parse().unwrap();
        let kf = model.fermi_momentum(&c12, crate::pdg::NEUTRON, 1.0);
        let model = model.with_removal_energy(0.05).with_fermi_momentum(0.3);
        assert_eq!(model.fermi_momentum(&c12, crate::pdg::NEUTRON, 1.0), kf);
        assert_eq!(model.generate_nucleon(&c12, 1.0, &mut rng).removal_energy(), 0.05);
    }
}
