//! Estimates the maximum of the differential cross section

use std::f64::consts;
use rand::prelude::*;

use crate::geometry::ThreeVector;
use crate::interaction::Interaction;
use crate::kinematics;
use crate::nuclear::*;
use crate::xsec::DifferentialXSec;

/// Number of grid points per dimension in each layer of the angular search
const GRID_POINTS: usize = 10;
/// Maximum number of refinement layers
const MAX_LAYERS: usize = 100;
/// The search stops once a layer improves the maximum by less than this
/// fraction of the safety margin
const ACCEPTABLE_FRACTION: f64 = 0.2;

/// Searches for an upper bound on the differential cross section over
/// the nucleon momentum and lepton angles.
///
/// The nucleon is first fixed at its most favourable state: the largest
/// momentum the nuclear model provides, pointing at the probe, and the
/// smallest removal energy. The lepton angles are then refined on a
/// shrinking grid.
pub struct MaxXSecEstimator<'a, N: NuclearModel, X: DifferentialXSec> {
    nuclear_model: &'a N,
    xsec: &'a X,
    safety_factor: f64,
    nucleon_throws: usize,
    binding_mode: BindingMode,
}

impl<'a, N: NuclearModel, X: DifferentialXSec> MaxXSecEstimator<'a, N, X> {
    pub fn new(nuclear_model: &'a N, xsec: &'a X) -> Self {
        MaxXSecEstimator {
            nuclear_model,
            xsec,
            safety_factor: 1.6,
            nucleon_throws: 800,
            binding_mode: BindingMode::UseNuclearModel,
        }
    }

    pub fn with_safety_factor(self, safety_factor: f64) -> Self {
        MaxXSecEstimator { safety_factor, ..self }
    }

    pub fn with_nucleon_throws(self, nucleon_throws: usize) -> Self {
        MaxXSecEstimator { nucleon_throws, ..self }
    }

    pub fn with_binding_mode(self, binding_mode: BindingMode) -> Self {
        MaxXSecEstimator { binding_mode, ..self }
    }

    /// Returns the maximum cross section multiplied by the safety factor,
    /// or zero if no nucleon state gives any accessible phase space.
    /// `interaction` is not modified.
    pub fn compute<R: Rng>(&self, interaction: &Interaction, rng: &mut R) -> f64 {
        let mut interaction = interaction.clone();
        let is_nucleus = interaction.target().is_nucleus();
        let throws = if is_nucleus { self.nucleon_throws } else { 1 };

        // Phase A: most favourable nucleon state
        let mut extremum: Option<(f64, f64)> = None;

        for _i in 0..throws {
            let mut nucleon = if is_nucleus {
                self.nuclear_model.generate_nucleon(interaction.target(), 0.0, rng)
            } else {
                NucleonState::at_rest()
            };
            let p = nucleon.momentum();
            nucleon.set_momentum3(ThreeVector::new(0.0, 0.0, -p));
            bind_hit_nucleon(&mut interaction, &nucleon, self.binding_mode);

            if kinematics::cos_theta0_max(&interaction) > -1.0 {
                let eb = nucleon.removal_energy();
                extremum = match extremum {
                    Some((e_min, p_max)) => Some((e_min.min(eb), p_max.max(p))),
                    None => Some((eb, p)),
                };
            }
        }

        let (e_min, p_max) = match extremum {
            Some(x) => x,
            None => {
                eprintln!("Warning: no accessible phase space for {} after {} nucleon throws.", interaction, throws);
                return 0.0;
            }
        };

        // Phase B: angular refinement
        let nucleon = NucleonState::new(ThreeVector::new(0.0, 0.0, -p_max), e_min);
        bind_hit_nucleon(&mut interaction, &nucleon, self.binding_mode);
        let cos_max = kinematics::cos_theta0_max(&interaction).min(1.0);

        let (mut cos_lo, mut cos_hi) = (-1.0, cos_max);
        let (mut phi_lo, mut phi_hi) = (0.0, 2.0 * consts::PI);
        let mut max_xsec = 0.0;
        let mut prev_max = 0.0;
        // location of the maximum, kept across layers
        let mut best = (cos_lo, phi_lo);

        for layer in 0..MAX_LAYERS {
            let cos_step = (cos_hi - cos_lo) / (GRID_POINTS as f64);
            let phi_step = (phi_hi - phi_lo) / (GRID_POINTS as f64);

            for i in 0..GRID_POINTS {
                let cos_theta0 = cos_lo + (i as f64) * cos_step;
                for j in 0..GRID_POINTS {
                    let phi0 = phi_lo + (j as f64) * phi_step;
                    let xsec = self.xsec.evaluate(&mut interaction, cos_theta0, phi0);
                    if xsec > max_xsec {
                        max_xsec = xsec;
                        best = (cos_theta0, phi0);
                    }
                }
            }

            let improvement = if prev_max > 0.0 {
                max_xsec / prev_max - 1.0
            } else if max_xsec > 0.0 {
                std::f64::INFINITY
            } else {
                0.0
            };

            if layer >= 1 && improvement < ACCEPTABLE_FRACTION * (self.safety_factor - 1.0) {
                break;
            }

            prev_max = max_xsec;
            cos_lo = (best.0 - cos_step).max(-1.0);
            cos_hi = (best.0 + cos_step).min(cos_max);
            phi_lo = best.1 - phi_step;
            phi_hi = best.1 + phi_step;
        }

        max_xsec * self.safety_factor
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use rand_xoshiro::*;
    use super::*;
    use crate::interaction::Target;
    use crate::pdg;

    struct Counting<F: Fn(f64, f64) -> f64> {
        f: F,
        calls: Cell<usize>,
    }

    impl<F: Fn(f64, f64) -> f64> DifferentialXSec for Counting<F> {
        fn evaluate(&self, _interaction: &mut Interaction, cos_theta0: f64, phi0: f64) -> f64 {
            self.calls.set(self.calls.get() + 1);
            (self.f)(cos_theta0, phi0)
        }
    }

    #[test]
    fn no_phase_space() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        // tau production is forbidden at 1 GeV, whatever the Fermi motion
        let interaction = Interaction::qel_cc(pdg::ion_pdg(12, 6), pdg::NEUTRON, pdg::NU_TAU, 1.0);
        let model = FermiGas::new();
        let xsec = Counting { f: |_, _| 1.0, calls: Cell::new(0) };
        let max = MaxXSecEstimator::new(&model, &xsec).compute(&interaction, &mut rng);
        assert_eq!(max, 0.0);
        assert_eq!(xsec.calls.get(), 0);
    }

    #[test]
    fn finds_peak() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let interaction = Interaction::qel_cc(pdg::NEUTRON, pdg::NEUTRON, pdg::NU_MU, 1.0);
        let model = FermiGas::new();
        let peak = |c: f64, phi: f64| {
            (-(c - 0.37).powi(2) / 0.02).exp() * (1.0 + 0.5 * phi.cos())
        };
        let xsec = Counting { f: peak, calls: Cell::new(0) };
        let max = MaxXSecEstimator::new(&model, &xsec)
            .with_safety_factor(1.0)
            .compute(&interaction, &mut rng);
        println!("max = {:.6}, calls = {}", max, xsec.calls.get());
        assert!(max <= 1.5 && max > 0.97 * 1.5);
        assert!(xsec.calls.get() >= 200);

        // input is untouched
        assert_eq!(interaction.target(), &Target::new(pdg::NEUTRON).with_hit_nucleon(pdg::NEUTRON));
    }

    #[test]
    fn window_stays_on_maximum() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        // elastic electron scattering: cos_theta0 spans [-1, 1]
        let interaction = Interaction::qel_em(pdg::PROTON, pdg::PROTON, pdg::ELECTRON, 1.0);
        let model = FermiGas::new();

        // peaks on a point of the first grid, so later layers bring no
        // strict improvement
        let last = Cell::new((1.0, 1.0));
        let peak = |c: f64, phi: f64| {
            last.set((c, phi));
            1.0 - c * c - (1.0 - phi.cos())
        };
        let xsec = Counting { f: peak, calls: Cell::new(0) };
        let max = MaxXSecEstimator::new(&model, &xsec)
            .with_safety_factor(1.0)
            .compute(&interaction, &mut rng);

        let (c, phi) = last.get();
        println!("max = {:.6}, calls = {}, last point = ({:.3e}, {:.3e})", max, xsec.calls.get(), c, phi);
        assert!((max - 1.0).abs() < 1.0e-12);
        // the final layer is still centred on the peak
        assert!(c.abs() < 1.0e-3 && phi.abs() < 1.0e-3);
    }

    #[test]
    fn safety_factor_scales_result() {
        let interaction = Interaction::qel_cc(pdg::ion_pdg(16, 8), pdg::PROTON, -pdg::NU_MU, 2.0);
        let model = FermiGas::new();
        let xsec = Counting { f: |c: f64, _| 1.0 + c, calls: Cell::new(0) };

        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let max1 = MaxXSecEstimator::new(&model, &xsec).with_safety_factor(1.0).compute(&interaction, &mut rng);
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let max2 = MaxXSecEstimator::new(&model, &xsec).with_safety_factor(2.0).compute(&interaction, &mut rng);
        println!("max1 = {:.6}, max2 = {:.6}", max1, max2);
        // a monotonic cross section peaks at the edge of the window
        assert!(max1 > 1.9 && max1 <= 2.0);
        // a larger safety factor stops the refinement sooner
        assert!(max2 / 2.0 <= max1 && max2 / 2.0 > 0.95 * max1);
    }
}
