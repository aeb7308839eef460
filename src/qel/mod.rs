//! Quasi-elastic kinematics generator
//!
//! Kinematics are selected by rejection sampling over the hit-nucleon
//! state and the lepton angles (cos_theta0, phi0) in the
//! centre-of-momentum frame of the probe and hit nucleon. The
//! comparison function is a constant: the maximum of the differential
//! cross section, estimated once per interaction and cached.

use std::f64::consts;
use std::sync::Arc;
use rand::prelude::*;

use crate::constants::RJ_MAX_ITERATIONS;
use crate::event::Event;
use crate::geometry::ThreeVector;
use crate::input::{Config, InputError};
use crate::interaction::*;
use crate::kinematics;
use crate::nuclear::*;
use crate::pauli::PauliBlocker;
use crate::xsec::DifferentialXSec;

mod cache;
mod error;
mod max_xsec;

pub use cache::*;
pub use error::*;
pub use max_xsec::*;

/// Controls for the kinematics generator
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeneratorSettings {
    /// Multiplies the estimated maximum cross section
    pub safety_factor: f64,
    /// Maximum cross sections are only cached above this probe energy (GeV)
    pub cache_min_energy: f64,
    /// Largest tolerated excess of a sampled cross section over the maximum,
    /// as a percentage
    pub max_xsec_diff_tolerance: f64,
    /// Accept every candidate and weight the event by the cross section
    pub uniform_over_phase_space: bool,
    pub binding_mode: BindingMode,
    /// Number of nucleons drawn when estimating the maximum cross section
    pub max_nucleon_throws: usize,
    /// Limit on the number of candidates per event
    pub max_iterations: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            safety_factor: 1.6,
            cache_min_energy: 1.0,
            max_xsec_diff_tolerance: 999999.0,
            uniform_over_phase_space: false,
            binding_mode: BindingMode::UseNuclearModel,
            max_nucleon_throws: 800,
            max_iterations: RJ_MAX_ITERATIONS,
        }
    }
}

impl GeneratorSettings {
    /// Reads the `generator` section of the configuration, and the
    /// iteration limit in `control`. Absent keys take their default values.
    pub fn from_config(input: &Config) -> Result<Self, InputError> {
        let default = Self::default();

        Ok(GeneratorSettings {
            safety_factor: input.read_or("generator:safety-factor", default.safety_factor)?,
            cache_min_energy: input.read_or("generator:cache-min-energy", default.cache_min_energy)?,
            max_xsec_diff_tolerance: input.read_or("generator:max-xsec-diff-tolerance", default.max_xsec_diff_tolerance)?,
            uniform_over_phase_space: input.read_or("generator:uniform-over-phase-space", default.uniform_over_phase_space)?,
            binding_mode: input.read_or("generator:binding-mode", default.binding_mode)?,
            max_nucleon_throws: input.read_or("generator:max-xsec-nucleon-throws", default.max_nucleon_throws)?,
            max_iterations: input.read_or("control:max-iterations", default.max_iterations)?,
        })
    }
}

/// Result of a successful call to the generator
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Generated(Event),
    /// The interaction has no accessible phase space
    Empty,
}

impl Outcome {
    #[allow(unused)]
    pub fn event(&self) -> Option<&Event> {
        match self {
            Outcome::Generated(event) => Some(event),
            Outcome::Empty => None,
        }
    }
}

/// Generates quasi-elastic kinematics, using the nuclear model `N`,
/// differential cross section `X` and Pauli blocker `P`.
pub struct QelGenerator<N, X, P> where N: NuclearModel, X: DifferentialXSec, P: PauliBlocker {
    nuclear_model: N,
    xsec: X,
    pauli: P,
    settings: GeneratorSettings,
    cache: Arc<MaxXSecCache>,
}

impl<N, X, P> QelGenerator<N, X, P> where N: NuclearModel, X: DifferentialXSec, P: PauliBlocker {
    pub fn new(nuclear_model: N, xsec: X, pauli: P, settings: GeneratorSettings) -> Self {
        QelGenerator {
            nuclear_model,
            xsec,
            pauli,
            settings,
            cache: Arc::new(MaxXSecCache::new()),
        }
    }

    /// Shares a cache of maximum cross sections with other generators.
    #[allow(unused)]
    pub fn with_cache(self, cache: Arc<MaxXSecCache>) -> Self {
        QelGenerator { cache, ..self }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn pauli(&self) -> &P {
        &self.pauli
    }

    pub fn cache(&self) -> &MaxXSecCache {
        &self.cache
    }

    /// The maximum differential cross section for `interaction`,
    /// inflated by the safety factor. Taken from the cache if possible.
    pub fn max_xsec<R: Rng>(&self, interaction: &Interaction, rng: &mut R) -> f64 {
        let energy = interaction.init_state().probe_energy();
        let key = interaction.as_string();
        let use_cache = energy >= self.settings.cache_min_energy;

        if use_cache {
            if let Some(max) = self.cache.find(&key, energy) {
                return max;
            }
        }

        let max = MaxXSecEstimator::new(&self.nuclear_model, &self.xsec)
            .with_safety_factor(self.settings.safety_factor)
            .with_nucleon_throws(self.settings.max_nucleon_throws)
            .with_binding_mode(self.settings.binding_mode)
            .compute(interaction, rng);

        if use_cache {
            self.cache.insert(&key, energy, max);
        }

        max
    }

    /// Selects the kinematics of a single event.
    ///
    /// The hit nucleon of `interaction` must be set, and its radius
    /// gives the position at which nucleons are drawn from the nuclear
    /// model. On success, the selected Q^2, W, x and y are locked in
    /// the kinematics of the returned event.
    pub fn generate<R: Rng>(&self, mut interaction: Interaction, rng: &mut R) -> Result<Outcome, GenerationError> {
        if interaction.target().hit_nucleon().is_none() {
            return Err(GenerationError::MissingHitNucleon);
        }

        let settings = &self.settings;
        let uniform = settings.uniform_over_phase_space;

        // A negative maximum accepts every candidate
        let xsec_max = if uniform {
            -1.0
        } else {
            let max = self.max_xsec(&interaction, rng);
            if max <= 0.0 {
                return Ok(Outcome::Empty);
            }
            max
        };

        let is_nucleus = interaction.target().is_nucleus();
        let radius = interaction.target().hit_nucleon_radius();
        let correct = is_nucleus && settings.binding_mode == BindingMode::OnShellWithCorrection;
        let probe = interaction.init_state().probe_p4();

        let mut iter = 0;
        loop {
            iter += 1;
            if iter > settings.max_iterations {
                return Err(GenerationError::KinematicSelection { iterations: settings.max_iterations });
            }

            interaction.kine_mut().clear_running_values();

            let nucleon = if is_nucleus {
                self.nuclear_model.generate_nucleon(interaction.target(), radius, rng)
            } else {
                NucleonState::at_rest()
            };
            let mut removal_energy = bind_hit_nucleon(&mut interaction, &nucleon, settings.binding_mode);

            let cos_max = kinematics::cos_theta0_max(&interaction).min(1.0);
            if cos_max <= -1.0 {
                continue;
            }

            let cos_theta0 = -1.0 + (cos_max + 1.0) * rng.gen::<f64>();
            let phi0 = 2.0 * consts::PI * rng.gen::<f64>();

            let xsec = self.xsec.evaluate(&mut interaction, cos_theta0, phi0);

            if !uniform && xsec > xsec_max {
                let deviation = 200.0 * (xsec - xsec_max) / (xsec + xsec_max);
                if deviation > settings.max_xsec_diff_tolerance {
                    return Err(GenerationError::ToleranceViolation { xsec, max_xsec: xsec_max, deviation });
                }
                eprintln!(
                    "Warning: xsec = {:.6e} exceeds the maximum {:.6e} by {:.3}% for {}.",
                    xsec, xsec_max, deviation, interaction,
                );
            }

            let t = xsec_max * rng.gen::<f64>();
            if t >= xsec {
                continue;
            }

            if interaction.kine().q2(false).is_none() {
                // the cross section did not record the final state
                let fs = match kinematics::two_body_final_state(&interaction, cos_theta0, phi0) {
                    Some(fs) => fs,
                    None => continue,
                };
                let kine = interaction.kine_mut();
                kine.set(KineVar::Q2, fs.q2(probe));
                kine.set_fs_lepton_p4(fs.lepton);
                kine.set_had_syst_p4(fs.recoil);
            }

            if correct {
                let p_uncorrected = interaction.kine().had_syst_p4().map_or(0.0, |p| p.p());
                removal_energy = bind_hit_nucleon(&mut interaction, &nucleon, BindingMode::UseNuclearModel);

                let fs = match kinematics::two_body_final_state(&interaction, cos_theta0, phi0) {
                    Some(fs) => fs,
                    None => continue,
                };

                if interaction.proc_info().is_em() {
                    let angle = ThreeVector::from(fs.lepton).angle(ThreeVector::from(probe));
                    if angle < self.xsec.min_angle_em() {
                        continue;
                    }
                }

                let q2 = fs.q2(probe);
                let (q2_min, q2_max) = kinematics::q2_limits(&interaction);
                if q2 < q2_min || q2 > q2_max {
                    continue;
                }

                // Don't let the correction alone move the recoil below the Fermi surface
                let kf = self.pauli.fermi_momentum(interaction.target(), interaction.recoil_nucleon_pdg(), radius);
                if fs.recoil.p() < kf && p_uncorrected >= kf {
                    self.pauli.set_ignore_next();
                }

                let kine = interaction.kine_mut();
                kine.set(KineVar::Q2, q2);
                kine.set_fs_lepton_p4(fs.lepton);
                kine.set_had_syst_p4(fs.recoil);
            }

            let kine = interaction.kine();
            let (lepton, recoil, q2) = match (kine.fs_lepton_p4(), kine.had_syst_p4(), kine.q2(false)) {
                (Some(lepton), Some(recoil), Some(q2)) => (lepton, recoil, q2),
                _ => continue,
            };

            let w = interaction.recoil_mass();
            let e = interaction.init_state().probe_energy_hit_nucleon_rest();
            let m = interaction.target().hit_nucleon_p4().mass();
            let (x, y) = kinematics::wq2_to_xy(e, m, w, q2);

            let kine = interaction.kine_mut();
            kine.lock(KineVar::Q2, q2);
            kine.lock(KineVar::W, w);
            kine.lock(KineVar::X, x);
            kine.lock(KineVar::Y, y);
            kine.clear_running_values();

            let weight = if uniform {
                xsec * (cos_max + 1.0) * 2.0 * consts::PI
            } else {
                1.0
            };

            let event = Event::new(&interaction, lepton, recoil)
                .with_removal_energy(removal_energy)
                .with_diff_xsec(xsec)
                .with_weight(weight);

            return Ok(Outcome::Generated(event));
        }
    }
}
