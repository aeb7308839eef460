//! The probe and target before the interaction

use crate::geometry::*;
use crate::pdg;
use super::Target;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InitialState {
    probe_pdg: i32,
    probe_p4: FourVector,
    target: Target,
}

impl InitialState {
    /// A probe travelling along +z with energy `energy` in the lab frame,
    /// incident on a stationary target.
    pub fn new(target: Target, probe_pdg: i32, energy: f64) -> Self {
        let m = pdg::mass(probe_pdg).unwrap_or(0.0);
        let pz = (energy * energy - m * m).max(0.0).sqrt();
        InitialState {
            probe_pdg,
            probe_p4: FourVector::new(energy, 0.0, 0.0, pz),
            target,
        }
    }

    pub fn probe_pdg(&self) -> i32 {
        self.probe_pdg
    }

    /// Four-momentum of the probe in the lab frame
    pub fn probe_p4(&self) -> FourVector {
        self.probe_p4
    }

    /// Probe energy in the lab frame
    pub fn probe_energy(&self) -> f64 {
        self.probe_p4.energy()
    }

    /// Probe energy in the rest frame of the (possibly off-shell)
    /// hit nucleon.
    pub fn probe_energy_hit_nucleon_rest(&self) -> f64 {
        let p_n = self.target.hit_nucleon_p4();
        let m = p_n.mass();
        if m > 0.0 {
            self.probe_p4 * p_n / m
        } else {
            self.probe_energy()
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut Target {
        &mut self.target
    }
}
