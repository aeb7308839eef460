//! Pauli blocking of the recoil nucleon

use std::sync::atomic::{AtomicBool, Ordering};
use crate::event::Event;
use crate::interaction::Target;
use crate::nuclear::{FermiGas, LocalFermiGas, NuclearModel};
use crate::pdg;

/// The capability the kinematics generator needs from a Pauli blocker
pub trait PauliBlocker {
    /// Fermi momentum for nucleons of type `recoil_pdg` at distance
    /// `radius` from the centre of `target`
    fn fermi_momentum(&self, target: &Target, recoil_pdg: i32, radius: f64) -> f64;

    /// The next blocking query will report the event as unblocked
    fn set_ignore_next(&self);
}

/// Source of the Fermi momentum
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FermiMomentumSource {
    /// From the tabulated global Fermi gas
    Global,
    /// From the nuclear density at the interaction vertex
    Local,
}

impl std::str::FromStr for FermiMomentumSource {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(FermiMomentumSource::Global),
            "local" => Ok(FermiMomentumSource::Local),
            _ => Err(format!("'{}' is not a recognised Pauli blocker (expected local or global)", s)),
        }
    }
}

/// Blocks recoil nucleons with momentum below the Fermi momentum.
///
/// Carries a one-shot override, which is consumed by the next call to
/// `is_blocked`. Each worker thread should own its own instance.
#[derive(Debug)]
pub struct FermiPauliBlocker {
    source: FermiMomentumSource,
    ignore_next: AtomicBool,
}

impl FermiPauliBlocker {
    pub fn new(source: FermiMomentumSource) -> Self {
        FermiPauliBlocker {
            source,
            ignore_next: AtomicBool::new(false),
        }
    }

    /// Is a nucleon of type `recoil_pdg`, with momentum `p`, produced at
    /// `radius` inside `target`, Pauli blocked?
    pub fn is_blocked(&self, target: &Target, recoil_pdg: i32, p: f64, radius: f64) -> bool {
        if self.ignore_next.swap(false, Ordering::SeqCst) {
            return false;
        }
        if !target.is_nucleus() || !pdg::is_nucleon(recoil_pdg) {
            return false;
        }
        p < self.fermi_momentum(target, recoil_pdg, radius)
    }

    /// Flags `event` if its recoil nucleon is blocked.
    pub fn process(&self, event: &mut Event) {
        let blocked = match event.recoil() {
            Some(recoil) => {
                let target = event.target();
                self.is_blocked(target, recoil.pdg, recoil.momentum.p(), target.hit_nucleon_radius())
            },
            None => false,
        };
        event.set_pauli_blocked(blocked);
    }
}

impl PauliBlocker for FermiPauliBlocker {
    fn fermi_momentum(&self, target: &Target, recoil_pdg: i32, radius: f64) -> f64 {
        match self.source {
            FermiMomentumSource::Global => FermiGas::new().fermi_momentum(target, recoil_pdg, radius),
            FermiMomentumSource::Local => LocalFermiGas::new().fermi_momentum(target, recoil_pdg, radius),
        }
    }

    fn set_ignore_next(&self) {
        self.ignore_next.store(true, Ordering::SeqCst);
    }
}
