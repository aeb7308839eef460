//! Summary of a single neutrino-nucleus interaction: initial state,
//! process, kinematics and exclusive final-state tag.
//!
//! An `Interaction` is the working state of the generator. It is
//! mutated in place while candidate kinematics are thrown, and its
//! kinematic variables are locked once a candidate is accepted.

use std::fmt;
use crate::pdg;

mod init_state;
mod kine;
mod process;
mod target;

pub use init_state::*;
pub use kine::*;
pub use process::*;
pub use target::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Interaction {
    init_state: InitialState,
    proc_info: ProcessInfo,
    kine: Kinematics,
    excl_tag: ExclusiveTag,
}

impl Interaction {
    pub fn new(init_state: InitialState, proc_info: ProcessInfo) -> Self {
        Interaction {
            init_state,
            proc_info,
            kine: Kinematics::default(),
            excl_tag: ExclusiveTag::default(),
        }
    }

    fn qel(target: i32, hit_nucleon: i32, probe: i32, energy: f64, it: InteractionType) -> Self {
        let target = Target::new(target).with_hit_nucleon(hit_nucleon);
        let init_state = InitialState::new(target, probe, energy);
        Interaction::new(init_state, ProcessInfo::new(ScatteringType::QuasiElastic, it))
    }

    /// Charged-current quasi-elastic scattering of a probe with lab energy `energy`
    pub fn qel_cc(target: i32, hit_nucleon: i32, probe: i32, energy: f64) -> Self {
        Self::qel(target, hit_nucleon, probe, energy, InteractionType::WeakCc)
    }

    /// Neutral-current elastic scattering
    pub fn qel_nc(target: i32, hit_nucleon: i32, probe: i32, energy: f64) -> Self {
        Self::qel(target, hit_nucleon, probe, energy, InteractionType::WeakNc)
    }

    /// Quasi-elastic electron scattering
    pub fn qel_em(target: i32, hit_nucleon: i32, probe: i32, energy: f64) -> Self {
        Self::qel(target, hit_nucleon, probe, energy, InteractionType::Em)
    }

    #[allow(unused)]
    pub fn with_exclusive_tag(self, excl_tag: ExclusiveTag) -> Self {
        Interaction { excl_tag, ..self }
    }

    pub fn init_state(&self) -> &InitialState {
        &self.init_state
    }

    pub fn target(&self) -> &Target {
        self.init_state.target()
    }

    pub fn target_mut(&mut self) -> &mut Target {
        self.init_state.target_mut()
    }

    pub fn proc_info(&self) -> &ProcessInfo {
        &self.proc_info
    }

    pub fn kine(&self) -> &Kinematics {
        &self.kine
    }

    pub fn kine_mut(&mut self) -> &mut Kinematics {
        &mut self.kine
    }

    /// PDG code of the final-state primary lepton
    pub fn fs_prim_lepton_pdg(&self) -> i32 {
        let probe = self.init_state.probe_pdg();
        if self.proc_info.is_weak_cc() {
            pdg::neutrino_to_charged_lepton(probe).unwrap_or(probe)
        } else {
            probe
        }
    }

    pub fn fs_prim_lepton_mass(&self) -> f64 {
        pdg::mass(self.fs_prim_lepton_pdg()).unwrap_or(0.0)
    }

    /// PDG code of the recoil nucleon: charged-current scattering
    /// switches proton and neutron, neutral-current and EM scattering
    /// leave the struck nucleon unchanged.
    pub fn recoil_nucleon_pdg(&self) -> i32 {
        let struck = self.target().hit_nucleon().unwrap_or(0);
        if self.proc_info.is_weak_cc() {
            pdg::switch_proton_neutron(struck)
        } else {
            struck
        }
    }

    /// PDG code of the outgoing baryon: the tagged charm or strange
    /// hadron if there is one, otherwise the recoil nucleon.
    pub fn recoil_hadron_pdg(&self) -> i32 {
        self.excl_tag.charm_hadron()
            .or(self.excl_tag.strange_hadron())
            .unwrap_or_else(|| self.recoil_nucleon_pdg())
    }

    /// On-shell mass of the outgoing baryon
    pub fn recoil_mass(&self) -> f64 {
        pdg::mass(self.recoil_hadron_pdg()).unwrap_or(crate::constants::NUCLEON_MASS)
    }

    /// Codifies the interaction as a string, suitable for use
    /// as a cache key, e.g. `nu:14;tgt:1000060120;N:2112;proc:Weak[CC],QES;`
    pub fn as_string(&self) -> String {
        let mut s = format!("nu:{};tgt:{};", self.init_state.probe_pdg(), self.target().pdg());
        if let Some(n) = self.target().hit_nucleon() {
            s.push_str(&format!("N:{};", n));
        }
        s.push_str(&format!("proc:{};", self.proc_info));
        if !self.excl_tag.is_empty() {
            s.push_str(&format!("{};", self.excl_tag));
        }
        s
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
            "{} + {} [{}] at E = {:.3e} GeV, {}",
            pdg::name(self.init_state.probe_pdg()),
            pdg::name(self.target().pdg()),
            self.target().hit_nucleon().map_or("none".to_owned(), pdg::name),
            self.init_state.probe_energy(),
            self.proc_info,
        )
    }
}
