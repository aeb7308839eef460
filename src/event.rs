//! Record of a generated event

use std::fmt;
use crate::geometry::*;
use crate::interaction::*;
use crate::pdg;

/// Where a particle sits in the event
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Initial,
    /// The struck nucleon, inside the target nucleus
    Nucleon,
    StableFinal,
    /// Produced inside the nucleus, subject to intranuclear transport
    HadronInNucleus,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Status::Initial => "initial",
            Status::Nucleon => "nucleon",
            Status::StableFinal => "final",
            Status::HadronInNucleus => "in-nucleus",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EventParticle {
    pub pdg: i32,
    pub status: Status,
    pub momentum: FourVector,
}

impl EventParticle {
    fn new(pdg: i32, status: Status, momentum: FourVector) -> Self {
        EventParticle { pdg, status, momentum }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    particles: Vec<EventParticle>,
    target: Target,
    removal_energy: f64,
    diff_xsec: f64,
    weight: f64,
    pauli_blocked: bool,
    kinematics: Kinematics,
}

impl Event {
    /// Assembles an event from an interaction whose kinematics have been
    /// selected, given the lab-frame momenta of the final-state lepton and
    /// the recoil baryon.
    ///
    /// If the target is a nucleus, the remnant carries the recoil momentum
    /// of the hit nucleon and whatever energy is left over.
    pub fn new(interaction: &Interaction, lepton: FourVector, recoil: FourVector) -> Self {
        let target = *interaction.target();
        let p_n = target.hit_nucleon_p4();
        let hit = target.hit_nucleon().unwrap_or(0);

        let mut particles = vec![
            EventParticle::new(interaction.init_state().probe_pdg(), Status::Initial, interaction.init_state().probe_p4()),
        ];

        if target.is_nucleus() {
            let mi = target.mass();
            particles.push(EventParticle::new(target.pdg(), Status::Initial, FourVector::new(mi, 0.0, 0.0, 0.0)));
            particles.push(EventParticle::new(hit, Status::Nucleon, p_n));
        } else {
            particles.push(EventParticle::new(hit, Status::Initial, p_n));
        }

        particles.push(EventParticle::new(interaction.fs_prim_lepton_pdg(), Status::StableFinal, lepton));

        let recoil_status = if target.is_nucleus() { Status::HadronInNucleus } else { Status::StableFinal };
        particles.push(EventParticle::new(interaction.recoil_hadron_pdg(), recoil_status, recoil));

        if target.is_nucleus() {
            let (remnant, _) = target.remnant();
            let p = FourVector::from_parts(target.mass() - p_n[0], -ThreeVector::from(p_n));
            particles.push(EventParticle::new(remnant, Status::StableFinal, p));
        }

        Event {
            particles,
            target,
            removal_energy: 0.0,
            diff_xsec: 0.0,
            weight: 1.0,
            pauli_blocked: false,
            kinematics: *interaction.kine(),
        }
    }

    pub fn with_removal_energy(self, removal_energy: f64) -> Self {
        Event { removal_energy, ..self }
    }

    pub fn with_diff_xsec(self, diff_xsec: f64) -> Self {
        Event { diff_xsec, ..self }
    }

    pub fn with_weight(self, weight: f64) -> Self {
        Event { weight, ..self }
    }

    #[allow(unused)]
    pub fn particles(&self) -> &[EventParticle] {
        &self.particles
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    fn find(&self, status: Status, offset: usize) -> Option<&EventParticle> {
        self.particles.iter().filter(|p| p.status == status).nth(offset)
    }

    #[allow(unused)]
    pub fn probe(&self) -> &EventParticle {
        &self.particles[0]
    }

    #[allow(unused)]
    pub fn hit_nucleon(&self) -> Option<&EventParticle> {
        if self.target.is_nucleus() {
            self.find(Status::Nucleon, 0)
        } else {
            self.find(Status::Initial, 1)
        }
    }

    /// The primary final-state lepton
    pub fn lepton(&self) -> Option<&EventParticle> {
        self.find(Status::StableFinal, 0)
    }

    /// The outgoing baryon
    pub fn recoil(&self) -> Option<&EventParticle> {
        if self.target.is_nucleus() {
            self.find(Status::HadronInNucleus, 0)
        } else {
            self.find(Status::StableFinal, 1)
        }
    }

    /// The nucleus left behind, if any
    #[allow(unused)]
    pub fn remnant(&self) -> Option<&EventParticle> {
        if self.target.is_nucleus() {
            self.find(Status::StableFinal, 1)
        } else {
            None
        }
    }

    /// Removal energy of the struck nucleon
    pub fn removal_energy(&self) -> f64 {
        self.removal_energy
    }

    /// Differential cross section at the selected kinematics
    #[allow(unused)]
    pub fn diff_xsec(&self) -> f64 {
        self.diff_xsec
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn pauli_blocked(&self) -> bool {
        self.pauli_blocked
    }

    pub fn set_pauli_blocked(&mut self, blocked: bool) {
        self.pauli_blocked = blocked;
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:>12} {:>10} {:>14} {:>14} {:>14} {:>14}", "particle", "status", "E [GeV]", "px [GeV]", "py [GeV]", "pz [GeV]")?;
        for p in self.particles.iter() {
            writeln!(f, "{:>12} {:>10} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e}",
                pdg::name(p.pdg), p.status, p.momentum[0], p.momentum[1], p.momentum[2], p.momentum[3])?;
        }
        write!(f,
            "{}, dsigma = {:.6e}, weight = {:.6e}{}",
            self.kinematics, self.diff_xsec, self.weight,
            if self.pauli_blocked { ", Pauli blocked" } else { "" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nuclear_event_layout() {
        let mut interaction = Interaction::qel_cc(pdg::ion_pdg(12, 6), pdg::NEUTRON, pdg::NU_MU, 1.0);
        let p_n = FourVector::new(0.9, 0.1, 0.0, -0.1);
        interaction.target_mut().set_hit_nucleon_p4(p_n);

        let lepton = FourVector::new(0.6, 0.2, 0.0, 0.5);
        let recoil = interaction.init_state().probe_p4() + p_n - lepton;
        let event = Event::new(&interaction, lepton, recoil).with_diff_xsec(2.0);

        assert_eq!(event.particles().len(), 6);
        assert_eq!(event.lepton().map(|p| p.pdg), Some(pdg::MUON));
        assert_eq!(event.recoil().map(|p| p.pdg), Some(pdg::PROTON));
        assert_eq!(event.recoil().map(|p| p.status), Some(Status::HadronInNucleus));
        assert_eq!(event.remnant().map(|p| p.pdg), Some(pdg::ion_pdg(11, 6)));
        assert_eq!(event.hit_nucleon().map(|p| p.momentum), Some(p_n));
        assert_eq!(event.diff_xsec(), 2.0);

        // total four-momentum is conserved
        let initial = event.particles().iter()
            .filter(|p| p.status == Status::Initial)
            .fold(FourVector::new(0.0, 0.0, 0.0, 0.0), |a, p| a + p.momentum);
        let last = event.particles().iter()
            .filter(|p| p.status == Status::StableFinal || p.status == Status::HadronInNucleus)
            .fold(FourVector::new(0.0, 0.0, 0.0, 0.0), |a, p| a + p.momentum);
        for i in 0..4 {
            assert!((initial[i] - last[i]).abs() < 1.0e-9);
        }
    }

    #[test]
    fn free_nucleon_event() {
        let interaction = Interaction::qel_cc(pdg::PROTON, pdg::PROTON, -pdg::NU_E, 1.0);
        let lepton = FourVector::new(0.8, 0.0, 0.3, 0.7);
        let recoil = FourVector::new(1.1, 0.0, -0.3, 0.3);
        let event = Event::new(&interaction, lepton, recoil);
        assert_eq!(event.particles().len(), 4);
        assert_eq!(event.lepton().map(|p| p.pdg), Some(-pdg::ELECTRON));
        assert_eq!(event.recoil().map(|p| p.pdg), Some(pdg::NEUTRON));
        assert!(event.remnant().is_none());
        assert_eq!(event.hit_nucleon().map(|p| p.pdg), Some(pdg::PROTON));
    }
}
