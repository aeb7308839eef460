//! Process classification and exclusive final-state tags

use std::fmt;
use crate::pdg;

/// The gauge boson exchanged
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InteractionType {
    WeakCc,
    WeakNc,
    Em,
}

/// Only quasi-elastic scattering is generated here, but the
/// classification is kept explicit so that interactions can be
/// checked and codified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScatteringType {
    QuasiElastic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProcessInfo {
    scattering: ScatteringType,
    interaction: InteractionType,
}

impl ProcessInfo {
    pub fn new(scattering: ScatteringType, interaction: InteractionType) -> Self {
        ProcessInfo { scattering, interaction }
    }

    pub fn is_weak_cc(&self) -> bool {
        self.interaction == InteractionType::WeakCc
    }

    pub fn is_em(&self) -> bool {
        self.interaction == InteractionType::Em
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let it = match self {
            InteractionType::WeakCc => "Weak[CC]",
            InteractionType::WeakNc => "Weak[NC]",
            InteractionType::Em => "EM",
        };
        write!(f, "{}", it)
    }
}

impl fmt::Display for ProcessInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let st = match self.scattering {
            ScatteringType::QuasiElastic => "QES",
        };
        write!(f, "{},{}", self.interaction, st)
    }
}

impl std::str::FromStr for InteractionType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cc" | "weak-cc" => Ok(InteractionType::WeakCc),
            "nc" | "weak-nc" => Ok(InteractionType::WeakNc),
            "em" => Ok(InteractionType::Em),
            _ => Err(format!("'{}' is not a recognised interaction type (expected cc, nc or em)", s)),
        }
    }
}

/// Tags an exclusive final state, e.g. QE production of a charmed
/// or strange baryon instead of a nucleon.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExclusiveTag {
    charm_hadron: Option<i32>,
    strange_hadron: Option<i32>,
}

impl ExclusiveTag {
    #[allow(unused)]
    pub fn with_charm_hadron(self, pdg: i32) -> Self {
        ExclusiveTag { charm_hadron: Some(pdg), ..self }
    }

    #[allow(unused)]
    pub fn with_strange_hadron(self, pdg: i32) -> Self {
        ExclusiveTag { strange_hadron: Some(pdg), ..self }
    }

    pub fn charm_hadron(&self) -> Option<i32> {
        self.charm_hadron
    }

    pub fn strange_hadron(&self) -> Option<i32> {
        self.strange_hadron
    }

    pub fn is_empty(&self) -> bool {
        self.charm_hadron.is_none() && self.strange_hadron.is_none()
    }
}

impl fmt::Display for ExclusiveTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = vec![];
        if let Some(c) = self.charm_hadron {
            parts.push(format!("charm:{}", pdg::name(c)));
        }
        if let Some(s) = self.strange_hadron {
            parts.push(format!("strange:{}", pdg::name(s)));
        }
        write!(f, "{}", parts.join(","))
    }
}
