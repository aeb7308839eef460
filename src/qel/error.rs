//! Kinematic generation errors

use std::fmt;
use std::error::Error;

/// Why did the kinematics generator fail?
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GenerationError {
    /// No candidate was accepted within the iteration limit
    KinematicSelection {
        iterations: usize,
    },
    /// A sampled cross section exceeded the cached maximum by more than
    /// the configured tolerance
    ToleranceViolation {
        xsec: f64,
        max_xsec: f64,
        deviation: f64,
    },
    /// The interaction does not specify a hit nucleon
    MissingHitNucleon,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerationError::KinematicSelection { iterations } => write!(f,
                "Could not select a valid (cos_theta0, phi0) pair after {} iterations.", iterations),
            GenerationError::ToleranceViolation { xsec, max_xsec, deviation } => write!(f,
                "Sampled cross section {:.6e} exceeds the maximum {:.6e} by {:.3} percent.", xsec, max_xsec, deviation),
            GenerationError::MissingHitNucleon => write!(f,
                "Interaction has no hit nucleon."),
        }
    }
}

impl Error for GenerationError {}
