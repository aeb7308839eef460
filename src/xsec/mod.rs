//! Differential cross sections for quasi-elastic scattering

use std::f64::consts;
use crate::interaction::*;
use crate::kinematics;

mod llewellyn_smith;

pub use llewellyn_smith::*;

/// Represents a cross section that is differential in the lepton
/// scattering angles in the centre-of-momentum frame of the probe and
/// the hit nucleon.
pub trait DifferentialXSec {
    /// Returns d^2 sigma / d cos_theta0 d phi0 for the current state
    /// of the hit nucleon, which must already be bound, and the lepton
    /// angles (`cos_theta0`, `phi0`).
    ///
    /// The result is non-negative and zero outside the allowed phase
    /// space. Implementations may record running kinematics in
    /// `interaction`.
    fn evaluate(&self, interaction: &mut Interaction, cos_theta0: f64, phi0: f64) -> f64;

    /// Smallest lab-frame lepton scattering angle (radians) accepted
    /// for electromagnetic processes
    fn min_angle_em(&self) -> f64 {
        0.0
    }
}

/// A model for the single-differential cross section dsigma/dQ^2,
/// evaluated at the running Q^2 of the interaction.
pub trait XSecModel {
    fn dxsec_dq2(&self, interaction: &Interaction) -> f64;
}

/// Maps a dsigma/dQ^2 model onto the COM lepton angles, applying
/// the kinematic and experimental cuts.
#[derive(Clone, Debug)]
pub struct QelPhaseSpace<M: XSecModel> {
    model: M,
    min_angle_em: f64,
}

impl<M: XSecModel> QelPhaseSpace<M> {
    pub fn new(model: M) -> Self {
        QelPhaseSpace { model, min_angle_em: 0.0 }
    }

    /// Electromagnetic events with a lab-frame scattering angle
    /// smaller than `angle` (radians) are discarded.
    pub fn with_min_angle_em(self, angle: f64) -> Self {
        QelPhaseSpace { min_angle_em: angle, ..self }
    }
}

impl<M: XSecModel> DifferentialXSec for QelPhaseSpace<M> {
    fn evaluate(&self, interaction: &mut Interaction, cos_theta0: f64, phi0: f64) -> f64 {
        let fs = match kinematics::two_body_final_state(interaction, cos_theta0, phi0) {
            Some(fs) => fs,
            None => return 0.0,
        };

        let probe = interaction.init_state().probe_p4();

        if interaction.proc_info().is_em() {
            let angle = crate::geometry::ThreeVector::from(fs.lepton)
                .angle(crate::geometry::ThreeVector::from(probe));
            if angle < self.min_angle_em {
                return 0.0;
            }
        }

        let q2 = fs.q2(probe);
        let (q2_min, q2_max) = kinematics::q2_limits(interaction);
        if q2 < q2_min || q2 > q2_max {
            return 0.0;
        }

        let kine = interaction.kine_mut();
        kine.set(KineVar::Q2, q2);
        kine.set_fs_lepton_p4(fs.lepton);
        kine.set_had_syst_p4(fs.recoil);

        // dQ^2 = 2 p p' dcos_theta0, and the azimuthal integral is 2 pi
        let jacobian = fs.probe_com_momentum * fs.lepton_com_momentum / consts::PI;
        let xsec = self.model.dxsec_dq2(interaction) * jacobian;
        xsec.max(0.0)
    }

    fn min_angle_em(&self) -> f64 {
        self.min_angle_em
    }
}
