//! Puts the struck nucleon off the mass shell

use crate::geometry::FourVector;
use crate::interaction::Interaction;
use super::NucleonState;

/// How the removal energy of the hit nucleon is treated
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BindingMode {
    /// The removal energy comes from the nuclear model
    UseNuclearModel,
    /// The remnant nucleus is left in its ground state
    UseGroundStateRemnant,
    /// The hit nucleon is on shell
    OnShell,
    /// On shell while sampling, then corrected with the removal
    /// energy of the nuclear model once a candidate is accepted
    OnShellWithCorrection,
}

impl std::str::FromStr for BindingMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UseNuclearModel" | "nuclear-model" => Ok(BindingMode::UseNuclearModel),
            "UseGroundStateRemnant" | "ground-state-remnant" => Ok(BindingMode::UseGroundStateRemnant),
            "OnShell" | "on-shell" => Ok(BindingMode::OnShell),
            "OnShellWithCorrection" | "on-shell-with-correction" => Ok(BindingMode::OnShellWithCorrection),
            _ => Err(format!("'{}' is not a recognised binding mode", s)),
        }
    }
}

/// Sets the four-momentum of the hit nucleon of `interaction`
/// from the three-momentum of `nucleon`, applying the binding
/// prescription `mode`. Returns the binding energy used.
///
/// For a bound nucleon the energy follows from requiring that the
/// remnant nucleus, of mass `Mf`, recoils on shell:
/// `E_N = Mi - sqrt(p^2 + Mf^2)`. Free nucleons, and the two on-shell
/// modes, give `E_N = sqrt(p^2 + m_N^2)` and zero binding energy.
pub fn bind_hit_nucleon(interaction: &mut Interaction, nucleon: &NucleonState, mode: BindingMode) -> f64 {
    let target = interaction.target();
    let p3 = nucleon.momentum3();
    let m_n = target.hit_nucleon_mass();

    let bound = target.is_nucleus()
        && mode != BindingMode::OnShell
        && mode != BindingMode::OnShellWithCorrection;

    let (energy, eb) = if bound {
        let mi = target.mass();
        let (_, mf_gs) = target.remnant();
        let (eb, mf) = match mode {
            BindingMode::UseGroundStateRemnant => (mf_gs + m_n - mi, mf_gs),
            _ => {
                let eb = nucleon.removal_energy();
                (eb, mi + eb - m_n)
            }
        };
        (mi - (p3.norm_sqr() + mf * mf).sqrt(), eb)
    } else {
        ((p3.norm_sqr() + m_n * m_n).sqrt(), 0.0)
    };

    interaction.target_mut().set_hit_nucleon_p4(FourVector::from_parts(energy, p3));
    eb
}
