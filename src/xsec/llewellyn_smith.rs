//! Llewellyn Smith model of charged-current quasi-elastic scattering

use std::f64::consts;
use crate::constants::*;
use crate::interaction::Interaction;
use crate::pdg;
use super::XSecModel;

/// Vector dipole mass squared, GeV^2
const VECTOR_MASS_SQR: f64 = 0.71;

/// dsigma/dQ^2 for CCQE scattering on a free nucleon, with dipole
/// vector and axial form factors and a pion-pole pseudoscalar.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LlewellynSmith {
    axial_mass: f64,
}

impl Default for LlewellynSmith {
    fn default() -> Self {
        LlewellynSmith { axial_mass: 0.99 }
    }
}

impl LlewellynSmith {
    /// Uses the given axial mass (GeV)
    pub fn new(axial_mass: f64) -> Self {
        LlewellynSmith { axial_mass }
    }

    /// Returns the form factors (F1, xi F2, FA, FP) at `q2`
    fn form_factors(&self, q2: f64) -> (f64, f64, f64, f64) {
        let m = NUCLEON_MASS;
        let tau = q2 / (4.0 * m * m);

        let gd = (1.0 + q2 / VECTOR_MASS_SQR).powi(-2);
        let ge = gd;
        let gm = (PROTON_MAGNETIC_MOMENT - NEUTRON_MAGNETIC_MOMENT) * gd;
        let f1 = (ge + tau * gm) / (1.0 + tau);
        let xi_f2 = (gm - ge) / (1.0 + tau);

        let fa = AXIAL_COUPLING * (1.0 + q2 / self.axial_mass.powi(2)).powi(-2);
        let fp = 2.0 * m * m * fa / (CHARGED_PION_MASS.powi(2) + q2);

        (f1, xi_f2, fa, fp)
    }
}

impl XSecModel for LlewellynSmith {
    fn dxsec_dq2(&self, interaction: &Interaction) -> f64 {
        if !interaction.proc_info().is_weak_cc() {
            return 0.0;
        }

        let q2 = match interaction.kine().q2(false) {
            Some(q2) => q2,
            None => return 0.0,
        };

        let e = interaction.init_state().probe_energy_hit_nucleon_rest();
        let ml = interaction.fs_prim_lepton_mass();
        let m = NUCLEON_MASS;
        let (m2, m4, ml2) = (m * m, m.powi(4), ml * ml);
        let tau = q2 / (4.0 * m2);

        let (f1, xi_f2, fa, fp) = self.form_factors(q2);

        let a = (ml2 + q2) / m2 * (
            (1.0 + tau) * fa * fa - (1.0 - tau) * f1 * f1
            + tau * (1.0 - tau) * xi_f2 * xi_f2 + 4.0 * tau * f1 * xi_f2
            - 0.25 * ml2 / m2 * (
                (f1 + xi_f2).powi(2) + (fa + 2.0 * fp).powi(2) - (q2 / m2 + 4.0) * fp * fp
            )
        );
        let b = q2 / m2 * fa * (f1 + xi_f2);
        let c = 0.25 * (fa * fa + f1 * f1 + tau * xi_f2 * xi_f2);

        let s_u = 4.0 * m * e - q2 - ml2;
        let sign = if pdg::is_neutrino(interaction.init_state().probe_pdg()) { -1.0 } else { 1.0 };

        let prefactor = m2 * (FERMI_CONSTANT * COS_CABIBBO).powi(2) / (8.0 * consts::PI * e * e);
        let xsec = prefactor * (a + sign * b * s_u / m2 + c * s_u * s_u / m4);
        xsec.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::KineVar;

    fn at_q2(probe: i32, hit: i32, q2: f64) -> Interaction {
        let mut i = Interaction::qel_cc(pdg::ion_pdg(12, 6), hit, probe, 1.0);
        i.kine_mut().set(KineVar::Q2, q2);
        i
    }

    #[test]
    fn neutrinos_exceed_antineutrinos() {
        let model = LlewellynSmith::default();
        for &q2 in &[0.05, 0.2, 0.5, 1.0] {
            let nu = model.dxsec_dq2(&at_q2(pdg::NU_MU, pdg::NEUTRON, q2));
            let nubar = model.dxsec_dq2(&at_q2(-pdg::NU_MU, pdg::PROTON, q2));
            println!("Q2 = {}: nu = {:.4e}, nubar = {:.4e} GeV^-4", q2, nu, nubar);
            assert!(nu > 0.0 && nubar > 0.0);
            assert!(nu > nubar);
        }
    }

    #[test]
    fn free_nucleon_normalization() {
        // dsigma/dQ^2 at Q^2 -> 0 is ~ 1e-38 cm^2 / GeV^2 at 1 GeV
        let model = LlewellynSmith::default();
        let xsec = model.dxsec_dq2(&at_q2(pdg::NU_MU, pdg::NEUTRON, 0.01)) * GEV2_TO_CM2;
        println!("dsigma/dQ2 = {:.3e} cm^2/GeV^2", xsec);
        assert!(xsec > 5.0e-39 && xsec < 5.0e-38);
    }

    #[test]
    fn zero_for_other_processes() {
        let model = LlewellynSmith::new(1.2);
        let mut i = Interaction::qel_nc(pdg::ion_pdg(12, 6), pdg::NEUTRON, pdg::NU_MU, 1.0);
        i.kine_mut().set(KineVar::Q2, 0.2);
        assert_eq!(model.dxsec_dq2(&i), 0.0);
        assert_eq!(model.dxsec_dq2(&Interaction::qel_cc(pdg::NEUTRON, pdg::NEUTRON, pdg::NU_MU, 1.0)), 0.0);
    }
}
