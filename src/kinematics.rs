//! Kinematic limits and two-body final states for quasi-elastic scattering

use crate::constants::*;
use crate::geometry::*;
use crate::interaction::Interaction;

/// Lab-frame momenta of the outgoing lepton and recoil baryon,
/// together with the centre-of-momentum quantities they were built from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TwoBodyFinalState {
    pub lepton: FourVector,
    pub recoil: FourVector,
    /// Momentum of the probe in the COM frame
    pub probe_com_momentum: f64,
    /// Momentum of the outgoing lepton in the COM frame
    pub lepton_com_momentum: f64,
}

impl TwoBodyFinalState {
    /// Four-momentum transfer squared, `Q^2 = -(k - k')^2`
    pub fn q2(&self, probe: FourVector) -> f64 {
        -(probe - self.lepton).norm_sqr()
    }
}

/// Builds the two-body final state of `interaction`, given the current
/// (possibly off-shell) hit nucleon, with the lepton emitted at polar
/// angle `acos(cos_theta0)` and azimuth `phi0` in the COM frame.
/// The polar axis is the direction of the COM velocity.
///
/// Returns `None` if the final state is below threshold.
pub fn two_body_final_state(interaction: &Interaction, cos_theta0: f64, phi0: f64) -> Option<TwoBodyFinalState> {
    let probe = interaction.init_state().probe_p4();
    let p_total = probe + interaction.target().hit_nucleon_p4();
    let s = p_total.norm_sqr();
    let m_l = interaction.fs_prim_lepton_mass();
    let m_f = interaction.recoil_mass();

    if s <= 0.0 || s.sqrt() < m_l + m_f {
        return None;
    }

    let sqrt_s = s.sqrt();
    let e_lep = (s - m_f * m_f + m_l * m_l) / (2.0 * sqrt_s);
    let p_lep = (e_lep * e_lep - m_l * m_l).max(0.0).sqrt();

    let u = p_total.four_velocity();
    let p_probe = probe.boost_by(u).p();

    let k = ThreeVector::from_polar(p_lep, cos_theta0, phi0)
        .rotate_z_to(ThreeVector::from(u));

    let lepton = FourVector::on_shell(k, m_l).boost_by(u.reverse());
    let recoil = FourVector::on_shell(-k, m_f).boost_by(u.reverse());

    Some(TwoBodyFinalState {
        lepton,
        recoil,
        probe_com_momentum: p_probe,
        lepton_com_momentum: p_lep,
    })
}

/// Largest cosine of the COM-frame lepton angle for which the lab-frame
/// lepton energy does not exceed the probe energy. Values `<= -1`
/// mean there is no accessible phase space; the result may exceed 1.
pub fn cos_theta0_max(interaction: &Interaction) -> f64 {
    let probe = interaction.init_state().probe_p4();
    let p_total = probe + interaction.target().hit_nucleon_p4();
    let s = p_total.norm_sqr();
    if s <= 0.0 {
        return -1.0;
    }

    let sqrt_s = s.sqrt();
    let m_l = interaction.fs_prim_lepton_mass();
    let m_f = interaction.recoil_mass();
    let e_lep = (s - m_f * m_f + m_l * m_l) / (2.0 * sqrt_s);
    if e_lep < m_l {
        return -1.0;
    }
    let p_lep = (e_lep * e_lep - m_l * m_l).sqrt();

    let u = p_total / sqrt_s;
    let gamma = u[0];
    let v = ThreeVector::from(u).norm() / gamma;

    if v < A_SMALL_NUM || p_lep == 0.0 {
        return if probe[0] / gamma >= e_lep { 1.0 } else { -1.0 };
    }

    (probe[0] / gamma - e_lep) / (v * p_lep)
}

/// Physical range of Q^2 for the quasi-elastic production of the
/// recoil baryon, in the rest frame of the hit nucleon.
/// Returns `(min, max)`; the lower limit is raised to a
/// process-dependent floor.
pub fn q2_limits(interaction: &Interaction) -> (f64, f64) {
    let ev = interaction.init_state().probe_energy_hit_nucleon_rest();
    let m = {
        let m = interaction.target().hit_nucleon_p4().mass();
        if m > 0.0 { m } else { interaction.target().hit_nucleon_mass() }
    };
    let m_l = interaction.fs_prim_lepton_mass();
    let w = interaction.recoil_mass();

    let m2 = m * m;
    let ml2 = m_l * m_l;
    let s = m2 + 2.0 * m * ev;
    let aux_c = 0.5 * (s - m2) / s;
    let aux1 = s + ml2 - w * w;
    let aux2 = (aux1 * aux1 - 4.0 * s * ml2).max(0.0).sqrt();

    let q2_max = (-ml2 + aux_c * (aux1 + aux2)).max(0.0);
    let q2_min = (-ml2 + aux_c * (aux1 - aux2)).max(0.0);

    let floor = if interaction.proc_info().is_em() { MIN_Q2_LIMIT_EM } else { MIN_Q2_LIMIT };
    (q2_min.max(floor), q2_max)
}

/// Converts the hadronic invariant mass `w` and `q2` to Bjorken `x`
/// and inelasticity `y`, for a probe of energy `e` incident on a
/// nucleon of mass `m` at rest.
pub fn wq2_to_xy(e: f64, m: f64, w: f64, q2: f64) -> (f64, f64) {
    let nu2m = w * w - m * m + q2;
    let x = q2 / nu2m;
    let y = nu2m / (2.0 * m * e);
    (x, y)
}

/// Inverse of [`wq2_to_xy`]. Returns `(w, q2)`.
#[allow(unused)]
pub fn xy_to_wq2(e: f64, m: f64, x: f64, y: f64) -> (f64, f64) {
    let q2 = 2.0 * x * y * m * e;
    let w2 = m * m + 2.0 * e * m * y * (1.0 - x);
    (w2.max(0.0).sqrt(), q2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdg;

    #[test]
    fn round_trip() {
        let m = NUCLEON_MASS;
        for &(e, w, q2) in &[(1.0, PROTON_MASS, 0.3), (3.0, 1.232, 1.1), (0.5, LAMBDA_MASS, 0.05)] {
            let (x, y) = wq2_to_xy(e, m, w, q2);
            let (w_, q2_) = xy_to_wq2(e, m, x, y);
            println!("E = {}, W = {} -> {}, Q2 = {} -> {}", e, w, w_, q2, q2_);
            assert!((w - w_).abs() < 1.0e-12);
            assert!((q2 - q2_).abs() < 1.0e-12);
        }

        // elastic scattering from a free nucleon has x = 1
        let (x, _) = wq2_to_xy(1.0, m, m, 0.4);
        assert!((x - 1.0).abs() < 1.0e-12);
    }

    #[test]
    fn lepton_energy_at_largest_angle() {
        let mut interaction = Interaction::qel_cc(pdg::ion_pdg(12, 6), pdg::NEUTRON, pdg::NU_MU, 1.0);
        let p4 = FourVector::on_shell(ThreeVector::new(0.1, 0.0, -0.15), NEUTRON_MASS);
        interaction.target_mut().set_hit_nucleon_p4(p4);

        let cos_max = cos_theta0_max(&interaction);
        println!("cos_theta0_max = {:.6}", cos_max);
        assert!(cos_max > -1.0 && cos_max < 1.0);

        // at the limit, the lepton carries away all of the probe energy,
        // whatever the azimuth
        for &phi in &[0.0, 1.0, std::f64::consts::PI] {
            let fs = two_body_final_state(&interaction, cos_max, phi).unwrap();
            println!("phi = {}, E_lep = {:.9}", phi, fs.lepton[0]);
            assert!((fs.lepton[0] - 1.0).abs() < 1.0e-9);
        }

        let fs = two_body_final_state(&interaction, 0.5 * (cos_max - 1.0), 0.0).unwrap();
        assert!(fs.lepton[0] < 1.0);
    }

    #[test]
    fn four_momentum_is_conserved() {
        let mut interaction = Interaction::qel_cc(pdg::ion_pdg(16, 8), pdg::NEUTRON, pdg::NU_MU, 2.0);
        let p4 = FourVector::new(0.90, 0.05, -0.1, 0.12);
        interaction.target_mut().set_hit_nucleon_p4(p4);

        let fs = two_body_final_state(&interaction, 0.3, 1.2).unwrap();
        let initial = interaction.init_state().probe_p4() + p4;
        let last = fs.lepton + fs.recoil;
        for i in 0..4 {
            assert!((initial[i] - last[i]).abs() < 1.0e-9);
        }
        assert!((fs.lepton.mass() - MUON_MASS).abs() < 1.0e-6);
        assert!((fs.recoil.mass() - PROTON_MASS).abs() < 1.0e-6);
    }

    #[test]
    fn below_threshold() {
        // tau production needs E > 3.5 GeV on a free nucleon
        let interaction = Interaction::qel_cc(pdg::NEUTRON, pdg::NEUTRON, pdg::NU_TAU, 1.0);
        assert_eq!(cos_theta0_max(&interaction), -1.0);
        assert!(two_body_final_state(&interaction, 0.0, 0.0).is_none());
    }

    #[test]
    fn sampled_q2_within_limits() {
        let interaction = Interaction::qel_cc(pdg::NEUTRON, pdg::NEUTRON, pdg::NU_MU, 1.5);
        let (q2_min, q2_max) = q2_limits(&interaction);
        println!("Q2 in [{:.4e}, {:.4e}]", q2_min, q2_max);
        assert!(q2_min >= MIN_Q2_LIMIT && q2_max > q2_min);

        let probe = interaction.init_state().probe_p4();
        for i in 0..=20 {
            let c = -1.0 + 0.1 * (i as f64);
            let q2 = two_body_final_state(&interaction, c, 0.0).unwrap().q2(probe);
            assert!(q2 <= q2_max * (1.0 + 1.0e-9));
            if i < 20 {
                assert!(q2 >= q2_min);
            }
        }
    }
}
