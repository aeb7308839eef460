//! Particle Data Group codes, names and masses

use crate::constants::*;

pub const ELECTRON: i32 = 11;
pub const NU_E: i32 = 12;
pub const MUON: i32 = 13;
pub const NU_MU: i32 = 14;
pub const TAU: i32 = 15;
pub const NU_TAU: i32 = 16;
pub const PROTON: i32 = 2212;
pub const NEUTRON: i32 = 2112;
pub const LAMBDA: i32 = 3122;
pub const SIGMA_P: i32 = 3222;
pub const SIGMA_0: i32 = 3212;
pub const LAMBDA_C: i32 = 4122;
pub const SIGMA_C_P: i32 = 4212;
pub const SIGMA_C_PP: i32 = 4222;

const ELEMENTS: [&str; 30] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
];

// Measured nuclear (not atomic) masses of common targets: (A, Z, mass)
const NUCLEAR_MASSES: [(i32, i32, f64); 10] = [
    (2, 1, 1.875612928),
    (3, 1, 2.808921112),
    (3, 2, 2.808391586),
    (4, 2, 3.727379378),
    (12, 6, 11.174862),
    (16, 8, 14.895080),
    (40, 18, 37.215526),
    (40, 20, 37.214694),
    (56, 26, 52.089808),
    (208, 82, 193.729017),
];

pub fn is_neutrino(pdg: i32) -> bool {
    pdg == NU_E || pdg == NU_MU || pdg == NU_TAU
}

pub fn is_proton(pdg: i32) -> bool {
    pdg == PROTON
}

pub fn is_neutron(pdg: i32) -> bool {
    pdg == NEUTRON
}

pub fn is_nucleon(pdg: i32) -> bool {
    is_proton(pdg) || is_neutron(pdg)
}

/// The charged lepton produced in a charged-current interaction
/// of the given (anti)neutrino: nu_l -> l-, anti-nu_l -> l+.
pub fn neutrino_to_charged_lepton(pdg: i32) -> Option<i32> {
    if is_neutrino(pdg.abs()) {
        Some(pdg - pdg.signum())
    } else {
        None
    }
}

pub fn switch_proton_neutron(pdg: i32) -> i32 {
    match pdg {
        PROTON => NEUTRON,
        NEUTRON => PROTON,
        other => other,
    }
}

/// PDG code of the ion with mass number `a` and atomic number `z`.
/// Single nucleons are returned as such.
pub fn ion_pdg(a: i32, z: i32) -> i32 {
    match (a, z) {
        (1, 1) => PROTON,
        (1, 0) => NEUTRON,
        _ => 1_000_000_000 + 10_000 * z + 10 * a,
    }
}

pub fn is_ion(pdg: i32) -> bool {
    pdg > 1_000_000_000 && pdg < 1_099_999_999
}

/// Atomic number of an ion or nucleon
pub fn ion_z(pdg: i32) -> i32 {
    match pdg {
        PROTON => 1,
        NEUTRON => 0,
        _ => (pdg / 10_000) % 1000,
    }
}

/// Mass number of an ion or nucleon
pub fn ion_a(pdg: i32) -> i32 {
    match pdg {
        PROTON | NEUTRON => 1,
        _ => (pdg / 10) % 1000,
    }
}

/// Mass of a nucleus with mass number `a` and atomic number `z`.
/// Tabulated where known, otherwise from the semi-empirical mass formula.
pub fn nuclear_mass(a: i32, z: i32) -> f64 {
    if a == 1 {
        return if z == 1 { PROTON_MASS } else { NEUTRON_MASS };
    }

    if let Some(&(_, _, m)) = NUCLEAR_MASSES.iter().find(|(aa, zz, _)| *aa == a && *zz == z) {
        return m;
    }

    let (af, zf) = (a as f64, z as f64);
    let n = af - zf;
    let pairing = match (z % 2, (a - z) % 2) {
        (0, 0) => 11.18e-3 / af.sqrt(),
        (1, 1) => -11.18e-3 / af.sqrt(),
        _ => 0.0,
    };
    let binding = 15.75e-3 * af
        - 17.8e-3 * af.powf(2.0 / 3.0)
        - 0.711e-3 * zf * (zf - 1.0) / af.cbrt()
        - 23.7e-3 * (n - zf).powi(2) / af
        + pairing;

    zf * PROTON_MASS + n * NEUTRON_MASS - binding
}

/// Mass of the particle with the given PDG code, if known
pub fn mass(pdg: i32) -> Option<f64> {
    let m = match pdg.abs() {
        ELECTRON => ELECTRON_MASS,
        MUON => MUON_MASS,
        TAU => TAU_MASS,
        NU_E | NU_MU | NU_TAU => 0.0,
        PROTON => PROTON_MASS,
        NEUTRON => NEUTRON_MASS,
        LAMBDA => LAMBDA_MASS,
        SIGMA_P => SIGMA_P_MASS,
        SIGMA_0 => SIGMA_0_MASS,
        LAMBDA_C => LAMBDA_C_MASS,
        SIGMA_C_P => SIGMA_C_P_MASS,
        SIGMA_C_PP => SIGMA_C_PP_MASS,
        _ if is_ion(pdg) => nuclear_mass(ion_a(pdg), ion_z(pdg)),
        _ => return None,
    };
    Some(m)
}

/// Parses a particle name, e.g. "numu", "e-", "neutron" or "Ar40",
/// or an integer PDG code.
pub fn from_name(name: &str) -> Option<i32> {
    if let Ok(code) = name.trim().parse::<i32>() {
        return Some(code);
    }

    let code = match name.trim() {
        "nue" => NU_E,
        "nuebar" => -NU_E,
        "numu" => NU_MU,
        "numubar" => -NU_MU,
        "nutau" => NU_TAU,
        "nutaubar" => -NU_TAU,
        "e-" | "electron" => ELECTRON,
        "e+" | "positron" => -ELECTRON,
        "mu-" | "muon" => MUON,
        "mu+" => -MUON,
        "p" | "proton" => PROTON,
        "n" | "neutron" => NEUTRON,
        nucleus => {
            let split = nucleus.find(|c: char| c.is_ascii_digit())?;
            let (symbol, a) = nucleus.split_at(split);
            let z = if symbol == "Pb" {
                82
            } else {
                ELEMENTS.iter().position(|s| *s == symbol)? as i32 + 1
            };
            let a = a.parse::<i32>().ok()?;
            if a < z {
                return None;
            }
            ion_pdg(a, z)
        }
    };

    Some(code)
}

/// Human-readable name of the particle with the given PDG code
pub fn name(pdg: i32) -> String {
    let s = match pdg {
        NU_E => "nu_e",
        -12 => "nu_e_bar",
        NU_MU => "nu_mu",
        -14 => "nu_mu_bar",
        NU_TAU => "nu_tau",
        -16 => "nu_tau_bar",
        ELECTRON => "e-",
        -11 => "e+",
        MUON => "mu-",
        -13 => "mu+",
        TAU => "tau-",
        -15 => "tau+",
        PROTON => "proton",
        NEUTRON => "neutron",
        LAMBDA => "Lambda",
        SIGMA_P => "Sigma+",
        SIGMA_0 => "Sigma0",
        LAMBDA_C => "Lambda_c+",
        SIGMA_C_P => "Sigma_c+",
        SIGMA_C_PP => "Sigma_c++",
        _ if is_ion(pdg) => {
            let (a, z) = (ion_a(pdg), ion_z(pdg));
            let symbol = match z {
                82 => "Pb",
                1..=30 => ELEMENTS[(z - 1) as usize],
                _ => return format!("Z{}A{}", z, a),
            };
            return format!("{}{}", symbol, a);
        },
        _ => return format!("pdg:{}", pdg),
    };
    s.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lepton_conversion() {
        assert_eq!(neutrino_to_charged_lepton(NU_MU), Some(MUON));
        assert_eq!(neutrino_to_charged_lepton(-NU_E), Some(-ELECTRON));
        assert_eq!(neutrino_to_charged_lepton(MUON), None);
        assert_eq!(switch_proton_neutron(NEUTRON), PROTON);
    }

    #[test]
    fn ion_codes() {
        let c12 = ion_pdg(12, 6);
        assert_eq!(c12, 1000060120);
        assert_eq!(ion_a(c12), 12);
        assert_eq!(ion_z(c12), 6);
        assert_eq!(from_name("C12"), Some(c12));
        assert_eq!(from_name("Ar40"), Some(1000180400));
        assert_eq!(from_name("Pb208"), Some(1000822080));
        assert_eq!(from_name("numubar"), Some(-NU_MU));
        assert_eq!(from_name("1000260560"), Some(1000260560));
        assert_eq!(from_name("Xx12"), None);
        assert_eq!(name(c12), "C12");
    }

    #[test]
    fn semi_empirical_masses() {
        // B11 is not tabulated: compare with measured 10.252548 GeV
        let m = nuclear_mass(11, 5);
        let error = (m - 10.252548).abs() / 10.252548;
        println!("M(B11) = {:.6} GeV, error = {:.3e}", m, error);
        assert!(error < 1.0e-3);

        // binding energy of C12 is about 92 MeV
        let b = 6.0 * PROTON_MASS + 6.0 * NEUTRON_MASS - mass(ion_pdg(12, 6)).unwrap();
        assert!((b - 0.0922).abs() < 1.0e-3);
    }
}
