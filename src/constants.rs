//! Physical constants and generator controls.
//! Energies, momenta and masses are in GeV, lengths in fm.

/// Proton mass
pub const PROTON_MASS: f64 = 0.9382720813;
/// Neutron mass
pub const NEUTRON_MASS: f64 = 0.9395654133;
/// Isoscalar nucleon mass
pub const NUCLEON_MASS: f64 = 0.5 * (PROTON_MASS + NEUTRON_MASS);
/// Electron mass
pub const ELECTRON_MASS: f64 = 0.5109989461e-3;
/// Muon mass
pub const MUON_MASS: f64 = 0.1056583745;
/// Tau mass
pub const TAU_MASS: f64 = 1.77686;
/// Charged pion mass
pub const CHARGED_PION_MASS: f64 = 0.13957061;

/// Lambda_c+ mass
pub const LAMBDA_C_MASS: f64 = 2.28646;
/// Sigma_c+ mass
pub const SIGMA_C_P_MASS: f64 = 2.4529;
/// Sigma_c++ mass
pub const SIGMA_C_PP_MASS: f64 = 2.45397;
/// Lambda mass
pub const LAMBDA_MASS: f64 = 1.115683;
/// Sigma+ mass
pub const SIGMA_P_MASS: f64 = 1.18937;
/// Sigma0 mass
pub const SIGMA_0_MASS: f64 = 1.192642;

/// Fermi coupling constant, GeV^-2
pub const FERMI_CONSTANT: f64 = 1.1663787e-5;
/// cos(theta_Cabibbo)
pub const COS_CABIBBO: f64 = 0.97420;
/// Proton magnetic moment, units of the nuclear magneton
pub const PROTON_MAGNETIC_MOMENT: f64 = 2.7928473446;
/// Neutron magnetic moment, units of the nuclear magneton
pub const NEUTRON_MAGNETIC_MOMENT: f64 = -1.9130427;
/// Axial coupling g_A
pub const AXIAL_COUPLING: f64 = -1.2670;

/// hbar c, GeV fm
pub const HBAR_C: f64 = 0.1973269804;
/// Converts a cross section in GeV^-2 to cm^2
pub const GEV2_TO_CM2: f64 = 0.389379e-27;

/// Maximum number of iterations in a rejection-sampling loop
pub const RJ_MAX_ITERATIONS: usize = 1000;
/// Smallest magnitude considered nonzero for geometric operations
pub const A_SMALL_NUM: f64 = 1.0e-6;
/// Smallest Q^2 allowed for weak processes
pub const MIN_Q2_LIMIT: f64 = 1.0e-6;
/// Smallest Q^2 allowed for electromagnetic scattering
pub const MIN_Q2_LIMIT_EM: f64 = 0.02;
