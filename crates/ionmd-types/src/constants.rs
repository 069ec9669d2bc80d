// ─────────────────────────────────────────────────────────────────────
// IonMD — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// π in double precision.
pub const PI: f64 = std::f64::consts::PI;

/// Elementary charge (C)
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// Atomic mass unit (kg)
pub const AMU: f64 = 1.66053906660e-27;

/// Vacuum permittivity (F/m)
pub const EPSILON0: f64 = 8.8541878128e-12;

/// Boltzmann constant (J/K)
pub const K_BOLTZMANN: f64 = 1.380649e-23;
