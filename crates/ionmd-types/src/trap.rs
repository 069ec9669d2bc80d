// ─────────────────────────────────────────────────────────────────────
// IonMD — Trap
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Linear Paul trap electrode and RF drive parameters.
//!
//! Kept apart from the simulation parameters so that time-varying drive
//! settings can later be layered on top without touching this record.
//! Units are SI.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::PI;
use crate::error::{IonmdError, IonmdResult};

/// Shared read-only handle to a trap, held by solvers and reporters alike.
pub type SharedTrap = Arc<TrapConfig>;

/// Trap parameters.
///
/// Serializes to the JSON trap document. `omega_rf` is not part of that
/// document (nor of the text report) and falls back to its default when a
/// document is read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapConfig {
    /// Trap radius [m]
    pub r0: f64,
    /// Half the length of the trap [m]
    pub z0: f64,
    /// Geometric parameter determined empirically
    pub kappa: f64,
    /// RF angular frequency [rad/s]
    #[serde(skip, default = "default_omega_rf")]
    pub omega_rf: f64,
    /// RF amplitude [V]
    #[serde(rename = "V_rf")]
    pub v_rf: f64,
    /// RF offset from ground [V]
    #[serde(rename = "U_dc")]
    pub u_dc: f64,
    /// End cap voltage [V]
    #[serde(rename = "U_ec")]
    pub u_ec: f64,
}

fn default_omega_rf() -> f64 {
    2.0 * PI * 2.7e6
}

impl Default for TrapConfig {
    fn default() -> Self {
        TrapConfig {
            r0: 3.18e-3,
            z0: 0.0125,
            kappa: 0.006,
            omega_rf: default_omega_rf(),
            v_rf: 125.0,
            u_dc: 0.0,
            u_ec: 5.0,
        }
    }
}

impl TrapConfig {
    /// Reference trap with the default geometry and drive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields that appear in both the text report and the JSON document,
    /// keyed by their external names, in output order.
    fn reported_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("r0", self.r0),
            ("z0", self.z0),
            ("kappa", self.kappa),
            ("V_rf", self.v_rf),
            ("U_dc", self.u_dc),
            ("U_ec", self.u_ec),
        ]
    }

    /// Human-readable report, one `  name = value` line per field.
    ///
    /// `omega_rf` is not listed.
    pub fn report(&self) -> String {
        self.to_string()
    }

    /// Pretty-printed JSON document (2-space indent, no trailing newline).
    ///
    /// `omega_rf` is not written. Fails with [`IonmdError::NonFinite`] rather
    /// than emitting `null` for NaN or infinite values.
    pub fn to_json(&self) -> IonmdResult<String> {
        if let Some((field, value)) = self
            .reported_fields()
            .into_iter()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(IonmdError::NonFinite { field, value });
        }
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a JSON trap document. All six reported keys are required.
    pub fn from_json(json: &str) -> IonmdResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON trap document on disk.
    pub fn from_file(path: impl AsRef<Path>) -> IonmdResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let trap = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "loaded trap parameters");
        Ok(trap)
    }

    /// Write the JSON trap document to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> IonmdResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        tracing::debug!(path = %path.display(), "saved trap parameters");
        Ok(())
    }

    /// Move into a shared handle.
    pub fn into_shared(self) -> SharedTrap {
        Arc::new(self)
    }
}

impl fmt::Display for TrapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trap parameters:")?;
        for (name, value) in self.reported_fields() {
            writeln!(f, "  {} = {}", name, value)?;
        }
        Ok(())
    }
}
