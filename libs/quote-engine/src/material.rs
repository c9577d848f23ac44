//! # Material Profiles
//!
//! Closed set of printable materials and the classification of free-form
//! material keys into it.
//!
//! Keys match exactly (`"PLA"`, `"PETG"`, `"RESIN"`). Anything else,
//! including a missing key or different casing, is classified as unknown and
//! priced as PLA. The fallback is recorded on the selection so callers can
//! surface it; it is never silent.

use std::fmt;
use std::str::FromStr;

use config::RateTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// A printable material.
///
/// # Examples
/// ```
/// use quote_engine::MaterialProfile;
///
/// let resin: MaterialProfile = "RESIN".parse().unwrap();
/// assert_eq!(resin, MaterialProfile::Resin);
/// assert!("resin".parse::<MaterialProfile>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialProfile {
    /// Polylactic acid filament. Also the fallback material.
    Pla,
    /// PETG filament.
    Petg,
    /// Photopolymer resin.
    Resin,
}

impl MaterialProfile {
    /// Every material, cheapest multiplier first.
    pub const ALL: [MaterialProfile; 3] = [Self::Pla, Self::Petg, Self::Resin];

    /// Material used for unknown or missing keys.
    pub const FALLBACK: MaterialProfile = Self::Pla;

    /// Canonical key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Pla => "PLA",
            Self::Petg => "PETG",
            Self::Resin => "RESIN",
        }
    }

    /// Exact key lookup.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|profile| profile.key() == key)
    }

    /// Price multiplier for this material in `rates`.
    pub fn multiplier(&self, rates: &RateTable) -> f64 {
        let multipliers = rates.multipliers();
        match self {
            Self::Pla => multipliers.pla,
            Self::Petg => multipliers.petg,
            Self::Resin => multipliers.resin,
        }
    }
}

impl fmt::Display for MaterialProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MaterialProfile {
    type Err = InvalidMaterialError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::from_key(key).ok_or_else(|| InvalidMaterialError {
            key: key.to_string(),
        })
    }
}

/// Soft error: the material key was not recognized.
///
/// Recovered locally by pricing as [`MaterialProfile::FALLBACK`]; carried on
/// the quote so the caller can warn the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("unrecognized material key {key:?}, priced as PLA")]
pub struct InvalidMaterialError {
    /// The key as supplied (empty when missing).
    pub key: String,
}

/// Outcome of classifying a material key.
///
/// # Examples
/// ```
/// use quote_engine::{MaterialProfile, MaterialSelection};
///
/// let known = MaterialSelection::resolve("PETG");
/// assert_eq!(known.profile(), MaterialProfile::Petg);
/// assert!(!known.is_fallback());
///
/// let unknown = MaterialSelection::resolve("unobtainium");
/// assert_eq!(unknown.profile(), MaterialProfile::Pla);
/// assert!(unknown.is_fallback());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialSelection {
    profile: MaterialProfile,
    fallback: Option<InvalidMaterialError>,
}

impl MaterialSelection {
    /// Classifies `key`, falling back to PLA for anything unrecognized.
    pub fn resolve(key: &str) -> Self {
        match key.parse::<MaterialProfile>() {
            Ok(profile) => Self::exact(profile),
            Err(err) => {
                warn!(key = %err.key, "unknown material, falling back to PLA");
                Self {
                    profile: MaterialProfile::FALLBACK,
                    fallback: Some(err),
                }
            }
        }
    }

    /// Selection of a known material.
    pub fn exact(profile: MaterialProfile) -> Self {
        Self {
            profile,
            fallback: None,
        }
    }

    /// Material the quote is priced with.
    pub fn profile(&self) -> MaterialProfile {
        self.profile
    }

    /// True when the requested key was not recognized.
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// The soft error recorded for an unrecognized key.
    pub fn fallback(&self) -> Option<&InvalidMaterialError> {
        self.fallback.as_ref()
    }

    pub(crate) fn into_parts(self) -> (MaterialProfile, Option<InvalidMaterialError>) {
        (self.profile, self.fallback)
    }
}

impl From<MaterialProfile> for MaterialSelection {
    fn from(profile: MaterialProfile) -> Self {
        Self::exact(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for profile in MaterialProfile::ALL {
            assert_eq!(MaterialProfile::from_key(profile.key()), Some(profile));
            assert_eq!(profile.to_string(), profile.key());
        }
    }

    #[test]
    fn canonical_multipliers() {
        let rates = RateTable::default();
        assert_eq!(MaterialProfile::Pla.multiplier(&rates), 1.0);
        assert_eq!(MaterialProfile::Petg.multiplier(&rates), 1.5);
        assert_eq!(MaterialProfile::Resin.multiplier(&rates), 2.0);
    }

    #[test]
    fn loose_matches_are_rejected() {
        for key in ["pla", " PLA", "PLA ", "Resin", "PETG+", ""] {
            let selection = MaterialSelection::resolve(key);
            assert!(selection.is_fallback(), "{key:?} should not match");
            assert_eq!(selection.profile(), MaterialProfile::Pla);
            assert_eq!(selection.fallback().map(|e| e.key.as_str()), Some(key));
        }
    }

    #[test]
    fn fallback_message_names_key() {
        let err = "ABS".parse::<MaterialProfile>().unwrap_err();
        assert!(err.to_string().contains("\"ABS\""));
    }

    #[test]
    fn serde_uses_uppercase_keys() {
        assert_eq!(
            serde_json::to_string(&MaterialProfile::Petg).unwrap(),
            "\"PETG\""
        );
        let parsed: MaterialProfile = serde_json::from_str("\"RESIN\"").unwrap();
        assert_eq!(parsed, MaterialProfile::Resin);
    }
}
