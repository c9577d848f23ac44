//! Injectable rate table.
//!
//! The price formula is `volume * base_rate * multiplier + setup_fee`. The
//! values feeding it live in a [`RateTable`] so they can be corrected (or a
//! different formula revision selected) without touching the decoder or the
//! volume estimator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_RATE, DEFAULT_SETUP_FEE, PETG_MULTIPLIER, PLA_MULTIPLIER, RESIN_MULTIPLIER,
};

/// Per-material price multipliers.
///
/// # Examples
/// ```
/// use config::MaterialMultipliers;
/// let m = MaterialMultipliers::default();
/// assert_eq!((m.pla, m.petg, m.resin), (1.0, 1.5, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialMultipliers {
    /// Multiplier for PLA and for unrecognized materials.
    pub pla: f64,
    /// Multiplier for PETG.
    pub petg: f64,
    /// Multiplier for resin.
    pub resin: f64,
}

impl MaterialMultipliers {
    /// Same multiplier for every material.
    pub fn uniform(value: f64) -> Self {
        Self {
            pla: value,
            petg: value,
            resin: value,
        }
    }
}

impl Default for MaterialMultipliers {
    fn default() -> Self {
        Self {
            pla: PLA_MULTIPLIER,
            petg: PETG_MULTIPLIER,
            resin: RESIN_MULTIPLIER,
        }
    }
}

/// Unvalidated shape of a rate table, as read from configuration files.
///
/// Converted into a [`RateTable`] through `TryFrom`, which applies the same
/// checks as [`RateTable::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTableSpec {
    /// Price per cm³ before the material multiplier.
    pub base_rate: f64,
    /// Fixed fee added to every quote.
    pub setup_fee: f64,
    /// Per-material multipliers.
    #[serde(default)]
    pub multipliers: MaterialMultipliers,
}

/// Immutable, validated rate table shared by every quoting context.
///
/// # Examples
/// ```
/// use config::{MaterialMultipliers, RateTable};
///
/// let rates = RateTable::new(0.85, 15.0, MaterialMultipliers::default()).expect("valid");
/// assert_eq!(rates, RateTable::default());
///
/// // Rate tables can be loaded from JSON and are validated on the way in.
/// let parsed: RateTable = serde_json::from_str(
///     r#"{"baseRate": 0.10, "setupFee": 5.0, "multipliers": {"pla": 1.0, "petg": 1.0, "resin": 1.0}}"#,
/// ).expect("valid json");
/// assert_eq!(parsed, RateTable::flat(0.10, 5.0).expect("valid"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RateTableSpec", into = "RateTableSpec")]
pub struct RateTable {
    base_rate: f64,
    setup_fee: f64,
    multipliers: MaterialMultipliers,
}

impl RateTable {
    /// Builds a rate table, rejecting values that would break the price
    /// invariants (non-finite numbers, non-positive rates, negative fees, or
    /// multipliers that decrease from PLA to PETG to resin).
    pub fn new(
        base_rate: f64,
        setup_fee: f64,
        multipliers: MaterialMultipliers,
    ) -> Result<Self, RateTableError> {
        if !base_rate.is_finite() || base_rate <= 0.0 {
            return Err(RateTableError::InvalidBaseRate(base_rate));
        }
        if !setup_fee.is_finite() || setup_fee < 0.0 {
            return Err(RateTableError::InvalidSetupFee(setup_fee));
        }
        for (material, value) in [
            ("PLA", multipliers.pla),
            ("PETG", multipliers.petg),
            ("RESIN", multipliers.resin),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RateTableError::InvalidMultiplier { material, value });
            }
        }
        if multipliers.pla > multipliers.petg || multipliers.petg > multipliers.resin {
            return Err(RateTableError::UnorderedMultipliers(multipliers));
        }
        Ok(Self {
            base_rate,
            setup_fee,
            multipliers,
        })
    }

    /// Material-independent table: `volume * rate_per_cm3 + setup_fee`.
    ///
    /// This expresses the flat per-volume formula revision.
    ///
    /// # Examples
    /// ```
    /// use config::RateTable;
    /// let flat = RateTable::flat(0.10, 5.0).expect("valid");
    /// assert_eq!(flat.multipliers().resin, 1.0);
    /// ```
    pub fn flat(rate_per_cm3: f64, setup_fee: f64) -> Result<Self, RateTableError> {
        Self::new(rate_per_cm3, setup_fee, MaterialMultipliers::uniform(1.0))
    }

    /// Price per cm³ before the material multiplier.
    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    /// Fixed fee added to every quote.
    pub fn setup_fee(&self) -> f64 {
        self.setup_fee
    }

    /// Per-material multipliers.
    pub fn multipliers(&self) -> MaterialMultipliers {
        self.multipliers
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            setup_fee: DEFAULT_SETUP_FEE,
            multipliers: MaterialMultipliers::default(),
        }
    }
}

impl TryFrom<RateTableSpec> for RateTable {
    type Error = RateTableError;

    fn try_from(spec: RateTableSpec) -> Result<Self, Self::Error> {
        Self::new(spec.base_rate, spec.setup_fee, spec.multipliers)
    }
}

impl From<RateTable> for RateTableSpec {
    fn from(table: RateTable) -> Self {
        Self {
            base_rate: table.base_rate,
            setup_fee: table.setup_fee,
            multipliers: table.multipliers,
        }
    }
}

/// Error returned when a rate table is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RateTableError {
    /// Raised when the base rate is not a positive finite number.
    InvalidBaseRate(f64),
    /// Raised when the setup fee is negative or not finite.
    InvalidSetupFee(f64),
    /// Raised when a multiplier is not a positive finite number.
    InvalidMultiplier {
        /// Material key the multiplier belongs to.
        material: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Raised when multipliers decrease along PLA, PETG, RESIN.
    UnorderedMultipliers(MaterialMultipliers),
}

impl fmt::Display for RateTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateTableError::InvalidBaseRate(value) => {
                write!(f, "base rate must be positive and finite: {value}")
            }
            RateTableError::InvalidSetupFee(value) => {
                write!(f, "setup fee must be non-negative and finite: {value}")
            }
            RateTableError::InvalidMultiplier { material, value } => {
                write!(f, "{material} multiplier must be positive and finite: {value}")
            }
            RateTableError::UnorderedMultipliers(m) => write!(
                f,
                "multipliers must not decrease from PLA to PETG to RESIN: {} / {} / {}",
                m.pla, m.petg, m.resin
            ),
        }
    }
}

impl std::error::Error for RateTableError {}
