//! # Price Quoter
//!
//! Pure mapping from an enclosed volume and a material to a price.
//!
//! ```text
//! total = round₂(volume_cm3 × base_rate × multiplier + setup_fee)
//! ```
//!
//! The evaluation order is fixed and rounding is half away from zero at two
//! decimals, so preview and submission agree to the cent on identical bytes.

use std::fmt;

use config::constants::{MINOR_UNITS_PER_MAJOR, PRINT_MINUTES_PER_CM3};
use config::RateTable;
use serde::Serialize;
use tracing::debug;

use crate::error::QuoteError;
use crate::material::{InvalidMaterialError, MaterialProfile, MaterialSelection};

// =============================================================================
// ROUNDING
// =============================================================================

/// Rounds a currency amount to two decimals, half away from zero.
///
/// # Examples
/// ```
/// use quote_engine::round_price;
///
/// assert_eq!(round_price(16.7), 16.7);
/// assert_eq!(round_price(15.004), 15.0);
/// assert_eq!(round_price(2.5049), 2.5);
/// ```
#[inline]
pub fn round_price(amount: f64) -> f64 {
    (amount * MINOR_UNITS_PER_MAJOR).round() / MINOR_UNITS_PER_MAJOR
}

/// 2⁶³ as `f64`; the first magnitude an `i64` cannot hold.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Integer minor units (cents) for an already rounded amount.
///
/// `None` when the amount is not finite or does not fit in an `i64`.
///
/// # Examples
/// ```
/// use quote_engine::to_minor_units;
///
/// assert_eq!(to_minor_units(16.7), Some(1670));
/// assert_eq!(to_minor_units(8.5e17), None);
/// ```
#[inline]
pub fn to_minor_units(amount: f64) -> Option<i64> {
    let minor = (amount * MINOR_UNITS_PER_MAJOR).round();
    (minor.is_finite() && minor.abs() < I64_BOUND).then_some(minor as i64)
}

// =============================================================================
// PRICE QUOTE
// =============================================================================

/// Authoritative price for one mesh in one material.
///
/// Immutable once computed. Every pricing input is carried alongside the
/// total so a displayed quote can be audited.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    volume_cm3: f64,
    material: MaterialProfile,
    base_rate: f64,
    multiplier: f64,
    setup_fee: f64,
    total_price: f64,
    #[serde(skip)]
    total_minor_units: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    material_fallback: Option<InvalidMaterialError>,
}

impl PriceQuote {
    /// Enclosed volume in cm³.
    pub fn volume_cm3(&self) -> f64 {
        self.volume_cm3
    }

    /// Material the quote was priced with.
    pub fn material(&self) -> MaterialProfile {
        self.material
    }

    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn setup_fee(&self) -> f64 {
        self.setup_fee
    }

    /// Total in major currency units, rounded to two decimals.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Total in integer minor units.
    pub fn total_minor_units(&self) -> i64 {
        self.total_minor_units
    }

    /// Set when the requested material key was not recognized.
    pub fn material_fallback(&self) -> Option<&InvalidMaterialError> {
        self.material_fallback.as_ref()
    }

    /// Rough print duration for display.
    pub fn print_estimate(&self) -> PrintEstimate {
        PrintEstimate::for_volume(self.volume_cm3)
    }
}

/// Computes a quote for `volume_cm3` in the selected material.
///
/// # Errors
///
/// - [`QuoteError::InvalidVolume`] when the volume is negative or not finite
/// - [`QuoteError::AmountOutOfRange`] when the total has no exact
///   integer minor-unit representation
///
/// # Examples
/// ```
/// use config::RateTable;
/// use quote_engine::{quote, MaterialProfile};
///
/// let q = quote(1.0, MaterialProfile::Resin, &RateTable::default()).unwrap();
/// assert_eq!(q.total_price(), 16.7);
/// assert_eq!(q.total_minor_units(), 1670);
/// ```
pub fn quote(
    volume_cm3: f64,
    material: impl Into<MaterialSelection>,
    rates: &RateTable,
) -> Result<PriceQuote, QuoteError> {
    if !volume_cm3.is_finite() || volume_cm3 < 0.0 {
        return Err(QuoteError::InvalidVolume(volume_cm3));
    }

    let (material, material_fallback) = material.into().into_parts();
    let base_rate = rates.base_rate();
    let multiplier = material.multiplier(rates);
    let setup_fee = rates.setup_fee();

    let total_price = round_price(volume_cm3 * base_rate * multiplier + setup_fee);
    let total_minor_units =
        to_minor_units(total_price).ok_or(QuoteError::AmountOutOfRange(total_price))?;

    debug!(
        volume_cm3,
        material = material.key(),
        total_price,
        fallback = material_fallback.is_some(),
        "computed quote"
    );

    Ok(PriceQuote {
        volume_cm3,
        material,
        base_rate,
        multiplier,
        setup_fee,
        total_price,
        total_minor_units,
        material_fallback,
    })
}

// =============================================================================
// PRINT ESTIMATE
// =============================================================================

/// Display-only print duration, proportional to volume.
///
/// # Examples
/// ```
/// use quote_engine::PrintEstimate;
///
/// assert_eq!(PrintEstimate::for_volume(40.0).to_string(), "1h 40m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrintEstimate {
    minutes: f64,
}

impl PrintEstimate {
    pub fn for_volume(volume_cm3: f64) -> Self {
        Self {
            minutes: volume_cm3 * PRINT_MINUTES_PER_CM3,
        }
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }
}

impl fmt::Display for PrintEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.minutes.max(0.0).floor() as u64;
        write!(f, "{}h {}m", total / 60, total % 60)
    }
}

#[cfg(test)]
mod tests;
