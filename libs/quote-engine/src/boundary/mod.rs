//! # Checkout Boundary
//!
//! Turns an authoritative [`PriceQuote`] into a [`LineItem`] a checkout
//! collaborator can consume.
//!
//! ## Contract
//!
//! - The unit amount comes from the quote, never from client input.
//! - Quantity is a positive integer, defaulting to 1.
//! - Display name and description fit the payload limits.
//! - The identifier is unique per boundary, even for repeated file names.

mod display;
mod naming;
mod text;

pub use display::{display_name, parse_display_name, DisplayNameParts};
pub use naming::ArtifactNamer;
pub use text::sanitize_text;

use std::num::NonZeroU32;

use config::constants::{DEFAULT_QUANTITY, MAX_DESCRIPTION_CHARS, PRICE_DRIFT_TOLERANCE};
use serde::Serialize;
use tracing::warn;

use crate::error::{InvalidQuantityError, QuoteError, QuoteResult};
use crate::quoter::PriceQuote;

// =============================================================================
// QUANTITY
// =============================================================================

/// A positive item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// # Errors
    ///
    /// [`InvalidQuantityError`] for zero, negative, or out-of-range values.
    pub fn new(value: i64) -> Result<Self, InvalidQuantityError> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| InvalidQuantityError::new(value))
    }

    /// Resolves an optional quantity, defaulting to 1 when absent.
    pub fn resolve(value: Option<i64>) -> Result<Self, InvalidQuantityError> {
        value.map_or(Ok(Self::default()), Self::new)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(NonZeroU32::new(DEFAULT_QUANTITY).unwrap_or(NonZeroU32::MIN))
    }
}

impl TryFrom<f64> for Quantity {
    type Error = InvalidQuantityError;

    /// Accepts whole numbers only; `2.0` is valid, `2.5` and `NaN` are not.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX)
        {
            return Err(InvalidQuantityError::new(value));
        }
        Self::new(value as i64)
    }
}

// =============================================================================
// LINE ITEM
// =============================================================================

/// Checkout record for one printed item.
///
/// Built only by [`build_line_item`]; not `Clone`, so each record is handed
/// to checkout exactly once.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    identifier: String,
    display_name: String,
    description: String,
    unit_amount_minor_units: i64,
    quantity: Quantity,
    #[serde(skip)]
    total_minor_units: i64,
}

impl LineItem {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unit price in integer minor currency units.
    pub fn unit_amount_minor_units(&self) -> i64 {
        self.unit_amount_minor_units
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit amount times quantity, in minor units.
    pub fn total_minor_units(&self) -> i64 {
        self.total_minor_units
    }
}

/// A persisted upload, as reported by the artifact store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredArtifact {
    /// Name the bytes were stored under.
    pub unique_name: String,
    /// Retrievable location of the stored bytes.
    pub url: String,
}

/// Caller-supplied context for a line item.
#[derive(Debug, Clone, Copy)]
pub struct ItemMetadata<'a> {
    /// Name shown to the buyer, usually the uploaded file name.
    pub name: &'a str,
    /// The persisted artifact, when the upload was stored.
    pub artifact: Option<&'a StoredArtifact>,
}

/// Order total for `quantity` copies of `quote`, in minor units.
///
/// # Errors
///
/// [`QuoteError::AmountOutOfRange`] when the product overflows an `i64`.
pub fn order_total_minor_units(quote: &PriceQuote, quantity: Quantity) -> QuoteResult<i64> {
    quote
        .total_minor_units()
        .checked_mul(i64::from(quantity.get()))
        .ok_or_else(|| {
            QuoteError::AmountOutOfRange(quote.total_price() * f64::from(quantity.get()))
        })
}

/// Builds the checkout record for `quote`.
///
/// With an artifact, the identifier is its unique name and the description
/// points at its URL. Without one, `namer` supplies a fresh identifier and
/// the description is empty.
///
/// # Errors
///
/// [`QuoteError::AmountOutOfRange`] when the order total overflows.
pub fn build_line_item(
    quote: &PriceQuote,
    metadata: ItemMetadata<'_>,
    quantity: Quantity,
    namer: &ArtifactNamer,
) -> QuoteResult<LineItem> {
    let total_minor_units = order_total_minor_units(quote, quantity)?;

    let (identifier, description) = match metadata.artifact {
        Some(artifact) => (
            artifact.unique_name.clone(),
            sanitize_text(&format!("STL: {}", artifact.url), MAX_DESCRIPTION_CHARS),
        ),
        None => (namer.unique_name(metadata.name), String::new()),
    };

    Ok(LineItem {
        identifier,
        display_name: display_name(metadata.name, quote.volume_cm3(), quote.material()),
        description,
        unit_amount_minor_units: quote.total_minor_units(),
        quantity,
        total_minor_units,
    })
}

// =============================================================================
// CLIENT PREVIEW DRIFT
// =============================================================================

/// A client-displayed total that disagrees with the authoritative one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDrift {
    pub client_total: f64,
    pub authoritative_total: f64,
}

/// Compares a client preview total with the authoritative quote.
///
/// The client figure is informational only; a mismatch is logged and
/// returned, never used for pricing.
pub fn check_preview(client_total: f64, quote: &PriceQuote) -> Option<PriceDrift> {
    let authoritative_total = quote.total_price();
    let agrees = client_total.is_finite()
        && (client_total - authoritative_total).abs() <= PRICE_DRIFT_TOLERANCE;
    if agrees {
        return None;
    }
    warn!(
        client_total,
        authoritative_total, "client preview disagrees with authoritative quote"
    );
    Some(PriceDrift {
        client_total,
        authoritative_total,
    })
}
