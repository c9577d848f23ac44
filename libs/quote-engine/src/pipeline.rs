//! # Quote Pipeline
//!
//! Composes decoding, volume, and pricing into the single authoritative
//! entry point, and drives an upload through persistence to a line item.
//!
//! ```text
//! raw bytes ─ decode ─▶ TriangleSoup ─ enclosed_volume ─▶ cm³ ─ quote ─▶ PriceQuote
//! ```
//!
//! Both the in-browser preview and the server-side submission call
//! [`compute_quote_with`], so identical bytes and material produce an
//! identical total.

use config::RateTable;
use mesh_volume::enclosed_volume;
use rayon::prelude::*;
use serde::Serialize;
use stl_decoder::{decode, TriangleSoup};
use tracing::{debug, info, instrument};

use crate::boundary::{
    build_line_item, check_preview, order_total_minor_units, ArtifactNamer, ItemMetadata,
    LineItem, PriceDrift, Quantity, StoredArtifact,
};
use crate::error::QuoteResult;
use crate::material::MaterialSelection;
use crate::quoter::{quote, PriceQuote};
use crate::store::ArtifactStore;

// =============================================================================
// QUOTING
// =============================================================================

/// Quotes raw mesh bytes with the canonical rate table.
///
/// # Examples
/// ```
/// use quote_engine::compute_quote;
///
/// // An empty mesh costs the setup fee.
/// let mut bytes = vec![0u8; 84];
/// let q = compute_quote(&bytes, "PLA").unwrap();
/// assert_eq!(q.total_price(), 15.0);
///
/// bytes.truncate(83);
/// assert!(compute_quote(&bytes, "PLA").is_err());
/// ```
pub fn compute_quote(raw_bytes: &[u8], material: &str) -> QuoteResult<PriceQuote> {
    compute_quote_with(&RateTable::default(), raw_bytes, material)
}

/// Quotes raw mesh bytes with an explicit rate table.
///
/// # Errors
///
/// - [`crate::QuoteError::MalformedMesh`] for undecodable input
/// - [`crate::QuoteError::NonFiniteVolume`] when the volume is NaN or infinite
pub fn compute_quote_with(
    rates: &RateTable,
    raw_bytes: &[u8],
    material: &str,
) -> QuoteResult<PriceQuote> {
    let soup = decode(raw_bytes)?;
    quote_triangles(rates, &soup, material)
}

/// Quotes an already decoded triangle soup.
pub fn quote_triangles(
    rates: &RateTable,
    soup: &TriangleSoup,
    material: &str,
) -> QuoteResult<PriceQuote> {
    let volume = enclosed_volume(soup)?;
    quote(volume.cm3(), MaterialSelection::resolve(material), rates)
}

/// One entry of a batch quote.
#[derive(Debug, Clone, Copy)]
pub struct QuoteRequest<'a> {
    pub raw_bytes: &'a [u8],
    pub material: &'a str,
}

/// Quotes independent meshes in parallel. Results keep the request order.
pub fn quote_batch(rates: &RateTable, requests: &[QuoteRequest<'_>]) -> Vec<QuoteResult<PriceQuote>> {
    requests
        .par_iter()
        .map(|request| compute_quote_with(rates, request.raw_bytes, request.material))
        .collect()
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// An uploaded mesh awaiting checkout.
#[derive(Debug, Clone, Copy)]
pub struct Upload<'a> {
    pub raw_bytes: &'a [u8],
    /// Client file name; used for the artifact name and display name.
    pub file_name: &'a str,
    pub material: &'a str,
    /// Requested count; 1 when absent.
    pub quantity: Option<i64>,
    /// Total the client displayed, if it reported one.
    pub preview_total: Option<f64>,
}

/// Result of a successful submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedUpload {
    pub quote: PriceQuote,
    pub artifact: StoredArtifact,
    pub line_item: LineItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_drift: Option<PriceDrift>,
}

/// Server-side boundary between the quote engine and checkout.
///
/// Owns the rate table and the artifact namer; one boundary per process
/// keeps artifact names unique.
#[derive(Debug, Default)]
pub struct QuoteBoundary {
    rates: RateTable,
    namer: ArtifactNamer,
}

impl QuoteBoundary {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            namer: ArtifactNamer::new(),
        }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Authoritative quote for `raw_bytes`.
    pub fn quote(&self, raw_bytes: &[u8], material: &str) -> QuoteResult<PriceQuote> {
        compute_quote_with(&self.rates, raw_bytes, material)
    }

    /// Line item for an unpersisted quote, with a fresh identifier.
    pub fn line_item(
        &self,
        quote: &PriceQuote,
        name: &str,
        quantity: Option<i64>,
    ) -> QuoteResult<LineItem> {
        let quantity = Quantity::resolve(quantity)?;
        build_line_item(
            quote,
            ItemMetadata {
                name,
                artifact: None,
            },
            quantity,
            &self.namer,
        )
    }

    /// Re-quotes, persists, and builds the line item for an upload.
    ///
    /// Quoting, quantity validation and the order-total check run before
    /// anything is stored, so a failed upload leaves no artifact behind. A
    /// client preview total is compared against the authoritative quote and
    /// reported on mismatch.
    #[instrument(skip_all, fields(file_name = upload.file_name, material = upload.material))]
    pub async fn finalize_upload<S>(&self, store: &S, upload: Upload<'_>) -> QuoteResult<FinalizedUpload>
    where
        S: ArtifactStore + ?Sized,
    {
        let quote = self.quote(upload.raw_bytes, upload.material)?;
        let quantity = Quantity::resolve(upload.quantity)?;
        order_total_minor_units(&quote, quantity)?;
        let price_drift = upload
            .preview_total
            .and_then(|client_total| check_preview(client_total, &quote));

        let unique_name = self.namer.unique_name(upload.file_name);
        debug!(%unique_name, bytes = upload.raw_bytes.len(), "storing artifact");
        let url = store.store(&unique_name, upload.raw_bytes).await?;
        let artifact = StoredArtifact { unique_name, url };

        let line_item = build_line_item(
            &quote,
            ItemMetadata {
                name: upload.file_name,
                artifact: Some(&artifact),
            },
            quantity,
            &self.namer,
        )?;

        info!(
            identifier = line_item.identifier(),
            unit_amount = line_item.unit_amount_minor_units(),
            quantity = quantity.get(),
            "upload finalized"
        );

        Ok(FinalizedUpload {
            quote,
            artifact,
            line_item,
            price_drift,
        })
    }
}
