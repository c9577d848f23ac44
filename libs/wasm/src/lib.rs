//! WASM-facing entry points for the browser price preview.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helper
//! `quote_preview_internal` to avoid depending on a JS host.
//!
//! The preview runs the exact decode, volume, and pricing code the server
//! uses, so the displayed total matches the submitted one for the same bytes.
//!
//! ```
//! let bytes = vec![0u8; 84];
//! let handle = quote_wasm::quote_preview_internal(&bytes, "PLA").unwrap();
//! assert_eq!(handle.total_price(), 15.0);
//! ```

use config::RateTable;
use quote_engine::{quote_triangles, Quantity};
use stl_decoder::decode;
use wasm_bindgen::prelude::*;

mod diagnostics;
mod quote_handle;

pub use diagnostics::{ErrorKind, PreviewError};
pub use quote_handle::QuoteHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "quote-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Quotes an uploaded mesh with the canonical rate table.
///
/// # Errors
/// Returns a [`PreviewError`] when the bytes are not a valid binary mesh.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const quote = quote_preview(new Uint8Array(await file.arrayBuffer()), "RESIN");
/// // console.log(quote.total_price, quote.print_time);
/// ```
#[wasm_bindgen]
pub fn quote_preview(bytes: &[u8], material: &str) -> Result<QuoteHandle, PreviewError> {
    quote_preview_internal(bytes, material)
}

/// Quotes an uploaded mesh with a rate table supplied as JSON.
///
/// The JSON shape is `{"baseRate": 0.85, "setupFee": 15.0, "multipliers":
/// {"pla": 1.0, "petg": 1.5, "resin": 2.0}}`.
#[wasm_bindgen]
pub fn quote_preview_with_rates(
    bytes: &[u8],
    material: &str,
    rates_json: &str,
) -> Result<QuoteHandle, PreviewError> {
    let rates: RateTable = serde_json::from_str(rates_json)?;
    quote_preview_with_internal(&rates, bytes, material)
}

/// Validates a quantity entered in the browser.
///
/// Accepts whole numbers from 1 upward; `2.5`, `0`, `NaN` and negative
/// values are rejected with [`ErrorKind::InvalidQuantity`].
///
/// # Examples
/// ```
/// assert_eq!(quote_wasm::check_quantity(3.0).unwrap(), 3);
/// assert!(quote_wasm::check_quantity(2.5).is_err());
/// ```
#[wasm_bindgen]
pub fn check_quantity(value: f64) -> Result<u32, PreviewError> {
    Ok(Quantity::try_from(value)?.get())
}

/// Host-only helper that quotes with the canonical rate table.
pub fn quote_preview_internal(bytes: &[u8], material: &str) -> Result<QuoteHandle, PreviewError> {
    quote_preview_with_internal(&RateTable::default(), bytes, material)
}

/// Host-only helper that quotes with an explicit rate table.
pub fn quote_preview_with_internal(
    rates: &RateTable,
    bytes: &[u8],
    material: &str,
) -> Result<QuoteHandle, PreviewError> {
    let soup = decode(bytes)?;
    let quote = quote_triangles(rates, &soup, material)?;
    Ok(QuoteHandle::new(quote, &soup))
}
