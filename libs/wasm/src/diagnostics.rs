//! WASM-compatible preview errors.
//!
//! This module provides JavaScript-compatible wrappers for quote failures.

use config::RateTableError;
use quote_engine::QuoteError;
use wasm_bindgen::prelude::*;

/// Failure category for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The upload is not a decodable binary mesh.
    MalformedMesh,
    /// The mesh produced a NaN or infinite volume.
    NonFiniteVolume,
    /// The supplied rate table was unreadable or violated its constraints.
    InvalidRates,
    /// Quantity was not a positive integer.
    InvalidQuantity,
    /// The total cannot be charged as an integer amount of minor units.
    AmountOutOfRange,
    /// The quote could not be rendered as JSON.
    Serialization,
    /// Any other quote failure.
    Other,
}

/// A preview failure for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { quote_preview(bytes, "PLA"); }
/// // catch (err) { console.log(err.kind, err.message); }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewError {
    kind: ErrorKind,
    message: String,
}

#[wasm_bindgen]
impl PreviewError {
    /// Returns the failure category.
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl PreviewError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<QuoteError> for PreviewError {
    fn from(err: QuoteError) -> Self {
        let kind = match err {
            QuoteError::MalformedMesh(_) => ErrorKind::MalformedMesh,
            QuoteError::NonFiniteVolume(_) => ErrorKind::NonFiniteVolume,
            QuoteError::InvalidQuantity(_) => ErrorKind::InvalidQuantity,
            QuoteError::AmountOutOfRange(_) => ErrorKind::AmountOutOfRange,
            _ => ErrorKind::Other,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<stl_decoder::MalformedMeshError> for PreviewError {
    fn from(err: stl_decoder::MalformedMeshError) -> Self {
        QuoteError::from(err).into()
    }
}

impl From<quote_engine::InvalidQuantityError> for PreviewError {
    fn from(err: quote_engine::InvalidQuantityError) -> Self {
        QuoteError::from(err).into()
    }
}

impl From<RateTableError> for PreviewError {
    fn from(err: RateTableError) -> Self {
        Self {
            kind: ErrorKind::InvalidRates,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PreviewError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::InvalidRates,
            message: format!("invalid rate table: {err}"),
        }
    }
}
