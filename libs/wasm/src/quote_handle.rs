//! # Quote Handle
//!
//! WASM-friendly wrapper for a preview quote that can be transferred to
//! JavaScript.

use quote_engine::PriceQuote;
use stl_decoder::TriangleSoup;
use wasm_bindgen::prelude::*;

use crate::diagnostics::{ErrorKind, PreviewError};

/// A handle to a preview quote and the mesh it was computed from.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const quote = quote_preview(new Uint8Array(buffer), "PETG");
///
/// priceLabel.textContent = `$${quote.total_price.toFixed(2)}`;
/// timeLabel.textContent = quote.print_time;
/// if (quote.material_fallback) {
///   warn(`Unknown material "${quote.requested_material}", priced as PLA`);
/// }
///
/// // Non-indexed positions for Three.js
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(quote.vertices(), 3));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct QuoteHandle {
    quote: PriceQuote,
    /// Vertex positions as [x, y, z, x, y, z, ...], three per triangle
    vertices: Vec<f32>,
    triangle_count: u32,
}

#[wasm_bindgen]
impl QuoteHandle {
    /// Enclosed volume in cm³.
    #[wasm_bindgen(getter)]
    pub fn volume_cm3(&self) -> f64 {
        self.quote.volume_cm3()
    }

    /// Material key the quote was priced with.
    #[wasm_bindgen(getter)]
    pub fn material(&self) -> String {
        self.quote.material().key().to_string()
    }

    /// Total in major currency units, rounded to two decimals.
    #[wasm_bindgen(getter)]
    pub fn total_price(&self) -> f64 {
        self.quote.total_price()
    }

    /// Total in integer minor units.
    #[wasm_bindgen(getter)]
    pub fn total_minor_units(&self) -> f64 {
        self.quote.total_minor_units() as f64
    }

    /// True when the requested material was unknown and PLA was used.
    #[wasm_bindgen(getter)]
    pub fn material_fallback(&self) -> bool {
        self.quote.material_fallback().is_some()
    }

    /// The unrecognized material key, if any.
    #[wasm_bindgen(getter)]
    pub fn requested_material(&self) -> Option<String> {
        self.quote.material_fallback().map(|err| err.key.clone())
    }

    /// Print duration label, e.g. `"1h 40m"`.
    #[wasm_bindgen(getter)]
    pub fn print_time(&self) -> String {
        self.quote.print_estimate().to_string()
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: triangle_count * 9
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Full quote breakdown as a JSON string.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, PreviewError> {
        serde_json::to_string(&self.quote).map_err(|err| {
            PreviewError::new(
                ErrorKind::Serialization,
                format!("quote serialization failed: {err}"),
            )
        })
    }

    /// Returns true if the mesh has no triangles.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.triangle_count == 0
    }
}

impl QuoteHandle {
    /// Creates a handle from a quote and its decoded mesh.
    pub fn new(quote: PriceQuote, soup: &TriangleSoup) -> Self {
        Self {
            quote,
            vertices: soup.vertices_f32(),
            triangle_count: u32::try_from(soup.triangle_count()).unwrap_or(u32::MAX),
        }
    }

    /// The underlying quote.
    pub fn quote(&self) -> &PriceQuote {
        &self.quote
    }

    /// Vertex positions without crossing into JavaScript.
    pub fn positions(&self) -> &[f32] {
        &self.vertices
    }
}
