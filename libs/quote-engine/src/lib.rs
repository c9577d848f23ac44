//! # Quote Engine
//!
//! Authoritative price quotes for binary triangle meshes, and the boundary
//! that turns a quote into a checkout line item.
//!
//! ## Pipeline
//!
//! ```text
//! bytes → decode → enclosed volume (cm³) → quote → line item
//! ```
//!
//! ## Example
//!
//! ```
//! use mesh_volume::primitives::cube;
//! use quote_engine::compute_quote;
//! use stl_decoder::encode;
//!
//! let bytes = encode(&cube(10.0), "unit cube").unwrap();
//! let quote = compute_quote(&bytes, "RESIN").unwrap();
//! assert_eq!(quote.total_price(), 16.7);
//! assert_eq!(quote.print_estimate().to_string(), "0h 2m");
//! ```

pub mod boundary;
pub mod error;
pub mod material;
pub mod pipeline;
pub mod quoter;
pub mod store;

pub use boundary::{LineItem, PriceDrift, Quantity, StoredArtifact};
pub use error::{InvalidQuantityError, QuoteError, QuoteResult, StorageError};
pub use material::{InvalidMaterialError, MaterialProfile, MaterialSelection};
pub use pipeline::{
    compute_quote, compute_quote_with, quote_batch, quote_triangles, FinalizedUpload,
    QuoteBoundary, QuoteRequest, Upload,
};
pub use quoter::{quote, round_price, to_minor_units, PriceQuote, PrintEstimate};
pub use store::{ArtifactStore, InMemoryArtifactStore};
