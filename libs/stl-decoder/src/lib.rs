//! # STL Decoder
//!
//! Decodes the binary triangle-soup mesh format into an ordered sequence of
//! triangles. No semantic interpretation happens here beyond structural
//! validity: triangles are neither reordered, deduplicated, nor checked for
//! manifoldness.
//!
//! ## Example
//!
//! ```rust
//! use glam::Vec3;
//! use stl_decoder::{decode, encode, Triangle};
//!
//! let triangle = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
//! let bytes = encode(&[triangle], "demo").unwrap();
//!
//! let soup = decode(&bytes).unwrap();
//! assert_eq!(soup.triangle_count(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first stage of the quote pipeline:
//!
//! ```text
//! stl-decoder → mesh-volume → quote-engine → wasm / quote-cli
//! ```

mod cursor;
pub mod decode;
pub mod encode;
pub mod error;
pub mod triangle;

pub use decode::{decode, declared_triangle_count};
pub use encode::encode;
pub use error::{DecodeResult, EncodeError, MalformedMeshError};
pub use triangle::{Triangle, TriangleSoup};

/// Vertex type used by [`Triangle`].
pub use glam::Vec3;
