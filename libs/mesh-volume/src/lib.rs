//! # Mesh Volume
//!
//! Computes the enclosed volume of a decoded triangle soup as a single
//! non-negative scalar in cubic centimeters.
//!
//! ## Example
//!
//! ```rust
//! use mesh_volume::{enclosed_volume, primitives::cube};
//!
//! // 10 mm cube = 1000 mm³ = 1 cm³
//! let volume = enclosed_volume(&cube(10.0)).unwrap();
//! assert!((volume.cm3() - 1.0).abs() < 1e-4);
//! ```
//!
//! Coordinates are assumed to be millimeters; see [`volume`] for the unit,
//! determinism and closed-mesh caveats.

pub mod error;
pub mod primitives;
pub mod volume;

pub use error::NonFiniteVolumeError;
pub use volume::{enclosed_volume, signed_volume_mm3, MeshVolume};
