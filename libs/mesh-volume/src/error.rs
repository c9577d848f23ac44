//! # Error Types
//!
//! The volume sum either yields a finite value or fails. Non-finite results
//! (from NaN or infinite vertex coordinates) are never clamped.

use thiserror::Error;

/// The volume sum produced NaN or infinity.
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use mesh_volume::enclosed_volume;
/// use stl_decoder::{Triangle, TriangleSoup};
///
/// let soup = TriangleSoup::from(vec![Triangle::new(
///     Vec3::new(f32::NAN, 0.0, 0.0),
///     Vec3::Y,
///     Vec3::Z,
/// )]);
/// assert!(enclosed_volume(&soup).is_err());
/// ```
#[derive(Error, Debug, Clone, Copy)]
#[error("mesh volume is not finite: {value}")]
pub struct NonFiniteVolumeError {
    /// The offending sum, in mm³.
    pub value: f64,
}
