//! # Enclosed Volume
//!
//! Volume of a closed triangle mesh via the divergence theorem: the sum of
//! the signed volumes of the tetrahedra formed by a fixed origin and each
//! triangle.
//!
//! ## Units
//!
//! The binary mesh format carries no unit field. Vertex coordinates are
//! **assumed to be millimeters**; the sum is computed in mm³ and reported in
//! cm³.
//!
//! ## Determinism
//!
//! Triangles are accumulated sequentially in source order, in `f64`, without
//! fused multiply-add, so the same triangle sequence yields the same bits on
//! every target (native and WebAssembly alike).
//!
//! ## Known Limitation
//!
//! Open meshes and meshes with inconsistent winding still produce a
//! deterministic number, but it is not a physically meaningful volume.
//! Degenerate triangles contribute zero and are not special-cased.

use config::constants::MM3_PER_CM3;
use glam::DVec3;
use stl_decoder::TriangleSoup;
use tracing::debug;

use crate::error::NonFiniteVolumeError;

// =============================================================================
// VOLUME RESULT
// =============================================================================

/// Enclosed volume of a triangle soup.
///
/// # Examples
/// ```
/// use mesh_volume::{enclosed_volume, primitives::cube};
///
/// let volume = enclosed_volume(&cube(10.0)).unwrap();
/// assert_eq!(volume.cm3(), 1.0);
/// assert!(!volume.is_inverted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVolume {
    /// Signed sum in mm³, before the absolute value is taken.
    signed_mm3: f64,
    /// Number of triangles that contributed.
    triangle_count: usize,
}

impl MeshVolume {
    /// Non-negative enclosed volume in cm³.
    #[inline]
    pub fn cm3(&self) -> f64 {
        self.signed_mm3.abs() / MM3_PER_CM3
    }

    /// Signed volume in mm³. Negative for inward-facing winding.
    #[inline]
    pub fn signed_mm3(&self) -> f64 {
        self.signed_mm3
    }

    /// True when the winding is inside-out (negative signed sum).
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.signed_mm3 < 0.0
    }

    /// Number of triangles that contributed to the sum.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }
}

// =============================================================================
// COMPUTATION
// =============================================================================

/// Six-term expansion of `p1 · (p2 × p3)`: six times the signed volume of
/// the tetrahedron (origin, p1, p2, p3).
#[inline]
fn triple_product(p1: DVec3, p2: DVec3, p3: DVec3) -> f64 {
    let v321 = p3.x * p2.y * p1.z;
    let v231 = p2.x * p3.y * p1.z;
    let v312 = p3.x * p1.y * p2.z;
    let v132 = p1.x * p3.y * p2.z;
    let v213 = p2.x * p1.y * p3.z;
    let v123 = p1.x * p2.y * p3.z;

    -v321 + v231 + v312 - v132 - v213 + v123
}

/// Signed volume in mm³ without finiteness checks.
///
/// Positive for outward-facing (counter-clockwise from outside) winding.
///
/// # Examples
/// ```
/// use mesh_volume::{primitives::cube, signed_volume_mm3};
/// assert_eq!(signed_volume_mm3(&cube(2.0)), 8.0);
/// ```
pub fn signed_volume_mm3(soup: &TriangleSoup) -> f64 {
    let mut sum = 0.0;
    for triangle in soup {
        let [p1, p2, p3] = triangle.to_f64();
        sum += triple_product(p1, p2, p3);
    }
    sum / 6.0
}

/// Enclosed volume of `soup`, assuming millimeter coordinates.
///
/// # Errors
///
/// [`NonFiniteVolumeError`] when the sum is NaN or infinite.
pub fn enclosed_volume(soup: &TriangleSoup) -> Result<MeshVolume, NonFiniteVolumeError> {
    let signed_mm3 = signed_volume_mm3(soup);
    if !signed_mm3.is_finite() {
        return Err(NonFiniteVolumeError { value: signed_mm3 });
    }

    let volume = MeshVolume {
        signed_mm3,
        triangle_count: soup.triangle_count(),
    };

    debug!(
        triangles = volume.triangle_count,
        signed_mm3,
        cm3 = volume.cm3(),
        inverted = volume.is_inverted(),
        "computed enclosed volume"
    );

    Ok(volume)
}
