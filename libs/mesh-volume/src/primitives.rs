//! Reference meshes with known volumes.
//!
//! All primitives use outward-facing, counter-clockwise winding, so their
//! signed volume is positive.

use glam::Vec3;
use stl_decoder::{Triangle, TriangleSoup};

/// Axis-aligned cube with its minimum corner at `min` and edge `size`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use mesh_volume::primitives::cube_at;
///
/// let soup = cube_at(Vec3::splat(-5.0), 10.0);
/// assert_eq!(soup.triangle_count(), 12);
/// ```
pub fn cube_at(min: Vec3, size: f32) -> TriangleSoup {
    let corner = |x: f32, y: f32, z: f32| min + Vec3::new(x, y, z) * size;

    let v000 = corner(0.0, 0.0, 0.0);
    let v100 = corner(1.0, 0.0, 0.0);
    let v010 = corner(0.0, 1.0, 0.0);
    let v110 = corner(1.0, 1.0, 0.0);
    let v001 = corner(0.0, 0.0, 1.0);
    let v101 = corner(1.0, 0.0, 1.0);
    let v011 = corner(0.0, 1.0, 1.0);
    let v111 = corner(1.0, 1.0, 1.0);

    TriangleSoup::from(vec![
        // -Z
        Triangle::new(v000, v010, v110),
        Triangle::new(v000, v110, v100),
        // +Z
        Triangle::new(v001, v101, v111),
        Triangle::new(v001, v111, v011),
        // -Y
        Triangle::new(v000, v100, v101),
        Triangle::new(v000, v101, v001),
        // +Y
        Triangle::new(v010, v011, v111),
        Triangle::new(v010, v111, v110),
        // -X
        Triangle::new(v000, v001, v011),
        Triangle::new(v000, v011, v010),
        // +X
        Triangle::new(v100, v110, v111),
        Triangle::new(v100, v111, v101),
    ])
}

/// Cube with its minimum corner at the origin.
///
/// A `cube(10.0)` encloses 1000 mm³, i.e. 1 cm³.
pub fn cube(size: f32) -> TriangleSoup {
    cube_at(Vec3::ZERO, size)
}

/// Right tetrahedron spanning the origin and the three axis points at
/// distance `size`. Encloses `size³ / 6`.
pub fn tetrahedron(size: f32) -> TriangleSoup {
    let o = Vec3::ZERO;
    let x = Vec3::X * size;
    let y = Vec3::Y * size;
    let z = Vec3::Z * size;

    TriangleSoup::from(vec![
        Triangle::new(o, y, x),
        Triangle::new(o, x, z),
        Triangle::new(o, z, y),
        Triangle::new(x, y, z),
    ])
}
