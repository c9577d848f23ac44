//! # Triangle Data
//!
//! Decoded triangles and the ordered sequence the decoder produces.

use glam::{DVec3, Vec3};

/// One triangle: three vertices in source order and source units.
///
/// Vertices keep the exact `f32` values read from the buffer. Geometry code
/// widens them to `f64` with [`Triangle::to_f64`], which is lossless.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use stl_decoder::Triangle;
///
/// let t = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
/// assert_eq!(t.vertices()[1], Vec3::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Vec3; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices.
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the vertices in source order.
    #[inline]
    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    /// Returns the vertices widened to `f64`.
    #[inline]
    pub fn to_f64(&self) -> [DVec3; 3] {
        [
            self.vertices[0].as_dvec3(),
            self.vertices[1].as_dvec3(),
            self.vertices[2].as_dvec3(),
        ]
    }

    /// Returns a copy with every vertex multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.vertices[0] * factor,
            self.vertices[1] * factor,
            self.vertices[2] * factor,
        )
    }

    /// Bitwise equality, distinguishing `-0.0` from `0.0` and comparing NaN
    /// payloads.
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.vertices
            .iter()
            .zip(other.vertices.iter())
            .all(|(a, b)| {
                a.to_array()
                    .iter()
                    .zip(b.to_array().iter())
                    .all(|(x, y)| x.to_bits() == y.to_bits())
            })
    }
}

/// Ordered, immutable triangle sequence produced by the decoder.
///
/// There is no API to reorder or mutate the triangles: the order is part of
/// the determinism contract of the volume sum.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use stl_decoder::{Triangle, TriangleSoup};
///
/// let soup = TriangleSoup::from(vec![Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)]);
/// assert_eq!(soup.triangle_count(), 1);
/// assert_eq!(soup.vertices_f32().len(), 9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    triangles: Vec<Triangle>,
}

impl TriangleSoup {
    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the triangles in source order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterates the triangles in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Flat vertex buffer `[x, y, z, x, y, z, ...]`, three vertices per
    /// triangle, for GPU preview rendering.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut buffer = Vec::with_capacity(self.triangles.len() * 9);
        for triangle in &self.triangles {
            for vertex in triangle.vertices() {
                buffer.extend_from_slice(&vertex.to_array());
            }
        }
        buffer
    }

    /// Bitwise equality of two sequences, triangle by triangle.
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.triangles.len() == other.triangles.len()
            && self
                .triangles
                .iter()
                .zip(other.triangles.iter())
                .all(|(a, b)| a.bit_eq(b))
    }
}

impl From<Vec<Triangle>> for TriangleSoup {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }
}

impl<'a> IntoIterator for &'a TriangleSoup {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_f64_is_lossless() {
        let v = Vec3::new(0.1, -3.75, 1.0e-7);
        let t = Triangle::new(v, v, v);
        let wide = t.to_f64();
        assert_eq!(wide[0].x as f32, v.x);
        assert_eq!(wide[0].y as f32, v.y);
        assert_eq!(wide[0].z as f32, v.z);
    }

    #[test]
    fn bit_eq_distinguishes_signed_zero() {
        let a = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        let b = Triangle::new(Vec3::new(-0.0, 0.0, 0.0), Vec3::X, Vec3::Y);
        assert_eq!(a, b);
        assert!(!a.bit_eq(&b));
    }

    #[test]
    fn vertex_buffer_preserves_order() {
        let soup = TriangleSoup::from(vec![
            Triangle::new(Vec3::X, Vec3::Y, Vec3::Z),
            Triangle::new(Vec3::ZERO, Vec3::ONE, Vec3::NEG_ONE),
        ]);
        let buffer = soup.vertices_f32();
        assert_eq!(buffer.len(), 18);
        assert_eq!(&buffer[0..3], &[1.0, 0.0, 0.0]);
        assert_eq!(&buffer[15..18], &[-1.0, -1.0, -1.0]);
    }

    #[test]
    fn scaled_multiplies_every_vertex() {
        let t = Triangle::new(Vec3::ONE, Vec3::X, Vec3::Y).scaled(2.0);
        assert_eq!(t.vertices()[0], Vec3::splat(2.0));
        assert_eq!(t.vertices()[2], Vec3::new(0.0, 2.0, 0.0));
    }
}
