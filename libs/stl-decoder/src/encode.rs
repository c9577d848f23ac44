//! # Binary Encoding
//!
//! Writes triangles into the same layout [`decode`](crate::decode) reads.
//! Normals and attributes are written as zeros; readers recompute normals.

use config::constants::{
    STL_ATTRIBUTE_LEN, STL_HEADER_LEN, STL_NORMAL_LEN, STL_PREAMBLE_LEN, STL_RECORD_LEN,
};

use crate::error::EncodeError;
use crate::triangle::Triangle;

/// Encodes triangles into a binary mesh buffer.
///
/// `header` is copied into the 80-byte header, truncated at 80 bytes and
/// zero-padded.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use stl_decoder::{decode, encode, Triangle};
///
/// let t = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
/// let bytes = encode(&[t], "example").expect("fits");
/// assert_eq!(bytes.len(), 84 + 50);
/// assert_eq!(decode(&bytes).expect("valid").triangles(), &[t]);
/// ```
pub fn encode<'a, I>(triangles: I, header: &str) -> Result<Vec<u8>, EncodeError>
where
    I: IntoIterator<Item = &'a Triangle>,
    I::IntoIter: ExactSizeIterator,
{
    let triangles = triangles.into_iter();
    let len = triangles.len();
    let count = u32::try_from(len).map_err(|_| EncodeError::TooManyTriangles(len))?;

    let mut bytes = Vec::with_capacity(STL_PREAMBLE_LEN + len * STL_RECORD_LEN);

    let mut header_bytes = [0u8; STL_HEADER_LEN];
    let text = header.as_bytes();
    let copied = text.len().min(STL_HEADER_LEN);
    header_bytes[..copied].copy_from_slice(&text[..copied]);
    bytes.extend_from_slice(&header_bytes);
    bytes.extend_from_slice(&count.to_le_bytes());

    for triangle in triangles {
        bytes.extend_from_slice(&[0u8; STL_NORMAL_LEN]);
        for vertex in triangle.vertices() {
            for component in vertex.to_array() {
                bytes.extend_from_slice(&component.to_le_bytes());
            }
        }
        bytes.extend_from_slice(&[0u8; STL_ATTRIBUTE_LEN]);
    }

    Ok(bytes)
}
