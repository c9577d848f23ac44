//! # Binary Decoding
//!
//! Turns an untrusted byte buffer into a [`TriangleSoup`].
//!
//! ## Layout
//!
//! ```text
//! offset 0          80 bytes   header (ignored)
//! offset 80          4 bytes   triangle count N, little-endian u32
//! offset 84 + 50*i  12 bytes   normal (ignored)
//!                   36 bytes   3 vertices x 3 little-endian f32
//!                    2 bytes   attribute (ignored)
//! ```

use config::constants::{
    STL_ATTRIBUTE_LEN, STL_HEADER_LEN, STL_NORMAL_LEN, STL_PREAMBLE_LEN, STL_RECORD_LEN,
};
use tracing::debug;

use crate::cursor::ByteCursor;
use crate::error::{DecodeResult, MalformedMeshError};
use crate::triangle::{Triangle, TriangleSoup};

/// Reads the declared triangle count and checks the buffer can hold it.
///
/// Returns the count once the buffer length has been validated, so callers
/// can size allocations from it.
///
/// # Examples
/// ```
/// use stl_decoder::declared_triangle_count;
///
/// let mut bytes = vec![0u8; 84];
/// assert_eq!(declared_triangle_count(&bytes), Ok(0));
///
/// bytes[80] = 1; // declares one triangle without its record
/// assert!(declared_triangle_count(&bytes).is_err());
/// ```
pub fn declared_triangle_count(bytes: &[u8]) -> DecodeResult<u32> {
    if bytes.len() < STL_PREAMBLE_LEN {
        return Err(MalformedMeshError::MissingPreamble { len: bytes.len() });
    }

    let declared = ByteCursor::at(bytes, STL_HEADER_LEN).read_u32_le()?;

    // u64 arithmetic: u32::MAX * 50 does not fit a 32-bit usize
    let required = STL_PREAMBLE_LEN as u64 + u64::from(declared) * STL_RECORD_LEN as u64;
    if (bytes.len() as u64) < required {
        return Err(MalformedMeshError::Truncated {
            declared,
            required,
            len: bytes.len(),
        });
    }

    Ok(declared)
}

/// Decodes a binary mesh into its ordered triangle sequence.
///
/// Exactly the declared number of triangles is produced, in source order.
/// Bytes after the last record are ignored. Normals and attributes are
/// skipped; vertices keep their exact `f32` bit patterns.
///
/// # Errors
///
/// [`MalformedMeshError`] when the buffer is shorter than 84 bytes or
/// shorter than `84 + N * 50` for the declared count `N`. No triangles are
/// returned on error.
///
/// # Examples
/// ```
/// use stl_decoder::decode;
///
/// let empty = [0u8; 84];
/// let soup = decode(&empty).expect("zero triangles is valid");
/// assert!(soup.is_empty());
/// ```
pub fn decode(bytes: &[u8]) -> DecodeResult<TriangleSoup> {
    let declared = declared_triangle_count(bytes)?;
    let count = declared as usize;

    let mut cursor = ByteCursor::at(bytes, STL_PREAMBLE_LEN);
    let mut triangles = Vec::with_capacity(count);

    for _ in 0..count {
        cursor.skip(STL_NORMAL_LEN)?;
        let a = cursor.read_vec3()?;
        let b = cursor.read_vec3()?;
        let c = cursor.read_vec3()?;
        cursor.skip(STL_ATTRIBUTE_LEN)?;
        triangles.push(Triangle::new(a, b, c));
    }

    debug!(
        triangles = count,
        bytes = bytes.len(),
        trailing = bytes.len() - cursor.offset(),
        "decoded binary mesh"
    );

    Ok(TriangleSoup::from(triangles))
}
