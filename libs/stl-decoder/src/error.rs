//! # Error Types
//!
//! Errors raised while decoding or encoding binary meshes.
//!
//! ## Error Policy
//!
//! - Decoding either yields every declared triangle or fails
//! - No partial triangle sequences are ever returned

use thiserror::Error;

/// The buffer does not hold a structurally valid binary mesh.
///
/// ## Example
///
/// ```rust
/// use stl_decoder::{decode, MalformedMeshError};
///
/// let err = decode(&[0u8; 83]).unwrap_err();
/// assert_eq!(err, MalformedMeshError::MissingPreamble { len: 83 });
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedMeshError {
    /// Shorter than the 80-byte header plus 4-byte triangle count.
    #[error("mesh buffer is {len} bytes, shorter than the 84-byte header")]
    MissingPreamble {
        /// Actual buffer length.
        len: usize,
    },

    /// The declared triangle count needs more bytes than were supplied.
    #[error("mesh declares {declared} triangles ({required} bytes) but buffer is {len} bytes")]
    Truncated {
        /// Triangle count read from the header.
        declared: u32,
        /// Bytes required by the declared count.
        required: u64,
        /// Actual buffer length.
        len: usize,
    },

    /// A read ran past the end of the buffer.
    #[error("unexpected end of mesh buffer at offset {offset}")]
    UnexpectedEnd {
        /// Offset at which the read was attempted.
        offset: usize,
    },
}

/// Triangles cannot be written into the binary layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The triangle count does not fit the 32-bit count field.
    #[error("{0} triangles exceed the u32 count field")]
    TooManyTriangles(usize),
}

/// Result type alias for decoding.
pub type DecodeResult<T> = Result<T, MalformedMeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MalformedMeshError::Truncated {
            declared: 12,
            required: 684,
            len: 100,
        };
        let message = err.to_string();
        assert!(message.contains("12 triangles"));
        assert!(message.contains("684"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MalformedMeshError>();
        assert_send_sync::<EncodeError>();
    }
}
