//! Error types for quoting and line-item construction.

use mesh_volume::NonFiniteVolumeError;
use stl_decoder::MalformedMeshError;
use thiserror::Error;

/// Hard failures of the quote pipeline.
///
/// None of these yields a partial quote or a line item. Unknown materials
/// are not listed here; see [`crate::InvalidMaterialError`].
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("malformed mesh: {0}")]
    MalformedMesh(#[from] MalformedMeshError),

    #[error(transparent)]
    NonFiniteVolume(#[from] NonFiniteVolumeError),

    #[error("volume must be a finite, non-negative number of cm³, got {0}")]
    InvalidVolume(f64),

    #[error("amount {0} is outside the payable range")]
    AmountOutOfRange(f64),

    #[error(transparent)]
    InvalidQuantity(#[from] InvalidQuantityError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Quantity was not a positive integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("quantity must be a positive integer, got {value}")]
pub struct InvalidQuantityError {
    /// The offending value as received.
    pub value: String,
}

impl InvalidQuantityError {
    pub(crate) fn new(value: impl ToString) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

/// Failure reported by an [`crate::ArtifactStore`].
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store already holds an artifact under this name.
    #[error("artifact {name:?} already exists")]
    Conflict { name: String },

    /// The backend rejected or failed the write.
    #[error("storing artifact {name:?} failed: {message}")]
    Backend { name: String, message: String },

    #[error("storing artifact {name:?} failed")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

pub type QuoteResult<T> = Result<T, QuoteError>;
