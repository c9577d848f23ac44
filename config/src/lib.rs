//! # Config Crate
//!
//! Centralized configuration for the mesh quote pipeline. All magic numbers
//! (binary layout offsets, canonical prices, text limits) are defined here so
//! the decoder, the estimator and the quoter never disagree about them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{STL_PREAMBLE_LEN, STL_RECORD_LEN};
//! use config::rates::RateTable;
//!
//! // Minimum buffer length for a mesh declaring two triangles
//! let required = STL_PREAMBLE_LEN + 2 * STL_RECORD_LEN;
//! assert_eq!(required, 184);
//!
//! // Canonical rate table
//! let rates = RateTable::default();
//! assert_eq!(rates.setup_fee(), 15.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values, identical on native and WASM
//! - **Validated**: Rate tables cannot be constructed in an invalid state

pub mod constants;
pub mod rates;

pub use rates::{MaterialMultipliers, RateTable, RateTableError, RateTableSpec};

#[cfg(test)]
mod tests;
