//! # Configuration Constants
//!
//! Centralized constants for the mesh quote pipeline.
//!
//! ## Categories
//!
//! - **Layout**: Byte offsets and sizes of the binary triangle-soup format
//! - **Units**: Source length unit conversion
//! - **Pricing**: Canonical rate table values and rounding
//! - **Limits**: Payment-description text limits

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Length of the free-form header at the start of every binary mesh.
///
/// The header carries no information the pipeline relies on and is skipped.
///
/// # Examples
/// ```
/// use config::constants::STL_HEADER_LEN;
/// assert_eq!(STL_HEADER_LEN, 80);
/// ```
pub const STL_HEADER_LEN: usize = 80;

/// Length of the little-endian `u32` triangle count following the header.
pub const STL_COUNT_LEN: usize = 4;

/// Header plus triangle count: the smallest buffer that can be decoded.
///
/// # Examples
/// ```
/// use config::constants::{STL_COUNT_LEN, STL_HEADER_LEN, STL_PREAMBLE_LEN};
/// assert_eq!(STL_PREAMBLE_LEN, STL_HEADER_LEN + STL_COUNT_LEN);
/// ```
pub const STL_PREAMBLE_LEN: usize = STL_HEADER_LEN + STL_COUNT_LEN;

/// Length of the per-triangle normal (3 x f32), ignored on read.
pub const STL_NORMAL_LEN: usize = 12;

/// Length of the three vertices of a triangle record (9 x f32).
pub const STL_VERTICES_LEN: usize = 36;

/// Length of the trailing attribute byte count, ignored on read.
pub const STL_ATTRIBUTE_LEN: usize = 2;

/// Size of one triangle record.
///
/// # Examples
/// ```
/// use config::constants::STL_RECORD_LEN;
/// assert_eq!(STL_RECORD_LEN, 50);
/// ```
pub const STL_RECORD_LEN: usize = STL_NORMAL_LEN + STL_VERTICES_LEN + STL_ATTRIBUTE_LEN;

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Cubic millimeters per cubic centimeter.
///
/// The mesh format has no unit field; coordinates are assumed to be
/// millimeters and volumes are reported in cm³.
///
/// # Examples
/// ```
/// use config::constants::MM3_PER_CM3;
/// let cube_mm3 = 10.0 * 10.0 * 10.0;
/// assert_eq!(cube_mm3 / MM3_PER_CM3, 1.0);
/// ```
pub const MM3_PER_CM3: f64 = 1000.0;

// =============================================================================
// PRICING CONSTANTS
// =============================================================================

/// Canonical price per cm³ before the material multiplier.
pub const DEFAULT_BASE_RATE: f64 = 0.85;

/// Canonical fixed fee added to every quote.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SETUP_FEE;
/// // An empty mesh costs exactly the setup fee.
/// let total = 0.0 * 0.85 * 1.0 + DEFAULT_SETUP_FEE;
/// assert_eq!(total, 15.0);
/// ```
pub const DEFAULT_SETUP_FEE: f64 = 15.00;

/// Multiplier applied for PLA, also used for unrecognized materials.
pub const PLA_MULTIPLIER: f64 = 1.0;

/// Multiplier applied for PETG.
pub const PETG_MULTIPLIER: f64 = 1.5;

/// Multiplier applied for resin.
pub const RESIN_MULTIPLIER: f64 = 2.0;

/// Number of decimal places prices are rounded to.
pub const PRICE_DECIMALS: i32 = 2;

/// Minor currency units (cents) per major unit.
///
/// # Examples
/// ```
/// use config::constants::MINOR_UNITS_PER_MAJOR;
/// assert_eq!((16.70 * MINOR_UNITS_PER_MAJOR).round() as i64, 1670);
/// ```
pub const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// Largest difference between a client preview total and the authoritative
/// total that is still reported as agreement (half a minor unit).
pub const PRICE_DRIFT_TOLERANCE: f64 = 0.005;

/// Estimated print minutes per cm³ of material.
///
/// # Examples
/// ```
/// use config::constants::PRINT_MINUTES_PER_CM3;
/// assert_eq!(24.0 * PRINT_MINUTES_PER_CM3, 60.0);
/// ```
pub const PRINT_MINUTES_PER_CM3: f64 = 2.5;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum characters in a checkout display name.
pub const MAX_DISPLAY_NAME_CHARS: usize = 250;

/// Maximum characters in a checkout description.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Maximum characters kept from a user-supplied file stem when building an
/// artifact key.
pub const MAX_ARTIFACT_STEM_CHARS: usize = 64;

/// Stem used when the uploaded file name has no usable characters.
pub const DEFAULT_ARTIFACT_STEM: &str = "UNTITLED";

/// Extension used when the uploaded file name has none.
pub const DEFAULT_ARTIFACT_EXTENSION: &str = "stl";

/// Quantity applied when the caller does not override it.
pub const DEFAULT_QUANTITY: u32 = 1;
