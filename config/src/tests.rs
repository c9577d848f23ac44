//! # Tests for the Rate Table
//!
//! Validation rules and the JSON representation used by configuration files.

use crate::constants::*;
use crate::rates::*;

// =============================================================================
// CONSTRUCTION TESTS
// =============================================================================

#[test]
fn default_table_matches_constants() {
    let rates = RateTable::default();
    assert_eq!(rates.base_rate(), DEFAULT_BASE_RATE);
    assert_eq!(rates.setup_fee(), DEFAULT_SETUP_FEE);
    assert_eq!(rates.multipliers(), MaterialMultipliers::default());
}

#[test]
fn new_accepts_canonical_values() {
    let rates = RateTable::new(0.85, 15.0, MaterialMultipliers::default()).unwrap();
    assert_eq!(rates, RateTable::default());
}

#[test]
fn zero_setup_fee_is_allowed() {
    assert!(RateTable::new(1.0, 0.0, MaterialMultipliers::default()).is_ok());
}

// =============================================================================
// VALIDATION TESTS
// =============================================================================

#[test]
fn rejects_non_positive_base_rate() {
    assert_eq!(
        RateTable::new(0.0, 15.0, MaterialMultipliers::default()).unwrap_err(),
        RateTableError::InvalidBaseRate(0.0)
    );
    assert!(RateTable::new(-1.0, 15.0, MaterialMultipliers::default()).is_err());
}

#[test]
fn rejects_non_finite_values() {
    assert!(RateTable::new(f64::NAN, 15.0, MaterialMultipliers::default()).is_err());
    assert!(RateTable::new(0.85, f64::INFINITY, MaterialMultipliers::default()).is_err());
}

#[test]
fn rejects_negative_setup_fee() {
    assert_eq!(
        RateTable::new(0.85, -0.01, MaterialMultipliers::default()).unwrap_err(),
        RateTableError::InvalidSetupFee(-0.01)
    );
}

#[test]
fn rejects_bad_multiplier_and_names_material() {
    let multipliers = MaterialMultipliers {
        pla: 1.0,
        petg: 0.0,
        resin: 2.0,
    };
    let err = RateTable::new(0.85, 15.0, multipliers).unwrap_err();
    assert_eq!(
        err,
        RateTableError::InvalidMultiplier {
            material: "PETG",
            value: 0.0
        }
    );
    assert!(err.to_string().contains("PETG"));
}

#[test]
fn rejects_decreasing_multipliers() {
    let multipliers = MaterialMultipliers {
        pla: 1.0,
        petg: 2.5,
        resin: 2.0,
    };
    assert!(matches!(
        RateTable::new(0.85, 15.0, multipliers),
        Err(RateTableError::UnorderedMultipliers(_))
    ));
}

// =============================================================================
// SERDE TESTS
// =============================================================================

#[test]
fn json_uses_camel_case_keys() {
    let json = serde_json::to_value(RateTable::default()).unwrap();
    assert_eq!(json["baseRate"], 0.85);
    assert_eq!(json["setupFee"], 15.0);
    assert_eq!(json["multipliers"]["resin"], 2.0);
}

#[test]
fn json_missing_multipliers_uses_defaults() {
    let rates: RateTable = serde_json::from_str(r#"{"baseRate": 0.85, "setupFee": 15.0}"#).unwrap();
    assert_eq!(rates, RateTable::default());
}

#[test]
fn json_is_validated_on_load() {
    let result: Result<RateTable, _> =
        serde_json::from_str(r#"{"baseRate": -2.0, "setupFee": 15.0}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("base rate"));
}

#[test]
fn flat_table_is_material_independent() {
    let flat = RateTable::flat(0.10, 5.0).unwrap();
    assert_eq!(flat.multipliers(), MaterialMultipliers::uniform(1.0));
    assert_eq!(flat.setup_fee(), 5.0);
}
