use super::*;
use approx::assert_relative_eq;

fn canonical() -> RateTable {
    RateTable::default()
}

#[test]
fn test_resin_unit_volume() {
    let q = quote(1.0, MaterialProfile::Resin, &canonical()).unwrap();
    assert_eq!(q.total_price(), 16.7);
    assert_eq!(q.total_minor_units(), 1670);
    assert_eq!(q.multiplier(), 2.0);
    assert!(q.material_fallback().is_none());
}

#[test]
fn test_zero_volume_is_setup_fee() {
    for material in MaterialProfile::ALL {
        let q = quote(0.0, material, &canonical()).unwrap();
        assert_eq!(q.total_price(), 15.0);
        assert_eq!(q.total_minor_units(), 1500);
    }
}

#[test]
fn test_petg_ten_cm3() {
    let q = quote(10.0, MaterialProfile::Petg, &canonical()).unwrap();
    assert_relative_eq!(q.total_price(), 27.75, epsilon = 1e-9);
    assert_eq!(q.total_minor_units(), 2775);
}

#[test]
fn test_total_never_below_setup_fee() {
    let rates = canonical();
    for volume in [0.0, 1e-9, 0.001, 0.3, 12.0] {
        let q = quote(volume, MaterialProfile::Pla, &rates).unwrap();
        assert!(q.total_price() >= rates.setup_fee());
    }
}

#[test]
fn test_monotonic_in_volume() {
    let rates = canonical();
    for material in MaterialProfile::ALL {
        let mut previous = 0.0;
        for step in 0..2000 {
            let volume = f64::from(step) * 0.0137;
            let total = quote(volume, material, &rates).unwrap().total_price();
            assert!(total >= previous, "{material} dropped at {volume}");
            previous = total;
        }
    }
}

#[test]
fn test_materials_ordered_by_price() {
    let rates = canonical();
    for volume in [0.5, 3.0, 250.0] {
        let pla = quote(volume, MaterialProfile::Pla, &rates).unwrap();
        let petg = quote(volume, MaterialProfile::Petg, &rates).unwrap();
        let resin = quote(volume, MaterialProfile::Resin, &rates).unwrap();
        assert!(pla.total_price() <= petg.total_price());
        assert!(petg.total_price() <= resin.total_price());
    }
}

#[test]
fn test_invalid_volume_rejected() {
    for volume in [f64::NAN, f64::INFINITY, -1.0, -1e-12] {
        let err = quote(volume, MaterialProfile::Pla, &canonical()).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidVolume(_)));
    }
}

#[test]
fn test_fallback_is_recorded() {
    let q = quote(2.0, MaterialSelection::resolve("nylon"), &canonical()).unwrap();
    assert_eq!(q.material(), MaterialProfile::Pla);
    assert_eq!(q.material_fallback().unwrap().key, "nylon");
    assert_eq!(
        q.total_price(),
        quote(2.0, MaterialProfile::Pla, &canonical())
            .unwrap()
            .total_price()
    );
}

#[test]
fn test_flat_rate_table() {
    let flat = RateTable::flat(0.10, 5.0).unwrap();
    let pla = quote(10.0, MaterialProfile::Pla, &flat).unwrap();
    let resin = quote(10.0, MaterialProfile::Resin, &flat).unwrap();
    assert_eq!(pla.total_price(), 6.0);
    assert_eq!(resin.total_price(), pla.total_price());
}

#[test]
fn test_round_half_away_from_zero() {
    assert_eq!(round_price(0.125), 0.13);
    assert_eq!(round_price(-0.125), -0.13);
    assert_eq!(round_price(15.0), 15.0);
}

#[test]
fn test_minor_units_are_idempotent_on_rounded_totals() {
    for cents in [0i64, 1, 99, 1670, 123_456] {
        let amount = round_price(cents as f64 / 100.0);
        assert_eq!(to_minor_units(amount), Some(cents));
    }
}

#[test]
fn test_print_estimate_labels() {
    assert_eq!(PrintEstimate::for_volume(0.0).to_string(), "0h 0m");
    assert_eq!(PrintEstimate::for_volume(24.5).to_string(), "1h 1m");
    assert_eq!(PrintEstimate::for_volume(100.0).to_string(), "4h 10m");
    assert_eq!(PrintEstimate::for_volume(2.0).minutes(), 5.0);
}

#[test]
fn test_serializes_camel_case() {
    let q = quote(1.0, MaterialProfile::Resin, &canonical()).unwrap();
    let json = serde_json::to_value(&q).unwrap();
    assert_eq!(json["volumeCm3"], 1.0);
    assert_eq!(json["material"], "RESIN");
    assert_eq!(json["totalPrice"], 16.7);
    assert!(json.get("materialFallback").is_none());

    let fallback = quote(1.0, MaterialSelection::resolve("abs"), &canonical()).unwrap();
    let json = serde_json::to_value(&fallback).unwrap();
    assert_eq!(json["materialFallback"]["key"], "abs");
}

#[test]
fn test_unrepresentable_total_is_rejected() {
    // 1e18 cm³ prices at 8.5e17, i.e. 8.5e19 cents
    let err = quote(1.0e18, MaterialProfile::Pla, &canonical()).unwrap_err();
    assert!(matches!(err, QuoteError::AmountOutOfRange(total) if total > 8.0e17));

    for amount in [f64::NAN, f64::INFINITY, 9.3e16, -9.3e16] {
        assert_eq!(to_minor_units(amount), None, "{amount} converted");
    }
}

#[test]
fn test_large_representable_total_is_exact() {
    let q = quote(1.0e15, MaterialProfile::Pla, &canonical()).unwrap();
    assert_eq!(q.total_minor_units() as f64, (q.total_price() * 100.0).round());
}
