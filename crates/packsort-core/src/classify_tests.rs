//! Tests for the classification rules.

use crate::classify::*;
use crate::error::PackSortError;
use crate::Category;

// ============================================================================
// Decision table
// ============================================================================

#[test]
fn test_standard_when_neither_bulky_nor_heavy() {
    assert_eq!(
        classify(50.0, 50.0, 50.0, 10.0).unwrap(),
        Category::Standard
    );
}

#[test]
fn test_special_when_bulky_by_dimension() {
    assert_eq!(
        classify(150.0, 20.0, 20.0, 15.0).unwrap(),
        Category::Special
    );
}

#[test]
fn test_special_when_bulky_by_volume() {
    // 100 * 100 * 100 = 1,000,000 cm³, exactly at the threshold
    assert_eq!(
        classify(100.0, 100.0, 100.0, 10.0).unwrap(),
        Category::Special
    );
}

#[test]
fn test_special_when_heavy_only() {
    // Volume 27,000 cm³ is well under the threshold
    assert_eq!(classify(30.0, 30.0, 30.0, 25.0).unwrap(), Category::Special);
}

#[test]
fn test_rejected_when_bulky_and_heavy() {
    assert_eq!(
        classify(200.0, 100.0, 50.0, 30.0).unwrap(),
        Category::Rejected
    );
}

#[test]
fn test_volume_dominates_when_all_dimensions_below_threshold() {
    // 149³ ≈ 3.31M cm³ makes this bulky even though every dimension is
    // below 150 and the mass is below 20.
    assert_eq!(
        classify(149.0, 149.0, 149.0, 19.9).unwrap(),
        Category::Special
    );
}

// ============================================================================
// Boundary inclusivity
// ============================================================================

#[test]
fn test_mass_threshold_is_inclusive() {
    assert_eq!(classify(10.0, 10.0, 10.0, 20.0).unwrap(), Category::Special);
    assert_eq!(
        classify(10.0, 10.0, 10.0, 19.999).unwrap(),
        Category::Standard
    );
}

#[test]
fn test_dimension_threshold_is_inclusive_on_every_axis() {
    assert_eq!(classify(150.0, 1.0, 1.0, 1.0).unwrap(), Category::Special);
    assert_eq!(classify(1.0, 150.0, 1.0, 1.0).unwrap(), Category::Special);
    assert_eq!(classify(1.0, 1.0, 150.0, 1.0).unwrap(), Category::Special);
    assert_eq!(
        classify(149.999, 1.0, 1.0, 1.0).unwrap(),
        Category::Standard
    );
}

#[test]
fn test_volume_threshold_is_inclusive() {
    // 100 * 100 * 99.99 = 999,900 cm³, just under
    assert_eq!(
        classify(100.0, 100.0, 99.99, 1.0).unwrap(),
        Category::Standard
    );
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_zero_input_is_invalid() {
    for (w, h, l, m) in [
        (0.0, 10.0, 10.0, 10.0),
        (10.0, 0.0, 10.0, 10.0),
        (10.0, 10.0, 0.0, 10.0),
        (10.0, 10.0, 10.0, 0.0),
    ] {
        let err = classify(w, h, l, m).unwrap_err();
        assert!(matches!(err, PackSortError::InvalidInput(_)));
    }
}

#[test]
fn test_negative_input_is_invalid() {
    let err = classify(-1.0, 10.0, 10.0, 10.0).unwrap_err();
    assert!(matches!(err, PackSortError::InvalidInput(_)));
}

#[test]
fn test_non_finite_input_is_invalid() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = classify(10.0, 10.0, 10.0, value).unwrap_err();
        assert!(matches!(err, PackSortError::InvalidInput(_)));
    }
}

#[test]
fn test_invalid_input_message_names_the_field() {
    let err = classify(10.0, -2.0, 10.0, 10.0).unwrap_err();
    assert_eq!(err.to_string(), "Invalid input: height must be positive, got -2");
}

// ============================================================================
// Analysis
// ============================================================================

#[test]
fn test_analyze_reports_derived_metrics() {
    let analysis = analyze(&crate::Package::new(200.0, 100.0, 50.0, 30.0)).unwrap();
    assert_eq!(analysis.volume, 1_000_000.0);
    assert!(analysis.is_bulky);
    assert!(analysis.is_heavy);
    assert_eq!(analysis.category, Category::Rejected);
}

#[test]
fn test_classify_is_deterministic() {
    let first = classify(120.0, 80.0, 60.0, 18.0).unwrap();
    for _ in 0..10 {
        assert_eq!(classify(120.0, 80.0, 60.0, 18.0).unwrap(), first);
    }
}
