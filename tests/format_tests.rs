//! Display formatting around the fixed-point/exponential boundaries
use energy_density::{format_result, should_show_scientific};

#[test]
fn test_lower_boundary() {
    assert_eq!(format_result(0.0005), "5.0000e-4");
    assert!(should_show_scientific(0.0005));

    assert_eq!(format_result(0.001), "0.001000");
    assert!(!should_show_scientific(0.001));
}

#[test]
fn test_upper_boundary() {
    assert_eq!(format_result(999_999.0), "999999.000000");
    assert!(!should_show_scientific(999_999.0));

    assert_eq!(format_result(1_000_000.0), "1.0000e+6");
    assert!(should_show_scientific(1_000_000.0));
}

#[test]
fn test_negative_values_use_magnitude() {
    assert_eq!(format_result(-0.5), "-0.500000");
    assert_eq!(format_result(-2.5e7), "-2.5000e+7");
}

#[test]
fn test_predicate_agrees_with_format() {
    for value in [1e-12, 4.2e-4, 1e-3, 0.25, 1.0, 9296.9, 999_999.9, 1e6, 3.3e20] {
        let formatted = format_result(value);
        assert_eq!(
            should_show_scientific(value),
            formatted.contains('e'),
            "mismatch for {value}: {formatted}"
        );
    }
}

#[test]
fn test_tiny_energy_density() {
    assert_eq!(format_result(4.4270939088e-10), "4.4271e-10");
}
