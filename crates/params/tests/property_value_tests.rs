//! Property tests for the textual value codec.

use std::collections::HashMap;

use proptest::prelude::*;
use termkit_params::{Parameter, ParameterValue, ResolvedParameters};

proptest! {
    #[test]
    fn prop_i64_round_trips(value in any::<i64>()) {
        prop_assert_eq!(i64::from_text(&value.to_text()), Some(value));
    }

    #[test]
    fn prop_u64_round_trips(value in any::<u64>()) {
        prop_assert_eq!(u64::from_text(&value.to_text()), Some(value));
    }

    #[test]
    fn prop_finite_f64_round_trips(value in -1.0e300f64..1.0e300f64) {
        prop_assert_eq!(f64::from_text(&value.to_text()), Some(value));
    }

    #[test]
    fn prop_string_round_trips(value in ".*") {
        prop_assert_eq!(String::from_text(&value.to_text()), Some(value));
    }

    #[test]
    fn prop_char_round_trips(value in any::<char>()) {
        prop_assert_eq!(char::from_text(&value.to_text()), Some(value));
    }

    #[test]
    fn prop_numeric_parsing_tolerates_padding(value in any::<i32>()) {
        let padded = format!("  {value}\t");
        prop_assert_eq!(i32::from_text(&padded), Some(value));
    }

    #[test]
    fn prop_resolution_round_trips_integers(value in any::<i64>()) {
        let count = Parameter::<i64>::argument_named("count");
        let mut raw = HashMap::new();
        raw.insert("count".to_string(), value.to_string());

        let resolved = ResolvedParameters::resolve(&[&count], &raw).unwrap();
        prop_assert_eq!(resolved.require(&count).unwrap(), value);
    }
}

#[test]
fn infinity_round_trips_through_text() {
    assert_eq!(f64::from_text(&f64::INFINITY.to_text()), Some(f64::INFINITY));
    assert_eq!(
        f64::from_text(&f64::NEG_INFINITY.to_text()),
        Some(f64::NEG_INFINITY)
    );
}

#[test]
fn nan_parses_but_never_compares_equal() {
    let parsed = f64::from_text("NaN").unwrap();
    assert!(parsed.is_nan());
}
