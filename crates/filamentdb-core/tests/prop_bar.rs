use filamentdb_core::{parse_leading_number, BarOverflow, ProgressBar};
use proptest::prelude::*;

proptest! {
    #[test]
    fn percentage_is_ratio_within_scale(max in 0.001f64..1e6, frac in 0.0f64..=1.0) {
        let value = max * frac;
        let bar = ProgressBar::new(value, max).unwrap();
        let expected = value / max * 100.0;
        prop_assert!((bar.percentage(BarOverflow::Clamp) - expected).abs() < 1e-9);
        prop_assert!((bar.percentage(BarOverflow::Allow) - expected).abs() < 1e-9);
    }

    #[test]
    fn clamp_caps_overflow(max in 0.001f64..1e6, factor in 1.01f64..100.0) {
        let bar = ProgressBar::new(max * factor, max).unwrap();
        prop_assert_eq!(bar.percentage(BarOverflow::Clamp), 100.0);
        prop_assert!(bar.percentage(BarOverflow::Allow) > 100.0);
        prop_assert!(bar.overflows());
    }

    #[test]
    fn non_positive_max_has_no_bar(value in -1e6f64..1e6, max in -1e6f64..=0.0) {
        prop_assert!(ProgressBar::new(value, max).is_none());
    }

    #[test]
    fn leading_number_survives_unit_suffix(n in 0u32..100_000, frac in 0u32..100, unit in "[a-zA-Z/%]{0,6}") {
        let raw = format!("{n}.{frac:02} {unit}");
        let parsed = parse_leading_number(&raw).unwrap();
        let expected: f64 = format!("{n}.{frac:02}").parse().unwrap();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn non_numeric_prefix_never_parses(s in "[a-zA-Z][a-zA-Z0-9 ]{0,12}") {
        prop_assert_eq!(parse_leading_number(&s), None);
    }
}

#[test]
fn sentinels_never_parse() {
    for s in ["N/A", "n/a", "NA", "/", "-", "", "   "] {
        assert_eq!(parse_leading_number(s), None, "{s:?}");
    }
}
