//! Property-based tests for duration parsing, percentile computation, and
//! line aggregation.

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_seconds_parse_exactly(n in 0u32..1_000_000) {
        let parsed = durstat::duration::parse_duration(&format!("{}s", n)).unwrap();
        prop_assert_eq!(parsed, n as f64);
    }

    #[test]
    fn prop_milliseconds_scale_by_a_thousand(n in 0u32..1_000_000) {
        let parsed = durstat::duration::parse_duration(&format!("{}ms", n)).unwrap();
        prop_assert_eq!(parsed, n as f64 * 0.001);
    }

    #[test]
    fn prop_microseconds_scale_by_a_million(n in 0u32..1_000_000) {
        let parsed = durstat::duration::parse_duration(&format!("{}µs", n)).unwrap();
        prop_assert_eq!(parsed, n as f64 * 0.000_001);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_parse_duration_never_panics(input in ".*") {
        // Property: arbitrary input yields Ok or Err, never a panic
        let _ = durstat::duration::parse_duration(&input);
    }

    #[test]
    fn prop_parse_line_never_panics(input in ".*") {
        let _ = durstat::aggregator::parse_line(&input);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_percentile_bounded_by_min_and_max(
        mut samples in prop::collection::vec(0.0f64..1_000_000.0, 1..100),
        p in 0.0f64..=100.0,
    ) {
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let value = durstat::stats::percentile(&samples, p);

        prop_assert!(value >= samples[0]);
        prop_assert!(value <= samples[samples.len() - 1]);
    }

    #[test]
    fn prop_percentile_monotone_in_p(
        mut samples in prop::collection::vec(0.0f64..1_000_000.0, 2..100),
        p1 in 0.0f64..=100.0,
        p2 in 0.0f64..=100.0,
    ) {
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };

        prop_assert!(
            durstat::stats::percentile(&samples, lo)
                <= durstat::stats::percentile(&samples, hi)
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_blank_lines_do_not_change_summaries(
        components in prop::collection::vec("[a-z]{3,8}", 1..20),
        millis in prop::collection::vec(1u32..100_000, 1..20),
    ) {
        use std::io::Cursor;

        let count = components.len().min(millis.len());
        let mut plain = String::new();
        let mut padded = String::from("\n");
        for i in 0..count {
            let line = format!("{}:{}ms\n", components[i], millis[i]);
            plain.push_str(&line);
            padded.push_str(&line);
            padded.push('\n');
        }

        let from_plain = durstat::aggregator::aggregate(Cursor::new(plain)).unwrap();
        let from_padded = durstat::aggregator::aggregate(Cursor::new(padded)).unwrap();

        prop_assert_eq!(from_plain.summaries(), from_padded.summaries());
    }

    #[test]
    fn prop_aggregate_accepts_any_valid_lines(
        components in prop::collection::vec("[a-z]{3,8}", 1..20),
        millis in prop::collection::vec(1u32..100_000, 1..20),
    ) {
        use std::io::Cursor;

        let count = components.len().min(millis.len());
        let mut input = String::new();
        for i in 0..count {
            input.push_str(&format!("{}:{}ms\n", components[i], millis[i]));
        }

        let tracker = durstat::aggregator::aggregate(Cursor::new(input)).unwrap();
        prop_assert!(!tracker.is_empty());
        prop_assert!(tracker.component_count() <= count);
    }
}
