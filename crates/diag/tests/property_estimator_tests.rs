//! Property-based tests for duration parsing, ETA formatting, and the
//! Discover URL encoder.
//!
//! # Test Coverage
//! - `parse_time_millis` suffix multipliers and its fall-back-to-zero
//!   contract on arbitrary junk
//! - `format_eta` unit selection at the bucket boundaries
//! - Recovery estimates staying finite and non-negative
//! - Discover URLs remaining structurally parseable for arbitrary query
//!   input
//!
//! # Invariants
//! - None of the functions under test may panic, whatever the input.
//! - An encoded Discover fragment keeps exactly two `&` and three `=`
//!   separators; user input can never smuggle more in.

use proptest::prelude::*;

use opensearch_client::models::RecoveryEntry;
use opensearch_diag::recovery::{format_eta, parse_time_millis};
use opensearch_diag::{DiscoverUrlParams, ShardProgress, build_discover_url};

fn entry(time: &str, bytes_total: u64, bytes_recovered: u64) -> RecoveryEntry {
    serde_json::from_value(serde_json::json!({
        "index": "logs",
        "shard": "0",
        "time": time,
        "bytes_total": bytes_total,
        "bytes_recovered": bytes_recovered,
    }))
    .unwrap()
}

/// Letters that cannot combine into `inf`, `nan`, or digits, so a suffixed
/// string built from them never parses as a float.
const UNPARSEABLE: &str = "[abcdefghjklmopqrstuvwxyz]{1,8}";

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        ..ProptestConfig::default()
    })]

    /// Each supported suffix applies its multiplier to the magnitude.
    #[test]
    fn suffix_multipliers(magnitude in 0.0f64..10_000.0) {
        prop_assert_eq!(parse_time_millis(&format!("{magnitude}ms")), magnitude);
        prop_assert_eq!(parse_time_millis(&format!("{magnitude}s")), magnitude * 1_000.0);
        prop_assert_eq!(parse_time_millis(&format!("{magnitude}m")), magnitude * 60.0 * 1_000.0);
        prop_assert_eq!(
            parse_time_millis(&format!("{magnitude}h")),
            magnitude * 60.0 * 60.0 * 1_000.0
        );
    }

    /// Bare numbers carry no unit and read as zero elapsed time.
    #[test]
    fn bare_numbers_read_as_zero(number in 0u64..10_000_000) {
        prop_assert_eq!(parse_time_millis(&number.to_string()), 0.0);
    }

    /// Junk magnitudes read as zero instead of failing.
    #[test]
    fn junk_reads_as_zero(junk in UNPARSEABLE) {
        prop_assert_eq!(parse_time_millis(&junk), 0.0);
        prop_assert_eq!(parse_time_millis(&format!("{junk}s")), 0.0);
        prop_assert_eq!(parse_time_millis(&format!("{junk}ms")), 0.0);
    }

    /// Parsing never panics, whatever the column holds.
    #[test]
    fn parsing_never_panics(raw in ".*") {
        let _ = parse_time_millis(&raw);
    }

    /// ETA rendering picks seconds, minutes, or hours by magnitude.
    #[test]
    fn eta_unit_selection(seconds in 0.0f64..1_000_000.0) {
        let rendered = format_eta(seconds);

        if seconds < 60.0 {
            prop_assert!(rendered.ends_with(" seconds"), "{rendered}");
        } else if seconds < 3600.0 {
            prop_assert!(rendered.ends_with(" minutes"), "{rendered}");
        } else {
            prop_assert!(rendered.ends_with(" hours"), "{rendered}");
        }
    }

    /// Estimates exist exactly when bytes moved over a nonzero elapsed
    /// time, and an estimate is always finite and non-negative.
    #[test]
    fn estimate_presence_and_bounds(
        elapsed_secs in 0u32..100_000,
        bytes_total in 0u64..u64::MAX / 2,
        bytes_recovered in 0u64..u64::MAX / 2,
    ) {
        let progress = ShardProgress::from(&entry(
            &format!("{elapsed_secs}s"),
            bytes_total,
            bytes_recovered,
        ));

        let should_estimate = bytes_recovered > 0 && elapsed_secs > 0;
        prop_assert_eq!(progress.estimate.is_some(), should_estimate);

        if let Some(estimate) = progress.estimate {
            prop_assert!(estimate.mb_per_sec > 0.0);
            prop_assert!(estimate.mb_per_sec.is_finite());
            prop_assert!(estimate.eta_seconds >= 0.0);
            prop_assert!(estimate.eta_seconds.is_finite());
        }
    }

    /// The progress report always renders without panicking and always
    /// carries a Rate line.
    #[test]
    fn progress_report_always_renders(
        elapsed_secs in 0u32..100_000,
        bytes_total in 0u64..u64::MAX / 2,
        bytes_recovered in 0u64..u64::MAX / 2,
    ) {
        let progress = ShardProgress::from(&entry(
            &format!("{elapsed_secs}s"),
            bytes_total,
            bytes_recovered,
        ));

        let report = progress.to_string();
        prop_assert!(report.contains("Rate: "));
        prop_assert!(report.ends_with('\n'));
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    /// Arbitrary query text cannot break the fragment structure: the
    /// parameter separators stay countable and the parameters ordered.
    #[test]
    fn discover_fragment_stays_structured(query in ".*", pattern_id in "[a-z0-9-]{1,20}") {
        let url = build_discover_url(
            "https://dash.example.com",
            &DiscoverUrlParams {
                query,
                index_pattern_id: pattern_id,
                from_time: "now-15m".to_string(),
                to_time: "now".to_string(),
            },
        );

        let (_, fragment) = url.split_once("#?").unwrap();

        prop_assert_eq!(fragment.matches('&').count(), 2);
        prop_assert_eq!(fragment.matches('=').count(), 3);

        let g = fragment.find("_g=").unwrap();
        let q = fragment.find("&_q=").unwrap();
        let a = fragment.find("&_a=").unwrap();
        prop_assert!(g < q && q < a);
    }

    /// Every fragment byte is either a kept-safe character or part of a
    /// percent escape; raw spaces, quotes, and bangs never survive.
    #[test]
    fn discover_fragment_is_encoded(query in ".*") {
        let url = build_discover_url(
            "https://dash.example.com",
            &DiscoverUrlParams {
                query,
                index_pattern_id: "abc-123".to_string(),
                from_time: "now-15m".to_string(),
                to_time: "now".to_string(),
            },
        );

        let (_, fragment) = url.split_once("#?").unwrap();

        for c in fragment.chars() {
            prop_assert!(
                c.is_ascii_alphanumeric() || "-._~(),:+%&=".contains(c),
                "unexpected character {c:?} in fragment"
            );
        }
    }
}
