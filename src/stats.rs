//! Grouped five-number summary statistics.
//!
//! Partitions `(group key, value)` records by key and computes the quartile
//! summaries the charts and reports are built from. Values are assumed to be
//! well-formed finite numbers; the dataset loader rejects anything else
//! before records reach this module.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::model::FiveNumberSummary;

/// Partition records by group key and compute a five-number summary per
/// group. Input order is irrelevant; empty input yields an empty map.
pub fn group_summaries<'a, I>(records: I) -> BTreeMap<String, FiveNumberSummary>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (key, value) in records {
        groups.entry(key.to_string()).or_default().push(value);
    }

    groups
        .into_iter()
        .map(|(key, mut values)| {
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            (key, summarize_sorted(&values))
        })
        .collect()
}

/// Five-number summary of one sorted, non-empty group.
fn summarize_sorted(sorted: &[f64]) -> FiveNumberSummary {
    FiveNumberSummary {
        min: sorted[0],
        q1: quantile_sorted(sorted, 0.25),
        median: quantile_sorted(sorted, 0.5),
        q3: quantile_sorted(sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }
}

/// Quantile of sorted values by linear interpolation between order
/// statistics: for `q` in [0, 1] the rank is `h = q * (n - 1)` and the
/// result interpolates between `v[floor(h)]` and `v[ceil(h)]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));

    let last = sorted.len() - 1;
    let h = q * last as f64;
    let lo = h.floor() as usize;
    if lo >= last {
        return sorted[last];
    }
    sorted[lo] + (h - lo as f64) * (sorted[lo + 1] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn ten_values_yield_interpolated_quartiles() {
        // Deliberately unsorted; grouping must sort before computing.
        let values = [7.0, 1.0, 10.0, 4.0, 2.0, 9.0, 3.0, 6.0, 8.0, 5.0];
        let summaries = group_summaries(values.iter().map(|v| ("all", *v)));
        let s = summaries["all"];
        assert_close(s.min, 1.0);
        assert_close(s.q1, 3.25);
        assert_close(s.median, 5.5);
        assert_close(s.q3, 7.75);
        assert_close(s.max, 10.0);
    }

    #[test]
    fn single_value_group_repeats_the_value() {
        let summaries = group_summaries([("solo", 42.0)]);
        let s = summaries["solo"];
        for stat in [s.min, s.q1, s.median, s.q3, s.max] {
            assert_close(stat, 42.0);
        }
    }

    #[test]
    fn summaries_are_ordered() {
        let records = [
            ("a", 3.0),
            ("a", 1.0),
            ("a", 2.0),
            ("b", 10.0),
            ("b", -4.0),
            ("b", 7.5),
            ("b", 0.25),
        ];
        for summary in group_summaries(records).values() {
            assert!(summary.min <= summary.q1);
            assert!(summary.q1 <= summary.median);
            assert!(summary.median <= summary.q3);
            assert!(summary.q3 <= summary.max);
        }
    }

    #[test]
    fn grouping_is_stable_under_reordering() {
        let records = vec![
            ("x", 5.0),
            ("y", 2.0),
            ("x", 1.0),
            ("y", 9.0),
            ("x", 3.0),
        ];
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(
            group_summaries(records),
            group_summaries(reversed.into_iter())
        );
    }

    #[test]
    fn one_group_per_distinct_key() {
        let records = [("a", 1.0), ("b", 2.0), ("a", 3.0), ("c", 4.0)];
        assert_eq!(group_summaries(records).len(), 3);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(group_summaries(std::iter::empty::<(&str, f64)>()).is_empty());
    }
}
