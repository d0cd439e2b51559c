/// Five-number summary plus mean for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub mean: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Computes summary statistics over an unordered sample. Quartiles use the
/// nearest-rank index floor(n * p) on the sorted copy, so q3 of a 4-element
/// sample equals its max. Returns None for an empty sample so callers can
/// distinguish "no data" from a legitimate zero.
pub fn summary_stats(values: &[f64]) -> Option<SummaryStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let at_rank = |p: f64| sorted[((n as f64 * p).floor() as usize).min(n - 1)];

    Some(SummaryStats {
        mean: sorted.iter().sum::<f64>() / n as f64,
        min: sorted[0],
        q1: at_rank(0.25),
        median: at_rank(0.5),
        q3: at_rank(0.75),
        max: sorted[n - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_sample_has_no_stats() {
        assert_eq!(summary_stats(&[]), None);
    }

    #[test]
    fn test_nearest_rank_quartiles() {
        let stats = summary_stats(&[40.0, 10.0, 30.0, 20.0]).expect("stats");
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.q1, 20.0);
        assert_eq!(stats.median, 30.0);
        // floor(4 * 0.75) = 3, the last element.
        assert_eq!(stats.q3, 40.0);
        assert_eq!(stats.max, 40.0);
        assert_eq!(stats.mean, 25.0);
    }

    #[test]
    fn test_single_value_collapses_to_itself() {
        let stats = summary_stats(&[7.5]).expect("stats");
        assert_eq!(stats.min, 7.5);
        assert_eq!(stats.q1, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.q3, 7.5);
        assert_eq!(stats.max, 7.5);
        assert_eq!(stats.mean, 7.5);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = summary_stats(&[5.0, 1.0, 3.0, 2.0, 4.0]).expect("stats");
        let b = summary_stats(&[1.0, 2.0, 3.0, 4.0, 5.0]).expect("stats");
        assert_eq!(a, b);
        assert_eq!(a.median, 3.0);
        assert_eq!(a.q1, 2.0);
        assert_eq!(a.q3, 4.0);
    }
}
