use shared::PeriodSeries;

/// Period-aligned series extracted from one or more keyed maps. `labels` is
/// the shared axis; `series[i]` is aligned to it, with 0.0 where source `i`
/// had no entry for a label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    pub series: Vec<Vec<f64>>,
}

impl LabeledSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Builds a shared axis from the first non-empty source, in order, then
/// aligns every source to it. Sources are ordered maps, so the axis comes
/// out sorted ascending. A label missing from a source yields 0.0 rather
/// than a gap; if all sources are empty the result is empty.
pub fn extract_series(sources: &[&PeriodSeries]) -> LabeledSeries {
    let labels: Vec<String> = sources
        .iter()
        .find(|source| !source.is_empty())
        .map(|source| source.keys().cloned().collect())
        .unwrap_or_default();

    let series = sources
        .iter()
        .map(|source| {
            labels
                .iter()
                .map(|label| source.get(label).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();

    LabeledSeries { labels, series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn period_series(entries: &[(&str, f64)]) -> PeriodSeries {
        entries
            .iter()
            .map(|(label, value)| (label.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_axis_comes_from_first_non_empty_source() {
        let empty = PeriodSeries::new();
        let orders = period_series(&[("2024-01", 12.0), ("2024-02", 9.0)]);
        let late = period_series(&[("2024-03", 0.1)]);

        let extracted = extract_series(&[&empty, &orders, &late]);

        assert_eq!(extracted.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(extracted.series[0], vec![0.0, 0.0]);
        assert_eq!(extracted.series[1], vec![12.0, 9.0]);
        // Aligned to the axis, not its own keys: 2024-03 is dropped.
        assert_eq!(extracted.series[2], vec![0.0, 0.0]);
    }

    #[test]
    fn test_missing_labels_fill_with_zero() {
        let sales = period_series(&[("2024-01", 100.0), ("2024-02", 150.0), ("2024-03", 90.0)]);
        let orders = period_series(&[("2024-02", 7.0)]);

        let extracted = extract_series(&[&sales, &orders]);

        assert_eq!(extracted.labels.len(), 3);
        assert_eq!(extracted.series[1], vec![0.0, 7.0, 0.0]);
    }

    #[test]
    fn test_axis_is_sorted_ascending() {
        let sales = period_series(&[("2024-03", 1.0), ("2024-01", 2.0), ("2024-02", 3.0)]);

        let extracted = extract_series(&[&sales]);

        assert_eq!(extracted.labels, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(extracted.series[0], vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_all_sources_empty_yields_empty_result() {
        let empty = PeriodSeries::new();

        let extracted = extract_series(&[&empty, &empty]);

        assert!(extracted.is_empty());
        assert_eq!(extracted.series, vec![Vec::<f64>::new(); 2]);
    }
}
