/// Running totals *before* each step: element i is the sum of values[..i],
/// so the first element is always 0.0 and the final post-step total is
/// cumulative[n-1] + values[n-1]. Waterfall bars are anchored at these
/// pre-step baselines.
pub fn cumulative(values: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    values
        .iter()
        .map(|value| {
            let before = total;
            total += value;
            before
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_totals_are_pre_step() {
        assert_eq!(cumulative(&[100.0, -30.0, 50.0]), vec![0.0, 100.0, 70.0]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(cumulative(&[]), Vec::<f64>::new());
    }

    #[test]
    fn test_first_baseline_is_zero() {
        assert_eq!(cumulative(&[-250.0]), vec![0.0]);
    }
}
