use crate::charts::cumulative::cumulative;
use crate::charts::stats::summary_stats;

/// Which tooltip treatment a chart gets. The engine resolves a hover into a
/// `TooltipPoint` and calls `format_tooltip`; `Default` keeps the charting
/// library's built-in tooltip.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipKind {
    Default,
    /// "`prefix`: $1,234.56"
    Currency { prefix: String },
    /// Slice value with its share of the dataset total.
    Share,
    /// Correlation coefficient to three decimals.
    Coefficient,
    /// Both coordinates of a scatter point on one line.
    ScatterPoint { x_label: String, y_label: String },
    /// Full summary statistics recomputed from the raw sample per category.
    Summary { samples: Vec<Vec<f64>> },
    /// Signed step value plus the running total after the step.
    RunningTotal { label: String },
}

/// A resolved hover target, independent of the charting library's context
/// object. `value` is the primary parsed coordinate (y, or x on horizontal
/// charts); `dataset_values` are the dataset's current numbers, read live so
/// refreshed data keeps tooltips honest.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPoint {
    pub dataset_label: String,
    pub label: String,
    pub index: usize,
    pub x: f64,
    pub value: f64,
    pub dataset_values: Vec<f64>,
}

/// One output string per tooltip line.
pub fn format_tooltip(kind: &TooltipKind, point: &TooltipPoint) -> Vec<String> {
    match kind {
        TooltipKind::Default => Vec::new(),
        TooltipKind::Currency { prefix } => {
            vec![format!("{}: {}", prefix, format_money(point.value))]
        }
        TooltipKind::Share => {
            let total: f64 = point.dataset_values.iter().sum();
            let percentage = if total > 0.0 {
                point.value / total * 100.0
            } else {
                0.0
            };
            vec![format!(
                "{}: {} ({:.2}%)",
                point.label,
                format_count(point.value),
                percentage
            )]
        }
        TooltipKind::Coefficient => {
            vec![format!("{}: {:.3}", point.dataset_label, point.value)]
        }
        TooltipKind::ScatterPoint { x_label, y_label } => {
            vec![format!(
                "{}: {}°C, {}: {}",
                x_label, point.x, y_label, point.value
            )]
        }
        TooltipKind::Summary { samples } => {
            let values = samples.get(point.index).map(Vec::as_slice).unwrap_or(&[]);
            match summary_stats(values) {
                None => vec!["No data".to_string()],
                Some(stats) => vec![
                    format!("Mean: ${:.2}", stats.mean),
                    format!("Min: ${:.2}", stats.min),
                    format!("Q1: ${:.2}", stats.q1),
                    format!("Median: ${:.2}", stats.median),
                    format!("Q3: ${:.2}", stats.q3),
                    format!("Max: ${:.2}", stats.max),
                ],
            }
        }
        TooltipKind::RunningTotal { label } => {
            let step = point.value;
            let before = cumulative(&point.dataset_values)
                .get(point.index)
                .copied()
                .unwrap_or(0.0);
            vec![
                format!("{}: {}", label, format_money(step)),
                format!("Cumulative: {}", format_money(before + step)),
            ]
        }
    }
}

/// "$1,234.56" with a leading minus for negative amounts.
pub fn format_money(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}", sign, grouped(value.abs(), 2))
}

/// Grouped integer display for counts; keeps up to two decimals when the
/// value is fractional.
fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        grouped(value, 0)
    } else {
        grouped(value, 2)
    }
}

fn grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn point(value: f64, index: usize, dataset_values: Vec<f64>) -> TooltipPoint {
        TooltipPoint {
            dataset_label: "Sales".to_string(),
            label: "Europe".to_string(),
            index,
            x: 0.0,
            value,
            dataset_values,
        }
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-950.5), "-$950.50");
    }

    #[test]
    fn test_currency_line() {
        let kind = TooltipKind::Currency {
            prefix: "Sales".to_string(),
        };
        assert_eq!(
            format_tooltip(&kind, &point(15000.0, 0, vec![])),
            vec!["Sales: $15,000.00"]
        );
    }

    #[test]
    fn test_share_percentage_of_dataset_total() {
        let lines = format_tooltip(&TooltipKind::Share, &point(30.0, 0, vec![30.0, 70.0]));
        assert_eq!(lines, vec!["Europe: 30 (30.00%)"]);
    }

    #[test]
    fn test_share_with_zero_total() {
        let lines = format_tooltip(&TooltipKind::Share, &point(0.0, 0, vec![0.0, 0.0]));
        assert_eq!(lines, vec!["Europe: 0 (0.00%)"]);
    }

    #[test]
    fn test_coefficient_three_decimals() {
        let lines = format_tooltip(&TooltipKind::Coefficient, &point(0.4226, 1, vec![]));
        assert_eq!(lines, vec!["Sales: 0.423"]);
    }

    #[test]
    fn test_scatter_line() {
        let kind = TooltipKind::ScatterPoint {
            x_label: "Temperature".to_string(),
            y_label: "Late rate".to_string(),
        };
        let mut p = point(0.12, 0, vec![]);
        p.x = 21.5;
        assert_eq!(
            format_tooltip(&kind, &p),
            vec!["Temperature: 21.5°C, Late rate: 0.12"]
        );
    }

    #[test]
    fn test_summary_lines_from_raw_sample() {
        let kind = TooltipKind::Summary {
            samples: vec![vec![40.0, 10.0, 30.0, 20.0]],
        };
        let lines = format_tooltip(&kind, &point(25.0, 0, vec![25.0]));
        assert_eq!(
            lines,
            vec![
                "Mean: $25.00",
                "Min: $10.00",
                "Q1: $20.00",
                "Median: $30.00",
                "Q3: $40.00",
                "Max: $40.00",
            ]
        );
    }

    #[test]
    fn test_summary_without_observations() {
        let kind = TooltipKind::Summary {
            samples: vec![vec![]],
        };
        assert_eq!(
            format_tooltip(&kind, &point(0.0, 0, vec![0.0])),
            vec!["No data"]
        );
    }

    #[test]
    fn test_running_total_shows_post_step_sum() {
        let kind = TooltipKind::RunningTotal {
            label: "Profit".to_string(),
        };
        let values = vec![100.0, -30.0, 50.0];
        let lines = format_tooltip(&kind, &point(-30.0, 1, values));
        assert_eq!(lines, vec!["Profit: -$30.00", "Cumulative: $70.00"]);
    }
}
