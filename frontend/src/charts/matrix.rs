use std::collections::BTreeMap;

/// Strength bucket for one correlation coefficient. Thresholds are inclusive
/// lower bounds checked strongest-first: >= 0.7, >= 0.3, >= -0.3, >= -0.7,
/// else strong negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBucket {
    StrongPositive,
    ModeratePositive,
    Weak,
    ModerateNegative,
    StrongNegative,
}

impl ColorBucket {
    pub fn from_coefficient(value: f64) -> Self {
        if value >= 0.7 {
            ColorBucket::StrongPositive
        } else if value >= 0.3 {
            ColorBucket::ModeratePositive
        } else if value >= -0.3 {
            ColorBucket::Weak
        } else if value >= -0.7 {
            ColorBucket::ModerateNegative
        } else {
            ColorBucket::StrongNegative
        }
    }

    /// Fill color for a heatmap bar; stronger relationships are more opaque.
    pub fn fill_rgba(&self) -> &'static str {
        match self {
            ColorBucket::StrongPositive => "rgba(34, 197, 94, 0.8)",
            ColorBucket::ModeratePositive => "rgba(59, 130, 246, 0.6)",
            ColorBucket::Weak => "rgba(234, 179, 8, 0.4)",
            ColorBucket::ModerateNegative => "rgba(239, 68, 68, 0.6)",
            ColorBucket::StrongNegative => "rgba(239, 68, 68, 0.8)",
        }
    }
}

/// One row of a flattened correlation matrix: the coefficients of `category`
/// against every axis column, in axis order, each tagged with its bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDataset {
    pub category: String,
    pub coefficients: Vec<f64>,
    pub buckets: Vec<ColorBucket>,
}

/// Flattens a nested column-keyed matrix into per-category datasets aligned
/// to `axis`. Missing cells read as 0.0, which lands in the weak bucket.
pub fn flatten_matrix(
    matrix: &BTreeMap<String, BTreeMap<String, f64>>,
    axis: &[String],
) -> Vec<MatrixDataset> {
    axis.iter()
        .map(|category| {
            let row = matrix.get(category);
            let coefficients: Vec<f64> = axis
                .iter()
                .map(|column| {
                    row.and_then(|r| r.get(column))
                        .copied()
                        .unwrap_or(0.0)
                })
                .collect();
            let buckets = coefficients
                .iter()
                .map(|&c| ColorBucket::from_coefficient(c))
                .collect();
            MatrixDataset {
                category: category.clone(),
                coefficients,
                buckets,
            }
        })
        .collect()
}
