use serde::{Deserialize, Serialize};
use validator::Validate;

/// One candidate strategy for the comparison chart. Not fetched: the
/// planning view passes these straight through to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StrategyDto {
    pub name: String,
    pub estimated_profit: f64,
    pub estimated_cost: f64,
    pub estimated_revenue: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
}
