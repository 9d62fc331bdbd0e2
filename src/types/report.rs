//! Score report structures
//!
//! Everything here is plain data returned to the caller. Field names are
//! camelCase on the wire to match what the surrounding layers store.

use serde::{Deserialize, Serialize};

use crate::types::{CommitmentStrength, Dimension, Grade, InvestorReadiness, ResilienceLevel};

/// Common view over the six dimension results
pub trait DimensionResult {
    fn dimension(&self) -> Dimension;
    fn total(&self) -> u32;
    fn grade(&self) -> Grade;
    fn feedback(&self) -> &[String];
}

macro_rules! impl_dimension_result {
    ($ty:ty, $dimension:expr) => {
        impl DimensionResult for $ty {
            fn dimension(&self) -> Dimension {
                $dimension
            }
            fn total(&self) -> u32 {
                self.total
            }
            fn grade(&self) -> Grade {
                self.grade
            }
            fn feedback(&self) -> &[String] {
                &self.feedback
            }
        }
    };
}

// =============================================================================
// FOUNDER DIMENSIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemFitScore {
    pub total: u32,
    pub breakdown: ProblemFitBreakdown,
    pub feedback: Vec<String>,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemFitBreakdown {
    pub problem_origin: u32,
    pub unique_advantage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUnderstandingScore {
    pub total: u32,
    pub breakdown: CustomerUnderstandingBreakdown,
    pub feedback: Vec<String>,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUnderstandingBreakdown {
    pub customer_evidence: u32,
    pub failed_assumptions: u32,
    pub commitment: CommitmentStrength,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionScore {
    pub total: u32,
    pub breakdown: ExecutionBreakdown,
    pub feedback: Vec<String>,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionBreakdown {
    pub iteration_speed: u32,
    pub measurement_rigor: u32,
    pub learning_depth: u32,
    pub action_taken: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRealismScore {
    pub total: u32,
    pub breakdown: MarketRealismBreakdown,
    pub metrics: MarketMetrics,
    pub feedback: Vec<String>,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRealismBreakdown {
    pub outreach_realism: u32,
    pub conversion_realism: u32,
    pub revenue_potential: u32,
    pub validation: u32,
}

/// Derived unit economics; informational, not scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMetrics {
    pub projected_revenue: f64,
    /// `None` when no outreach is planned
    pub revenue_per_conversation: Option<f64>,
    pub customer_count: f64,
    pub lifetime_value: f64,
    pub ltv_cac_ratio: f64,
    pub daily_conversations: f64,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResilienceScore {
    pub total: u32,
    pub breakdown: ResilienceBreakdown,
    pub level: ResilienceLevel,
    pub feedback: Vec<String>,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResilienceBreakdown {
    pub adversity: u32,
    pub quit_scale: u32,
    pub motivation: u32,
}

// =============================================================================
// STARTUP PROFILE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupScore {
    pub total: u32,
    pub breakdown: StartupBreakdown,
    pub feedback: Vec<String>,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupBreakdown {
    pub problem_solution: u32,
    pub market: u32,
    pub traction: u32,
    pub business_model: u32,
}

impl_dimension_result!(ProblemFitScore, Dimension::ProblemFit);
impl_dimension_result!(CustomerUnderstandingScore, Dimension::CustomerUnderstanding);
impl_dimension_result!(ExecutionScore, Dimension::Execution);
impl_dimension_result!(MarketRealismScore, Dimension::MarketRealism);
impl_dimension_result!(ResilienceScore, Dimension::Resilience);
impl_dimension_result!(StartupScore, Dimension::StartupProfile);

// =============================================================================
// REPORT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderScore {
    /// Sum of the five founder dimensions (max 800)
    pub total: u32,
    pub breakdown: FounderBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderBreakdown {
    pub problem_fit: ProblemFitScore,
    pub customer_understanding: CustomerUnderstandingScore,
    pub execution: ExecutionScore,
    pub market_realism: MarketRealismScore,
    pub resilience: ResilienceScore,
}

/// Final, immutable output of one scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// 0-1000
    pub total_score: u32,
    /// 0-95, static formula over `total_score`
    pub percentile: u8,
    pub grade: Grade,
    pub founder_score: FounderScore,
    pub startup_score: StartupScore,
    pub overall_feedback: Vec<String>,
    pub investor_readiness: InvestorReadiness,
}

impl ScoreReport {
    /// All six dimension results in report order
    pub fn dimensions(&self) -> [&dyn DimensionResult; 6] {
        let founder = &self.founder_score.breakdown;
        [
            &founder.problem_fit,
            &founder.customer_understanding,
            &founder.execution,
            &founder.market_realism,
            &founder.resilience,
            &self.startup_score,
        ]
    }
}
