//! Core types for the Q-Score engine

mod assessment;
mod dimension;
mod grade;
mod profile;
mod report;
mod signals;
mod tier;

pub use assessment::{
    parse_date, AdvantageKind, AssessmentInput, CustomerEvidence, FailedAssumption,
    IterationCycle, MarketSizing, ResilienceStory, ValidationCheck,
};
pub use dimension::Dimension;
pub use grade::{Grade, InvestorReadiness, ReadinessLevel, ResilienceLevel};
pub use profile::{StartupProfileInput, TractionType};
pub use report::{
    CustomerUnderstandingBreakdown, CustomerUnderstandingScore, DimensionResult,
    ExecutionBreakdown, ExecutionScore, FounderBreakdown, FounderScore, MarketMetrics,
    MarketRealismBreakdown, MarketRealismScore, ProblemFitBreakdown, ProblemFitScore,
    ResilienceBreakdown, ResilienceScore, ScoreReport, StartupBreakdown, StartupScore,
};
pub use signals::{CommitmentStrength, Quantity, QuantityKind};
pub use tier::{RangeTable, TierTable};
