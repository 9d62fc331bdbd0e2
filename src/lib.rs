//! Q-Score: deterministic founder and startup quality scoring
//!
//! Converts a founder self-assessment and a startup profile into a 0-1000
//! score, a letter grade, a percentile estimate, an investor-readiness tier
//! and ordered feedback.
//!
//! Pipeline: payload → text signals → six dimension scorers → aggregator →
//! feedback → [`types::ScoreReport`].

pub mod core;
pub mod error;
pub mod telemetry;
pub mod types;

// =============================================================================
// DIMENSION MAXIMA (sum = 1000)
// =============================================================================

/// Founder-problem fit: origin story (100) + unique advantage (100)
pub const PROBLEM_FIT_MAX: u32 = 200;

/// Customer understanding: evidence and failed assumptions, capped together
pub const CUSTOMER_UNDERSTANDING_MAX: u32 = 200;

/// Build-measure-learn velocity
pub const EXECUTION_MAX: u32 = 150;

/// Bottom-up market sizing realism
pub const MARKET_REALISM_MAX: u32 = 150;

/// Adversity, quit scale and motivation
pub const RESILIENCE_MAX: u32 = 100;

/// Company-level profile completeness
pub const STARTUP_PROFILE_MAX: u32 = 200;

/// Upper bound of the total Q-Score
pub const TOTAL_MAX: u32 = 1000;

// =============================================================================
// SUB-SCORE CAPS
// =============================================================================

pub const PROBLEM_ORIGIN_MAX: u32 = 100;
pub const UNIQUE_ADVANTAGE_MAX: u32 = 100;
pub const CUSTOMER_EVIDENCE_MAX: u32 = 200;
pub const FAILED_ASSUMPTIONS_MAX: u32 = 100;

// =============================================================================
// MARKET ASSUMPTIONS
// =============================================================================

/// Outreach plan horizon (months)
pub const OUTREACH_WINDOW_MONTHS: u32 = 18;

/// Working days per month used for the daily outreach rate
pub const WORK_DAYS_PER_MONTH: u32 = 20;

/// Reference customer acquisition cost (B2B SaaS average, USD)
pub const ASSUMED_CAC: f64 = 500.0;

/// LTV:CAC below this ratio is flagged
pub const MIN_LTV_CAC_RATIO: f64 = 3.0;

/// Projected revenue below this is flagged as too small for investors (USD)
pub const MIN_CREDIBLE_REVENUE: f64 = 100_000.0;

/// Daily outreach above this is flagged as implausible
pub const MAX_PLAUSIBLE_DAILY_OUTREACH: f64 = 5.0;

/// Conversion rate (percent) above this is flagged for cold outreach
pub const MAX_PLAUSIBLE_CONVERSION: f64 = 15.0;

/// Outreach targets below this are flagged
pub const MIN_OUTREACH_TARGET: u64 = 50;

// =============================================================================
// FEEDBACK FLOORS [overall report warnings]
// =============================================================================

pub const PROBLEM_FIT_FLOOR: u32 = 120;
pub const CUSTOMER_UNDERSTANDING_FLOOR: u32 = 180;
pub const EXECUTION_FLOOR: u32 = 90;
pub const MARKET_REALISM_FLOOR: u32 = 90;

/// Percentile ceiling for the static percentile formula
pub const PERCENTILE_CEILING: u8 = 95;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
