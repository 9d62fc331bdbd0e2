//! The six independently scored facets of a Q-Score

use serde::{Deserialize, Serialize};

use crate::{
    CUSTOMER_UNDERSTANDING_MAX, EXECUTION_MAX, MARKET_REALISM_MAX, PROBLEM_FIT_MAX,
    RESILIENCE_MAX, STARTUP_PROFILE_MAX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    ProblemFit,
    CustomerUnderstanding,
    Execution,
    MarketRealism,
    Resilience,
    StartupProfile,
}

impl Dimension {
    pub fn max_score(&self) -> u32 {
        match self {
            Dimension::ProblemFit => PROBLEM_FIT_MAX,
            Dimension::CustomerUnderstanding => CUSTOMER_UNDERSTANDING_MAX,
            Dimension::Execution => EXECUTION_MAX,
            Dimension::MarketRealism => MARKET_REALISM_MAX,
            Dimension::Resilience => RESILIENCE_MAX,
            Dimension::StartupProfile => STARTUP_PROFILE_MAX,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::ProblemFit => "Founder-Problem Fit",
            Dimension::CustomerUnderstanding => "Customer Understanding",
            Dimension::Execution => "Execution",
            Dimension::MarketRealism => "Market Realism",
            Dimension::Resilience => "Resilience",
            Dimension::StartupProfile => "Startup Profile",
        }
    }

    /// Clamp a raw point sum to this dimension's maximum
    pub fn clamp(&self, raw: u32) -> u32 {
        raw.min(self.max_score())
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
