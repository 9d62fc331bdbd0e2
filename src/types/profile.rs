//! Startup profile payload: company-level facts independent of the founder narrative

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartupProfileInput {
    // Problem/Solution
    pub problem_statement: String,
    pub solution: String,
    /// Differentiation claim
    pub unique_position: String,
    /// Defensibility claim
    pub moat: String,

    // Market
    pub tam_size: String,
    pub market_growth: String,
    pub customer_persona: String,
    pub business_model: String,

    // Traction
    pub traction_type: TractionType,
    pub mrr: String,
    pub customer_count: String,
    pub growth_rate: String,

    // Team (carried for the calling layer, not scored)
    pub team_size: String,
    /// Free-form co-founder records as submitted
    pub co_founders: Vec<serde_json::Value>,
    pub equity_split: String,

    // Fundraising
    pub raising_amount: String,
    pub use_of_funds: String,
}

/// Kind of traction the company reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TractionType {
    /// Paying customers; MRR, customer count and growth are checked
    Revenue,
    /// Waitlists, pilots, LOIs: cannot be verified the same way
    PreRevenue,
    #[default]
    #[serde(other)]
    Unspecified,
}
