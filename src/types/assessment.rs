//! Founder assessment payload
//!
//! One founder's narrative and structured answers for a single review cycle.
//! Every field defaults so partially completed submissions still deserialize;
//! the scorers treat missing values as the lowest tier.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Complete founder self-assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentInput {
    // Problem-Fit
    pub problem_story: String,
    pub problem_follow_ups: Vec<String>,
    pub advantages: Vec<AdvantageKind>,
    pub advantage_explanation: String,

    // Customer-Understanding
    pub customer_evidence: CustomerEvidence,
    pub failed_assumptions: FailedAssumption,

    // Execution
    pub iteration: IterationCycle,

    // Market-Realism
    pub market_sizing: MarketSizing,

    // Resilience
    pub resilience: ResilienceStory,
}

/// Claimed unfair advantage (fixed set offered by the assessment form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvantageKind {
    IndustryExperience,
    TechnicalSkills,
    CustomerRelationships,
    ProprietaryInsight,
    RelevantFailure,
    DistributionAdvantage,
}

impl AdvantageKind {
    /// Breadth weight; existing customer relationships are the strongest signal
    pub fn weight(&self) -> u32 {
        match self {
            AdvantageKind::IndustryExperience => 15,
            AdvantageKind::TechnicalSkills => 12,
            AdvantageKind::CustomerRelationships => 20,
            AdvantageKind::ProprietaryInsight => 18,
            AdvantageKind::RelevantFailure => 12,
            AdvantageKind::DistributionAdvantage => 15,
        }
    }
}

/// Most recent qualifying customer conversation and its outcome
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerEvidence {
    pub customer_type: String,
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub conversation_date: Option<NaiveDate>,
    pub quote: String,
    pub surprise: String,
    pub commitment: String,
    pub conversation_count: u32,
    pub customer_list: Vec<String>,
}

/// A belief the founder held and later disproved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FailedAssumption {
    pub belief: String,
    pub reasoning: String,
    pub discovery: String,
    pub change: String,
}

/// One build-measure-learn cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IterationCycle {
    pub tested: String,
    /// Days from idea to something measurable
    pub build_time: u32,
    pub measurement: String,
    pub results: String,
    pub learned: String,
    pub changed: String,
}

/// Bottom-up market sizing inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketSizing {
    pub target_customers: u64,
    /// Prospects the founder plans to talk to over the outreach window
    pub talk_to_count: u64,
    /// Assumed conversion, in percent (2.5 = 2.5%)
    pub conversion_rate: f64,
    pub avg_contract_value: f64,
    pub customer_lifetime_months: f64,
    pub validation_checks: Vec<ValidationCheck>,
}

/// Market-validation activity the founder confirms having done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationCheck {
    /// A plan exists to reach the stated number of prospects
    ReachPlan,
    /// Conversion rate comes from actual early conversations
    ConversionValidated,
    /// Pricing validated with at least three customers
    PricingValidated,
}

/// Hardest moment, how close the founder came to quitting, and why they stayed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResilienceStory {
    pub story: String,
    /// 1-10, how close to quitting
    pub quit_scale: u8,
    pub reason: String,
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp (date part kept)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{value}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_plain_and_rfc3339() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15);
        assert_eq!(parse_date("2024-01-15"), expected);
        assert_eq!(parse_date("2024-01-15T09:30:00.000Z"), expected);
        assert_eq!(parse_date(" 2024-01-15 "), expected);
        assert_eq!(parse_date("last week"), None);
    }

    #[test]
    fn test_partial_payload_deserializes_with_defaults() {
        let json = r#"{
            "problemStory": "I spent 3 years fighting this.",
            "advantages": ["customer-relationships", "technical-skills"],
            "customerEvidence": { "conversationDate": "2024-01-15T00:00:00Z", "conversationCount": 12 },
            "marketSizing": { "validationChecks": ["reach-plan"] }
        }"#;
        let input: AssessmentInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.advantages.len(), 2);
        assert_eq!(input.customer_evidence.conversation_count, 12);
        assert_eq!(
            input.customer_evidence.conversation_date,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert!(input.customer_evidence.customer_list.is_empty());
        assert_eq!(input.market_sizing.validation_checks, vec![ValidationCheck::ReachPlan]);
        assert_eq!(input.resilience.quit_scale, 0);
    }

    #[test]
    fn test_empty_or_null_date_is_none() {
        let input: CustomerEvidence =
            serde_json::from_str(r#"{ "conversationDate": "" }"#).unwrap();
        assert_eq!(input.conversation_date, None);
        let input: CustomerEvidence =
            serde_json::from_str(r#"{ "conversationDate": null }"#).unwrap();
        assert_eq!(input.conversation_date, None);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result: Result<CustomerEvidence, _> =
            serde_json::from_str(r#"{ "conversationDate": "yesterday" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_customer_relationships_weighs_most() {
        let strongest = [
            AdvantageKind::IndustryExperience,
            AdvantageKind::TechnicalSkills,
            AdvantageKind::CustomerRelationships,
            AdvantageKind::ProprietaryInsight,
            AdvantageKind::RelevantFailure,
            AdvantageKind::DistributionAdvantage,
        ]
        .into_iter()
        .max_by_key(|kind| kind.weight());
        assert_eq!(strongest, Some(AdvantageKind::CustomerRelationships));
    }
}
