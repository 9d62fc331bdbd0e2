//! Customer-Understanding scorer (max 200)
//!
//! Customer evidence (recency, quote, surprise, commitment, volume) plus the
//! founder's record of assumptions that turned out to be wrong.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::core::keywords;
use crate::core::text_signals::{extract_quantities, has_any_indicator, has_quote_mark, word_count};
use crate::types::{
    CommitmentStrength, CustomerEvidence, CustomerUnderstandingBreakdown,
    CustomerUnderstandingScore, Dimension, FailedAssumption, Grade, TierTable,
};
use crate::{CUSTOMER_EVIDENCE_MAX, CUSTOMER_UNDERSTANDING_MAX, FAILED_ASSUMPTIONS_MAX};

// =============================================================================
// TIERS
// =============================================================================

/// Days since the most recent conversation; future dates count as recent
const RECENCY: TierTable<i64> = TierTable::at_most(&[(30, 25), (90, 18), (180, 10)], 3);

const QUOTE_LENGTH: TierTable<usize> = TierTable::at_least(&[(50, 25), (30, 15), (15, 8)], 0);
const QUOTE_PAIN_BONUS: u32 = 15;

const SURPRISE_LENGTH: TierTable<usize> = TierTable::at_least(&[(50, 22), (25, 15), (10, 8)], 0);
const SURPRISE_LEARNING_BONUS: u32 = 13;

/// Word count at which quote and surprise bonuses unlock
const DETAILED_WORDS: usize = 50;

const CONVERSATIONS: TierTable<u32> = TierTable::at_least(
    &[(50, 30), (30, 25), (20, 20), (10, 15), (5, 10), (1, 5)],
    0,
);

const NAMED_CUSTOMERS: TierTable<usize> = TierTable::at_least(&[(3, 10), (1, 5)], 0);

const BELIEF_LENGTH: TierTable<usize> =
    TierTable::at_least(&[(30, 25), (20, 18), (10, 12), (5, 6)], 0);

const QUOTED_DISCOVERY_WORDS: usize = 40;
const QUOTED_DISCOVERY_POINTS: u32 = 30;
const DISCOVERY_LENGTH: TierTable<usize> =
    TierTable::at_least(&[(30, 22), (20, 15), (10, 8)], 0);

const ACTION_POINTS: u32 = 18;
const MEASURED_IMPACT_BONUS: u32 = 12;
const CHANGE_WITHOUT_ACTION_POINTS: u32 = 5;

const REASONING_LENGTH: TierTable<usize> = TierTable::at_least(&[(30, 15), (20, 10), (10, 5)], 0);

const FEW_CONVERSATIONS: u32 = 10;
const STRONG_EVIDENCE: u32 = 160;
const SHORT_QUOTE_CHARS: usize = 100;
const WEAK_ASSUMPTIONS: u32 = 50;
const STRONG_ASSUMPTIONS: u32 = 80;

// =============================================================================
// SCORER
// =============================================================================

/// Score customer discovery as of `as_of`
pub fn score_customer_understanding(
    evidence: &CustomerEvidence,
    assumptions: &FailedAssumption,
    as_of: NaiveDate,
) -> CustomerUnderstandingScore {
    let commitment = classify_commitment(&evidence.commitment);
    let customer_evidence = score_customer_evidence(evidence, as_of);
    let failed_assumptions = score_failed_assumptions(assumptions);

    let total = Dimension::CustomerUnderstanding.clamp(customer_evidence + failed_assumptions);

    let mut feedback = Vec::new();
    if evidence.conversation_count < FEW_CONVERSATIONS {
        feedback.push(
            "Talk to more customers - successful founders have 50+ conversations before launch"
                .to_string(),
        );
    }
    if customer_evidence >= STRONG_EVIDENCE {
        feedback.push("Outstanding customer discovery - you have strong validation".to_string());
    }
    if evidence.quote.chars().count() < SHORT_QUOTE_CHARS {
        feedback.push(
            "Get more detailed quotes from customers to understand their pain deeply".to_string(),
        );
    }
    if failed_assumptions < WEAK_ASSUMPTIONS {
        feedback.push(
            "Show more evidence of learning and adaptation based on customer feedback".to_string(),
        );
    }
    if failed_assumptions >= STRONG_ASSUMPTIONS {
        feedback.push("Excellent learning velocity - you adapt quickly based on data".to_string());
    }

    debug!(
        total,
        customer_evidence,
        failed_assumptions,
        commitment = %commitment,
        "scored customer understanding"
    );

    CustomerUnderstandingScore {
        total,
        breakdown: CustomerUnderstandingBreakdown {
            customer_evidence,
            failed_assumptions,
            commitment,
        },
        feedback,
        grade: Grade::from_share(total, CUSTOMER_UNDERSTANDING_MAX),
    }
}

/// Strongest commitment tier the text reaches
///
/// "signed, and others are interested" is `Signed`.
pub fn classify_commitment(text: &str) -> CommitmentStrength {
    if text.trim().is_empty() {
        return CommitmentStrength::Absent;
    }
    let strength = [
        (keywords::COMMITMENT_SIGNED, CommitmentStrength::Signed),
        (keywords::COMMITMENT_INTENT, CommitmentStrength::Intent),
        (keywords::COMMITMENT_SOFT, CommitmentStrength::SoftInterest),
    ]
    .into_iter()
    .filter(|(indicators, _)| has_any_indicator(text, indicators))
    .map(|(_, strength)| strength)
    .max()
    .unwrap_or(CommitmentStrength::Stated);
    trace!(%strength, "classified commitment");
    strength
}

fn commitment_points(strength: CommitmentStrength) -> u32 {
    match strength {
        CommitmentStrength::Signed => 60,
        CommitmentStrength::Intent => 35,
        CommitmentStrength::SoftInterest => 15,
        CommitmentStrength::Stated => 5,
        CommitmentStrength::Absent => 0,
    }
}

/// Recency, quote, surprise, commitment and volume (max 200)
pub fn score_customer_evidence(evidence: &CustomerEvidence, as_of: NaiveDate) -> u32 {
    let mut score = 0;

    if let Some(date) = evidence.conversation_date {
        let days = (as_of - date).num_days();
        score += RECENCY.points(days);
    }

    let quote_words = word_count(&evidence.quote);
    score += QUOTE_LENGTH.points(quote_words);
    if quote_words >= DETAILED_WORDS && has_any_indicator(&evidence.quote, keywords::PAIN) {
        score += QUOTE_PAIN_BONUS;
    }

    let surprise_words = word_count(&evidence.surprise);
    score += SURPRISE_LENGTH.points(surprise_words);
    if surprise_words >= DETAILED_WORDS
        && has_any_indicator(&evidence.surprise, keywords::LEARNING)
    {
        score += SURPRISE_LEARNING_BONUS;
    }

    score += commitment_points(classify_commitment(&evidence.commitment));
    score += CONVERSATIONS.points(evidence.conversation_count);

    let named = evidence
        .customer_list
        .iter()
        .filter(|name| !name.trim().is_empty())
        .count();
    score += NAMED_CUSTOMERS.points(named);

    score.min(CUSTOMER_EVIDENCE_MAX)
}

/// Belief, discovery, action and reasoning (max 100)
pub fn score_failed_assumptions(assumptions: &FailedAssumption) -> u32 {
    let mut score = BELIEF_LENGTH.points(word_count(&assumptions.belief));

    let discovery_words = word_count(&assumptions.discovery);
    if discovery_words >= QUOTED_DISCOVERY_WORDS && has_quote_mark(&assumptions.discovery) {
        score += QUOTED_DISCOVERY_POINTS;
    } else {
        score += DISCOVERY_LENGTH.points(discovery_words);
    }

    let change = &assumptions.change;
    if has_any_indicator(change, keywords::ASSUMPTION_ACTION) {
        score += ACTION_POINTS;
        if has_measured_impact(change) {
            score += MEASURED_IMPACT_BONUS;
        }
    } else if !change.trim().is_empty() {
        score += CHANGE_WITHOUT_ACTION_POINTS;
    }

    score += REASONING_LENGTH.points(word_count(&assumptions.reasoning));

    score.min(FAILED_ASSUMPTIONS_MAX)
}

/// Any number, percentage, multiplier or impact word
fn has_measured_impact(text: &str) -> bool {
    !extract_quantities(text).is_empty() || has_any_indicator(text, keywords::IMPACT)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn words(n: usize, word: &str) -> String {
        vec![word; n].join(" ")
    }

    #[test]
    fn test_commitment_strongest_tier_wins() {
        assert_eq!(
            classify_commitment("Two signed, three more interested"),
            CommitmentStrength::Signed
        );
        assert_eq!(classify_commitment("They will pay next month"), CommitmentStrength::Intent);
        assert_eq!(
            classify_commitment("maybe, though two said they will pay"),
            CommitmentStrength::Intent
        );
        assert_eq!(classify_commitment("maybe later"), CommitmentStrength::SoftInterest);
        assert_eq!(classify_commitment("We chatted"), CommitmentStrength::Stated);
        assert_eq!(classify_commitment("  "), CommitmentStrength::Absent);
    }

    #[test]
    fn test_recency_tiers() {
        let mut evidence = CustomerEvidence::default();
        assert_eq!(score_customer_evidence(&evidence, as_of()), 0);

        evidence.conversation_date = NaiveDate::from_ymd_opt(2024, 6, 10);
        assert_eq!(score_customer_evidence(&evidence, as_of()), 25);

        evidence.conversation_date = NaiveDate::from_ymd_opt(2024, 4, 15);
        assert_eq!(score_customer_evidence(&evidence, as_of()), 18);

        evidence.conversation_date = NaiveDate::from_ymd_opt(2023, 1, 1);
        assert_eq!(score_customer_evidence(&evidence, as_of()), 3);
    }

    #[test]
    fn test_pain_bonus_needs_detailed_quote() {
        let mut evidence = CustomerEvidence {
            quote: format!("{} nightmare", words(20, "it")),
            ..Default::default()
        };
        assert_eq!(score_customer_evidence(&evidence, as_of()), 8);

        evidence.quote = format!("{} nightmare", words(55, "it"));
        assert_eq!(score_customer_evidence(&evidence, as_of()), 40);
    }

    #[test]
    fn test_named_customers_ignore_blanks() {
        let evidence = CustomerEvidence {
            customer_list: vec!["Acme".into(), " ".into(), "Globex".into()],
            ..Default::default()
        };
        assert_eq!(score_customer_evidence(&evidence, as_of()), 5);
    }

    #[test]
    fn test_evidence_is_capped() {
        let evidence = CustomerEvidence {
            conversation_date: NaiveDate::from_ymd_opt(2024, 6, 29),
            quote: format!("{} killing us", words(60, "really")),
            surprise: format!("{} realized", words(60, "we")),
            commitment: "signed LOI".into(),
            conversation_count: 80,
            customer_list: vec!["A".into(), "B".into(), "C".into()],
            ..Default::default()
        };
        assert_eq!(score_customer_evidence(&evidence, as_of()), CUSTOMER_EVIDENCE_MAX);
    }

    #[test]
    fn test_quoted_discovery_outranks_length() {
        let mut assumptions = FailedAssumption {
            discovery: words(45, "word"),
            ..Default::default()
        };
        assert_eq!(score_failed_assumptions(&assumptions), 22);

        assumptions.discovery = format!("{} \"we never do that\"", words(41, "word"));
        assert_eq!(score_failed_assumptions(&assumptions), 30);
    }

    #[test]
    fn test_action_with_measured_impact() {
        let mut assumptions = FailedAssumption {
            change: "We pivoted to clinics".into(),
            ..Default::default()
        };
        assert_eq!(score_failed_assumptions(&assumptions), 18);

        assumptions.change = "We pivoted and activation doubled".into();
        assert_eq!(score_failed_assumptions(&assumptions), 30);

        assumptions.change = "We thought about it".into();
        assert_eq!(score_failed_assumptions(&assumptions), 5);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let result = score_customer_understanding(
            &CustomerEvidence::default(),
            &FailedAssumption::default(),
            as_of(),
        );
        assert_eq!(result.total, 0);
        assert_eq!(result.breakdown.commitment, CommitmentStrength::Absent);
        assert_eq!(result.grade, Grade::F);
        assert!(result.feedback[0].starts_with("Talk to more customers"));
    }
}
