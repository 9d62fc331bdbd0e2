//! Problem-Fit scorer (max 200)
//!
//! Two halves of 100 each:
//! - problem origin: how first-hand, quantified and validated the story is
//! - unique advantage: what the founder brings and whether it is evidenced

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::keywords;
use crate::core::text_signals::{
    count_indicators, duration_in_months, extract_quantities, has_any_indicator,
    has_contextual_number, has_quantification, has_quantified_demand,
    mentions_legal_commitment, mentions_organization, mentions_person, word_count,
};
use crate::types::{
    AdvantageKind, Dimension, Grade, ProblemFitBreakdown, ProblemFitScore, TierTable,
};
use crate::{PROBLEM_FIT_MAX, PROBLEM_ORIGIN_MAX, UNIQUE_ADVANTAGE_MAX};

// =============================================================================
// TIERS
// =============================================================================

const PERSONAL_EXPERIENCE_POINTS: u32 = 25;
const OBSERVATION_POINTS: u32 = 10;
const UNSPECIFIED_ORIGIN_POINTS: u32 = 5;

/// Months of first-hand exposure
const TIME_DEPTH: TierTable<f64> = TierTable::at_least(&[(12.0, 15), (6.0, 10), (3.0, 5)], 0);

const QUANTIFIED_POINTS: u32 = 20;
const PER_NUMBER_BONUS: u32 = 2;
const NUMBER_BONUS_CAP: u32 = 10;
const BARE_NUMBER_POINTS: u32 = 10;

const VALIDATION_POINTS: u32 = 12;
const QUANTIFIED_DEMAND_BONUS: u32 = 8;

const NARRATIVE_LENGTH: TierTable<usize> =
    TierTable::at_least(&[(200, 10), (150, 7), (100, 5), (50, 2)], 0);

/// Kinds beyond this many count at half weight
const FULL_WEIGHT_KINDS: usize = 3;
const BREADTH_CAP: u32 = 50;

const EXPLANATION_DEPTH: TierTable<usize> =
    TierTable::at_least(&[(150, 20), (100, 15), (50, 10), (25, 5)], 0);

const LINK_PER_KIND_POINTS: u32 = 10;
const ANY_LINK_POINTS: u32 = 5;

const SPECIFICITY_CAP: u32 = 20;

const CROSS_COMMITMENT_POINTS: u32 = 10;
const CROSS_VALIDATION_POINTS: u32 = 5;

const ORIGIN_WEAK: u32 = 50;
const ORIGIN_STRONG: u32 = 80;
const ADVANTAGE_WEAK: u32 = 50;
const ADVANTAGE_STRONG: u32 = 80;

// =============================================================================
// SCORER
// =============================================================================

/// Score the founder's connection to the problem and their edge in solving it
pub fn score_problem_fit(
    story: &str,
    follow_ups: &[String],
    advantages: &[AdvantageKind],
    explanation: &str,
) -> ProblemFitScore {
    let narrative = narrative(story, follow_ups);
    let problem_origin = score_problem_origin(&narrative);
    let unique_advantage = score_unique_advantage(advantages, explanation);

    let total = Dimension::ProblemFit.clamp(problem_origin + unique_advantage);

    let mut feedback = Vec::new();
    if problem_origin < ORIGIN_WEAK {
        feedback.push(
            "Consider adding more personal details about how you experienced this problem"
                .to_string(),
        );
    }
    if problem_origin >= ORIGIN_STRONG {
        feedback.push(
            "Strong personal connection to the problem - this is exactly what investors look for"
                .to_string(),
        );
    }
    if unique_advantage < ADVANTAGE_WEAK {
        feedback.push(
            "Try to be more specific about your unique advantages with concrete examples"
                .to_string(),
        );
    }
    if unique_advantage >= ADVANTAGE_STRONG {
        feedback.push("Excellent articulation of your competitive advantages".to_string());
    }

    debug!(total, problem_origin, unique_advantage, "scored problem fit");

    ProblemFitScore {
        total,
        breakdown: ProblemFitBreakdown {
            problem_origin,
            unique_advantage,
        },
        feedback,
        grade: Grade::from_share(total, PROBLEM_FIT_MAX),
    }
}

/// Story plus follow-up answers, scored as one text
fn narrative(story: &str, follow_ups: &[String]) -> String {
    std::iter::once(story)
        .chain(follow_ups.iter().map(String::as_str))
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Personal, quantified, validated and detailed origin story (max 100)
pub fn score_problem_origin(narrative: &str) -> u32 {
    let mut score = 0;

    if has_any_indicator(narrative, keywords::PERSONAL_EXPERIENCE) {
        score += PERSONAL_EXPERIENCE_POINTS;
        if let Some(months) = duration_in_months(narrative) {
            score += TIME_DEPTH.points(months);
        }
    } else if has_any_indicator(narrative, keywords::OBSERVATION) {
        score += OBSERVATION_POINTS;
    } else if !narrative.trim().is_empty() {
        score += UNSPECIFIED_ORIGIN_POINTS;
    }

    let numbers = extract_quantities(narrative).len() as u32;
    if has_quantification(narrative) {
        score += QUANTIFIED_POINTS + (numbers * PER_NUMBER_BONUS).min(NUMBER_BONUS_CAP);
    } else if numbers > 0 {
        score += BARE_NUMBER_POINTS;
    }

    if has_any_indicator(narrative, keywords::VALIDATION) {
        score += VALIDATION_POINTS;
        if has_quantified_demand(narrative) {
            score += QUANTIFIED_DEMAND_BONUS;
        }
    }

    score += NARRATIVE_LENGTH.points(word_count(narrative));

    score.min(PROBLEM_ORIGIN_MAX)
}

/// Breadth, depth and evidence behind the claimed advantages (max 100)
pub fn score_unique_advantage(advantages: &[AdvantageKind], explanation: &str) -> u32 {
    let kinds: BTreeSet<AdvantageKind> = advantages.iter().copied().collect();

    let mut score = advantage_breadth(&kinds);
    score += EXPLANATION_DEPTH.points(word_count(explanation));

    let links = count_indicators(explanation, keywords::EVIDENCE_LINKS);
    if !kinds.is_empty() && links >= kinds.len() {
        score += LINK_PER_KIND_POINTS;
    } else if links > 0 {
        score += ANY_LINK_POINTS;
    }

    score += specificity(explanation);

    if kinds.contains(&AdvantageKind::CustomerRelationships) {
        if has_any_indicator(explanation, keywords::ADVANTAGE_COMMITMENT) {
            score += CROSS_COMMITMENT_POINTS;
        } else if has_any_indicator(explanation, keywords::VALIDATION) {
            score += CROSS_VALIDATION_POINTS;
        }
    }

    score.min(UNIQUE_ADVANTAGE_MAX)
}

/// Strongest three kinds at full weight, the rest at half
fn advantage_breadth(kinds: &BTreeSet<AdvantageKind>) -> u32 {
    let mut weights: Vec<u32> = kinds.iter().map(|kind| kind.weight()).collect();
    weights.sort_unstable_by(|a, b| b.cmp(a));

    let breadth: u32 = weights
        .iter()
        .enumerate()
        .map(|(rank, weight)| {
            if rank < FULL_WEIGHT_KINDS {
                *weight
            } else {
                weight / 2
            }
        })
        .sum();

    breadth.min(BREADTH_CAP)
}

/// Concrete names, numbers and commitments in the explanation (max 20)
fn specificity(text: &str) -> u32 {
    let mut score = 0;
    if mentions_organization(text) {
        score += 5;
    }
    if has_contextual_number(text) {
        score += 7;
    }
    if mentions_person(text) {
        score += 3;
    }
    if mentions_legal_commitment(text) {
        score += 5;
    }
    score.min(SPECIFICITY_CAP)
}

// =============================================================================
// TESTS
// =============================================================================
