//! Q-Score entry point: runs every scorer and assembles the report

use chrono::NaiveDate;
use tracing::{debug, info_span, trace};

use crate::core::aggregator::{grade_for_total, investor_readiness, percentile, total_score};
use crate::core::customer::score_customer_understanding;
use crate::core::execution::score_execution;
use crate::core::feedback::overall_feedback;
use crate::core::market::score_market_realism;
use crate::core::problem_fit::score_problem_fit;
use crate::core::resilience::score_resilience;
use crate::core::startup::score_startup_profile;
use crate::types::{
    AssessmentInput, FounderBreakdown, FounderScore, ScoreReport, StartupProfileInput,
};

/// Score one assessment and profile as of `as_of`
///
/// Deterministic: the conversation date is measured against `as_of`, never
/// against the system clock.
pub fn calculate_q_score(
    assessment: &AssessmentInput,
    profile: &StartupProfileInput,
    as_of: NaiveDate,
) -> ScoreReport {
    let _span = info_span!("calculate_q_score", %as_of).entered();

    let breakdown = FounderBreakdown {
        problem_fit: score_problem_fit(
            &assessment.problem_story,
            &assessment.problem_follow_ups,
            &assessment.advantages,
            &assessment.advantage_explanation,
        ),
        customer_understanding: score_customer_understanding(
            &assessment.customer_evidence,
            &assessment.failed_assumptions,
            as_of,
        ),
        execution: score_execution(&assessment.iteration),
        market_realism: score_market_realism(&assessment.market_sizing),
        resilience: score_resilience(&assessment.resilience),
    };

    let founder_total = breakdown.problem_fit.total
        + breakdown.customer_understanding.total
        + breakdown.execution.total
        + breakdown.market_realism.total
        + breakdown.resilience.total;

    let startup_score = score_startup_profile(profile);
    let total = total_score(&[founder_total, startup_score.total]);
    trace!(founder_total, startup = startup_score.total, total, "aggregated dimensions");

    let report = ScoreReport {
        total_score: total,
        percentile: percentile(total),
        grade: grade_for_total(total),
        overall_feedback: overall_feedback(total, &breakdown),
        investor_readiness: investor_readiness(total),
        founder_score: FounderScore {
            total: founder_total,
            breakdown,
        },
        startup_score,
    };

    trace!(
        percentile = report.percentile,
        readiness = %report.investor_readiness.level,
        feedback_lines = report.overall_feedback.len(),
        "assembled report"
    );

    debug!(
        total = report.total_score,
        founder = founder_total,
        startup = report.startup_score.total,
        grade = %report.grade,
        "scored assessment"
    );

    report
}

// =============================================================================
// TESTS
// =============================================================================
