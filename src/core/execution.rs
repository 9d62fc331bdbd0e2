//! Execution / learning-velocity scorer (max 150)
//!
//! Scores one described build-measure-learn cycle: how fast it ran, how it
//! was measured, what was learned and what changed because of it.

use tracing::debug;

use crate::core::keywords;
use crate::core::text_signals::{extract_quantities, has_any_indicator, word_count};
use crate::types::{Dimension, ExecutionBreakdown, ExecutionScore, Grade, IterationCycle, TierTable};
use crate::EXECUTION_MAX;

// =============================================================================
// TIERS
// =============================================================================

/// Days per cycle; faster is better
const ITERATION_SPEED: TierTable<u32> =
    TierTable::at_most(&[(7, 40), (14, 32), (30, 24), (60, 12)], 4);

const METRIC_AND_COMPARISON_POINTS: u32 = 40;
const METRIC_ONLY_POINTS: u32 = 28;
const COMPARISON_ONLY_POINTS: u32 = 16;
const UNSTRUCTURED_MEASUREMENT_POINTS: u32 = 4;

const LEARNING_DEPTH: TierTable<usize> =
    TierTable::at_least(&[(40, 35), (25, 25), (15, 15), (5, 5)], 0);

const SPECIFIC_ACTION_WORDS: usize = 30;
const SPECIFIC_ACTION_POINTS: u32 = 35;
const ACTION_LENGTH: TierTable<usize> = TierTable::at_least(&[(20, 25), (10, 15), (5, 8)], 0);

const SLOW_CYCLE_DAYS: u32 = 30;
const STRONG_EXECUTION: u32 = 120;
const SHALLOW_LEARNING_WORDS: usize = 20;

// =============================================================================
// SCORER
// =============================================================================

pub fn score_execution(cycle: &IterationCycle) -> ExecutionScore {
    let iteration_speed = iteration_speed(cycle);
    let measurement_rigor = measurement_rigor(&cycle.measurement, &cycle.results);
    let learning_depth = LEARNING_DEPTH.points(word_count(&cycle.learned));
    let action_taken = action_taken(&cycle.changed);

    let total = Dimension::Execution
        .clamp(iteration_speed + measurement_rigor + learning_depth + action_taken);

    let mut feedback = Vec::new();
    if cycle.build_time > SLOW_CYCLE_DAYS {
        feedback.push(
            "Try to shorten your iteration cycles - the best founders test weekly".to_string(),
        );
    }
    if extract_quantities(&cycle.results).is_empty() {
        feedback.push(
            "Add specific metrics to measure success - \"users liked it\" is too vague".to_string(),
        );
    }
    if total >= STRONG_EXECUTION {
        feedback.push(
            "Excellent execution speed - you iterate and learn faster than most founders"
                .to_string(),
        );
    }
    if word_count(&cycle.learned) < SHALLOW_LEARNING_WORDS {
        feedback.push(
            "Elaborate more on what you learned - insights drive better decisions".to_string(),
        );
    }

    debug!(
        total,
        iteration_speed,
        measurement_rigor,
        learning_depth,
        action_taken,
        "scored execution"
    );

    ExecutionScore {
        total,
        breakdown: ExecutionBreakdown {
            iteration_speed,
            measurement_rigor,
            learning_depth,
            action_taken,
        },
        feedback,
        grade: Grade::from_share(total, EXECUTION_MAX),
    }
}

/// Cycle speed, only when a cycle was actually described
fn iteration_speed(cycle: &IterationCycle) -> u32 {
    if cycle.tested.trim().is_empty() {
        return 0;
    }
    ITERATION_SPEED.points(cycle.build_time)
}

/// Numbers and benchmarks across the measurement plan and its results
fn measurement_rigor(measurement: &str, results: &str) -> u32 {
    if measurement.trim().is_empty() && results.trim().is_empty() {
        return 0;
    }

    let has_metric =
        !extract_quantities(measurement).is_empty() || !extract_quantities(results).is_empty();
    let has_comparison = has_any_indicator(measurement, keywords::COMPARISON)
        || has_any_indicator(results, keywords::COMPARISON);

    match (has_metric, has_comparison) {
        (true, true) => METRIC_AND_COMPARISON_POINTS,
        (true, false) => METRIC_ONLY_POINTS,
        (false, true) => COMPARISON_ONLY_POINTS,
        (false, false) => UNSTRUCTURED_MEASUREMENT_POINTS,
    }
}

fn action_taken(changed: &str) -> u32 {
    let words = word_count(changed);
    if words >= SPECIFIC_ACTION_WORDS && has_any_indicator(changed, keywords::PRODUCT_CHANGE) {
        return SPECIFIC_ACTION_POINTS;
    }
    ACTION_LENGTH.points(words)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(tested: &str, build_time: u32) -> IterationCycle {
        IterationCycle {
            tested: tested.to_string(),
            build_time,
            ..Default::default()
        }
    }

    #[test]
    fn test_speed_requires_a_described_cycle() {
        assert_eq!(iteration_speed(&cycle("", 3)), 0);
        assert_eq!(iteration_speed(&cycle("onboarding test", 3)), 40);
        assert_eq!(iteration_speed(&cycle("onboarding test", 14)), 32);
        assert_eq!(iteration_speed(&cycle("onboarding test", 45)), 12);
        assert_eq!(iteration_speed(&cycle("onboarding test", 90)), 4);
    }

    #[test]
    fn test_measurement_rigor_tiers() {
        assert_eq!(measurement_rigor("", ""), 0);
        assert_eq!(measurement_rigor("signup rate vs baseline", "went from 12% to 30%"), 40);
        assert_eq!(measurement_rigor("signups", "42 signups"), 28);
        assert_eq!(measurement_rigor("compared cohorts", "better"), 16);
        assert_eq!(measurement_rigor("vibes", "users liked it"), 4);
    }

    #[test]
    fn test_action_needs_product_keyword_for_top_tier() {
        let specific = format!("{} added a button", "word ".repeat(28));
        assert_eq!(action_taken(&specific), 35);

        let vague = "word ".repeat(32);
        assert_eq!(action_taken(&vague), 25);
        assert_eq!(action_taken("small tweak"), 0);
    }

    #[test]
    fn test_feedback_for_slow_vague_cycle() {
        let result = score_execution(&cycle("pricing page", 45));
        assert!(result.feedback[0].contains("shorten your iteration cycles"));
        assert!(result.feedback[1].contains("specific metrics"));
        assert_eq!(result.breakdown.iteration_speed, 12);
    }

    #[test]
    fn test_empty_cycle_scores_zero() {
        let result = score_execution(&IterationCycle::default());
        assert_eq!(result.total, 0);
        assert_eq!(result.grade, Grade::F);
    }
}
