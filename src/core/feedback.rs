//! Overall report feedback: a headline, dimension warnings, market warnings

use crate::types::{FounderBreakdown, TierTable};
use crate::{
    CUSTOMER_UNDERSTANDING_FLOOR, EXECUTION_FLOOR, MARKET_REALISM_FLOOR, PROBLEM_FIT_FLOOR,
};

const HEADLINES: TierTable<u32, &str> = TierTable::at_least(
    &[
        (750, "Outstanding profile - you're in the top tier of seed-stage founders"),
        (650, "Strong profile - you're ready to approach investors"),
        (
            550,
            "Good foundation - address the gaps below before approaching top-tier investors",
        ),
        (450, "You have potential but need more customer validation and traction"),
    ],
    "Focus on talking to customers and building an MVP before fundraising",
);

const WARNING_PREFIX: &str = "⚠️ ";

/// Headline for the band, dimension warnings in a fixed order, then every
/// market plausibility warning
pub fn overall_feedback(total: u32, founder: &FounderBreakdown) -> Vec<String> {
    let mut feedback = vec![HEADLINES.lookup(total).to_string()];

    let warnings = [
        (
            founder.problem_fit.total < PROBLEM_FIT_FLOOR,
            "Strengthen your founder-problem fit story",
        ),
        (
            founder.customer_understanding.total < CUSTOMER_UNDERSTANDING_FLOOR,
            "Talk to more customers - this is critical",
        ),
        (
            founder.execution.total < EXECUTION_FLOOR,
            "Speed up your iteration cycles",
        ),
        (
            founder.market_realism.total < MARKET_REALISM_FLOOR,
            "Revisit your market sizing assumptions",
        ),
    ];
    feedback.extend(
        warnings
            .iter()
            .filter(|(below_floor, _)| *below_floor)
            .map(|(_, message)| format!("{WARNING_PREFIX}{message}")),
    );

    feedback.extend(founder.market_realism.metrics.warnings.iter().cloned());
    feedback
}

// =============================================================================
// TESTS
// =============================================================================
