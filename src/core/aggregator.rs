//! Total score, percentile, letter grade and investor readiness

use crate::types::{Grade, InvestorReadiness, ReadinessLevel, TierTable};
use crate::{PERCENTILE_CEILING, TOTAL_MAX};

const GRADES: TierTable<u32, Grade> = TierTable::at_least(
    &[
        (850, Grade::APlus),
        (800, Grade::A),
        (750, Grade::AMinus),
        (700, Grade::BPlus),
        (650, Grade::B),
        (600, Grade::BMinus),
        (550, Grade::CPlus),
        (500, Grade::C),
        (450, Grade::CMinus),
        (400, Grade::D),
    ],
    Grade::F,
);

type Readiness = (u8, ReadinessLevel, &'static str);

const READINESS: TierTable<u32, Readiness> = TierTable::at_least(
    &[
        (
            800,
            (
                9,
                ReadinessLevel::HighlyReady,
                "You're ready for tier-1 seed investors (a16z, Sequoia, Benchmark)",
            ),
        ),
        (
            700,
            (
                8,
                ReadinessLevel::Ready,
                "You're ready for seed investors. Focus on networking and warm intros.",
            ),
        ),
        (
            600,
            (
                6,
                ReadinessLevel::NearlyReady,
                "You're close. Strengthen weak areas and add more customer validation.",
            ),
        ),
        (
            500,
            (
                5,
                ReadinessLevel::Developing,
                "Build more traction before approaching institutional investors.",
            ),
        ),
    ],
    (
        3,
        ReadinessLevel::NotReady,
        "Focus on customer discovery and building your MVP first.",
    ),
);

/// Sum of dimension totals, bounded by the Q-Score maximum
pub fn total_score(dimension_totals: &[u32]) -> u32 {
    dimension_totals.iter().sum::<u32>().min(TOTAL_MAX)
}

/// Static estimate: one percentile per 10 points, capped at 95
pub fn percentile(total: u32) -> u8 {
    let raw = total.min(TOTAL_MAX) * 100 / TOTAL_MAX;
    (raw as u8).min(PERCENTILE_CEILING)
}

pub fn grade_for_total(total: u32) -> Grade {
    GRADES.lookup(total)
}

pub fn investor_readiness(total: u32) -> InvestorReadiness {
    let (score, level, description) = READINESS.lookup(total);
    InvestorReadiness {
        score,
        level,
        description: description.to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
