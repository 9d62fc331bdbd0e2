//! Market-Realism scorer (max 150)
//!
//! Judges a bottom-up sizing plan: how many conversations over the outreach
//! window, at what conversion rate, for what contract value.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::{
    Dimension, Grade, MarketMetrics, MarketRealismBreakdown, MarketRealismScore, MarketSizing,
    RangeTable, TierTable, ValidationCheck,
};
use crate::{
    ASSUMED_CAC, MARKET_REALISM_MAX, MAX_PLAUSIBLE_CONVERSION, MAX_PLAUSIBLE_DAILY_OUTREACH,
    MIN_CREDIBLE_REVENUE, MIN_LTV_CAC_RATIO, MIN_OUTREACH_TARGET, OUTREACH_WINDOW_MONTHS,
    WORK_DAYS_PER_MONTH,
};

// =============================================================================
// TIERS
// =============================================================================

/// Conversations per working day; fewer is more believable
const DAILY_OUTREACH: TierTable<f64> =
    TierTable::at_most(&[(2.0, 50), (3.0, 42), (5.0, 32), (8.0, 18), (10.0, 8)], 2);

/// Conversion percent, first matching range; above 25% falls through to 5
const CONVERSION: RangeTable = RangeTable::new(
    &[
        (2.0, 8.0, 40),
        (8.0, 15.0, 28),
        (15.0, 25.0, 15),
        (1.0, 2.0, 30),
        (f64::MIN_POSITIVE, 1.0, 10),
    ],
    5,
);

/// Projected revenue over the outreach window (USD)
const REVENUE: TierTable<f64> = TierTable::at_least(
    &[
        (500_000.0, 30),
        (300_000.0, 26),
        (150_000.0, 22),
        (75_000.0, 14),
        (25_000.0, 6),
    ],
    2,
);

const POINTS_PER_CHECK: u32 = 10;
const MAX_CHECKS: usize = 3;

const STRONG_MARKET: u32 = 120;
const ATTRACTIVE_REVENUE: f64 = 500_000.0;

// =============================================================================
// SCORER
// =============================================================================

pub fn score_market_realism(sizing: &MarketSizing) -> MarketRealismScore {
    let metrics = calculate_market_metrics(sizing);

    let outreach_realism = if sizing.talk_to_count == 0 {
        0
    } else {
        DAILY_OUTREACH.points(metrics.daily_conversations)
    };
    let conversion_realism = conversion_points(sizing.conversion_rate);
    let revenue_potential = if metrics.projected_revenue > 0.0 {
        REVENUE.points(metrics.projected_revenue)
    } else {
        0
    };
    let validation = validation_points(&sizing.validation_checks);

    let total = Dimension::MarketRealism
        .clamp(outreach_realism + conversion_realism + revenue_potential + validation);

    let mut feedback = Vec::new();
    if total >= STRONG_MARKET {
        feedback.push(
            "Excellent market sizing - your assumptions are realistic and well-thought-out"
                .to_string(),
        );
    }
    if metrics.projected_revenue >= ATTRACTIVE_REVENUE {
        feedback.push("Strong revenue target that will attract investor interest".to_string());
    }
    if metrics.ltv_cac_ratio >= MIN_LTV_CAC_RATIO {
        feedback.push("Good LTV:CAC ratio suggests healthy unit economics".to_string());
    }
    feedback.extend(metrics.warnings.iter().cloned());

    debug!(
        total,
        outreach_realism,
        conversion_realism,
        revenue_potential,
        validation,
        projected_revenue = metrics.projected_revenue,
        "scored market realism"
    );

    MarketRealismScore {
        total,
        breakdown: MarketRealismBreakdown {
            outreach_realism,
            conversion_realism,
            revenue_potential,
            validation,
        },
        metrics,
        feedback,
        grade: Grade::from_share(total, MARKET_REALISM_MAX),
    }
}

/// Zero, negative and non-numeric rates earn nothing
fn conversion_points(rate: f64) -> u32 {
    if rate.is_nan() || rate <= 0.0 {
        return 0;
    }
    CONVERSION.points(rate)
}

/// Each distinct check counts once
fn validation_points(checks: &[ValidationCheck]) -> u32 {
    let distinct: BTreeSet<ValidationCheck> = checks.iter().copied().collect();
    distinct.len().min(MAX_CHECKS) as u32 * POINTS_PER_CHECK
}

/// Unit economics implied by the sizing plan, with plausibility warnings
pub fn calculate_market_metrics(sizing: &MarketSizing) -> MarketMetrics {
    let outreach = sizing.talk_to_count as f64;
    let customer_count = outreach * (sizing.conversion_rate / 100.0);
    let projected_revenue = customer_count * sizing.avg_contract_value;
    let revenue_per_conversation = if sizing.talk_to_count == 0 {
        None
    } else {
        Some(projected_revenue / outreach)
    };

    let lifetime_value = sizing.avg_contract_value * sizing.customer_lifetime_months;
    let ltv_cac_ratio = lifetime_value / ASSUMED_CAC;

    let work_days = f64::from(OUTREACH_WINDOW_MONTHS * WORK_DAYS_PER_MONTH);
    let daily_conversations = outreach / work_days;

    let mut warnings = Vec::new();
    if daily_conversations > MAX_PLAUSIBLE_DAILY_OUTREACH {
        warnings.push(format!(
            "You're planning {:.1} conversations/day. Is this realistic?",
            daily_conversations
        ));
    }
    if sizing.conversion_rate > MAX_PLAUSIBLE_CONVERSION {
        warnings.push(format!(
            "{}% conversion rate is very high for cold outreach",
            sizing.conversion_rate
        ));
    }
    if ltv_cac_ratio < MIN_LTV_CAC_RATIO {
        warnings.push("LTV:CAC ratio below 3:1 suggests unit economics may not work".to_string());
    }
    if projected_revenue < MIN_CREDIBLE_REVENUE {
        warnings.push("$100K in 18 months may be too small to attract investors".to_string());
    }
    if sizing.talk_to_count < MIN_OUTREACH_TARGET {
        warnings.push(
            "Consider increasing your outreach target - 50+ conversations shows commitment"
                .to_string(),
        );
    }

    MarketMetrics {
        projected_revenue,
        revenue_per_conversation,
        customer_count,
        lifetime_value,
        ltv_cac_ratio,
        daily_conversations,
        warnings,
    }
}

// =============================================================================
// TESTS
// =============================================================================
