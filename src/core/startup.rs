//! Startup-Profile scorer (max 200)
//!
//! Four blocks of 50: problem/solution, market, traction, business model and
//! fundraise. Mostly completeness; traction numbers are parsed from free text.

use tracing::debug;

use crate::core::text_signals::first_number;
use crate::types::{
    Dimension, Grade, StartupBreakdown, StartupProfileInput, StartupScore, TierTable,
    TractionType,
};
use crate::STARTUP_PROFILE_MAX;

// =============================================================================
// TIERS
// =============================================================================

/// Characters in the problem statement, and separately the solution
const STATEMENT_LENGTH: TierTable<usize> =
    TierTable::at_least(&[(200, 15), (100, 10), (50, 5)], 0);

const MOAT_LENGTH: TierTable<usize> = TierTable::at_least(&[(100, 20), (50, 10)], 0);

const TAM_POINTS: u32 = 15;
const GROWTH_POINTS: u32 = 10;
const PERSONA_POINTS: u32 = 15;
const MARKET_MODEL_POINTS: u32 = 10;

const MRR_POINTS: u32 = 25;
const CUSTOMERS_POINTS: u32 = 15;
const GROWTH_RATE_POINTS: u32 = 10;
/// Anything other than revenue traction cannot be verified from the profile
const NON_REVENUE_POINTS: u32 = 20;

const BUSINESS_MODEL_POINTS: u32 = 20;
const RAISE_POINTS: u32 = 15;
const USE_OF_FUNDS_POINTS: u32 = 15;
const USE_OF_FUNDS_MIN_CHARS: usize = 100;

const THIN_PROBLEM_SOLUTION: u32 = 25;
const COMPLETE_BLOCK: u32 = 50;

// =============================================================================
// SCORER
// =============================================================================

pub fn score_startup_profile(profile: &StartupProfileInput) -> StartupScore {
    let problem_solution = problem_solution_points(profile);
    let market = market_points(profile);
    let traction = traction_points(profile);
    let business_model = business_model_points(profile);

    let total = Dimension::StartupProfile
        .clamp(problem_solution + market + traction + business_model);

    let mut feedback = Vec::new();
    if problem_solution < THIN_PROBLEM_SOLUTION {
        feedback.push(
            "Describe the problem and your solution in more depth - specifics make the opportunity concrete"
                .to_string(),
        );
    }
    if market < COMPLETE_BLOCK {
        feedback.push(
            "Complete your market picture: size, growth, target customer and business model"
                .to_string(),
        );
    }
    match profile.traction_type {
        TractionType::PreRevenue => feedback.push(
            "Pre-revenue traction counts for less - paying customers are the strongest proof"
                .to_string(),
        ),
        TractionType::Unspecified => {
            feedback.push("Tell investors what traction you have so far".to_string())
        }
        TractionType::Revenue => {}
    }
    if business_model < COMPLETE_BLOCK {
        feedback.push(
            "Be explicit about how much you are raising and how the money will be used"
                .to_string(),
        );
    }

    debug!(
        total,
        problem_solution,
        market,
        traction,
        business_model,
        "scored startup profile"
    );

    StartupScore {
        total,
        breakdown: StartupBreakdown {
            problem_solution,
            market,
            traction,
            business_model,
        },
        feedback,
        grade: Grade::from_share(total, STARTUP_PROFILE_MAX),
    }
}

fn is_present(field: &str) -> bool {
    !field.trim().is_empty()
}

fn char_len(field: &str) -> usize {
    field.trim().chars().count()
}

fn problem_solution_points(profile: &StartupProfileInput) -> u32 {
    STATEMENT_LENGTH.points(char_len(&profile.problem_statement))
        + STATEMENT_LENGTH.points(char_len(&profile.solution))
        + MOAT_LENGTH.points(char_len(&profile.moat))
}

fn market_points(profile: &StartupProfileInput) -> u32 {
    [
        (&profile.tam_size, TAM_POINTS),
        (&profile.market_growth, GROWTH_POINTS),
        (&profile.customer_persona, PERSONA_POINTS),
        (&profile.business_model, MARKET_MODEL_POINTS),
    ]
    .iter()
    .filter(|(field, _)| is_present(field))
    .map(|(_, points)| points)
    .sum()
}

/// Revenue traction is checked field by field; everything else gets a flat score
fn traction_points(profile: &StartupProfileInput) -> u32 {
    match profile.traction_type {
        TractionType::Revenue => {
            let positive = |field: &str| first_number(field).is_some_and(|n| n > 0.0);

            let mut points = 0;
            if positive(&profile.mrr) {
                points += MRR_POINTS;
            }
            if positive(&profile.customer_count) {
                points += CUSTOMERS_POINTS;
            }
            if is_present(&profile.growth_rate) {
                points += GROWTH_RATE_POINTS;
            }
            points
        }
        TractionType::PreRevenue | TractionType::Unspecified => NON_REVENUE_POINTS,
    }
}

fn business_model_points(profile: &StartupProfileInput) -> u32 {
    let mut points = 0;
    if is_present(&profile.business_model) {
        points += BUSINESS_MODEL_POINTS;
    }
    if is_present(&profile.raising_amount) {
        points += RAISE_POINTS;
    }
    if char_len(&profile.use_of_funds) >= USE_OF_FUNDS_MIN_CHARS {
        points += USE_OF_FUNDS_POINTS;
    }
    points
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn revenue_profile() -> StartupProfileInput {
        StartupProfileInput {
            traction_type: TractionType::Revenue,
            mrr: "$12,000".into(),
            customer_count: "18 clinics".into(),
            growth_rate: "15% MoM".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_revenue_traction() {
        assert_eq!(traction_points(&revenue_profile()), 50);

        let zero_mrr = StartupProfileInput {
            mrr: "0".into(),
            ..revenue_profile()
        };
        assert_eq!(traction_points(&zero_mrr), 25);

        let unparsable = StartupProfileInput {
            mrr: "a lot".into(),
            customer_count: String::new(),
            ..revenue_profile()
        };
        assert_eq!(traction_points(&unparsable), 10);
    }

    #[test]
    fn test_non_revenue_traction_is_flat() {
        let pre = StartupProfileInput {
            traction_type: TractionType::PreRevenue,
            ..Default::default()
        };
        assert_eq!(traction_points(&pre), 20);
        assert_eq!(traction_points(&StartupProfileInput::default()), 20);
    }

    #[test]
    fn test_problem_solution_by_length() {
        let profile = StartupProfileInput {
            problem_statement: "x".repeat(210),
            solution: "x".repeat(120),
            moat: "x".repeat(60),
            ..Default::default()
        };
        assert_eq!(problem_solution_points(&profile), 15 + 10 + 10);
    }

    #[test]
    fn test_market_presence_ignores_blank_fields() {
        let profile = StartupProfileInput {
            tam_size: "$4B".into(),
            market_growth: "  ".into(),
            customer_persona: "Clinic office managers".into(),
            ..Default::default()
        };
        assert_eq!(market_points(&profile), 30);
    }

    #[test]
    fn test_business_model_and_fundraise() {
        let profile = StartupProfileInput {
            business_model: "SaaS, per seat".into(),
            raising_amount: "$1.5M".into(),
            use_of_funds: "y".repeat(100),
            ..Default::default()
        };
        assert_eq!(business_model_points(&profile), 50);
    }

    #[test]
    fn test_empty_profile() {
        let result = score_startup_profile(&StartupProfileInput::default());
        // Only the flat non-revenue traction score
        assert_eq!(result.total, 20);
        assert_eq!(result.grade, Grade::F);
        assert_eq!(result.feedback.len(), 4);
    }
}
