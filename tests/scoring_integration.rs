//! Integration tests for the full scoring path
//!
//! JSON payload → calculate_q_score → report

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use qscore::core::calculate_q_score;
use qscore::types::{
    AssessmentInput, CommitmentStrength, Grade, ReadinessLevel, ResilienceLevel, ScoreReport,
    StartupProfileInput,
};
use qscore::{
    CUSTOMER_UNDERSTANDING_MAX, EXECUTION_MAX, PROBLEM_FIT_MAX, RESILIENCE_MAX, TOTAL_MAX,
};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn fixture<T: serde::de::DeserializeOwned>(name: &str) -> T {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let contents = std::fs::read_to_string(&path).unwrap();
    serde_json::from_str(&contents).unwrap()
}

fn strong_report() -> ScoreReport {
    let assessment: AssessmentInput = fixture("strong_assessment.json");
    let profile: StartupProfileInput = fixture("strong_profile.json");
    calculate_q_score(&assessment, &profile, as_of())
}

fn minimal_report() -> ScoreReport {
    let assessment: AssessmentInput = fixture("minimal_assessment.json");
    let profile: StartupProfileInput = fixture("minimal_profile.json");
    calculate_q_score(&assessment, &profile, as_of())
}

/// A detailed, evidenced submission lands in the top bands
#[test]
fn test_strong_submission() {
    let report = strong_report();
    let founder = &report.founder_score.breakdown;

    assert!(report.total_score > 700, "got {}", report.total_score);
    assert_eq!(founder.problem_fit.total, PROBLEM_FIT_MAX);
    assert_eq!(founder.customer_understanding.total, CUSTOMER_UNDERSTANDING_MAX);
    assert_eq!(founder.execution.total, EXECUTION_MAX);
    assert_eq!(founder.resilience.total, RESILIENCE_MAX);
    assert_eq!(
        founder.customer_understanding.breakdown.commitment,
        CommitmentStrength::Signed
    );
    assert_eq!(founder.execution.breakdown.iteration_speed, 40);
    assert_eq!(founder.market_realism.breakdown.outreach_realism, 50);
    assert_eq!(founder.market_realism.breakdown.conversion_realism, 40);
    assert_eq!(founder.resilience.breakdown.quit_scale, 35);
    assert_eq!(founder.resilience.level, ResilienceLevel::Exceptional);
    assert_eq!(report.startup_score.breakdown.traction, 50);

    assert_eq!(report.grade, Grade::APlus);
    assert_eq!(report.investor_readiness.level, ReadinessLevel::HighlyReady);
    assert_eq!(report.percentile, 95);
}

/// No dimension warnings when every dimension clears its floor
#[test]
fn test_strong_submission_feedback() {
    let report = strong_report();
    assert_eq!(
        report.overall_feedback,
        vec!["Outstanding profile - you're in the top tier of seed-stage founders".to_string()]
    );
}

/// A bare submission scores near the floor with the lowest headline
#[test]
fn test_minimal_submission() {
    let report = minimal_report();

    // "Scheduling is hard." earns the unspecified-origin tier, quit scale 10 the lowest tier,
    // and a blank traction type the flat non-revenue score
    assert_eq!(report.founder_score.breakdown.problem_fit.total, 5);
    assert_eq!(report.founder_score.breakdown.resilience.total, 5);
    assert_eq!(report.startup_score.total, 20);
    assert_eq!(report.total_score, 30);
    assert_eq!(report.grade, Grade::F);
    assert_eq!(report.percentile, 3);
    assert_eq!(report.investor_readiness.level, ReadinessLevel::NotReady);
    assert_eq!(report.investor_readiness.score, 3);

    assert_eq!(
        report.overall_feedback,
        vec![
            "Focus on talking to customers and building an MVP before fundraising".to_string(),
            "⚠️ Strengthen your founder-problem fit story".to_string(),
            "⚠️ Talk to more customers - this is critical".to_string(),
            "⚠️ Speed up your iteration cycles".to_string(),
            "⚠️ Revisit your market sizing assumptions".to_string(),
            "LTV:CAC ratio below 3:1 suggests unit economics may not work".to_string(),
            "$100K in 18 months may be too small to attract investors".to_string(),
            "Consider increasing your outreach target - 50+ conversations shows commitment"
                .to_string(),
        ]
    );
}

/// Total is the exact sum of the six dimension totals
#[test]
fn test_total_equals_sum_of_dimensions() {
    for report in [strong_report(), minimal_report()] {
        let sum: u32 = report.dimensions().iter().map(|d| d.total()).sum();
        assert_eq!(report.total_score, sum);
        assert!(report.total_score <= TOTAL_MAX);
        for result in report.dimensions() {
            assert!(result.total() <= result.dimension().max_score());
        }
    }
}

/// Same inputs and date, same report
#[test]
fn test_deterministic() {
    assert_eq!(strong_report(), strong_report());
}

/// Recency is measured against the supplied date, not the clock
#[test]
fn test_as_of_drives_recency() {
    let assessment: AssessmentInput = fixture("strong_assessment.json");
    let profile = StartupProfileInput::default();

    let fresh = calculate_q_score(&assessment, &profile, as_of());
    let stale = calculate_q_score(
        &assessment,
        &profile,
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    );
    let evidence = |r: &ScoreReport| {
        r.founder_score
            .breakdown
            .customer_understanding
            .breakdown
            .customer_evidence
    };
    assert_eq!(evidence(&fresh) - evidence(&stale), 25 - 3);
}

/// Report serializes with camelCase keys and string grades
#[test]
fn test_report_wire_format() {
    let json = serde_json::to_value(strong_report()).unwrap();

    assert_eq!(json["grade"], "A+");
    assert_eq!(json["investorReadiness"]["level"], "Highly Ready");
    assert!(json["totalScore"].is_u64());
    assert!(json["founderScore"]["breakdown"]["problemFit"]["breakdown"]["problemOrigin"].is_u64());
    assert!(json["founderScore"]["breakdown"]["marketRealism"]["metrics"]["ltvCacRatio"].is_f64());

    let back: ScoreReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, strong_report());
}
