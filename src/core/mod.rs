//! Scoring engine

pub mod keywords;
pub mod text_signals;

pub mod customer;
pub mod execution;
pub mod market;
pub mod problem_fit;
pub mod resilience;
pub mod startup;

pub mod aggregator;
pub mod feedback;
pub mod qscore;

pub use customer::{classify_commitment, score_customer_understanding};
pub use execution::score_execution;
pub use market::{calculate_market_metrics, score_market_realism};
pub use problem_fit::score_problem_fit;
pub use qscore::calculate_q_score;
pub use resilience::score_resilience;
pub use startup::score_startup_profile;
