//! Q-Score CLI
//!
//! Usage:
//!   qscore --assessment founder.json --profile startup.json
//!   qscore -a founder.json -p startup.json --as-of 2024-06-30 --json
//!   qscore -a founder.json -p startup.json --verbose

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::{ColoredString, Colorize};
use serde::de::DeserializeOwned;

use qscore::core::calculate_q_score;
use qscore::error::{CliError, Result};
use qscore::telemetry;
use qscore::types::{parse_date, AssessmentInput, Grade, ScoreReport, StartupProfileInput};
use qscore::{TOTAL_MAX, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "qscore",
    version = VERSION,
    about = "Q-Score - deterministic founder and startup quality scoring",
    long_about = "Scores a founder self-assessment and a startup profile on six\n\
                  dimensions and reports a 0-1000 Q-Score.\n\n\
                  Dimensions:\n  \
                  Problem-Fit             200\n  \
                  Customer-Understanding  200\n  \
                  Execution               150\n  \
                  Market-Realism          150\n  \
                  Resilience              100\n  \
                  Startup-Profile         200"
)]
struct Args {
    /// Founder assessment JSON file
    #[arg(short, long)]
    assessment: PathBuf,

    /// Startup profile JSON file
    #[arg(short, long)]
    profile: PathBuf,

    /// Date recency is measured against (YYYY-MM-DD, default: today)
    #[arg(long, env = "QSCORE_AS_OF")]
    as_of: Option<String>,

    /// Output the full report as JSON
    #[arg(long)]
    json: bool,

    /// Show per-dimension breakdown and feedback
    #[arg(long)]
    verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Log filter when RUST_LOG is unset (e.g. "qscore=debug")
    #[arg(long, env = "QSCORE_LOG", default_value = telemetry::DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }
    telemetry::init(&args.log_level, !args.no_color)?;

    let as_of = resolve_as_of(args.as_of.as_deref())?;
    let assessment: AssessmentInput = load_json(&args.assessment)?;
    let profile: StartupProfileInput = load_json(&args.profile)?;

    let report = calculate_q_score(&assessment, &profile, as_of);

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(CliError::Output)?;
        println!("{json}");
    } else {
        print_summary(&report, as_of);
        if args.verbose {
            print_dimensions(&report);
        }
        print_feedback(&report);
    }
    Ok(())
}

fn resolve_as_of(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(raw) => parse_date(raw).ok_or_else(|| CliError::InvalidDate(raw.to_string())),
        None => Ok(Local::now().date_naive()),
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn paint_grade(grade: Grade) -> ColoredString {
    let text = grade.as_str();
    match grade.letter() {
        'A' => text.green().bold(),
        'B' => text.cyan().bold(),
        'C' => text.yellow().bold(),
        _ => text.red().bold(),
    }
}

fn print_summary(report: &ScoreReport, as_of: NaiveDate) {
    println!("{}", format!("Q-Score v{VERSION}").bold());
    println!("{}", "========================================".dimmed());
    println!(
        "  Score:      {}/{}  ({})",
        report.total_score.to_string().bold(),
        TOTAL_MAX,
        paint_grade(report.grade)
    );
    println!("  Percentile: {}", report.percentile);
    println!(
        "  Readiness:  {} ({}/10)",
        report.investor_readiness.level, report.investor_readiness.score
    );
    println!("              {}", report.investor_readiness.description.dimmed());
    println!("  As of:      {as_of}");
    println!();
}

fn print_dimensions(report: &ScoreReport) {
    println!("{}", "Dimensions".bold());
    for result in report.dimensions() {
        let dimension = result.dimension();
        println!(
            "  {:<24} {:>3}/{:<3}  {}",
            dimension.label(),
            result.total(),
            dimension.max_score(),
            paint_grade(result.grade())
        );
        for line in result.feedback() {
            println!("    {} {}", "-".dimmed(), line.dimmed());
        }
    }

    let metrics = &report.founder_score.breakdown.market_realism.metrics;
    println!();
    println!("{}", "Market metrics".bold());
    println!("  Projected revenue:   ${:.0}", metrics.projected_revenue);
    println!("  Customers:           {:.1}", metrics.customer_count);
    match metrics.revenue_per_conversation {
        Some(value) => println!("  Revenue/conversation: ${value:.2}"),
        None => println!("  Revenue/conversation: n/a"),
    }
    println!("  LTV:CAC:             {:.1}", metrics.ltv_cac_ratio);
    println!("  Conversations/day:   {:.1}", metrics.daily_conversations);
    println!();
}

fn print_feedback(report: &ScoreReport) {
    println!("{}", "Feedback".bold());
    for line in &report.overall_feedback {
        println!("  {line}");
    }
}
