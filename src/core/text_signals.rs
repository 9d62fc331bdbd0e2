//! Text signal extractors
//!
//! The only place free text is interpreted. Scorers never inspect strings
//! directly; they ask these functions for word counts, indicator hits and
//! numeric tokens. All functions are pure and accept empty input.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::keywords;
use crate::types::{Quantity, QuantityKind};

lazy_static! {
    // =========================================================================
    // Numbers: 50 | 5,000 | 2.5 | 40% | 3x
    // =========================================================================
    static ref RE_NUMBER: Regex = Regex::new(
        r"(?i)(\d{1,3}(?:,\d{3})+|\d+)(\.\d+)?(\s?%|x\b)?"
    ).unwrap();

    // =========================================================================
    // Durations: "5 years", "18 months"
    // =========================================================================
    static ref RE_DURATION: Regex = Regex::new(
        r"(?i)(\d+)\s*(year|month|week)"
    ).unwrap();

    // =========================================================================
    // Specificity checks
    // =========================================================================
    static ref RE_ORGANIZATION: Regex = Regex::new(
        r"\b(at|worked|joined|from)\s+[A-Z]\w+"
    ).unwrap();

    static ref RE_CONTEXTUAL_NUMBER: Regex = Regex::new(
        r"(?i)\d+\s*(year|customer|user|client|partner|company)"
    ).unwrap();

    static ref RE_PERSON: Regex = Regex::new(
        r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b"
    ).unwrap();

    static ref RE_LEGAL_COMMITMENT: Regex = Regex::new(
        r"(?i)\b(loi|letter of intent|contract|signed|agreement)"
    ).unwrap();

    static ref RE_QUANTIFIED_DEMAND: Regex = Regex::new(
        r"(?i)\d+\s*(people|customers|companies|users|requests|asked)"
    ).unwrap();
}

/// Whitespace-delimited token count; repeated whitespace collapses
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True if any indicator appears in `text` (case-insensitive substring)
pub fn has_any_indicator(text: &str, indicators: &[&str]) -> bool {
    if text.is_empty() {
        return false;
    }
    let lower = text.to_lowercase();
    indicators.iter().any(|indicator| lower.contains(indicator))
}

/// Number of distinct indicators present in `text`
pub fn count_indicators(text: &str, indicators: &[&str]) -> usize {
    if text.is_empty() {
        return 0;
    }
    let lower = text.to_lowercase();
    indicators
        .iter()
        .filter(|indicator| lower.contains(*indicator))
        .count()
}

/// Every numeric token with the way it was written
pub fn extract_quantities(text: &str) -> Vec<Quantity> {
    RE_NUMBER
        .captures_iter(text)
        .filter_map(|caps| {
            let integer = caps.get(1)?.as_str().replace(',', "");
            let fraction = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            let value: f64 = format!("{integer}{fraction}").parse().ok()?;
            let kind = match caps.get(3).map(|m| m.as_str().trim()) {
                Some("%") => QuantityKind::Percent,
                Some(_) => QuantityKind::Multiplier,
                None => QuantityKind::Plain,
            };
            Some(Quantity { value, kind })
        })
        .collect()
}

/// Every numeric value in `text`, percentages and multipliers included
pub fn extract_numbers(text: &str) -> Vec<f64> {
    extract_quantities(text).into_iter().map(|q| q.value).collect()
}

pub fn first_number(text: &str) -> Option<f64> {
    extract_quantities(text).first().map(|q| q.value)
}

/// Literal double quotation mark, i.e. a captured customer quote
///
/// Apostrophes do not count: contractions would otherwise always match.
pub fn has_quote_mark(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '"' | '\u{201C}' | '\u{201D}'))
}

/// First "N year/month/week" phrase, converted to months
///
/// Day counts are not exposure; "3 days of calls" never hides a later "2 years".
pub fn duration_in_months(text: &str) -> Option<f64> {
    let caps = RE_DURATION.captures(text)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let months = match caps.get(2)?.as_str().to_lowercase().as_str() {
        "year" => value * 12.0,
        "month" => value,
        "week" => value / 4.0,
        _ => return None,
    };
    Some(months)
}

/// Numbers that come with a time or cost unit
pub fn has_quantification(text: &str) -> bool {
    !extract_quantities(text).is_empty()
        && (has_any_indicator(text, keywords::TIME_UNITS)
            || has_any_indicator(text, keywords::COST_UNITS))
}

/// "worked at Stripe", "joined Acme"
pub fn mentions_organization(text: &str) -> bool {
    RE_ORGANIZATION.is_match(text)
}

/// "10 years", "15 customers"
pub fn has_contextual_number(text: &str) -> bool {
    RE_CONTEXTUAL_NUMBER.is_match(text)
}

/// Two capitalized words in a row, e.g. a named person
pub fn mentions_person(text: &str) -> bool {
    RE_PERSON.is_match(text)
}

pub fn mentions_legal_commitment(text: &str) -> bool {
    RE_LEGAL_COMMITMENT.is_match(text)
}

/// "30 customers", "12 people asked"
pub fn has_quantified_demand(text: &str) -> bool {
    RE_QUANTIFIED_DEMAND.is_match(text)
}

// =============================================================================
// TESTS
// =============================================================================
