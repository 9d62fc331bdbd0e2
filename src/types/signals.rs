//! Signal structures produced by the text extractors

use serde::{Deserialize, Serialize};

/// A numeric token found in free text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub kind: QuantityKind,
}

/// How a numeric token was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    /// "50 users", "$5,000"
    Plain,
    /// "40%"
    Percent,
    /// "3x"
    Multiplier,
}

/// How binding a prospective customer's stated interest is
///
/// Variants are ordered weakest to strongest so `max` picks the most binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitmentStrength {
    /// Nothing described
    Absent,
    /// Described, but no commitment language
    Stated,
    /// interested / would consider / maybe
    SoftInterest,
    /// will pay / switch / commit
    Intent,
    /// signed / LOI / contract / paid
    Signed,
}

impl CommitmentStrength {
    pub fn label(&self) -> &'static str {
        match self {
            CommitmentStrength::Absent => "none",
            CommitmentStrength::Stated => "stated",
            CommitmentStrength::SoftInterest => "soft interest",
            CommitmentStrength::Intent => "intent",
            CommitmentStrength::Signed => "signed",
        }
    }
}

impl std::fmt::Display for CommitmentStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
