//! Letter grades and investor-readiness tiers

use serde::{Deserialize, Serialize};

use super::tier::TierTable;

/// Percentage-of-maximum bands shared by every dimension
const SHARE_BANDS: TierTable<u64, Grade> = TierTable::at_least(
    &[
        (95, Grade::APlus),
        (90, Grade::A),
        (85, Grade::AMinus),
        (80, Grade::BPlus),
        (75, Grade::B),
        (70, Grade::BMinus),
        (65, Grade::CPlus),
        (60, Grade::C),
        (55, Grade::CMinus),
        (50, Grade::D),
    ],
    Grade::F,
);

/// Letter grade, A+ down to F
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Grade for `score` as a share of `max`
    pub fn from_share(score: u32, max: u32) -> Grade {
        if max == 0 {
            return Grade::F;
        }
        let percent = u64::from(score) * 100 / u64::from(max);
        SHARE_BANDS.lookup(percent)
    }

    /// Letter family, used for terminal colouring
    pub fn letter(&self) -> char {
        self.as_str().chars().next().unwrap_or('F')
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Investor-readiness label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadinessLevel {
    #[serde(rename = "Highly Ready")]
    HighlyReady,
    Ready,
    #[serde(rename = "Nearly Ready")]
    NearlyReady,
    Developing,
    #[serde(rename = "Not Ready")]
    NotReady,
}

impl ReadinessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessLevel::HighlyReady => "Highly Ready",
            ReadinessLevel::Ready => "Ready",
            ReadinessLevel::NearlyReady => "Nearly Ready",
            ReadinessLevel::Developing => "Developing",
            ReadinessLevel::NotReady => "Not Ready",
        }
    }
}

impl std::fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How prepared the founder is to be shown to institutional investors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorReadiness {
    /// 1-9
    pub score: u8,
    pub level: ReadinessLevel,
    pub description: String,
}

/// Resilience band derived from the resilience total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResilienceLevel {
    Exceptional,
    Strong,
    Good,
    Developing,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}
