//! Keyword registry
//!
//! Every indicator list the scorers match against lives here so the lists can
//! be tuned in one place. Matching is case-insensitive substring matching via
//! [`crate::core::text_signals`]; entries are lowercase.

// =============================================================================
// Problem-Fit
// =============================================================================

/// First-hand experience of the problem
pub const PERSONAL_EXPERIENCE: &[&str] = &[
    "i experienced",
    "i dealt with",
    "my team",
    "i spent",
    "i struggled",
    "i had to",
    "happened to me",
    "i was",
    "i worked",
    "my company",
    "i faced",
    "i encountered",
];

/// Second-hand observation of the problem (weaker signal)
pub const OBSERVATION: &[&str] = &["i saw", "i noticed", "i observed", "i found"];

/// Others confirming the problem or demand
pub const VALIDATION: &[&str] = &[
    "others",
    "customers",
    "users",
    "people",
    "companies",
    "asked",
    "requested",
    "shared",
    "signed",
    "committed",
    "loi",
    "letter of intent",
    "agreement",
    "interested",
];

/// Units that turn a bare number into a quantified impact
pub const TIME_UNITS: &[&str] = &["hour", "day", "week", "month", "year", "minute"];

pub const COST_UNITS: &[&str] = &[
    "dollar", "$", "cost", "expense", "loss", "waste", "paid", "price",
];

/// Connectives that tie a claimed advantage to evidence
pub const EVIDENCE_LINKS: &[&str] = &[
    "because",
    "which let us",
    "which let me",
    "as a result",
    "which meant",
    "this allowed",
    "that's why",
    "so we",
    "so i",
    "led to",
    "resulting in",
    "for example",
];

/// Binding commitments cited as proof of customer relationships
pub const ADVANTAGE_COMMITMENT: &[&str] = &[
    "loi",
    "letter of intent",
    "signed",
    "contract",
    "agreement",
];

// =============================================================================
// Customer-Understanding
// =============================================================================

pub const PAIN: &[&str] = &[
    "nightmare",
    "terrible",
    "hate",
    "frustrated",
    "expensive",
    "waste",
    "insane",
    "killing us",
    "painful",
    "annoying",
    "struggle",
];

/// Evidence that a conversation changed the founder's thinking
pub const LEARNING: &[&str] = &[
    "realized",
    "discovered",
    "feedback",
    "learned",
    "found out",
    "surprised",
    "didn't expect",
    "thought",
    "assumed",
    "actually",
    "turns out",
    "wrong",
];

/// Commitment tiers, strongest first
pub const COMMITMENT_SIGNED: &[&str] = &["signed", "loi", "contract", "paid"];
pub const COMMITMENT_INTENT: &[&str] = &["will pay", "switch", "commit"];
pub const COMMITMENT_SOFT: &[&str] = &["interested", "would consider", "maybe"];

/// Something was actually done about a disproved assumption
pub const ASSUMPTION_ACTION: &[&str] = &[
    "changed", "pivoted", "adjusted", "rebuilt", "added", "removed", "switched", "now",
    "instead", "modified",
];

/// Impact words that count as a quantified improvement without digits
pub const IMPACT: &[&str] = &["doubled", "tripled", "increased", "decreased"];

// =============================================================================
// Execution
// =============================================================================

pub const COMPARISON: &[&str] = &[
    "vs", "compared", "before", "after", "baseline", "goal", "target",
];

/// Concrete product changes
pub const PRODUCT_CHANGE: &[&str] = &[
    "button", "feature", "flow", "design", "copy", "code", "page", "screen", "added",
    "removed", "changed",
];

// =============================================================================
// Resilience
// =============================================================================

pub const ADVERSITY: &[&str] = &[
    "failed",
    "rejected",
    "lost",
    "quit",
    "fired",
    "broke",
    "ran out",
    "couldn't",
    "crisis",
    "disaster",
    "wrong",
    "mistake",
    "terrible",
    "devastating",
    "collapse",
];

pub const INTRINSIC_MOTIVATION: &[&str] = &[
    "believe",
    "mission",
    "customers need",
    "problem matters",
    "committed",
    "won't give up",
    "have to solve",
    "passion",
    "care about",
    "important",
    "make a difference",
];

/// Looser check used only for feedback on the motivation answer
pub const DEEPER_WHY: &[&str] = &["believe", "mission", "customers", "problem", "care"];
