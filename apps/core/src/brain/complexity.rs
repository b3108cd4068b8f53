//! Complexity tier scoring.
//!
//! Counts how many distinct advanced-usage signal categories appear in a text.
//! Each category contributes at most one point however often it matches.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Coarse difficulty classification, ordered from easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Beginner => "beginner",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        }
    }

    /// Tier for a signal count: 3+ advanced, 1+ intermediate, else beginner
    pub fn from_score(score: usize) -> Self {
        match score {
            0 => Complexity::Beginner,
            1 | 2 => Complexity::Intermediate,
            _ => Complexity::Advanced,
        }
    }
}

/// Advanced-usage signal categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// async / await / Promise
    Asynchronous,
    /// `class X extends Y`
    Inheritance,
    /// `interface X` or `type X = ...`
    TypeDeclaration,
    /// `<T>`, `<Item>`, or the word "generic"
    Generics,
    /// callback / closure / higher-order vocabulary
    HigherOrder,
}

static ASYNC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"async|await|Promise").expect("Invalid regex: async signal"));
static INHERITANCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bclass\s+\w+.*\bextends\b").expect("Invalid regex: inheritance signal")
});
static TYPE_DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\binterface\s+[A-Za-z_]\w*|\btype\s+[A-Z]\w*\s*(?:<[^<>]*>)?\s*=")
        .expect("Invalid regex: type declaration signal")
});
static GENERICS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bgeneric|<T>|<[A-Z]\w*>").expect("Invalid regex: generics signal")
});
static HIGHER_ORDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)callback|closure|higher-order").expect("Invalid regex: higher-order signal")
});

/// Result of scoring a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// Distinct categories that matched, in category order
    pub signals: Vec<Signal>,
    /// Resulting tier
    pub tier: Complexity,
}

impl ComplexityReport {
    pub fn score(&self) -> usize {
        self.signals.len()
    }
}

/// Complexity scorer over the five fixed signal categories
pub struct ComplexityScorer {
    categories: Vec<(Signal, &'static LazyLock<Regex>)>,
}

impl Default for ComplexityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityScorer {
    pub fn new() -> Self {
        Self {
            categories: vec![
                (Signal::Asynchronous, &ASYNC_PATTERN),
                (Signal::Inheritance, &INHERITANCE_PATTERN),
                (Signal::TypeDeclaration, &TYPE_DECLARATION_PATTERN),
                (Signal::Generics, &GENERICS_PATTERN),
                (Signal::HigherOrder, &HIGHER_ORDER_PATTERN),
            ],
        }
    }

    /// Score a text and report which categories fired
    pub fn analyze(&self, text: &str) -> ComplexityReport {
        let signals: Vec<Signal> = self
            .categories
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(signal, _)| *signal)
            .collect();

        let tier = Complexity::from_score(signals.len());
        ComplexityReport { signals, tier }
    }

    /// Just the tier
    pub fn tier(&self, text: &str) -> Complexity {
        self.analyze(text).tier
    }
}
