//! Domain detection using regex signal families.
//!
//! Each domain owns a family of patterns. Families are tested in a fixed
//! priority order and the first family with any matching pattern wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Detected technical category of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    /// Component/hook based UI frameworks (hooks, JSX-like tags)
    UiFramework,
    /// General-purpose scripting (functions, classes, arrow functions)
    Scripting,
    /// HTTP APIs and clients
    NetworkApi,
    /// Stylesheets
    Styling,
    /// Nothing recognisable; default
    Generic,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Domain {
    /// Wire label, matching the serde representation
    pub fn label(&self) -> &'static str {
        match self {
            Domain::UiFramework => "ui-framework",
            Domain::Scripting => "scripting",
            Domain::NetworkApi => "network-api",
            Domain::Styling => "styling",
            Domain::Generic => "generic",
        }
    }

    /// Name used when the domain appears in prose
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::UiFramework => "UI framework",
            Domain::Scripting => "scripting",
            Domain::NetworkApi => "API",
            Domain::Styling => "CSS",
            Domain::Generic => "technical",
        }
    }
}

/// Pattern family for one domain
struct DomainFamily {
    domain: Domain,
    patterns: &'static LazyLock<Vec<Regex>>,
}

// Compile patterns once at startup
static UI_FRAMEWORK_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Hook names: useState, useEffect, useCounter
        Regex::new(r"\buse[A-Z][a-zA-Z]*").expect("Invalid regex: hook naming pattern"),
        // Capitalized tags: <Foo>, </Foo>, <Counter value={c} />; `Array<T>` is excluded by the prefix
        Regex::new(r"(?:^|[^\w$])</?[A-Z][a-zA-Z0-9]*(?:\s[^<>]*)?/?>").expect("Invalid regex: markup tag pattern"),
    ]
});

static SCRIPTING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\bfunction\s+\w+").expect("Invalid regex: function declaration"),
        Regex::new(r"\b(?:const|let|var)\s+\w+\s*=\s*(?:async\s*)?\(").expect("Invalid regex: function expression"),
        Regex::new(r"=>\s*\{").expect("Invalid regex: arrow function body"),
        Regex::new(r"\bclass\s+\w+").expect("Invalid regex: class declaration"),
    ]
});

static NETWORK_API_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"/api/").expect("Invalid regex: api path segment"),
        Regex::new(r"\b(?:GET|POST|PUT|DELETE|PATCH)\b").expect("Invalid regex: HTTP verbs"),
        Regex::new(r"\bfetch\(|\baxios\.|XMLHttpRequest").expect("Invalid regex: HTTP client calls"),
    ]
});

static STYLING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"@media\b|@keyframes\b").expect("Invalid regex: at-rules"),
        // Rule block: `.btn { color: red }`, `#main{margin:0}`, `body { ... }`
        Regex::new(r"(?:^|[\s,}])[.#]?[a-zA-Z][\w-]*(?::{1,2}[\w-]+)?\s*\{[^{}]*[a-z-]+\s*:[^{}]*\}")
            .expect("Invalid regex: selector block"),
        // Declaration: `margin-top: 4px;`
        Regex::new(r"(?m)^\s*[a-z][a-z-]*\s*:\s*[^;{}\n]+;").expect("Invalid regex: property declaration"),
    ]
});

/// Domain detector over the fixed, ordered signal families
pub struct DomainDetector {
    families: Vec<DomainFamily>,
}

impl Default for DomainDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainDetector {
    /// Create a detector with all families in priority order
    pub fn new() -> Self {
        let families = vec![
            DomainFamily {
                domain: Domain::UiFramework,
                patterns: &UI_FRAMEWORK_PATTERNS,
            },
            DomainFamily {
                domain: Domain::Scripting,
                patterns: &SCRIPTING_PATTERNS,
            },
            DomainFamily {
                domain: Domain::NetworkApi,
                patterns: &NETWORK_API_PATTERNS,
            },
            DomainFamily {
                domain: Domain::Styling,
                patterns: &STYLING_PATTERNS,
            },
        ];

        Self { families }
    }

    /// Detect the domain of a text; first matching family wins
    pub fn detect(&self, text: &str) -> Domain {
        self.families
            .iter()
            .find(|family| family.patterns.iter().any(|p| p.is_match(text)))
            .map(|family| family.domain)
            .unwrap_or(Domain::Generic)
    }

    /// Every family that matches, in priority order. Useful for diagnostics.
    pub fn matching_domains(&self, text: &str) -> Vec<Domain> {
        self.families
            .iter()
            .filter(|family| family.patterns.iter().any(|p| p.is_match(text)))
            .map(|family| family.domain)
            .collect()
    }
}
