//! Key term and topic extraction.
//!
//! Both are plain case-insensitive substring tests against fixed vocabularies.
//! No tokenization and no stemming: "usestate" contains "state".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vocabulary of domain terms, in reporting order
const KEY_TERMS: &[&str] = &[
    // UI frameworks
    "component",
    "hook",
    "state",
    "props",
    "render",
    "effect",
    // Language features
    "async",
    "await",
    "promise",
    "callback",
    "closure",
    "scope",
    // Networking
    "api",
    "endpoint",
    "request",
    "response",
    "http",
    "json",
    // Styling
    "css",
    "selector",
    "property",
    "responsive",
    "flexbox",
    "grid",
];

/// Controlled topic vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "State Management")]
    StateManagement,
    #[serde(rename = "Side Effects")]
    SideEffects,
    #[serde(rename = "Event Handling")]
    EventHandling,
    #[serde(rename = "Data Fetching")]
    DataFetching,
    #[serde(rename = "Styling")]
    Styling,
    #[serde(rename = "Performance")]
    Performance,
    #[serde(rename = "Forms")]
    Forms,
    #[serde(rename = "Routing")]
    Routing,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::StateManagement,
        Topic::SideEffects,
        Topic::EventHandling,
        Topic::DataFetching,
        Topic::Styling,
        Topic::Performance,
        Topic::Forms,
        Topic::Routing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Topic::StateManagement => "State Management",
            Topic::SideEffects => "Side Effects",
            Topic::EventHandling => "Event Handling",
            Topic::DataFetching => "Data Fetching",
            Topic::Styling => "Styling",
            Topic::Performance => "Performance",
            Topic::Forms => "Forms",
            Topic::Routing => "Routing",
        }
    }

    /// Lowercase keywords that signal this topic
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::StateManagement => &["state", "usestate", "reducer", "context"],
            Topic::SideEffects => &["useeffect", "effect", "lifecycle", "cleanup"],
            Topic::EventHandling => &["onclick", "onchange", "event", "handler"],
            Topic::DataFetching => &["fetch", "api", "axios", "request", "response"],
            Topic::Styling => &["css", "style", "class", "selector", "responsive"],
            Topic::Performance => &["memo", "callback", "usememo", "optimization"],
            Topic::Forms => &["form", "input", "validation", "submit"],
            Topic::Routing => &["route", "navigate", "link", "router"],
        }
    }
}

/// Extracts vocabulary terms present in a text
pub struct KeyTermExtractor {
    vocabulary: Vec<&'static str>,
}

impl Default for KeyTermExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTermExtractor {
    pub fn new() -> Self {
        Self {
            vocabulary: KEY_TERMS.to_vec(),
        }
    }

    /// Terms found in the text, lowercase, in vocabulary order, no duplicates
    pub fn extract(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        let mut found: Vec<String> = Vec::new();

        for term in &self.vocabulary {
            if text_lower.contains(term) && !found.iter().any(|f| f == term) {
                found.push((*term).to_string());
            }
        }

        found
    }
}

/// Maps a text onto the topic vocabulary
#[derive(Default)]
pub struct TopicIdentifier;

impl TopicIdentifier {
    pub fn new() -> Self {
        Self
    }

    /// Topics with at least one keyword present, in vocabulary order
    pub fn identify(&self, text: &str) -> Vec<Topic> {
        let text_lower = text.to_lowercase();

        Topic::ALL
            .iter()
            .copied()
            .filter(|topic| topic.keywords().iter().any(|k| text_lower.contains(k)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_containment() {
        let extractor = KeyTermExtractor::new();

        let terms = extractor.extract("const [c, setC] = useState(0)");
        assert_eq!(terms, vec!["state".to_string()]);
    }

    #[test]
    fn test_case_insensitive_and_ordered() {
        let extractor = KeyTermExtractor::new();

        let terms = extractor.extract("Parse the JSON Response from the HTTP API");
        assert_eq!(terms, vec!["api", "response", "http", "json"]);
    }

    #[test]
    fn test_empty_text_has_no_terms() {
        let extractor = KeyTermExtractor::new();

        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_topics() {
        let identifier = TopicIdentifier::new();

        let topics = identifier.identify("Submit the form, then navigate to the next route.");
        assert_eq!(topics, vec![Topic::Forms, Topic::Routing]);
    }

    #[test]
    fn test_topic_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Topic::DataFetching).unwrap(),
            "\"Data Fetching\""
        );
        assert_eq!(Topic::SideEffects.to_string(), "Side Effects");
    }
}
