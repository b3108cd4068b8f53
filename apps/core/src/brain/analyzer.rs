//! Content Classifier - orchestrator for the brain module.
//!
//! Runs domain detection, code fragment extraction, complexity scoring,
//! key-term extraction and topic identification over one text and assembles
//! an [`AnalysisRecord`]. Stateless apart from the fixed pattern tables, so a
//! single instance can be shared freely.

use tracing::debug;

use super::complexity::ComplexityScorer;
use super::domain::DomainDetector;
use super::fragments::extract_fragments;
use super::keywords::{KeyTermExtractor, TopicIdentifier};
use super::record::AnalysisRecord;

/// Main classifier that orchestrates all analysis components
pub struct ContentClassifier {
    domain_detector: DomainDetector,
    complexity_scorer: ComplexityScorer,
    term_extractor: KeyTermExtractor,
    topic_identifier: TopicIdentifier,
}

impl Default for ContentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentClassifier {
    pub fn new() -> Self {
        Self {
            domain_detector: DomainDetector::new(),
            complexity_scorer: ComplexityScorer::new(),
            term_extractor: KeyTermExtractor::new(),
            topic_identifier: TopicIdentifier::new(),
        }
    }

    /// Analyze a text. Never fails; empty input yields a generic beginner record.
    pub fn analyze(&self, text: &str) -> AnalysisRecord {
        // 1. Domain
        let domain = self.domain_detector.detect(text);

        // 2. Code fragments
        let code_fragments = extract_fragments(text);

        // 3. Complexity
        let complexity_report = self.complexity_scorer.analyze(text);

        // 4. Key terms
        let key_terms = self.term_extractor.extract(text);

        // 5. Topics
        let topics = self.topic_identifier.identify(text);

        let record = AnalysisRecord {
            domain,
            complexity: complexity_report.tier,
            topics,
            key_terms,
            code_fragments,
        };

        debug!(
            signals = ?complexity_report.signals,
            "Classified content: {}",
            record.summary()
        );

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::{Complexity, Domain, Topic};

    #[test]
    fn test_empty_input() {
        let classifier = ContentClassifier::new();

        let record = classifier.analyze("");
        assert_eq!(record, AnalysisRecord::default());
    }

    #[test]
    fn test_counter_component() {
        let classifier = ContentClassifier::new();

        let record = classifier.analyze(
            "function useCounter() { const [c, setC] = useState(0); return <Counter value={c} /> }",
        );
        assert_eq!(record.domain, Domain::UiFramework);
        assert_eq!(record.complexity, Complexity::Beginner);
        assert_eq!(record.key_terms, vec!["state".to_string()]);
        assert_eq!(record.topics, vec![Topic::StateManagement]);
        assert!(record.code_fragments.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let classifier = ContentClassifier::new();
        let text = "Use `fetch('/api/users')` with async/await and handle the JSON response.";

        assert_eq!(classifier.analyze(text), classifier.analyze(text));
    }
}
