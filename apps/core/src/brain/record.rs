//! Analysis Record - Output structure of the content classifier.

use serde::{Deserialize, Serialize};

use super::complexity::Complexity;
use super::domain::Domain;
use super::keywords::Topic;

/// Structured analysis of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    /// Detected technical domain
    pub domain: Domain,

    /// Complexity tier
    pub complexity: Complexity,

    /// Topics from the controlled vocabulary, no duplicates
    pub topics: Vec<Topic>,

    /// Lowercase vocabulary terms found in the text, no duplicates
    pub key_terms: Vec<String>,

    /// Fenced and inline code spans in order of appearance, delimiters included
    pub code_fragments: Vec<String>,
}

impl Default for AnalysisRecord {
    fn default() -> Self {
        Self {
            domain: Domain::Generic,
            complexity: Complexity::Beginner,
            topics: vec![],
            key_terms: vec![],
            code_fragments: vec![],
        }
    }
}

impl AnalysisRecord {
    /// Up to the first three key terms
    pub fn leading_terms(&self) -> &[String] {
        let end = self.key_terms.len().min(3);
        &self.key_terms[..end]
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Domain: {}, Complexity: {}, Topics: {}, Key terms: {}, Code fragments: {}",
            self.domain,
            self.complexity,
            self.topics.len(),
            self.key_terms.len(),
            self.code_fragments.len()
        )
    }
}
