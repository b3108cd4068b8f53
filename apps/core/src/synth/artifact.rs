//! The five-section explanation handed to rendering and export collaborators.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Minimum number of entries in `use_cases` and `key_points`
pub const MIN_LIST_LEN: usize = 3;
/// Maximum number of entries in `use_cases` and `key_points`
pub const MAX_LIST_LEN: usize = 6;

/// Finished explanation. Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationArtifact {
    /// One or more paragraphs, separated by '\n'
    pub summary: String,
    /// A single paragraph
    pub analogy: String,
    /// A single code listing
    pub code_example: String,
    pub use_cases: Vec<String>,
    pub key_points: Vec<String>,
}

impl ExplanationArtifact {
    /// Verify the structural invariants every artifact must satisfy.
    pub fn check_invariants(&self) -> Result<(), AppError> {
        if self.summary.trim().is_empty() {
            return Err(AppError::Internal("artifact summary is empty".to_string()));
        }
        if self.analogy.trim().is_empty() {
            return Err(AppError::Internal("artifact analogy is empty".to_string()));
        }
        if self.analogy.contains('\n') {
            return Err(AppError::Internal(
                "artifact analogy spans several paragraphs".to_string(),
            ));
        }
        if self.code_example.trim().is_empty() {
            return Err(AppError::Internal("artifact code example is empty".to_string()));
        }
        check_list("use cases", &self.use_cases)?;
        check_list("key points", &self.key_points)?;
        Ok(())
    }
}

fn check_list(name: &str, entries: &[String]) -> Result<(), AppError> {
    if !(MIN_LIST_LEN..=MAX_LIST_LEN).contains(&entries.len()) {
        return Err(AppError::Internal(format!(
            "artifact has {} {}, expected {}..={}",
            entries.len(),
            name,
            MIN_LIST_LEN,
            MAX_LIST_LEN
        )));
    }
    if entries.iter().any(|e| e.trim().is_empty()) {
        return Err(AppError::Internal(format!("artifact has an empty entry in {}", name)));
    }
    Ok(())
}
