//! # Brain Module
//!
//! Rule-based content classifier for Docsplain.
//! Inspects raw documentation text and produces an [`AnalysisRecord`].
//!
//! ## Components
//! - `domain`: Domain detection using ordered regex families
//! - `complexity`: Advanced-usage signal counting
//! - `keywords`: Key-term and topic vocabularies
//! - `fragments`: Fenced and inline code span extraction
//! - `record`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod complexity;
pub mod domain;
pub mod fragments;
pub mod keywords;
pub mod record;

pub use analyzer::ContentClassifier;
pub use complexity::{Complexity, ComplexityReport, ComplexityScorer, Signal};
pub use domain::{Domain, DomainDetector};
pub use fragments::{extract_fragments, strip_delimiters};
pub use keywords::{KeyTermExtractor, Topic, TopicIdentifier};
pub use record::AnalysisRecord;
