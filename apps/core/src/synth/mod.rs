//! # Synth Module
//!
//! Explanation synthesis from an analysis record.
//!
//! ## Components
//! - `artifact`: Output data structure and its invariants
//! - `templates`: Per-domain template banks
//! - `pacer`: Simulated delay (injected clock)
//! - `generator`: Template selection and filling
//! - `fallback`: Static artifacts for short-circuited requests

pub mod artifact;
pub mod fallback;
pub mod generator;
pub mod pacer;
pub mod templates;

pub use artifact::{ExplanationArtifact, MAX_LIST_LEN, MIN_LIST_LEN};
pub use fallback::Fallback;
pub use generator::{ExplanationSynthesizer, ADVANCED_ADVISORY};
pub use pacer::{DelayWindow, Pacer, TokioPacer};
pub use templates::{bank_for, TemplateBank};
