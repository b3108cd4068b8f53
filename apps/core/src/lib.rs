//! Docsplain core: classifies technical documentation and synthesizes
//! beginner-oriented explanations from per-domain templates.

pub mod actors;
pub mod brain;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod intake;
pub mod preferences;
pub mod synth;

#[cfg(test)]
mod tests;

pub use actors::{ExplainOutcome, SessionHandle};
pub use brain::{AnalysisRecord, ContentClassifier};
pub use config::ExplainerConfig;
pub use dispatch::{explain, route, Channel, Explainer, Route};
pub use error::AppError;
pub use export::{ExportFormat, ExportPayload};
pub use synth::{ExplanationArtifact, ExplanationSynthesizer, Fallback};
