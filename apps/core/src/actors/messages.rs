use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::dispatch::Channel;
use crate::synth::ExplanationArtifact;

// Re-export AppError for convenience
pub use crate::error::AppError;

/// What a completed explanation request hands back to its caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainOutcome {
    pub request_id: Uuid,
    pub channel: Channel,
    /// The static fallback was returned without running the engine
    pub short_circuited: bool,
    /// The session was cleared while this request ran, so the result was not stored
    pub superseded: bool,
    pub artifact: Arc<ExplanationArtifact>,
    pub completed_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

/// Messages that can be sent to the session actor.
#[derive(Debug)]
pub enum SessionMessage {
    /// A request to explain a raw input.
    Explain {
        raw: String,
        channel: Channel,
        /// A channel to send the outcome back.
        responder: oneshot::Sender<Result<ExplainOutcome, AppError>>,
    },
    /// Empty the current-artifact slot and supersede any in-flight request.
    Clear {
        responder: oneshot::Sender<()>,
    },
    /// A command to shut down the session actor.
    Shutdown,
}

/// Sent by a finished explanation task back to the session actor.
#[derive(Debug)]
pub struct Completion {
    pub request_id: Uuid,
    pub channel: Channel,
    /// Session generation when the request started
    pub generation: u64,
    pub short_circuited: bool,
    pub started: Instant,
    pub result: Result<ExplanationArtifact, AppError>,
    pub responder: oneshot::Sender<Result<ExplainOutcome, AppError>>,
}
