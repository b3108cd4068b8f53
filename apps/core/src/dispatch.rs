//! Request dispatch: decides whether a request is short-circuited to a static
//! fallback or analyzed, then runs classifier and synthesizer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::brain::ContentClassifier;
use crate::config::ExplainerConfig;
use crate::error::AppError;
use crate::synth::{DelayWindow, ExplanationArtifact, ExplanationSynthesizer, Fallback, Pacer, TokioPacer};

/// How the raw input reached the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Paste,
    Url,
    File,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Channel::Paste => "paste",
            Channel::Url => "url",
            Channel::File => "file",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Channel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paste" => Ok(Channel::Paste),
            "url" => Ok(Channel::Url),
            "file" => Ok(Channel::File),
            other => Err(AppError::Validation(format!("unknown input channel '{}'", other))),
        }
    }
}

/// Outcome of the dispatching step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// Bypass the engine with a static artifact
    ShortCircuit(Fallback),
    /// Analyze the trimmed input
    Analyze(&'a str),
}

/// Pure dispatch decision.
///
/// URL input mentioning "http" always gets the URL fallback; otherwise a
/// trimmed input shorter than `threshold` characters gets the short-content
/// fallback.
pub fn route(raw: &str, channel: Channel, threshold: usize) -> Route<'_> {
    if channel == Channel::Url && raw.contains("http") {
        return Route::ShortCircuit(Fallback::UrlContent);
    }

    let trimmed = raw.trim();
    if trimmed.chars().count() < threshold {
        return Route::ShortCircuit(Fallback::ShortContent);
    }

    Route::Analyze(trimmed)
}

/// The explanation engine: dispatch, classify, synthesize.
pub struct Explainer {
    classifier: ContentClassifier,
    synthesizer: ExplanationSynthesizer,
    short_content_threshold: usize,
}

impl Default for Explainer {
    fn default() -> Self {
        Self {
            classifier: ContentClassifier::new(),
            synthesizer: ExplanationSynthesizer::default(),
            short_content_threshold: ExplainerConfig::default().short_content_threshold,
        }
    }
}

impl Explainer {
    /// Build an engine from configuration with the real tokio timer.
    pub fn from_config(config: &ExplainerConfig) -> Result<Self, AppError> {
        Self::with_pacer(config, Arc::new(TokioPacer))
    }

    /// Build an engine with a custom pacer.
    pub fn with_pacer(config: &ExplainerConfig, pacer: Arc<dyn Pacer>) -> Result<Self, AppError> {
        config.check()?;
        let delay = DelayWindow::new(config.min_delay(), config.max_delay())?;
        Ok(Self {
            classifier: ContentClassifier::new(),
            synthesizer: ExplanationSynthesizer::new(delay, pacer),
            short_content_threshold: config.short_content_threshold,
        })
    }

    pub fn classifier(&self) -> &ContentClassifier {
        &self.classifier
    }

    pub fn synthesizer(&self) -> &ExplanationSynthesizer {
        &self.synthesizer
    }

    /// Dispatch decision for this engine's threshold
    pub fn route<'a>(&self, raw: &'a str, channel: Channel) -> Route<'a> {
        route(raw, channel, self.short_content_threshold)
    }

    /// Produce the explanation for one request.
    ///
    /// Short or URL inputs return a static fallback after the same simulated
    /// delay, without running the classifier or template filling. A synthesized artifact that breaks the
    /// structural invariants is reported as an internal error; no partial
    /// artifact is ever returned.
    #[instrument(skip(self, raw, rng), fields(chars = raw.chars().count()))]
    pub async fn explain<R>(
        &self,
        raw: &str,
        channel: Channel,
        rng: &mut R,
    ) -> Result<ExplanationArtifact, AppError>
    where
        R: Rng + Send,
    {
        let text = match self.route(raw, channel) {
            Route::ShortCircuit(fallback) => {
                info!(?fallback, "Short-circuiting to fallback artifact");
                self.synthesizer.pace(rng).await;
                return Ok(fallback.artifact().clone());
            }
            Route::Analyze(text) => text,
        };

        let record = self.classifier.analyze(text);
        info!("Analyzed request: {}", record.summary());

        let artifact = self.synthesizer.generate(text, &record, rng).await;
        if let Err(e) = artifact.check_invariants() {
            warn!("Synthesized artifact rejected: {}", e);
            return Err(e);
        }

        Ok(artifact)
    }
}

/// One-shot explanation with default configuration and an entropy-seeded RNG.
pub async fn explain(raw: &str, channel: Channel) -> Result<ExplanationArtifact, AppError> {
    let explainer = Explainer::default();
    let mut rng = StdRng::from_entropy();
    explainer.explain(raw, channel, &mut rng).await
}
