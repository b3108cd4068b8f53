use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::timeout;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::actors::messages::{AppError, Completion, ExplainOutcome, SessionMessage};
use crate::config::ExplainerConfig;
use crate::dispatch::{Channel, Explainer, Route};
use crate::synth::ExplanationArtifact;

/// A handle to the session actor.
///
/// The session owns the single "current artifact" slot and the busy signal a
/// UI binds its loading state to. At most one request runs at a time: a
/// request submitted while another is in flight is rejected with
/// [`AppError::Busy`].
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
    busy: watch::Receiver<bool>,
    current: watch::Receiver<Option<Arc<ExplanationArtifact>>>,
    reply_timeout: Duration,
}

impl SessionHandle {
    /// Spawns a session actor using the real tokio timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_config(config: &ExplainerConfig) -> Result<Self, AppError> {
        let explainer = Explainer::from_config(config)?;
        Ok(Self::new(explainer, config))
    }

    /// Spawns a session actor around a prepared engine.
    ///
    /// `config.seed` seeds the session RNG; without it the RNG is seeded from
    /// OS entropy.
    pub fn new(explainer: Explainer, config: &ExplainerConfig) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let (completion_tx, completion_rx) = mpsc::channel(8);
        let (busy_tx, busy_rx) = watch::channel(false);
        let (current_tx, current_rx) = watch::channel(None);

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let runner = SessionRunner {
            receiver,
            completion_tx,
            completion_rx,
            explainer: Arc::new(explainer),
            rng,
            generation: 0,
            busy: busy_tx,
            current: current_tx,
        };
        tokio::spawn(async move { runner.run().await });

        Self {
            sender,
            busy: busy_rx,
            current: current_rx,
            reply_timeout: config.session_timeout(),
        }
    }

    /// Explains a raw input received on `channel`.
    ///
    /// On success the artifact is also stored in the current slot, unless the
    /// session was cleared while the request ran.
    #[instrument(skip(self, raw))]
    pub async fn explain(
        &self,
        raw: impl Into<String>,
        channel: Channel,
    ) -> Result<ExplainOutcome, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = SessionMessage::Explain {
            raw: raw.into(),
            channel,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(self.reply_timeout, recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))?
    }

    /// Empties the current slot. An in-flight request still runs to completion
    /// but its result is discarded.
    pub async fn clear(&self) -> Result<(), AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::Clear { responder: send })
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(self.reply_timeout, recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))
    }

    /// Stops the actor. Pending replies are dropped.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender
            .send(SessionMessage::Shutdown)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))
    }

    /// Whether a request is in flight.
    pub fn busy(&self) -> bool {
        *self.busy.borrow()
    }

    pub fn subscribe_busy(&self) -> watch::Receiver<bool> {
        self.busy.clone()
    }

    /// The most recently stored artifact.
    pub fn current(&self) -> Option<Arc<ExplanationArtifact>> {
        self.current.borrow().clone()
    }

    pub fn subscribe_current(&self) -> watch::Receiver<Option<Arc<ExplanationArtifact>>> {
        self.current.clone()
    }
}

// --- Actor Runner ---
struct SessionRunner {
    receiver: mpsc::Receiver<SessionMessage>,
    completion_tx: mpsc::Sender<Completion>,
    completion_rx: mpsc::Receiver<Completion>,
    explainer: Arc<Explainer>,
    rng: StdRng,
    /// Bumped by every clear; results from older generations are discarded
    generation: u64,
    busy: watch::Sender<bool>,
    current: watch::Sender<Option<Arc<ExplanationArtifact>>>,
}

impl SessionRunner {
    async fn run(mut self) {
        info!("Session started");
        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(SessionMessage::Shutdown) | None => break,
                    Some(msg) => self.handle_message(msg),
                },
                Some(done) = self.completion_rx.recv() => self.handle_completion(done),
            }
        }
        info!("Session stopped");
    }

    fn handle_message(&mut self, msg: SessionMessage) {
        match msg {
            SessionMessage::Explain {
                raw,
                channel,
                responder,
            } => self.start_request(raw, channel, responder),
            SessionMessage::Clear { responder } => {
                self.generation += 1;
                self.current.send_replace(None);
                info!(generation = self.generation, "Session cleared");
                let _ = responder.send(());
            }
            SessionMessage::Shutdown => {}
        }
    }

    fn start_request(
        &mut self,
        raw: String,
        channel: Channel,
        responder: oneshot::Sender<Result<ExplainOutcome, AppError>>,
    ) {
        if *self.busy.borrow() {
            info!("Rejecting request: another explanation is in flight");
            let _ = responder.send(Err(AppError::Busy));
            return;
        }
        self.busy.send_replace(true);

        let request_id = Uuid::new_v4();
        let generation = self.generation;
        let explainer = Arc::clone(&self.explainer);
        let mut rng = StdRng::seed_from_u64(self.rng.gen());
        let completions = self.completion_tx.clone();
        let started = Instant::now();
        info!(%request_id, %channel, "Explanation request started");

        tokio::spawn(async move {
            let short_circuited = matches!(explainer.route(&raw, channel), Route::ShortCircuit(_));
            // Run the pipeline in its own task so a panic surfaces as a JoinError
            let result = tokio::spawn(async move { explainer.explain(&raw, channel, &mut rng).await })
                .await
                .map_err(AppError::from)
                .and_then(|r| r);

            let done = Completion {
                request_id,
                channel,
                generation,
                short_circuited,
                started,
                result,
                responder,
            };
            if completions.send(done).await.is_err() {
                error!(%request_id, "Session stopped before request completed");
            }
        });
    }

    fn handle_completion(&mut self, done: Completion) {
        self.busy.send_replace(false);
        let elapsed_ms = done.started.elapsed().as_millis() as u64;

        let outcome = match done.result {
            Ok(artifact) => {
                let artifact = Arc::new(artifact);
                let superseded = done.generation != self.generation;
                if superseded {
                    info!(request_id = %done.request_id, "Discarding superseded result");
                } else {
                    self.current.send_replace(Some(Arc::clone(&artifact)));
                }
                info!(request_id = %done.request_id, elapsed_ms, "Explanation request completed");
                Ok(ExplainOutcome {
                    request_id: done.request_id,
                    channel: done.channel,
                    short_circuited: done.short_circuited,
                    superseded,
                    artifact,
                    completed_at: Utc::now(),
                    elapsed_ms,
                })
            }
            Err(e) => {
                error!(request_id = %done.request_id, "Explanation request failed: {}", e);
                Err(e)
            }
        };

        let _ = done.responder.send(outcome);
    }
}
