//! Shared test doubles and fixtures.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use crate::config::ExplainerConfig;
use crate::dispatch::Explainer;
use crate::synth::Pacer;

pub const COUNTER_COMPONENT: &str =
    "function useCounter() { const [c, setC] = useState(0); return <Counter value={c} /> }";

pub const ASYNC_CLIENT: &str = r#"Use `fetch('/api/users')` inside an async function and await the JSON response.

```ts
interface User { id: number }
async function load(): Promise<User[]> {
  const res = await fetch('/api/users');
  return res.json();
}
```"#;

/// Records every requested pause without sleeping.
#[derive(Default)]
pub struct RecordingPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

/// Blocks every pause until the test calls `release`.
#[derive(Default)]
pub struct GatedPacer {
    gate: Notify,
}

impl GatedPacer {
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl Pacer for GatedPacer {
    async fn pause(&self, _duration: Duration) {
        self.gate.notified().await;
    }
}

pub fn fast_config() -> ExplainerConfig {
    ExplainerConfig {
        min_delay_ms: 5,
        max_delay_ms: 10,
        session_timeout_secs: 5,
        seed: Some(7),
        ..ExplainerConfig::default()
    }
}

pub fn recording_explainer() -> (Explainer, Arc<RecordingPacer>) {
    let pacer = Arc::new(RecordingPacer::default());
    let explainer = Explainer::with_pacer(&fast_config(), pacer.clone()).unwrap();
    (explainer, pacer)
}
