use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

use crate::error::AppError;

/// Suspends the synthesizer for a simulated processing delay.
///
/// Swapped for a recording double in tests so no real time passes.
#[async_trait]
pub trait Pacer: Send + Sync + 'static {
    async fn pause(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        sleep(duration).await;
    }
}

/// Half-open `[min, max)` range of simulated delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayWindow {
    min: Duration,
    max: Duration,
}

impl DelayWindow {
    pub fn new(min: Duration, max: Duration) -> Result<Self, AppError> {
        if min >= max {
            return Err(AppError::Config(format!(
                "empty delay window: {:?}..{:?}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn contains(&self, duration: Duration) -> bool {
        duration >= self.min && duration < self.max
    }

    /// Uniform sample in `[min, max)` at nanosecond resolution
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let low = self.min.as_nanos() as u64;
        let high = self.max.as_nanos() as u64;
        Duration::from_nanos(rng.gen_range(low..high))
    }
}

impl Default for DelayWindow {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(1_000),
            max: Duration::from_millis(3_500),
        }
    }
}
