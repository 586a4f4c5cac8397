//! Fixed-interval request gate.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Enforces a minimum gap between consecutive requests.
///
/// Callers await [`RequestGate::wait`] before each request. Concurrent
/// callers queue on the inner mutex, so the gap holds across tasks. A zero
/// gap disables waiting.
#[derive(Debug)]
pub struct RequestGate {
    min_gap: Duration,
    last: Mutex<Option<Instant>>,
}

impl RequestGate {
    #[must_use]
    pub fn new(min_gap: Duration) -> Self {
        Self {
            min_gap,
            last: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    #[must_use]
    pub fn min_gap(&self) -> Duration {
        self.min_gap
    }

    /// Sleep until at least `min_gap` has passed since the previous slot.
    pub async fn wait(&self) {
        if self.min_gap.is_zero() {
            return;
        }
        let mut last = self.last.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_gap {
                tokio::time::sleep(self.min_gap.saturating_sub(elapsed)).await;
            }
        }
        *last = Some(Instant::now());
    }
}
