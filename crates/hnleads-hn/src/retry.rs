//! Retry with exponential back-off and jitter for HN API calls.
//!
//! [`retry_with_backoff`] wraps any fallible async operation and retries on
//! transient errors (network failures, 429, 5xx). Everything else is returned
//! immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::HnError;

const MAX_DELAY_MS: u64 = 60_000;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:** timeouts, connection failures, HTTP 429 and 5xx.
///
/// **Not retriable:** other HTTP statuses, malformed bodies, and invalid
/// base URLs. Retrying would return the same result.
pub(crate) fn is_retriable(err: &HnError) -> bool {
    match err {
        HnError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        HnError::RateLimited { .. } => true,
        HnError::UnexpectedStatus { status, .. } => (500..600).contains(status),
        HnError::Deserialize { .. } | HnError::InvalidBaseUrl { .. } => false,
    }
}

/// Delay before retry number `attempt` (1-based), before jitter.
fn backoff_delay_ms(backoff_base_ms: u64, attempt: u32) -> u64 {
    backoff_base_ms
        .saturating_mul(1u64 << attempt.saturating_sub(1).min(10))
        .min(MAX_DELAY_MS)
}

/// Sleep before retry number `attempt` after `err`.
///
/// `jitter` scales the exponential back-off and is drawn from
/// `[0.75, 1.25)` by the caller. A 429 never waits less than the server's
/// `Retry-After`. The result is capped at 60 s.
fn retry_delay_ms(err: &HnError, backoff_base_ms: u64, attempt: u32, jitter: f64) -> u64 {
    let capped = backoff_delay_ms(backoff_base_ms, attempt);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let backoff_ms = (capped as f64 * jitter) as u64;
    let floor_ms = match err {
        HnError::RateLimited {
            retry_after_secs, ..
        } => retry_after_secs.saturating_mul(1_000),
        _ => 0,
    };
    backoff_ms.max(floor_ms).min(MAX_DELAY_MS)
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// Back-off schedule with `backoff_base_ms = 1_000`:
///
/// | Attempt | Sleep before next attempt        |
/// |---------|----------------------------------|
/// | 1       | 1 000 ms × 2⁰ ± 25 % jitter     |
/// | 2       | 1 000 ms × 2¹ ± 25 % jitter     |
/// | 3       | 1 000 ms × 2² ± 25 % jitter     |
///
/// A 429 waits at least its `Retry-After`. Delay is capped at 60 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, HnError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, HnError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let jitter = rand::random::<f64>() * 0.5 + 0.75;
                let delay_ms = retry_delay_ms(&err, backoff_base_ms, attempt, jitter);
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "HN API transient error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
