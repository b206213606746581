//! Running blocking terminal work so that cancellation still gets through.

use crate::error::SuggestionError;
use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

/// Exit status used when the user interrupts the run.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Run `work` on the blocking pool, giving up as soon as `cancel` fires.
///
/// On cancellation the worker thread is abandoned (it may be parked in
/// `read_line`) and [`SuggestionError::OperationCancelled`] is returned.
pub async fn run_blocking<T, F>(cancel: &CancellationToken, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let task = tokio::task::spawn_blocking(work);

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(SuggestionError::OperationCancelled.into()),
        joined = task => joined.context("blocking task failed")?,
    }
}

/// True when `err` is (or wraps) a user cancellation.
pub fn is_cancellation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<SuggestionError>()
        .is_some_and(SuggestionError::is_cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn returns_work_result() {
        let out = run_blocking(&CancellationToken::new(), || Ok(42)).await.unwrap();
        assert_eq!(out, 42);
    }

    #[tokio::test]
    async fn propagates_work_error() {
        let err = run_blocking::<(), _>(&CancellationToken::new(), || Err(anyhow!("boom")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert!(!is_cancellation(&err));
    }

    #[tokio::test]
    async fn cancellation_does_not_wait_for_blocked_work() {
        let cancel = CancellationToken::new();
        tokio::spawn({
            let cancel = cancel.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                cancel.cancel();
            }
        });

        let started = Instant::now();
        let err = run_blocking(&cancel, || {
            std::thread::sleep(Duration::from_millis(500));
            Ok(())
        })
        .await
        .unwrap_err();

        assert!(is_cancellation(&err));
        assert!(started.elapsed() < Duration::from_millis(400));
    }
}
