//! Timers that work on both wasm and native

use futures::future::{select, Either};
use std::future::Future;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis().min(u32::MAX as u128) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Run `fut` to completion unless `duration` elapses first.
///
/// Returns `None` on timeout; the future is dropped.
pub async fn with_timeout<F: Future>(duration: Duration, fut: F) -> Option<F::Output> {
    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(sleep(duration));
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_completes_before_timeout() {
        let out = with_timeout(Duration::from_secs(60), async { 42 }).await;
        assert_eq!(out, Some(42));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out() {
        let out = with_timeout(Duration::from_secs(60), std::future::pending::<()>()).await;
        assert_eq!(out, None);
    }
}
