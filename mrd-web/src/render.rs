//! Fetch half of a render service
//!
//! A page hands [`use_render_service`] the call for its endpoint and gets
//! back a [`RenderState`] to pass to [`mrd_ui::render_results`].

use crate::error::ApiError;
use dioxus::prelude::*;
use mrd_ui::RenderState;
use std::future::Future;
use tracing::error;

/// Await one fetch and absorb its failure.
///
/// Errors are logged and collapse to [`RenderState::Failed`]; nothing is retried.
pub async fn settle<T, F>(label: &str, pending: F) -> RenderState<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match pending.await {
        Ok(response) => RenderState::Ready(response),
        Err(err) => {
            error!("Failed to load {label}: {err}");
            RenderState::Failed
        }
    }
}

/// Run `fetch` as a resource and expose its lifecycle.
///
/// `fetch` re-runs whenever a signal or `use_reactive` dependency it reads
/// changes; the superseded request is dropped.
pub fn use_render_service<T, F, Fut>(label: &'static str, mut fetch: F) -> RenderState<T>
where
    T: Clone + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let resource = use_resource(move || settle(label, fetch()));

    if !resource.finished() {
        return RenderState::Loading;
    }
    let state = match &*resource.read() {
        Some(state) => state.clone(),
        None => RenderState::Loading,
    };
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ok_is_ready() {
        let state = settle("dashboard", async { Ok::<_, ApiError>(vec![1, 2, 3]) }).await;
        assert_eq!(state, RenderState::Ready(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_any_error_is_failed() {
        for err in [
            ApiError::Network("connection refused".into()),
            ApiError::Status(500),
            ApiError::Decode("missing field `pagination`".into()),
            ApiError::Validation(vec!["bad page".into()]),
        ] {
            let state = settle("search", async move { Err::<u32, _>(err) }).await;
            assert_eq!(state, RenderState::Failed);
        }
    }
}
