//! Liveness probe.

use axum::{Router, routing::get};

/// Routes mounted under `/health`.
pub(crate) fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/ping", get(|| async { "pong" }))
}
