//! Partial updates pushed by external systems.

use crate::activity::services::WebhookUpdate;
use crate::api::{ApiResult, AppState, Envelope};
use axum::body::Bytes;
use axum::extract::State;

/// `POST /webhook`
///
/// The raw body is handed to the service so that malformed JSON surfaces as
/// a bad payload rather than an extractor rejection.
pub(crate) async fn apply_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Envelope<WebhookUpdate>> {
    let update = state.service().apply_webhook(&body).await?;
    Ok(Envelope::success("task updated successfully", update))
}
