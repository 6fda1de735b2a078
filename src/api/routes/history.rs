//! Audit trail handler.

use crate::api::{ApiResult, AppState, Envelope};
use crate::history::domain::HistoryEntry;
use crate::pagination::ListQuery;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

/// `GET /histories`
pub(crate) async fn list_histories(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Envelope<Vec<HistoryEntry>>> {
    let Query(query) = query?;
    let entries = state.service().histories(query).await?;
    Ok(Envelope::success("Histories fetched successfully", entries))
}
