//! Diesel row models for history persistence.

use super::schema::histories;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for history entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = histories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HistoryRow {
    pub id: i64,
    pub task_id: i64,
    pub action: String,
    pub description: String,
    pub time: DateTime<Utc>,
}

/// Insert model for history entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = histories)]
pub struct NewHistoryRow {
    pub task_id: i64,
    pub action: String,
    pub description: String,
    pub time: DateTime<Utc>,
}
