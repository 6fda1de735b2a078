//! Offset/limit windows over insertion-ordered listings.
//!
//! Pagination is best effort: windows are not stable against concurrent
//! inserts or deletes.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};

/// Ordering and window for a list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ListQuery {
    /// Return the most recently inserted rows first.
    #[serde(default, rename = "from_end", deserialize_with = "flag")]
    pub newest_first: bool,
    /// Maximum number of rows to return; `None` returns everything.
    #[serde(default)]
    pub limit: Option<u64>,
    /// Number of rows to skip before the window starts.
    #[serde(default)]
    pub offset: Option<u64>,
}

impl ListQuery {
    /// Oldest-first listing with no window.
    #[must_use]
    pub const fn oldest_first() -> Self {
        Self {
            newest_first: false,
            limit: None,
            offset: None,
        }
    }

    /// Newest-first listing with no window.
    #[must_use]
    pub const fn newest_first() -> Self {
        Self {
            newest_first: true,
            limit: None,
            offset: None,
        }
    }

    /// Caps the number of returned rows.
    #[must_use]
    pub const fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips the first `offset` rows.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Limit as a SQL `LIMIT` operand, saturating at `i64::MAX`.
    #[must_use]
    pub fn sql_limit(&self) -> Option<i64> {
        self.limit.map(saturating_i64)
    }

    /// Offset as a SQL `OFFSET` operand, saturating at `i64::MAX`.
    #[must_use]
    pub fn sql_offset(&self) -> Option<i64> {
        self.offset.map(saturating_i64)
    }

    /// Applies ordering and window to rows already sorted oldest first.
    pub fn window<I, T>(&self, oldest_first: I) -> Vec<T>
    where
        I: DoubleEndedIterator<Item = T>,
    {
        let skip = self.offset.map_or(0, saturating_usize);
        let take = self.limit.map_or(usize::MAX, saturating_usize);
        if self.newest_first {
            oldest_first.rev().skip(skip).take(take).collect()
        } else {
            oldest_first.skip(skip).take(take).collect()
        }
    }
}

/// Reads a query-string flag. Accepts `true`/`false`, `1`/`0`, `yes`/`no`,
/// `on`/`off` and their one-letter forms, ignoring case.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw)
        .ok_or_else(|| de::Error::invalid_value(Unexpected::Str(&raw), &"a boolean flag"))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn saturating_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
