pub mod activity_log_repository;
pub mod applicatie_repository;
pub mod issue_repository;

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};

/// Timestamps are stored as microseconds since the Unix epoch
pub(crate) fn from_micros(table: &'static str, micros: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| DbError::corrupt_row(table, format!("invalid timestamp {}", micros)))
}
