use cg_core::ActivityLog;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogDto {
    pub id: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    pub applicatie: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ActivityLog> for ActivityLogDto {
    fn from(log: ActivityLog) -> Self {
        Self {
            id: log.id.to_string(),
            action: log.action,
            field_name: log.field_name,
            old_value: log.old_value,
            new_value: log.new_value,
            applicatie: log.applicatie_id.to_string(),
            timestamp: log.timestamp,
        }
    }
}

/// Audit trail of one issue, newest first
#[derive(Debug, Serialize)]
pub struct ActivityLogListResponse {
    pub issue: i64,
    pub activity: Vec<ActivityLogDto>,
}
