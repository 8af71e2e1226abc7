use crate::{FieldChange, timestamp};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ACTION_CREATED: &str = "created";
pub const ACTION_UPDATED: &str = "updated";
pub const ACTION_DELETED: &str = "deleted";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: Uuid,

    pub entity_type: String,
    pub entity_id: i64,

    pub action: String,

    pub field_name: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,

    pub applicatie_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLog {
    pub fn new(entity_type: &str, entity_id: i64, action: &str, applicatie_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: entity_type.to_string(),
            entity_id,
            action: action.to_string(),
            field_name: None,
            old_value: None,
            new_value: None,
            applicatie_id,
            timestamp: timestamp::now(),
        }
    }

    pub fn created(entity_type: &str, entity_id: i64, applicatie_id: Uuid) -> Self {
        Self::new(entity_type, entity_id, ACTION_CREATED, applicatie_id)
    }

    pub fn deleted(entity_type: &str, entity_id: i64, applicatie_id: Uuid) -> Self {
        Self::new(entity_type, entity_id, ACTION_DELETED, applicatie_id)
    }

    /// One entry per changed field. An update that changed nothing still
    /// leaves a single entry without a field name.
    pub fn updated(
        entity_type: &str,
        entity_id: i64,
        applicatie_id: Uuid,
        changes: &[FieldChange],
    ) -> Vec<Self> {
        if changes.is_empty() {
            return vec![Self::new(
                entity_type,
                entity_id,
                ACTION_UPDATED,
                applicatie_id,
            )];
        }

        changes
            .iter()
            .map(|change| Self {
                field_name: Some(change.field_name.clone()),
                old_value: change.old_value.clone(),
                new_value: change.new_value.clone(),
                ..Self::new(entity_type, entity_id, ACTION_UPDATED, applicatie_id)
            })
            .collect()
    }
}
