use crate::repositories::from_micros;
use crate::{DbError, error::Result as DbErrorResult};

use cg_core::ActivityLog;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const TABLE: &str = "cg_activity_log";

pub struct ActivityLogRepository;

impl ActivityLogRepository {
    pub async fn create<'e, E>(executor: E, log: &ActivityLog) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO cg_activity_log (
                  id, entity_type, entity_id, action,
                  field_name, old_value, new_value,
                  applicatie_id, timestamp
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(log.id.to_string())
        .bind(log.entity_type.as_str())
        .bind(log.entity_id)
        .bind(log.action.as_str())
        .bind(log.field_name.as_deref())
        .bind(log.old_value.as_deref())
        .bind(log.new_value.as_deref())
        .bind(log.applicatie_id.to_string())
        .bind(log.timestamp.timestamp_micros())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Newest first; entries written in the same microsecond keep insertion order reversed
    pub async fn find_by_entity<'e, E>(
        executor: E,
        entity_type: &str,
        entity_id: i64,
    ) -> DbErrorResult<Vec<ActivityLog>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
              SELECT id, entity_type, entity_id, action,
                     field_name, old_value, new_value,
                     applicatie_id, timestamp
              FROM cg_activity_log
              WHERE entity_type = ? AND entity_id = ?
              ORDER BY timestamp DESC, rowid DESC
            "#,
        )
        .bind(entity_type)
        .bind(entity_id)
        .fetch_all(executor)
        .await?;

        rows.iter().map(activity_log_from_row).collect()
    }
}

fn activity_log_from_row(row: &SqliteRow) -> DbErrorResult<ActivityLog> {
    let id: String = row.try_get("id")?;
    let applicatie_id: String = row.try_get("applicatie_id")?;

    Ok(ActivityLog {
        id: parse_uuid(&id, "id")?,
        entity_type: row.try_get("entity_type")?,
        entity_id: row.try_get("entity_id")?,
        action: row.try_get("action")?,
        field_name: row.try_get("field_name")?,
        old_value: row.try_get("old_value")?,
        new_value: row.try_get("new_value")?,
        applicatie_id: parse_uuid(&applicatie_id, "applicatie_id")?,
        timestamp: from_micros(TABLE, row.try_get("timestamp")?)?,
    })
}

fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::corrupt_row(TABLE, format!("Invalid UUID in {}: {}", column, e)))
}
