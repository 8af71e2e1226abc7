use crate::repositories::from_micros;
use crate::{DbError, error::Result as DbErrorResult};

use cg_core::{Applicatie, Rsin};

use sqlx::Row;
use uuid::Uuid;

const TABLE: &str = "cg_applicaties";

pub struct ApplicatieRepository;

impl ApplicatieRepository {
    /// Register the application unless it is already known. An existing
    /// row is left untouched.
    pub async fn ensure<'e, E>(executor: E, applicatie: &Applicatie) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT OR IGNORE INTO cg_applicaties (id, naam, organisatie, registratiedatum)
              VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(applicatie.id.to_string())
        .bind(applicatie.naam.as_str())
        .bind(applicatie.organisatie.as_str())
        .bind(applicatie.registratiedatum.timestamp_micros())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Applicatie>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            "SELECT id, naam, organisatie, registratiedatum FROM cg_applicaties WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let organisatie: String = row.try_get("organisatie")?;

        Ok(Some(Applicatie {
            id,
            naam: row.try_get("naam")?,
            organisatie: Rsin::parse(&organisatie)
                .map_err(|e| DbError::corrupt_row(TABLE, e.to_string()))?,
            registratiedatum: from_micros(TABLE, row.try_get("registratiedatum")?)?,
        }))
    }
}
