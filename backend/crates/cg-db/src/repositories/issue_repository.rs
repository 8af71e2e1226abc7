use crate::repositories::from_micros;
use crate::{DbError, error::Result as DbErrorResult};

use cg_core::{DateRange, Issue, IssueFilter, IssueOrderField, IssueType, LanguageCode, NewIssue, Rsin};

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "cg_issues";

const SELECT_COLUMNS: &str = r#"
    SELECT
        id, identificatie, bron_organisatie, type, naam, beschrijving,
        voornamen, geslachtsnaam, email, telefoonnummer, taal,
        registratiedatum, wijzigingsdatum, contact_persoon, eigenaar
    FROM cg_issues
"#;

/// One page of a filtered listing, with the size of the whole result set
#[derive(Debug, Clone)]
pub struct IssuePage {
    pub issues: Vec<Issue>,
    pub total_items: i64,
}

pub struct IssueRepository;

impl IssueRepository {
    /// Insert and return the stored issue with its assigned id
    pub async fn create<'e, E>(executor: E, new_issue: NewIssue) -> DbErrorResult<Issue>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let content = &new_issue.content;
        let eigenaar = new_issue.eigenaar.to_string();

        let result = sqlx::query(
            r#"
                INSERT INTO cg_issues (
                    identificatie, bron_organisatie, type, naam, beschrijving,
                    voornamen, geslachtsnaam, email, telefoonnummer, taal,
                    registratiedatum, wijzigingsdatum, contact_persoon, eigenaar
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NULL, ?, ?)
            "#,
        )
        .bind(content.identificatie.as_deref())
        .bind(new_issue.bron_organisatie.as_str())
        .bind(content.issue_type.as_str())
        .bind(content.naam.as_str())
        .bind(content.beschrijving.as_str())
        .bind(content.voornamen.as_deref())
        .bind(content.geslachtsnaam.as_deref())
        .bind(content.email.as_deref())
        .bind(content.telefoonnummer.as_deref())
        .bind(content.taal.as_str())
        .bind(new_issue.registratiedatum.timestamp_micros())
        .bind(content.contact_persoon.as_deref())
        .bind(eigenaar)
        .execute(executor)
        .await?;

        Ok(new_issue.into_issue(result.last_insert_rowid()))
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Issue>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(issue_from_row).transpose()
    }

    /// Write every mutable column. Returns false when the issue no longer exists.
    pub async fn update<'e, E>(executor: E, issue: &Issue) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let wijzigingsdatum = issue.wijzigingsdatum.map(|dt| dt.timestamp_micros());

        let result = sqlx::query(
            r#"
                UPDATE cg_issues
                SET identificatie = ?, type = ?, naam = ?, beschrijving = ?,
                    voornamen = ?, geslachtsnaam = ?, email = ?, telefoonnummer = ?,
                    taal = ?, wijzigingsdatum = ?, contact_persoon = ?
                WHERE id = ?
            "#,
        )
        .bind(issue.identificatie.as_deref())
        .bind(issue.issue_type.as_str())
        .bind(issue.naam.as_str())
        .bind(issue.beschrijving.as_str())
        .bind(issue.voornamen.as_deref())
        .bind(issue.geslachtsnaam.as_deref())
        .bind(issue.email.as_deref())
        .bind(issue.telefoonnummer.as_deref())
        .bind(issue.taal.as_str())
        .bind(wijzigingsdatum)
        .bind(issue.contact_persoon.as_deref())
        .bind(issue.id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when there was nothing to delete.
    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM cg_issues WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list<'e, E>(executor: E, filter: &IssueFilter) -> DbErrorResult<Vec<Issue>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_COLUMNS);
        push_filters(&mut builder, filter);
        push_order(&mut builder, filter);

        builder.push(" LIMIT ");
        builder.push_bind(filter.limit());
        builder.push(" OFFSET ");
        builder.push_bind(filter.offset());

        let rows = builder.build().fetch_all(executor).await?;

        rows.iter().map(issue_from_row).collect()
    }

    /// Number of issues matching the filter, ignoring paging
    pub async fn count<'e, E>(executor: E, filter: &IssueFilter) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM cg_issues");
        push_filters(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(executor)
            .await?;

        Ok(total)
    }

    /// One page plus the total, read from the same snapshot
    pub async fn find_page(pool: &SqlitePool, filter: &IssueFilter) -> DbErrorResult<IssuePage> {
        let mut tx = pool.begin().await?;
        let issues = Self::list(&mut *tx, filter).await?;
        let total_items = Self::count(&mut *tx, filter).await?;
        tx.commit().await?;

        Ok(IssuePage {
            issues,
            total_items,
        })
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, filter: &IssueFilter) {
    builder.push(" WHERE 1 = 1");

    if let Some(ref bron_organisatie) = filter.bron_organisatie {
        builder.push(" AND bron_organisatie = ");
        builder.push_bind(bron_organisatie.clone());
    }

    push_date_range(builder, "registratiedatum", &filter.registratiedatum);
    push_date_range(builder, "wijzigingsdatum", &filter.wijzigingsdatum);
}

// NULL never satisfies a comparison, so issues that were never modified
// drop out as soon as any wijzigingsdatum bound is given.
fn push_date_range(builder: &mut QueryBuilder<'_, Sqlite>, column: &'static str, range: &DateRange) {
    let bounds = [
        (range.before, "<="),
        (range.strictly_before, "<"),
        (range.after, ">="),
        (range.strictly_after, ">"),
    ];

    for (bound, operator) in bounds {
        if let Some(bound) = bound {
            builder.push(format!(" AND {} {} ", column, operator));
            builder.push_bind(bound.timestamp_micros());
        }
    }
}

fn push_order(builder: &mut QueryBuilder<'_, Sqlite>, filter: &IssueFilter) {
    let mut clauses: Vec<String> = filter
        .order
        .iter()
        .map(|(field, direction)| format!("{} {}", field.column(), direction.as_sql()))
        .collect();

    // Stable paging needs a total order
    if !filter
        .order
        .iter()
        .any(|(field, _)| *field == IssueOrderField::Id)
    {
        clauses.push("id ASC".to_string());
    }

    builder.push(" ORDER BY ");
    builder.push(clauses.join(", "));
}

fn issue_from_row(row: &SqliteRow) -> DbErrorResult<Issue> {
    let bron_organisatie: String = row.try_get("bron_organisatie")?;
    let issue_type: String = row.try_get("type")?;
    let taal: String = row.try_get("taal")?;
    let eigenaar: String = row.try_get("eigenaar")?;
    let wijzigingsdatum: Option<i64> = row.try_get("wijzigingsdatum")?;

    Ok(Issue {
        id: row.try_get("id")?,
        identificatie: row.try_get("identificatie")?,
        bron_organisatie: Rsin::parse(&bron_organisatie)
            .map_err(|e| DbError::corrupt_row(TABLE, e.to_string()))?,
        issue_type: IssueType::from_str(&issue_type)
            .map_err(|e| DbError::corrupt_row(TABLE, e.to_string()))?,
        naam: row.try_get("naam")?,
        beschrijving: row.try_get("beschrijving")?,
        voornamen: row.try_get("voornamen")?,
        geslachtsnaam: row.try_get("geslachtsnaam")?,
        email: row.try_get("email")?,
        telefoonnummer: row.try_get("telefoonnummer")?,
        taal: LanguageCode::parse(&taal).map_err(|e| DbError::corrupt_row(TABLE, e.to_string()))?,
        registratiedatum: from_micros(TABLE, row.try_get("registratiedatum")?)?,
        wijzigingsdatum: wijzigingsdatum
            .map(|micros| from_micros(TABLE, micros))
            .transpose()?,
        contact_persoon: row.try_get("contact_persoon")?,
        eigenaar: Uuid::parse_str(&eigenaar).map_err(|e| {
            DbError::corrupt_row(TABLE, format!("Invalid UUID in eigenaar: {}", e))
        })?,
    })
}
