use cg_core::Issue;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read view of an issue
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDto {
    pub id: i64,
    pub identificatie: Option<String>,
    pub bron_organisatie: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub naam: String,
    pub beschrijving: String,
    pub voornamen: Option<String>,
    pub geslachtsnaam: Option<String>,
    pub email: Option<String>,
    pub telefoonnummer: Option<String>,
    pub taal: String,
    pub registratiedatum: DateTime<Utc>,
    pub wijzigingsdatum: Option<DateTime<Utc>>,
    pub contact_persoon: Option<String>,
    /// Applicatie UUID
    pub eigenaar: String,
}

impl From<Issue> for IssueDto {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id,
            identificatie: issue.identificatie,
            bron_organisatie: issue.bron_organisatie.to_string(),
            issue_type: issue.issue_type.as_str().to_string(),
            naam: issue.naam,
            beschrijving: issue.beschrijving,
            voornamen: issue.voornamen,
            geslachtsnaam: issue.geslachtsnaam,
            email: issue.email,
            telefoonnummer: issue.telefoonnummer,
            taal: issue.taal.as_str().to_string(),
            registratiedatum: issue.registratiedatum,
            wijzigingsdatum: issue.wijzigingsdatum,
            contact_persoon: issue.contact_persoon,
            eigenaar: issue.eigenaar.to_string(),
        }
    }
}
