use crate::{IssueType, LanguageCode};

use serde::{Deserialize, Serialize};

/// Unvalidated client input for the writable issue fields.
///
/// Everything is optional here so that missing required fields surface as
/// validation violations instead of deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueInput {
    pub identificatie: Option<String>,
    pub issue_type: Option<String>,
    pub naam: Option<String>,
    pub beschrijving: Option<String>,
    pub voornamen: Option<String>,
    pub geslachtsnaam: Option<String>,
    pub email: Option<String>,
    pub telefoonnummer: Option<String>,
    pub taal: Option<String>,
    pub contact_persoon: Option<String>,
}

/// Writable issue fields after validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueContent {
    pub identificatie: Option<String>,
    pub issue_type: IssueType,
    pub naam: String,
    pub beschrijving: String,
    pub voornamen: Option<String>,
    pub geslachtsnaam: Option<String>,
    pub email: Option<String>,
    pub telefoonnummer: Option<String>,
    pub taal: LanguageCode,
    pub contact_persoon: Option<String>,
}
