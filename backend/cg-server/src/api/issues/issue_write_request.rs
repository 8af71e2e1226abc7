use cg_core::IssueInput;

use serde::Deserialize;

/// Write view of an issue, for both create and full update.
///
/// Server-owned keys (`id`, `bronOrganisatie`, `eigenaar` and the
/// timestamps) are not part of this view and are dropped on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueWriteRequest {
    pub identificatie: Option<String>,
    #[serde(rename = "type")]
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

impl From<IssueWriteRequest> for IssueInput {
    fn from(req: IssueWriteRequest) -> Self {
        IssueInput {
            identificatie: req.identificatie,
            issue_type: req.issue_type,
            naam: req.naam,
            beschrijving: req.beschrijving,
            voornamen: req.voornamen,
            geslachtsnaam: req.geslachtsnaam,
            email: req.email,
            telefoonnummer: req.telefoonnummer,
            taal: req.taal,
            contact_persoon: req.contact_persoon,
        }
    }
}
