mod models;
mod validation;

use crate::IssueInput;

/// Input that passes every constraint
pub(crate) fn valid_input() -> IssueInput {
    IssueInput {
        identificatie: Some("6a36c2c4-213e-4348-a467-dfa3a30f64aa".to_string()),
        issue_type: Some("contact".to_string()),
        naam: Some("Gratis trouwen".to_string()),
        beschrijving: Some("Ik wil graag gratis trouwen op het stadhuis.".to_string()),
        voornamen: Some("John".to_string()),
        geslachtsnaam: Some("Do".to_string()),
        email: Some("john@example.com".to_string()),
        telefoonnummer: Some("0612345678".to_string()),
        taal: Some("nl".to_string()),
        contact_persoon: Some(
            "https://ref.tst.vng.cloud/zrc/api/v1/zaken/24524f1c-1c14-4801-9535-22007b8d1b65"
                .to_string(),
        ),
    }
}
