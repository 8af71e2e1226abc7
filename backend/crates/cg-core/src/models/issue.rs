use crate::validation::issue_validator::IDENTIFICATIE_WRITE_ONCE_MESSAGE;
use crate::{
    Constraint, FieldChange, FieldChangeBuilder, FieldViolation, IssueContent, IssueType,
    LanguageCode, Rsin, Stringable, ValidationErrors, timestamp,
};

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An issue that has been validated but not yet stored.
///
/// Building one is the pre-persist step: the registration timestamp is
/// stamped here and nowhere else. Only the store can turn it into an
/// [`Issue`], because only the store knows the id.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub content: IssueContent,
    pub bron_organisatie: Rsin,
    pub eigenaar: Uuid,
    pub registratiedatum: DateTime<Utc>,
}

impl NewIssue {
    pub fn new(content: IssueContent, bron_organisatie: Rsin, eigenaar: Uuid) -> Self {
        Self::new_at(content, bron_organisatie, eigenaar, timestamp::now())
    }

    pub fn new_at(
        content: IssueContent,
        bron_organisatie: Rsin,
        eigenaar: Uuid,
        registratiedatum: DateTime<Utc>,
    ) -> Self {
        Self {
            content,
            bron_organisatie,
            eigenaar,
            registratiedatum,
        }
    }

    /// Attach the store-assigned id
    pub fn into_issue(self, id: i64) -> Issue {
        let content = self.content;
        Issue {
            id,
            identificatie: content.identificatie,
            bron_organisatie: self.bron_organisatie,
            issue_type: content.issue_type,
            naam: content.naam,
            beschrijving: content.beschrijving,
            voornamen: content.voornamen,
            geslachtsnaam: content.geslachtsnaam,
            email: content.email,
            telefoonnummer: content.telefoonnummer,
            taal: content.taal,
            registratiedatum: self.registratiedatum,
            wijzigingsdatum: None,
            contact_persoon: content.contact_persoon,
            eigenaar: self.eigenaar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub identificatie: Option<String>,
    pub bron_organisatie: Rsin,
    pub issue_type: IssueType,

    // Content
    pub naam: String,
    pub beschrijving: String,

    // Contact
    pub voornamen: Option<String>,
    pub geslachtsnaam: Option<String>,
    pub email: Option<String>,
    pub telefoonnummer: Option<String>,
    pub taal: LanguageCode,

    // Audit
    pub registratiedatum: DateTime<Utc>,
    pub wijzigingsdatum: Option<DateTime<Utc>>,

    pub contact_persoon: Option<String>,
    pub eigenaar: Uuid,
}

impl Issue {
    /// Replace all writable fields with `content`.
    ///
    /// `identificatie` is write-once: it may be set while empty, and an
    /// omitted value keeps the stored one, but a different value is
    /// rejected. The modification timestamp always moves forward, even when
    /// two updates land within the same microsecond.
    pub fn apply_update(
        &mut self,
        content: IssueContent,
        now: DateTime<Utc>,
    ) -> Result<Vec<FieldChange>, ValidationErrors> {
        let identificatie = match (&self.identificatie, content.identificatie) {
            (Some(current), Some(requested)) if *current != requested => {
                return Err(ValidationErrors::single(FieldViolation::new(
                    "identificatie",
                    Constraint::WriteOnce,
                    IDENTIFICATIE_WRITE_ONCE_MESSAGE,
                )));
            }
            (Some(current), _) => Some(current.clone()),
            (None, requested) => requested,
        };

        let mut changes = FieldChangeBuilder::new();
        changes.track_option("identificatie", &self.identificatie, &identificatie);
        changes.track("type", self.issue_type.as_str(), content.issue_type.as_str());
        changes.track("naam", &self.naam, &content.naam);
        changes.track("beschrijving", &self.beschrijving, &content.beschrijving);
        changes.track_option("voornamen", &self.voornamen, &content.voornamen);
        changes.track_option("geslachtsnaam", &self.geslachtsnaam, &content.geslachtsnaam);
        changes.track_option("email", &self.email, &content.email);
        changes.track_option("telefoonnummer", &self.telefoonnummer, &content.telefoonnummer);
        changes.track("taal", self.taal.as_str(), content.taal.as_str());
        changes.track_option(
            "contactPersoon",
            &self.contact_persoon,
            &content.contact_persoon,
        );

        self.identificatie = identificatie;
        self.issue_type = content.issue_type;
        self.naam = content.naam;
        self.beschrijving = content.beschrijving;
        self.voornamen = content.voornamen;
        self.geslachtsnaam = content.geslachtsnaam;
        self.email = content.email;
        self.telefoonnummer = content.telefoonnummer;
        self.taal = content.taal;
        self.contact_persoon = content.contact_persoon;

        let floor = self
            .wijzigingsdatum
            .map_or(self.registratiedatum, |previous| {
                previous.max(self.registratiedatum)
            });
        self.wijzigingsdatum = Some(timestamp::strictly_after(now, floor));

        Ok(changes.build())
    }

    pub fn is_owned_by(&self, applicatie_id: Uuid) -> bool {
        self.eigenaar == applicatie_id
    }
}

impl Stringable for Issue {
    fn render(&self) -> String {
        format!("Issue: {}.", self.id)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
