//! Field constraints for the writable part of an issue.
//!
//! All constraints are checked on every call; violations are collected so a
//! client sees every problem with its input at once.

use crate::{Constraint, IssueContent, IssueInput, IssueType, LanguageCode, ValidationErrors};

use std::str::FromStr;

use url::Url;

pub const IDENTIFICATIE_MAX_LENGTH: usize = 40;
pub const NAAM_MIN_LENGTH: usize = 5;
pub const NAAM_MAX_LENGTH: usize = 255;
pub const BESCHRIJVING_MIN_LENGTH: usize = 25;
pub const BESCHRIJVING_MAX_LENGTH: usize = 2000;
pub const PERSON_NAME_MAX_LENGTH: usize = 250;
pub const CONTACT_PERSOON_MAX_LENGTH: usize = 255;

pub const IDENTIFICATIE_WRITE_ONCE_MESSAGE: &str =
    "De identificatie kan na het aanmaken niet meer worden gewijzigd";

const LIMIT_PLACEHOLDER: &str = "{{ limit }}";

/// Validates issue input before it is persisted
pub struct IssueValidator;

impl IssueValidator {
    /// Input for a new issue
    pub fn validate(input: &IssueInput) -> Result<IssueContent, ValidationErrors> {
        Self::check(input, None)
    }

    /// Input replacing a stored issue. A different `identificatie` than the
    /// stored one is reported along with every other violation.
    pub fn validate_update(
        input: &IssueInput,
        stored_identificatie: Option<&str>,
    ) -> Result<IssueContent, ValidationErrors> {
        Self::check(input, stored_identificatie)
    }

    fn check(
        input: &IssueInput,
        stored_identificatie: Option<&str>,
    ) -> Result<IssueContent, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let identificatie = non_empty(&input.identificatie);
        if let Some(ref value) = identificatie {
            let within_length = check_length(
                &mut errors,
                "identificatie",
                value,
                None,
                IDENTIFICATIE_MAX_LENGTH,
                "",
                "De identificatie kan niet langer dan {{ limit }} karakters zijn",
            );
            if within_length
                && let Some(stored) = stored_identificatie
                && stored != value
            {
                errors.push(
                    "identificatie",
                    Constraint::WriteOnce,
                    IDENTIFICATIE_WRITE_ONCE_MESSAGE,
                );
            }
        }

        let issue_type = match input.issue_type.as_deref() {
            None => Some(IssueType::default()),
            Some(value) => match IssueType::from_str(value) {
                Ok(issue_type) => Some(issue_type),
                Err(_) => {
                    let choices: Vec<&str> = IssueType::ALL.iter().map(|t| t.as_str()).collect();
                    errors.push(
                        "type",
                        Constraint::Choice,
                        format!(
                            "Het type moet een van de volgende waarden zijn: {}",
                            choices.join(", ")
                        ),
                    );
                    None
                }
            },
        };

        let naam = required(&mut errors, "naam", &input.naam, "De naam mag niet leeg zijn");
        if let Some(value) = naam {
            check_length(
                &mut errors,
                "naam",
                value,
                Some(NAAM_MIN_LENGTH),
                NAAM_MAX_LENGTH,
                "De naam moet ten minste {{ limit }} tekens lang zijn",
                "De naam kan niet langer dan {{ limit }} tekens zijn",
            );
        }

        let beschrijving = required(
            &mut errors,
            "beschrijving",
            &input.beschrijving,
            "De beschrijving van uw probleem mag niet leeg zijn",
        );
        if let Some(value) = beschrijving {
            check_length(
                &mut errors,
                "beschrijving",
                value,
                Some(BESCHRIJVING_MIN_LENGTH),
                BESCHRIJVING_MAX_LENGTH,
                "De beschrijving van uw probleem moet minimaal {{ limit }} tekens lang zijn",
                "De beschrijving van uw probleem kan niet langer zijn dan {{ limit }} tekens",
            );
        }

        let voornamen = non_empty(&input.voornamen);
        if let Some(ref value) = voornamen {
            check_length(
                &mut errors,
                "voornamen",
                value,
                None,
                PERSON_NAME_MAX_LENGTH,
                "",
                "De voornamen kunnen niet langer dan {{ limit }} tekens zijn",
            );
        }

        let geslachtsnaam = non_empty(&input.geslachtsnaam);
        if let Some(ref value) = geslachtsnaam {
            check_length(
                &mut errors,
                "geslachtsnaam",
                value,
                None,
                PERSON_NAME_MAX_LENGTH,
                "",
                "De geslachtsnaam kan niet langer dan {{ limit }} tekens zijn",
            );
        }

        let taal = match input.taal.as_deref() {
            None => Some(LanguageCode::default()),
            Some(value) => match LanguageCode::parse(value) {
                Ok(code) => Some(code),
                Err(_) => {
                    errors.push(
                        "taal",
                        Constraint::Language,
                        format!("'{}' is geen geldige ISO 639-1 taalcode", value),
                    );
                    None
                }
            },
        };

        let contact_persoon = non_empty(&input.contact_persoon);
        if let Some(ref value) = contact_persoon {
            let within_length = check_length(
                &mut errors,
                "contactPersoon",
                value,
                None,
                CONTACT_PERSOON_MAX_LENGTH,
                "",
                "Het contactpersoon kan niet langer dan {{ limit }} tekens zijn",
            );
            if within_length && Url::parse(value).is_err() {
                errors.push(
                    "contactPersoon",
                    Constraint::Url,
                    "Het contactpersoon moet een geldige URI zijn",
                );
            }
        }

        match (issue_type, naam, beschrijving, taal) {
            (Some(issue_type), Some(naam), Some(beschrijving), Some(taal)) if errors.is_empty() => {
                Ok(IssueContent {
                    identificatie,
                    issue_type,
                    naam: naam.clone(),
                    beschrijving: beschrijving.clone(),
                    voornamen,
                    geslachtsnaam,
                    email: non_empty(&input.email),
                    telefoonnummer: non_empty(&input.telefoonnummer),
                    taal,
                    contact_persoon,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Optional text fields treat an empty string as absent
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn required<'a>(
    errors: &mut ValidationErrors,
    field: &str,
    value: &'a Option<String>,
    message: &str,
) -> Option<&'a String> {
    if value.is_none() {
        errors.push(field, Constraint::NotNull, message);
    }
    value.as_ref()
}

/// Length is measured in characters. Returns whether the value passed.
fn check_length(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    min: Option<usize>,
    max: usize,
    min_message: &str,
    max_message: &str,
) -> bool {
    let length = value.chars().count();

    if let Some(min) = min
        && length < min
    {
        errors.push(
            field,
            Constraint::Length,
            min_message.replace(LIMIT_PLACEHOLDER, &min.to_string()),
        );
        return false;
    }

    if length > max {
        errors.push(
            field,
            Constraint::Length,
            max_message.replace(LIMIT_PLACEHOLDER, &max.to_string()),
        );
        return false;
    }

    true
}
