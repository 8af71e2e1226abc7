use crate::tests::valid_input;
use crate::{Constraint, IssueInput, IssueType, IssueValidator};

use googletest::prelude::*;

fn text(length: usize) -> String {
    "a".repeat(length)
}

fn with_naam(length: usize) -> IssueInput {
    IssueInput {
        naam: Some(text(length)),
        ..valid_input()
    }
}

fn with_beschrijving(length: usize) -> IssueInput {
    IssueInput {
        beschrijving: Some(text(length)),
        ..valid_input()
    }
}

#[test]
fn given_valid_input_when_validated_then_content_is_returned() {
    let content = IssueValidator::validate(&valid_input()).unwrap();

    assert_that!(content.naam, eq("Gratis trouwen"));
    assert_that!(content.issue_type, eq(IssueType::Contact));
    assert_that!(content.taal.as_str(), eq("nl"));
}

#[test]
fn given_naam_at_bounds_when_validated_then_accepted() {
    assert_that!(IssueValidator::validate(&with_naam(5)), ok(anything()));
    assert_that!(IssueValidator::validate(&with_naam(255)), ok(anything()));
}

#[test]
fn given_naam_outside_bounds_when_validated_then_rejected() {
    for length in [4, 256] {
        let errors = IssueValidator::validate(&with_naam(length)).unwrap_err();

        assert_that!(errors.len(), eq(1));
        assert_that!(errors.violations()[0].field, eq("naam"));
        assert_eq!(errors.violations()[0].constraint, Constraint::Length);
    }
}

#[test]
fn given_naam_too_short_when_validated_then_message_names_the_limit() {
    let errors = IssueValidator::validate(&with_naam(4)).unwrap_err();

    assert_that!(
        errors.violations()[0].message,
        eq("De naam moet ten minste 5 tekens lang zijn")
    );
}

#[test]
fn given_beschrijving_at_bounds_when_validated_then_accepted() {
    assert_that!(IssueValidator::validate(&with_beschrijving(25)), ok(anything()));
    assert_that!(IssueValidator::validate(&with_beschrijving(2000)), ok(anything()));
}

#[test]
fn given_beschrijving_outside_bounds_when_validated_then_rejected() {
    for length in [24, 2001] {
        let errors = IssueValidator::validate(&with_beschrijving(length)).unwrap_err();

        assert!(errors.has_field("beschrijving"));
        assert_that!(errors.len(), eq(1));
    }
}

#[test]
fn given_multibyte_naam_when_validated_then_length_counts_characters() {
    // Five characters, ten bytes
    let input = IssueInput {
        naam: Some("ééééé".to_string()),
        ..valid_input()
    };

    assert_that!(IssueValidator::validate(&input), ok(anything()));
}

#[test]
fn given_type_values_when_validated_then_only_known_types_pass() {
    for accepted in ["contact", "aanvraag"] {
        let input = IssueInput {
            issue_type: Some(accepted.to_string()),
            ..valid_input()
        };
        assert_that!(IssueValidator::validate(&input), ok(anything()));
    }

    let input = IssueInput {
        issue_type: Some("invalid".to_string()),
        ..valid_input()
    };
    let errors = IssueValidator::validate(&input).unwrap_err();
    assert_that!(errors.violations()[0].field, eq("type"));
    assert_eq!(errors.violations()[0].constraint, Constraint::Choice);
}

#[test]
fn given_missing_type_and_taal_when_validated_then_defaults_apply() {
    let input = IssueInput {
        issue_type: None,
        taal: None,
        ..valid_input()
    };

    let content = IssueValidator::validate(&input).unwrap();

    assert_that!(content.issue_type, eq(IssueType::Contact));
    assert_that!(content.taal.as_str(), eq("nl"));
}

#[test]
fn given_missing_required_fields_when_validated_then_not_null_violations() {
    let input = IssueInput {
        naam: None,
        beschrijving: None,
        ..valid_input()
    };

    let errors = IssueValidator::validate(&input).unwrap_err();

    assert_that!(errors.len(), eq(2));
    assert!(
        errors
            .violations()
            .iter()
            .all(|v| v.constraint == Constraint::NotNull)
    );
}

#[test]
fn given_several_invalid_fields_when_validated_then_all_are_reported() {
    let input = IssueInput {
        identificatie: Some(text(41)),
        issue_type: Some("klacht".to_string()),
        naam: Some(text(2)),
        beschrijving: Some(text(3)),
        voornamen: Some(text(251)),
        geslachtsnaam: Some(text(251)),
        taal: Some("xx".to_string()),
        contact_persoon: Some("geen uri".to_string()),
        ..valid_input()
    };

    let errors = IssueValidator::validate(&input).unwrap_err();

    let fields: Vec<&str> = errors.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "identificatie",
            "type",
            "naam",
            "beschrijving",
            "voornamen",
            "geslachtsnaam",
            "taal",
            "contactPersoon",
        ]
    );
}

#[test]
fn given_malformed_language_code_when_validated_then_language_violation() {
    let input = IssueInput {
        taal: Some("dutch".to_string()),
        ..valid_input()
    };

    let errors = IssueValidator::validate(&input).unwrap_err();

    assert_eq!(errors.violations()[0].constraint, Constraint::Language);
}

#[test]
fn given_overlong_contact_persoon_when_validated_then_single_length_violation() {
    let input = IssueInput {
        contact_persoon: Some(format!("https://example.com/{}", text(250))),
        ..valid_input()
    };

    let errors = IssueValidator::validate(&input).unwrap_err();

    assert_that!(errors.len(), eq(1));
    assert_eq!(errors.violations()[0].constraint, Constraint::Length);
}

#[test]
fn given_empty_optional_strings_when_validated_then_treated_as_absent() {
    let input = IssueInput {
        identificatie: Some(String::new()),
        email: Some(String::new()),
        contact_persoon: Some(String::new()),
        ..valid_input()
    };

    let content = IssueValidator::validate(&input).unwrap();

    assert_that!(content.identificatie, none());
    assert_that!(content.email, none());
    assert_that!(content.contact_persoon, none());
}

#[test]
fn given_changed_identificatie_and_short_naam_when_update_validated_then_both_reported() {
    let input = IssueInput {
        identificatie: Some("ID-2".to_string()),
        naam: Some(text(3)),
        ..valid_input()
    };

    let errors = IssueValidator::validate_update(&input, Some("ID-1")).unwrap_err();

    let reported: Vec<(&str, Constraint)> = errors
        .violations()
        .iter()
        .map(|v| (v.field.as_str(), v.constraint))
        .collect();
    assert_eq!(
        reported,
        vec![
            ("identificatie", Constraint::WriteOnce),
            ("naam", Constraint::Length),
        ]
    );
}

#[test]
fn given_same_or_omitted_identificatie_when_update_validated_then_accepted() {
    let same = IssueInput {
        identificatie: Some("ID-1".to_string()),
        ..valid_input()
    };
    let omitted = IssueInput {
        identificatie: None,
        ..valid_input()
    };

    assert_that!(IssueValidator::validate_update(&same, Some("ID-1")), ok(anything()));
    assert_that!(IssueValidator::validate_update(&omitted, Some("ID-1")), ok(anything()));
}

#[test]
fn given_no_stored_identificatie_when_update_sets_one_then_accepted() {
    let input = IssueInput {
        identificatie: Some("ID-1".to_string()),
        ..valid_input()
    };

    let content = IssueValidator::validate_update(&input, None).unwrap();

    assert_that!(content.identificatie, some(eq("ID-1")));
}
