use crate::tests::valid_input;
use crate::{
    Constraint, Issue, IssueType, IssueValidator, NewIssue, Rsin, Stringable, timestamp,
};

use chrono::{Duration, TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn persisted_issue(id: i64) -> Issue {
    let content = IssueValidator::validate(&valid_input()).unwrap();
    NewIssue::new(content, Rsin::parse("123456789").unwrap(), Uuid::new_v4()).into_issue(id)
}

#[test]
fn given_issue_with_id_42_when_rendered_then_literal_string() {
    let issue = persisted_issue(42);

    assert_that!(issue.render(), eq("Issue: 42."));
    assert_that!(issue.to_string(), eq("Issue: 42."));
}

#[test]
fn given_new_issue_when_persisted_then_id_and_owner_come_from_store_and_caller() {
    let content = IssueValidator::validate(&valid_input()).unwrap();
    let eigenaar = Uuid::new_v4();
    let registered = Utc.with_ymd_and_hms(2019, 1, 2, 13, 33, 5).unwrap();

    let issue = NewIssue::new_at(content, Rsin::parse("12345678").unwrap(), eigenaar, registered)
        .into_issue(5);

    assert_that!(issue.id, eq(5));
    assert_that!(issue.eigenaar, eq(eigenaar));
    assert_that!(issue.bron_organisatie.as_str(), eq("12345678"));
    assert_that!(issue.registratiedatum, eq(registered));
    assert_that!(issue.wijzigingsdatum, none());
}

#[test]
fn given_two_sequential_updates_when_applied_then_modification_time_strictly_increases() {
    let mut issue = persisted_issue(1);
    let registered = issue.registratiedatum;
    let now = timestamp::now();

    let mut input = valid_input();
    input.naam = Some("Eerste wijziging".to_string());
    issue
        .apply_update(IssueValidator::validate(&input).unwrap(), now)
        .unwrap();
    let first = issue.wijzigingsdatum.unwrap();

    input.naam = Some("Tweede wijziging".to_string());
    // Same clock reading: the timestamp must still move forward
    issue
        .apply_update(IssueValidator::validate(&input).unwrap(), now)
        .unwrap();
    let second = issue.wijzigingsdatum.unwrap();

    assert!(first > registered);
    assert!(second > first);
    assert_that!(issue.registratiedatum, eq(registered));
}

#[test]
fn given_clock_behind_registration_when_updated_then_still_after_registration() {
    let mut issue = persisted_issue(1);
    let earlier = issue.registratiedatum - Duration::hours(1);

    issue
        .apply_update(IssueValidator::validate(&valid_input()).unwrap(), earlier)
        .unwrap();

    assert!(issue.wijzigingsdatum.unwrap() > issue.registratiedatum);
}

#[test]
fn given_update_when_applied_then_id_owner_and_organization_untouched() {
    let mut issue = persisted_issue(9);
    let before = issue.clone();

    let mut input = valid_input();
    input.issue_type = Some("aanvraag".to_string());
    issue
        .apply_update(IssueValidator::validate(&input).unwrap(), timestamp::now())
        .unwrap();

    assert_that!(issue.id, eq(before.id));
    assert_that!(issue.eigenaar, eq(before.eigenaar));
    assert_that!(issue.bron_organisatie, eq(&before.bron_organisatie));
    assert_that!(issue.issue_type, eq(IssueType::Aanvraag));
}

#[test]
fn given_changed_fields_when_updated_then_changes_are_reported() {
    let mut issue = persisted_issue(1);

    let mut input = valid_input();
    input.naam = Some("Andere naam".to_string());
    input.email = None;
    let changes = issue
        .apply_update(IssueValidator::validate(&input).unwrap(), timestamp::now())
        .unwrap();

    let names: Vec<&str> = changes.iter().map(|c| c.field_name.as_str()).collect();
    assert_eq!(names, vec!["naam", "email"]);
    assert_eq!(changes[1].new_value, None);
}

#[test]
fn given_existing_identificatie_when_update_changes_it_then_rejected() {
    let mut issue = persisted_issue(1);
    let before = issue.clone();

    let mut input = valid_input();
    input.identificatie = Some("iets-anders".to_string());
    let result = issue.apply_update(IssueValidator::validate(&input).unwrap(), timestamp::now());

    let errors = result.unwrap_err();
    assert_that!(errors.len(), eq(1));
    assert_eq!(errors.violations()[0].constraint, Constraint::WriteOnce);
    assert_that!(issue, eq(&before));
}

#[test]
fn given_existing_identificatie_when_update_omits_it_then_kept() {
    let mut issue = persisted_issue(1);

    let mut input = valid_input();
    input.identificatie = None;
    issue
        .apply_update(IssueValidator::validate(&input).unwrap(), timestamp::now())
        .unwrap();

    assert_eq!(
        issue.identificatie.as_deref(),
        Some("6a36c2c4-213e-4348-a467-dfa3a30f64aa")
    );
}

#[test]
fn given_no_identificatie_when_update_sets_it_then_accepted() {
    let mut input = valid_input();
    input.identificatie = None;
    let content = IssueValidator::validate(&input).unwrap();
    let mut issue =
        NewIssue::new(content, Rsin::parse("123456789").unwrap(), Uuid::new_v4()).into_issue(3);

    input.identificatie = Some("ZAAK-2019-0001".to_string());
    issue
        .apply_update(IssueValidator::validate(&input).unwrap(), timestamp::now())
        .unwrap();

    assert_eq!(issue.identificatie.as_deref(), Some("ZAAK-2019-0001"));
}

#[test]
fn test_ownership_check() {
    let issue = persisted_issue(1);

    assert!(issue.is_owned_by(issue.eigenaar));
    assert!(!issue.is_owned_by(Uuid::new_v4()));
}
