use crate::{ApiError, ListIssuesQuery};

use cg_config::ApiConfig;
use cg_core::{IssueOrderField, SortDirection};

use chrono::{TimeZone, Utc};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn given_no_parameters_when_converted_then_defaults_apply() {
    let query = ListIssuesQuery::from_pairs(Vec::new()).unwrap();

    let filter = query.into_filter(&ApiConfig::default());

    assert_eq!(filter.page, 1);
    assert_eq!(filter.items_per_page, 30);
    assert!(filter.order.is_empty());
    assert!(filter.bron_organisatie.is_none());
}

#[test]
fn given_date_bounds_when_parsed_then_rfc3339_and_plain_dates_accepted() {
    let query = ListIssuesQuery::from_pairs(pairs(&[
        ("registratiedatum[after]", "2024-03-01"),
        ("registratiedatum[strictly_before]", "2024-03-02T12:30:00+01:00"),
        ("wijzigingsdatum[before]", "2024-04-01T00:00:00Z"),
    ]))
    .unwrap();

    assert_eq!(
        query.registratiedatum.after,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(
        query.registratiedatum.strictly_before,
        Some(Utc.with_ymd_and_hms(2024, 3, 2, 11, 30, 0).unwrap())
    );
    assert_eq!(
        query.wijzigingsdatum.before,
        Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap())
    );
    assert!(query.wijzigingsdatum.after.is_none());
}

#[test]
fn given_order_parameters_when_parsed_then_precedence_follows_query_order() {
    let query = ListIssuesQuery::from_pairs(pairs(&[
        ("order[registratiedatum]", "desc"),
        ("order[bronOrganisatie]", "ASC"),
    ]))
    .unwrap();

    assert_eq!(
        query.order,
        vec![
            (IssueOrderField::Registratiedatum, SortDirection::Desc),
            (IssueOrderField::BronOrganisatie, SortDirection::Asc),
        ]
    );
}

#[test]
fn given_unknown_order_field_when_parsed_then_bad_request() {
    let result = ListIssuesQuery::from_pairs(pairs(&[("order[naam]", "asc")]));

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn given_invalid_date_when_parsed_then_bad_request_names_parameter() {
    let result = ListIssuesQuery::from_pairs(pairs(&[("registratiedatum[after]", "gisteren")]));

    match result {
        Err(ApiError::BadRequest { field, .. }) => {
            assert_eq!(field.as_deref(), Some("registratiedatum[after]"))
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[test]
fn given_unknown_date_bound_when_parsed_then_bad_request() {
    let result = ListIssuesQuery::from_pairs(pairs(&[("registratiedatum[around]", "2024-01-01")]));

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn given_malformed_bron_organisatie_when_parsed_then_bad_request() {
    let result = ListIssuesQuery::from_pairs(pairs(&[("bronOrganisatie", "abc")]));

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn given_zero_page_when_parsed_then_bad_request() {
    let result = ListIssuesQuery::from_pairs(pairs(&[("page", "0")]));

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn given_page_size_above_maximum_when_converted_then_capped() {
    let query = ListIssuesQuery::from_pairs(pairs(&[("itemsPerPage", "5000"), ("page", "3")]))
        .unwrap();

    let filter = query.into_filter(&ApiConfig::default());

    assert_eq!(filter.items_per_page, 100);
    assert_eq!(filter.page, 3);
}

#[test]
fn given_unknown_parameter_when_parsed_then_ignored() {
    let query = ListIssuesQuery::from_pairs(pairs(&[("naam", "x"), ("bronOrganisatie", "123456789")]))
        .unwrap();

    assert_eq!(
        query.bron_organisatie.as_ref().map(|rsin| rsin.as_str()),
        Some("123456789")
    );
}
