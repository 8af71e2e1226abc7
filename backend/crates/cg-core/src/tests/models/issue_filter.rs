use crate::{IssueFilter, IssueOrderField, SortDirection};

use std::str::FromStr;

#[test]
fn test_default_filter_is_first_page_of_thirty() {
    let filter = IssueFilter::default();

    assert_eq!(filter.page, 1);
    assert_eq!(filter.limit(), 30);
    assert_eq!(filter.offset(), 0);
    assert!(filter.order.is_empty());
}

#[test]
fn test_offset_follows_page() {
    let filter = IssueFilter {
        page: 3,
        items_per_page: 10,
        ..IssueFilter::default()
    };

    assert_eq!(filter.offset(), 20);
}

#[test]
fn test_page_zero_is_treated_as_first_page() {
    let filter = IssueFilter {
        page: 0,
        ..IssueFilter::default()
    };

    assert_eq!(filter.offset(), 0);
}

#[test]
fn test_order_field_from_api_name() {
    assert_eq!(
        IssueOrderField::from_str("bronOrganisatie").unwrap(),
        IssueOrderField::BronOrganisatie
    );
    assert_eq!(
        IssueOrderField::from_str("registratiedatum").unwrap().column(),
        "registratiedatum"
    );
    assert!(IssueOrderField::from_str("naam").is_err());
}

#[test]
fn test_sort_direction_is_case_insensitive() {
    assert_eq!(SortDirection::from_str("DESC").unwrap(), SortDirection::Desc);
    assert_eq!(SortDirection::from_str("asc").unwrap().as_sql(), "ASC");
    assert!(SortDirection::from_str("sideways").is_err());
}
