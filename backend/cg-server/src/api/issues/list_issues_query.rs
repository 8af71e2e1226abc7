//! Query string for `GET /issues`.
//!
//! Parameters use bracketed names (`registratiedatum[after]`,
//! `order[registratiedatum]`), and the order in which `order[...]` keys
//! appear sets their precedence, so the raw key/value pairs are parsed by
//! hand.

use crate::ApiError;

use cg_config::ApiConfig;
use cg_core::{DateRange, IssueFilter, IssueOrderField, Rsin, SortDirection};

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

const BRON_ORGANISATIE: &str = "bronOrganisatie";
const REGISTRATIEDATUM: &str = "registratiedatum";
const WIJZIGINGSDATUM: &str = "wijzigingsdatum";
const ORDER: &str = "order";
const PAGE: &str = "page";
const ITEMS_PER_PAGE: &str = "itemsPerPage";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListIssuesQuery {
    pub bron_organisatie: Option<Rsin>,
    pub registratiedatum: DateRange,
    pub wijzigingsdatum: DateRange,
    pub order: Vec<(IssueOrderField, SortDirection)>,
    pub page: Option<u32>,
    pub items_per_page: Option<u32>,
}

impl ListIssuesQuery {
    /// Unknown parameters are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ApiError> {
        let mut query = ListIssuesQuery::default();

        for (key, value) in pairs {
            let (name, bracket) = split_key(&key);

            match (name, bracket) {
                (BRON_ORGANISATIE, None) => {
                    let rsin = Rsin::parse(&value).map_err(|_| {
                        ApiError::bad_request(
                            format!("{} must be 8 or 9 digits", BRON_ORGANISATIE),
                            Some(BRON_ORGANISATIE),
                        )
                    })?;
                    query.bron_organisatie = Some(rsin);
                }
                (REGISTRATIEDATUM, Some(bound)) => {
                    set_bound(&mut query.registratiedatum, &key, bound, &value)?
                }
                (WIJZIGINGSDATUM, Some(bound)) => {
                    set_bound(&mut query.wijzigingsdatum, &key, bound, &value)?
                }
                (ORDER, Some(field)) => {
                    let field = IssueOrderField::from_str(field)?;
                    let direction = SortDirection::from_str(&value)?;
                    query.order.retain(|(existing, _)| *existing != field);
                    query.order.push((field, direction));
                }
                (PAGE, None) => query.page = Some(parse_positive(PAGE, &value)?),
                (ITEMS_PER_PAGE, None) => {
                    query.items_per_page = Some(parse_positive(ITEMS_PER_PAGE, &value)?)
                }
                _ => log::debug!("Ignoring unknown query parameter: {}", key),
            }
        }

        Ok(query)
    }

    /// Apply paging defaults; page sizes above the maximum are capped
    pub fn into_filter(self, api_config: &ApiConfig) -> IssueFilter {
        let items_per_page = self
            .items_per_page
            .unwrap_or(api_config.items_per_page)
            .min(api_config.max_items_per_page);

        IssueFilter {
            bron_organisatie: self.bron_organisatie.map(String::from),
            registratiedatum: self.registratiedatum,
            wijzigingsdatum: self.wijzigingsdatum,
            order: self.order,
            page: self.page.unwrap_or(1),
            items_per_page,
        }
    }
}

/// `name[inner]` -> (`name`, Some(`inner`)); anything else -> (`key`, None)
fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once('[') {
        Some((name, rest)) => match rest.strip_suffix(']') {
            Some(inner) => (name, Some(inner)),
            None => (key, None),
        },
        None => (key, None),
    }
}

fn set_bound(range: &mut DateRange, key: &str, bound: &str, value: &str) -> Result<(), ApiError> {
    let slot = match bound {
        "before" => &mut range.before,
        "strictly_before" => &mut range.strictly_before,
        "after" => &mut range.after,
        "strictly_after" => &mut range.strictly_after,
        _ => {
            return Err(ApiError::bad_request(
                format!(
                    "Unknown date bound '{}': expected before, strictly_before, after or strictly_after",
                    bound
                ),
                Some(key),
            ));
        }
    };

    *slot = Some(parse_date(key, value)?);
    Ok(())
}

/// RFC 3339, or a bare date meaning midnight UTC
fn parse_date(key: &str, value: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
        .ok_or_else(|| {
            ApiError::bad_request(
                format!("{} is not a valid date: {}", key, value),
                Some(key),
            )
        })
}

fn parse_positive(key: &str, value: &str) -> Result<u32, ApiError> {
    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ApiError::bad_request(
            format!("{} must be a positive integer, got '{}'", key, value),
            Some(key),
        )),
    }
}
