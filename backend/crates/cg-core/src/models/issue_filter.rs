use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

pub const DEFAULT_ITEMS_PER_PAGE: u32 = 30;

/// Bounds on a date column; every bound that is set must hold
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub before: Option<DateTime<Utc>>,
    pub strictly_before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
    pub strictly_after: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.before.is_none()
            && self.strictly_before.is_none()
            && self.after.is_none()
            && self.strictly_after.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueOrderField {
    Id,
    BronOrganisatie,
    Registratiedatum,
    Wijzigingsdatum,
}

impl IssueOrderField {
    /// Column name in the issues table
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::BronOrganisatie => "bron_organisatie",
            Self::Registratiedatum => "registratiedatum",
            Self::Wijzigingsdatum => "wijzigingsdatum",
        }
    }
}

impl FromStr for IssueOrderField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "id" => Ok(Self::Id),
            "bronOrganisatie" => Ok(Self::BronOrganisatie),
            "registratiedatum" => Ok(Self::Registratiedatum),
            "wijzigingsdatum" => Ok(Self::Wijzigingsdatum),
            _ => Err(CoreError::InvalidOrderField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CoreError::InvalidSortDirection {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Filtering, ordering and paging for issue listings.
///
/// Results are ordered by `order` in sequence, then by id so that paging
/// is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFilter {
    pub bron_organisatie: Option<String>,
    pub registratiedatum: DateRange,
    pub wijzigingsdatum: DateRange,
    pub order: Vec<(IssueOrderField, SortDirection)>,
    /// 1-based
    pub page: u32,
    pub items_per_page: u32,
}

impl Default for IssueFilter {
    fn default() -> Self {
        Self {
            bron_organisatie: None,
            registratiedatum: DateRange::default(),
            wijzigingsdatum: DateRange::default(),
            order: Vec::new(),
            page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl IssueFilter {
    pub fn limit(&self) -> i64 {
        i64::from(self.items_per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.max(1) - 1) * i64::from(self.items_per_page)
    }
}
