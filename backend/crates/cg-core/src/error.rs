use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid issue type: {value} {location}")]
    InvalidIssueType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid RSIN: {value} {location}")]
    InvalidRsin {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid language code: {value} {location}")]
    InvalidLanguageCode {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid order field: {value} {location}")]
    InvalidOrderField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort direction: {value} {location}")]
    InvalidSortDirection {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
