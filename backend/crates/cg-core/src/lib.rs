pub mod error;
pub mod models;
pub mod stringable;
pub mod validation;

pub use error::{CoreError, Result as CoreResult};
pub use models::activity_log::ActivityLog;
pub use models::applicatie::Applicatie;
pub use models::field_change::{FieldChange, FieldChangeBuilder};
pub use models::issue::{Issue, NewIssue};
pub use models::issue_content::{IssueContent, IssueInput};
pub use models::issue_filter::{DateRange, IssueFilter, IssueOrderField, SortDirection};
pub use models::issue_type::IssueType;
pub use models::language_code::LanguageCode;
pub use models::rsin::Rsin;
pub use models::timestamp;
pub use stringable::Stringable;
pub use validation::issue_validator::IssueValidator;
pub use validation::validation_errors::{Constraint, FieldViolation, ValidationErrors};

/// Entity type recorded in the activity log for issues
pub const ISSUE_ENTITY_TYPE: &str = "issue";

#[cfg(test)]
mod tests;
