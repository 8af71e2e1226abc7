pub mod issue_validator;
pub mod validation_errors;
