pub mod activity_log;
pub mod applicatie;
pub mod field_change;
pub mod issue;
pub mod issue_content;
pub mod issue_filter;
pub mod issue_type;
pub mod language_code;
pub mod rsin;
pub mod timestamp;
