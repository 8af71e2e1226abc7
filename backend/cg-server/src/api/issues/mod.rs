pub mod activity_log_dto;
pub mod issue_dto;
pub mod issue_list_response;
pub mod issue_write_request;
#[allow(clippy::module_inception)]
pub mod issues;
pub mod list_issues_query;
