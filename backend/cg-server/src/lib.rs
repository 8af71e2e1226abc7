pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller::Caller,
    issues::{
        activity_log_dto::{ActivityLogDto, ActivityLogListResponse},
        issue_dto::IssueDto,
        issue_list_response::IssueListResponse,
        issue_write_request::IssueWriteRequest,
        issues::{
            create_issue, delete_issue, get_issue, list_issue_activity, list_issues, update_issue,
        },
        list_issues_query::ListIssuesQuery,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
