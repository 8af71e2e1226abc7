mod error;
mod list_issues_query;
