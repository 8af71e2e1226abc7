use crate::IssueDto;

use serde::Serialize;

/// One page of issues
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueListResponse {
    pub issues: Vec<IssueDto>,
    pub page: u32,
    pub items_per_page: u32,
    pub total_items: i64,
}
