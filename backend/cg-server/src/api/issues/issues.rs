//! Issue REST API handlers
//!
//! Every write runs in one transaction together with its activity log
//! entries. Write transactions hold the database write lock from the start,
//! and handlers use them for all reads as well.

use crate::{
    ActivityLogDto, ActivityLogListResponse, ApiError, ApiResult, AppState, Caller, IssueDto,
    IssueListResponse, IssueWriteRequest, ListIssuesQuery,
};

use cg_auth::CallerContext;
use cg_core::{
    ActivityLog, ISSUE_ENTITY_TYPE, Issue, IssueValidator, NewIssue, Stringable, timestamp,
};
use cg_db::{ActivityLogRepository, ApplicatieRepository, IssueRepository};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

/// GET /issues
pub async fn list_issues(
    State(state): State<AppState>,
    Caller(_caller): Caller,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<IssueListResponse>> {
    let Query(pairs) = query?;
    let filter = ListIssuesQuery::from_pairs(pairs)?.into_filter(&state.api_config);

    let page = IssueRepository::find_page(&state.pool, &filter).await?;

    Ok(Json(IssueListResponse {
        issues: page.issues.into_iter().map(IssueDto::from).collect(),
        page: filter.page,
        items_per_page: filter.items_per_page,
        total_items: page.total_items,
    }))
}

/// GET /issues/{id}
pub async fn get_issue(
    State(state): State<AppState>,
    Caller(_caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<IssueDto>> {
    let id = parse_issue_id(&id)?;

    let issue = IssueRepository::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(IssueDto::from(issue)))
}

/// POST /issues
///
/// Ownership and source organization come from the caller, never the body.
pub async fn create_issue(
    State(state): State<AppState>,
    Caller(caller): Caller,
    body: Result<Json<IssueWriteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<IssueDto>)> {
    let Json(req) = body?;
    let content = IssueValidator::validate(&req.into())?;

    let new_issue = NewIssue::new(
        content,
        caller.bron_organisatie.clone(),
        caller.applicatie_id,
    );

    let mut tx = cg_db::begin_write(&state.pool).await?;
    ApplicatieRepository::ensure(&mut *tx, &caller.to_applicatie()).await?;
    let issue = IssueRepository::create(&mut *tx, new_issue).await?;
    let activity = ActivityLog::created(ISSUE_ENTITY_TYPE, issue.id, caller.applicatie_id);
    ActivityLogRepository::create(&mut *tx, &activity).await?;
    tx.commit().await?;

    log::info!(
        "Created {} for applicatie {}",
        issue.render(),
        caller.applicatie_id
    );

    Ok((StatusCode::CREATED, Json(IssueDto::from(issue))))
}

/// PUT /issues/{id}
///
/// Full replace of the writable fields. Last writer wins.
pub async fn update_issue(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
    body: Result<Json<IssueWriteRequest>, JsonRejection>,
) -> ApiResult<Json<IssueDto>> {
    let id = parse_issue_id(&id)?;
    let Json(req) = body?;

    let mut tx = cg_db::begin_write(&state.pool).await?;

    let mut issue = IssueRepository::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    ensure_owner(&issue, &caller)?;

    let content = IssueValidator::validate_update(&req.into(), issue.identificatie.as_deref())?;
    let changes = issue.apply_update(content, timestamp::now())?;

    if !IssueRepository::update(&mut *tx, &issue).await? {
        return Err(not_found(id));
    }
    for activity in ActivityLog::updated(ISSUE_ENTITY_TYPE, id, caller.applicatie_id, &changes) {
        ActivityLogRepository::create(&mut *tx, &activity).await?;
    }
    tx.commit().await?;

    log::info!(
        "Updated {} ({} field(s) changed)",
        issue.render(),
        changes.len()
    );

    Ok(Json(IssueDto::from(issue)))
}

/// DELETE /issues/{id}
///
/// Hard delete; the activity log is kept.
pub async fn delete_issue(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_issue_id(&id)?;

    let mut tx = cg_db::begin_write(&state.pool).await?;

    let issue = IssueRepository::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    ensure_owner(&issue, &caller)?;

    if !IssueRepository::delete(&mut *tx, id).await? {
        return Err(not_found(id));
    }
    let activity = ActivityLog::deleted(ISSUE_ENTITY_TYPE, id, caller.applicatie_id);
    ActivityLogRepository::create(&mut *tx, &activity).await?;
    tx.commit().await?;

    log::info!("Deleted {}", issue.render());

    Ok(StatusCode::NO_CONTENT)
}

/// GET /issues/{id}/activity
///
/// Still answers after the issue itself has been deleted.
pub async fn list_issue_activity(
    State(state): State<AppState>,
    Caller(_caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<ActivityLogListResponse>> {
    let id = parse_issue_id(&id)?;

    let logs = ActivityLogRepository::find_by_entity(&state.pool, ISSUE_ENTITY_TYPE, id).await?;
    if logs.is_empty() && IssueRepository::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    Ok(Json(ActivityLogListResponse {
        issue: id,
        activity: logs.into_iter().map(ActivityLogDto::from).collect(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Ids are positive integers; anything else cannot name an issue
#[track_caller]
fn parse_issue_id(raw: &str) -> ApiResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::not_found(format!("Issue {} not found", raw))),
    }
}

#[track_caller]
fn not_found(id: i64) -> ApiError {
    ApiError::not_found(format!("Issue {} not found", id))
}

#[track_caller]
fn ensure_owner(issue: &Issue, caller: &CallerContext) -> ApiResult<()> {
    if issue.is_owned_by(caller.applicatie_id) {
        return Ok(());
    }
    Err(ApiError::forbidden(format!(
        "{} belongs to another applicatie",
        issue.render()
    )))
}
