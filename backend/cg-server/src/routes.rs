use crate::{
    AppState, create_issue, delete_issue, get_issue, health, list_issue_activity, list_issues,
    update_issue,
};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Issues
        .route("/issues", get(list_issues).post(create_issue))
        .route(
            "/issues/{id}",
            get(get_issue).put(update_issue).delete(delete_issue),
        )
        .route("/issues/{id}/activity", get(list_issue_activity))
        // Health probes
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
