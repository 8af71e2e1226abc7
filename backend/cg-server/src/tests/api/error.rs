use crate::ApiError;

use cg_auth::AuthError;
use cg_core::{Constraint, FieldViolation, ValidationErrors};

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Issue 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Issue 7 not found");
    assert!(json["error"].get("violations").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_every_violation() {
    let mut errors = ValidationErrors::new();
    errors.push("naam", Constraint::NotNull, "De naam mag niet leeg zijn");
    errors.push(
        "beschrijving",
        Constraint::Length,
        "De beschrijving van uw probleem moet minimaal 25 tekens lang zijn",
    );

    let response = ApiError::from(errors).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["violations"].as_array().unwrap().len(), 2);
    assert_eq!(json["error"]["violations"][0]["field"], "naam");
    assert_eq!(json["error"]["violations"][0]["constraint"], "not_null");
    assert_eq!(json["error"]["violations"][1]["field"], "beschrijving");
    // Several fields failed, so no single field is named
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_single_violation_names_its_field() {
    let errors = ValidationErrors::single(FieldViolation::new(
        "type",
        Constraint::Choice,
        "Het type moet een van de volgende waarden zijn: contact, aanvraag",
    ));

    let json = body_json(ApiError::from(errors).into_response()).await;

    assert_eq!(json["error"]["field"], "type");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let response = ApiError::forbidden("Issue: 3. belongs to another applicatie").into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let response = ApiError::internal("Database operation failed").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_expired_token_maps_to_401_without_location() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Token expired");
}

#[tokio::test]
async fn test_invalid_header_maps_to_400_with_field() {
    let error = ApiError::from(AuthError::InvalidHeader {
        header: "X-Applicatie-Id".into(),
        message: "invalid character".into(),
        location: ErrorLocation::from(Location::caller()),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["field"], "X-Applicatie-Id");
}
