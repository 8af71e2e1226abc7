//! Identifies the application behind a request

use crate::{ApiError, AppState};

use cg_auth::{AuthError, CallerContext, bearer_token};
use cg_core::Rsin;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

pub const APPLICATIE_ID_HEADER: &str = "X-Applicatie-Id";
pub const APPLICATIE_NAAM_HEADER: &str = "X-Applicatie-Naam";
pub const BRON_ORGANISATIE_HEADER: &str = "X-Bron-Organisatie";

/// The calling application.
///
/// With auth enabled this comes from the bearer token and nothing else.
/// With auth disabled the `X-Applicatie-*` and `X-Bron-Organisatie`
/// headers are trusted, falling back to the configured defaults.
pub struct Caller(pub CallerContext);

impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let context = match state.jwt_validator {
                Some(ref validator) => {
                    let header = header_str(&parts.headers, AUTHORIZATION.as_str())?;
                    let token = bearer_token(header)?;
                    let claims = validator.validate(token)?;
                    CallerContext::from_claims(claims)?
                }
                None => from_headers(&parts.headers, state)?,
            };

            log::debug!(
                "Caller: applicatie {} ({})",
                context.applicatie_id,
                context.bron_organisatie
            );

            Ok(Caller(context))
        }
    }
}

fn from_headers(headers: &HeaderMap, state: &AppState) -> Result<CallerContext, ApiError> {
    let applicatie_id = match header_str(headers, APPLICATIE_ID_HEADER)? {
        Some(value) => {
            Uuid::parse_str(value).map_err(|e| invalid_header(APPLICATIE_ID_HEADER, e))?
        }
        None => state.api_config.default_applicatie_uuid()?,
    };

    let bron_organisatie = match header_str(headers, BRON_ORGANISATIE_HEADER)? {
        Some(value) => Rsin::parse(value)
            .map_err(|_| invalid_header(BRON_ORGANISATIE_HEADER, "expected 8 or 9 digits"))?,
        None => state.api_config.default_rsin()?,
    };

    let naam = header_str(headers, APPLICATIE_NAAM_HEADER)?
        .map(str::to_string)
        .unwrap_or_else(|| state.api_config.default_applicatie_naam.clone());

    Ok(CallerContext::new(applicatie_id, naam, bron_organisatie))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, AuthError> {
    headers
        .get(name)
        .map(|value| {
            value
                .to_str()
                .map_err(|_| invalid_header(name, "not valid visible ASCII"))
        })
        .transpose()
}

#[track_caller]
fn invalid_header(header: &str, message: impl ToString) -> AuthError {
    AuthError::InvalidHeader {
        header: header.to_string(),
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
