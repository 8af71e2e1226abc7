use crate::{AuthError, Claims, Result as AuthErrorResult};

use cg_core::{Applicatie, Rsin};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

const BEARER_PREFIX: &str = "Bearer ";

/// The authenticated application behind a request.
///
/// Handlers take ownership and the source organization of new issues from
/// here, never from the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    pub applicatie_id: Uuid,
    pub naam: String,
    pub bron_organisatie: Rsin,
}

impl CallerContext {
    pub fn new(applicatie_id: Uuid, naam: String, bron_organisatie: Rsin) -> Self {
        Self {
            applicatie_id,
            naam,
            bron_organisatie,
        }
    }

    /// Build from verified claims. Without a `naam` claim the subject is used.
    #[track_caller]
    pub fn from_claims(claims: Claims) -> AuthErrorResult<Self> {
        let applicatie_id = claims.applicatie_id()?;
        let bron_organisatie = claims.bron_organisatie()?;

        Ok(Self {
            applicatie_id,
            naam: claims.naam.unwrap_or(claims.sub),
            bron_organisatie,
        })
    }

    /// Registration record for this caller
    pub fn to_applicatie(&self) -> Applicatie {
        Applicatie::new(
            self.applicatie_id,
            self.naam.clone(),
            self.bron_organisatie.clone(),
        )
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value
#[track_caller]
pub fn bearer_token(header_value: Option<&str>) -> AuthErrorResult<&str> {
    let value = header_value.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
