use crate::{AuthError, Result as AuthErrorResult};

use cg_core::Rsin;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token claims identifying a client application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (applicatie id, a UUID)
    pub sub: String,
    /// RSIN of the organization the application acts for
    pub organisatie: String,
    /// Display name of the application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naam: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.applicatie_id()?;
        self.bron_organisatie()?;
        Ok(())
    }

    #[track_caller]
    pub fn applicatie_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub must be a UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn bron_organisatie(&self) -> AuthErrorResult<Rsin> {
        Rsin::parse(&self.organisatie).map_err(|_| AuthError::InvalidClaim {
            claim: "organisatie".to_string(),
            message: "organisatie must be an RSIN of 8 or 9 digits".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
