use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid header '{header}': {message} {location}")]
    InvalidHeader {
        header: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::InvalidHeader { .. } => "INVALID_HEADER",
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            Self::InvalidHeader { header, .. } => Some(header.clone()),
            _ => None,
        }
    }

    /// Message safe to show to a client; no source locations
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidToken { message, .. } => format!("Invalid token: {}", message),
            Self::TokenExpired { .. } => "Token expired".to_string(),
            Self::MissingHeader { .. } => "Missing authorization header".to_string(),
            Self::InvalidScheme { .. } => {
                "Invalid authorization scheme: expected 'Bearer'".to_string()
            }
            Self::JwtDecode { .. } => "Token could not be verified".to_string(),
            Self::InvalidClaim { claim, message, .. } => {
                format!("Invalid claim '{}': {}", claim, message)
            }
            Self::InvalidHeader {
                header, message, ..
            } => format!("Invalid header '{}': {}", header, message),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
