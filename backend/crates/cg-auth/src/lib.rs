pub mod caller_context;
pub mod claims;
pub mod error;
pub mod jwt_validator;

pub use caller_context::{CallerContext, bearer_token};
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
