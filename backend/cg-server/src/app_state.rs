use crate::error::{Result as ServerErrorResult, ServerError};

use cg_auth::JwtValidator;
use cg_config::{ApiConfig, Config};

use std::sync::Arc;

use log::{info, warn};
use sqlx::SqlitePool;

/// Shared, immutable state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// None when auth is disabled
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub api_config: ApiConfig,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        jwt_validator: Option<Arc<JwtValidator>>,
        api_config: ApiConfig,
    ) -> Self {
        Self {
            pool,
            jwt_validator,
            api_config,
        }
    }

    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let jwt_validator = build_jwt_validator(config)?.map(Arc::new);
        Ok(Self::new(pool, jwt_validator, config.api.clone()))
    }
}

fn build_jwt_validator(config: &Config) -> ServerErrorResult<Option<JwtValidator>> {
    if !config.auth.enabled {
        warn!("Authentication DISABLED - callers are identified by request headers");
        return Ok(None);
    }

    let validator = match config.auth.jwt_secret {
        Some(ref secret) => JwtValidator::with_hs256(secret.as_bytes()),
        None => JwtValidator::with_rs256(&read_public_key(config)?)?,
    };
    info!("JWT: {} authentication enabled", validator.algorithm());

    Ok(Some(validator))
}

fn read_public_key(config: &Config) -> ServerErrorResult<String> {
    let config_dir = Config::config_dir()?;
    let Some(key_path) = config.auth.public_key_path(&config_dir) else {
        return Err(cg_config::ConfigError::auth(
            "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
        )
        .into());
    };

    std::fs::read_to_string(&key_path).map_err(|e| ServerError::JwtKeyFile {
        path: key_path.display().to_string(),
        source: e,
    })
}
