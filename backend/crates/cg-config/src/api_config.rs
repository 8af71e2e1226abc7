use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_APPLICATIE_ID, DEFAULT_APPLICATIE_NAAM,
    DEFAULT_BRON_ORGANISATIE, DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_ITEMS_PER_PAGE,
};

use cg_core::Rsin;

use serde::Deserialize;
use uuid::Uuid;

/// REST API behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Applicatie used when auth is disabled and no X-Applicatie-Id header is sent
    pub default_applicatie_id: String,
    pub default_applicatie_naam: String,
    /// RSIN used when auth is disabled and no X-Bron-Organisatie header is sent
    pub default_bron_organisatie: String,
    pub items_per_page: u32,
    pub max_items_per_page: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_applicatie_id: DEFAULT_APPLICATIE_ID.to_string(),
            default_applicatie_naam: DEFAULT_APPLICATIE_NAAM.to_string(),
            default_bron_organisatie: DEFAULT_BRON_ORGANISATIE.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_items_per_page: DEFAULT_MAX_ITEMS_PER_PAGE,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.default_applicatie_uuid()?;
        self.default_rsin()?;

        if self.max_items_per_page == 0 {
            return Err(ConfigError::api("api.max_items_per_page must be at least 1"));
        }

        if self.items_per_page == 0 || self.items_per_page > self.max_items_per_page {
            return Err(ConfigError::api(format!(
                "api.items_per_page must be 1-{}, got {}",
                self.max_items_per_page, self.items_per_page
            )));
        }

        Ok(())
    }

    pub fn default_applicatie_uuid(&self) -> ConfigErrorResult<Uuid> {
        Uuid::parse_str(&self.default_applicatie_id).map_err(|e| {
            ConfigError::api(format!(
                "api.default_applicatie_id is not a valid UUID: {}",
                e
            ))
        })
    }

    pub fn default_rsin(&self) -> ConfigErrorResult<Rsin> {
        Rsin::parse(&self.default_bron_organisatie)
            .map_err(|e| ConfigError::api(format!("api.default_bron_organisatie: {}", e)))
    }
}
