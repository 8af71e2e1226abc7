mod api_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use api_config::ApiConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "CG_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".cg";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "issues.db";

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_APPLICATIE_ID: &str = "00000000-0000-0000-0000-000000000001";
const DEFAULT_APPLICATIE_NAAM: &str = "Anonieme applicatie";
const DEFAULT_BRON_ORGANISATIE: &str = "002851234";
const DEFAULT_ITEMS_PER_PAGE: u32 = 30;
const DEFAULT_MAX_ITEMS_PER_PAGE: u32 = 100;

#[cfg(test)]
mod tests;
