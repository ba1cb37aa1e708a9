mod config;
mod database_config;
mod error;
mod github_config;
mod log_level;
mod logging_config;
mod server_config;
mod sprints_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use github_config::GithubConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sprints_config::{MissingRowPolicy, SprintsConfig};

const CONFIG_DIR_ENV: &str = "GP_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".goplan";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "goplan.db";
const IN_MEMORY_DATABASE: &str = ":memory:";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_GITHUB_ENABLED: bool = true;
const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_GITHUB_USER_AGENT: &str = "goplan";
const DEFAULT_GITHUB_TIMEOUT_SECS: u64 = 30;
const MIN_GITHUB_TIMEOUT_SECS: u64 = 1;
const MAX_GITHUB_TIMEOUT_SECS: u64 = 300;
