use thiserror::Error;

/// Startup and shutdown failures of the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] gp_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] gp_db::DbError),

    #[error("GitHub client error: {0}")]
    Github(#[from] gp_github::GithubError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
