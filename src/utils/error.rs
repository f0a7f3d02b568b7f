use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Credential(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("GitHub API error: {0}")]
    Remote(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::Network(msg) => {
            eprintln!("🌐 {}", OutputStyle::error(&format!("Network: {}", msg)));
            eprintln!(
                "   {}",
                OutputStyle::muted("Please check your internet connection and try again.")
            );
        }
        AppError::Credential(msg) => {
            eprintln!("🔑 {}", OutputStyle::error(msg));
        }
        AppError::Config(_) | AppError::Repository(_) | AppError::Remote(_) | AppError::Io(_) => {
            eprintln!("❌ {}", OutputStyle::error(&err.to_string()));
        }
    }
}
