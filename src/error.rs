use thiserror::Error;

/// Error types for stdlib-tour operations.
/// Database calls return `rusqlite::Result` and the launcher has its own
/// `LaunchError`; this covers URL parsing and configuration.
#[derive(Error, Debug)]
pub enum TourError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Config error in {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnv { name: String, value: String },
}

pub type Result<T> = std::result::Result<T, TourError>;
