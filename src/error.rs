use crate::models::field::FieldKind;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A rule pattern did not compile
    #[error("invalid pattern for {kind}: {source}")]
    Pattern {
        kind: FieldKind,
        #[source]
        source: regex::Error,
    },

    /// A rule was defined without any pattern
    #[error("rule for {0} has no patterns")]
    EmptyRule(FieldKind),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("usage: {0}")]
    Usage(String),

    #[error("no screen open for: {0}")]
    NoScreen(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse file: {0}")]
    Parse(toml::de::Error),

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),
}

#[derive(Debug, Error)]
#[error("invalid configuration in {path}: {source}")]
pub struct ConfigError {
    pub path: std::path::PathBuf,
    #[source]
    pub source: ConfigErrorKind,
}
