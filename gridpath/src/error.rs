use std::fmt;

use gridpath_gen::IngestionError;
use gridpath_search::ConfigError;

/// Anything that stops a run before a result can be drawn.
#[derive(Debug)]
pub enum AppError {
    /// The configuration file could not be read.
    Io(String),
    /// The configuration file is not valid RON for [`Config`](crate::Config).
    Parse(String),
    /// The configuration parsed but holds an unusable value.
    Invalid(String),
    /// The grid source failed.
    Ingestion(IngestionError),
    /// The endpoints are unusable on the built grid.
    Search(ConfigError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config: {e}"),
            Self::Parse(e) => write!(f, "malformed config: {e}"),
            Self::Invalid(e) => write!(f, "invalid config: {e}"),
            Self::Ingestion(e) => write!(f, "cannot build grid: {e}"),
            Self::Search(e) => write!(f, "cannot search: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ingestion(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IngestionError> for AppError {
    fn from(e: IngestionError) -> Self {
        Self::Ingestion(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Search(e)
    }
}
