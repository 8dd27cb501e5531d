//! Error types for holiday theme detection.

use thiserror::Error;

/// Failures of the live theme source.
///
/// These never escape the detector; they select the calendar fallback.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} is missing expected content '{marker}'")]
    MissingContent { url: String, marker: String },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Primary error type for holiday operations.
#[derive(Error, Debug)]
pub enum HolidayError {
    // Live source errors
    #[error("Theme source unavailable: {0}")]
    Fetch(#[from] FetchError),

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    // Output errors
    #[error("Failed to write pipeline output to {path}: {reason}")]
    OutputWrite { path: String, reason: String },

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl HolidayError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParse(_)
                | Self::ConfigInvalid(_)
                | Self::InvalidDate(_)
                | Self::OutputWrite { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound { .. } => Some("Check --config or HOLIDAY_CONFIG"),
            Self::ConfigParse(_) => Some("Config files must be valid .toml, .yaml or .yml"),
            Self::InvalidDate(_) => Some("Use an ISO date such as 2024-12-10"),
            Self::OutputWrite { .. } => Some("Check that GITHUB_OUTPUT points to a writable file"),
            Self::Fetch(FetchError::Status { status: 404, .. }) => {
                Some("Check that the GitHub username exists")
            }
            _ => None,
        }
    }
}

/// Convenience type alias for Results using HolidayError.
pub type Result<T> = std::result::Result<T, HolidayError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| HolidayError::Other(format!("{}: {e}", f().into())))
    }
}
