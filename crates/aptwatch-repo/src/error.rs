//! Error types for repository tracking

use thiserror::Error;

/// Repository tracking errors
#[derive(Debug, Error)]
pub enum RepoError {
    // ============ Configuration Errors ============
    #[error("Missing required repository field: {field}")]
    MissingField { field: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ============ Fetch Errors ============
    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    #[error("Network error: {message}")]
    Network { message: String },

    // ============ Cache Errors ============
    #[error("Snapshot cache error: {message}")]
    Cache { message: String },

    // ============ Notification Errors ============
    #[error("Notification failed: {message}")]
    Notify { message: String },
}

/// Result type for repository tracking operations
pub type Result<T> = std::result::Result<T, RepoError>;

impl From<reqwest::Error> for RepoError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            RepoError::Http {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else if e.is_timeout() {
            RepoError::Network {
                message: format!("Request timed out: {}", e),
            }
        } else if e.is_connect() {
            RepoError::Network {
                message: format!("Connection failed: {}", e),
            }
        } else {
            RepoError::Network {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_yaml::Error> for RepoError {
    fn from(e: serde_yaml::Error) -> Self {
        RepoError::InvalidConfig {
            message: e.to_string(),
        }
    }
}

impl RepoError {
    /// Whether this error means the configuration was rejected before any
    /// network activity, as opposed to a failed check cycle.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            RepoError::MissingField { .. } | RepoError::InvalidConfig { .. }
        )
    }
}
