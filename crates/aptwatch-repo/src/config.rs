//! Watch configuration
//!
//! Loaded from a YAML file naming the webhook endpoint and the repositories
//! to track. Validation runs at load time so that a broken definition is
//! rejected before any fetch happens.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RepoError, Result};

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "aptwatch.yaml";

fn default_cache_dir() -> PathBuf {
    PathBuf::from("cache")
}

fn default_components() -> Vec<String> {
    vec!["main".to_string()]
}

/// Top-level configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Webhook endpoint receiving notifications
    #[serde(default)]
    pub webhook_url: String,

    /// Directory holding the snapshot cache
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Repositories to track, checked in declaration order
    #[serde(default)]
    pub repositories: Vec<Repository>,
}

impl Config {
    /// Load and validate configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RepoError::InvalidConfig {
            message: format!("{}: {}", path.display(), e),
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject incomplete definitions before any network activity.
    pub fn validate(&self) -> Result<()> {
        if self.webhook_url.trim().is_empty() {
            return Err(RepoError::MissingField {
                field: "webhookUrl".to_string(),
            });
        }

        url::Url::parse(&self.webhook_url).map_err(|e| RepoError::InvalidConfig {
            message: format!("invalid webhookUrl: {}", e),
        })?;

        for repo in &self.repositories {
            repo.validate()?;
        }

        Ok(())
    }
}

/// One tracked APT repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Base URL of the repository
    #[serde(default)]
    pub url: String,

    /// Distribution name (e.g. `bookworm`)
    #[serde(default)]
    pub distribution: String,

    /// Binary architecture (e.g. `amd64`)
    #[serde(default)]
    pub architecture: String,

    /// Components to track, in declaration order
    #[serde(default = "default_components")]
    pub components: Vec<String>,
}

impl Repository {
    /// Create a definition with the default `main` component.
    pub fn new(
        url: impl Into<String>,
        distribution: impl Into<String>,
        architecture: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            distribution: distribution.into(),
            architecture: architecture.into(),
            components: default_components(),
        }
    }

    /// Reject a definition with missing required fields.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("url", &self.url),
            ("distribution", &self.distribution),
            ("architecture", &self.architecture),
        ] {
            if value.trim().is_empty() {
                return Err(RepoError::MissingField {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Index URL for one component.
    pub fn index_url(&self, component: &str) -> String {
        format!(
            "{}/dists/{}/{}/binary-{}/Packages",
            self.url.trim_end_matches('/'),
            self.distribution,
            component,
            self.architecture
        )
    }
}
