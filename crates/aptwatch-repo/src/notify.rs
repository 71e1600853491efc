//! Notification transport
//!
//! The tracker hands structured signals outward; the webhook implementation
//! turns them into MessageCard documents understood by Teams-style incoming
//! webhooks. Formatting decisions stay here, never in the tracker.

use async_trait::async_trait;
use serde_json::{Value, json};

use aptwatch_core::Package;

use crate::config::Repository;
use crate::error::{RepoError, Result};

/// Receives the tracker's signals.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// A repository was seen for the first time and its snapshot was seeded.
    async fn repo_observed(&self, repo: &Repository) -> Result<()>;

    /// A component's index content changed; `packages` lists the additions
    /// (possibly none, when only metadata drifted).
    async fn changes_detected(
        &self,
        repo: &Repository,
        component: &str,
        packages: &[Package],
    ) -> Result<()>;
}

/// Posts MessageCard JSON documents to an incoming webhook.
pub struct WebhookNotifier {
    webhook_url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("aptwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RepoError::Notify {
                message: e.to_string(),
            })?;

        Ok(Self {
            webhook_url: webhook_url.into(),
            client,
        })
    }

    async fn post_card(&self, title: &str, text: &str, facts: Value) -> Result<()> {
        let card = json!({
            "themeColor": "#ff9900",
            "summary": title,
            "sections": [{
                "activityTitle": title,
                "activitySubtitle": text,
                "facts": facts,
            }],
        });

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&card)
            .send()
            .await
            .map_err(|e| RepoError::Notify {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(RepoError::Notify {
                message: format!("webhook returned HTTP {}", response.status()),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn repo_observed(&self, repo: &Repository) -> Result<()> {
        let title = format!(
            "New APT repository on the watch list ({} / {})",
            repo.distribution, repo.architecture
        );
        let text = format!("Repository {} was added to the watch list.", repo.url);
        self.post_card(&title, &text, json!([])).await
    }

    async fn changes_detected(
        &self,
        repo: &Repository,
        component: &str,
        packages: &[Package],
    ) -> Result<()> {
        if packages.is_empty() {
            // Content drifted without identity-level additions; nothing
            // worth publishing.
            return Ok(());
        }

        let title = format!(
            "New packages in APT repository ({} / {})",
            repo.distribution, repo.architecture
        );
        let text = format!(
            "{} new package(s) published in {} component {}.",
            packages.len(),
            repo.url,
            component
        );
        let facts: Vec<Value> = packages
            .iter()
            .map(|p| json!({ "name": p.name, "value": p.version }))
            .collect();

        self.post_card(&title, &text, json!(facts)).await
    }
}

/// Discards every signal. Used by `--no-notify` runs and tests.
#[derive(Debug, Default)]
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn repo_observed(&self, _repo: &Repository) -> Result<()> {
        Ok(())
    }

    async fn changes_detected(
        &self,
        _repo: &Repository,
        _component: &str,
        _packages: &[Package],
    ) -> Result<()> {
        Ok(())
    }
}
