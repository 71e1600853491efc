//! Repository tracker
//!
//! Drives fetch → compare → parse → diff → cache-update for one repository
//! definition across its components. Fetch and cache failures propagate to
//! the caller; parse problems are absorbed by the index parser.

use serde::Serialize;

use aptwatch_core::{Package, PackagesIndex, new_packages};

use crate::cache::{SnapshotCache, SnapshotKey};
use crate::config::Repository;
use crate::error::Result;
use crate::fetch::IndexFetcher;
use crate::notify::Notifier;

/// Outcome of one component's diff cycle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReport {
    /// Component the change set belongs to
    pub component: String,

    /// Packages newly present relative to the previous snapshot
    pub new_packages: Vec<Package>,
}

/// Checks repositories for newly published packages against the snapshot
/// cache.
pub struct Tracker<F> {
    fetcher: F,
    cache: SnapshotCache,
}

impl<F: IndexFetcher> Tracker<F> {
    pub fn new(fetcher: F, cache: SnapshotCache) -> Self {
        Self { fetcher, cache }
    }

    /// Run one check cycle for a repository.
    ///
    /// Components are visited in declaration order. A component seen for the
    /// first time seeds the cache and emits the "newly observed" signal; a
    /// component whose index content changed produces one [`ComponentReport`]
    /// and the "changes detected" signal. Byte-identical content is a no-op.
    pub async fn check_updates(
        &self,
        repo: &Repository,
        notifier: &dyn Notifier,
    ) -> Result<Vec<ComponentReport>> {
        let mut reports = Vec::new();

        for component in &repo.components {
            let key = SnapshotKey::derive(repo, component);

            if !self.cache.exists(&key) {
                tracing::info!(
                    "Initial download of {} distribution={} component={} architecture={}",
                    repo.url,
                    repo.distribution,
                    component,
                    repo.architecture
                );

                let current = self.fetcher.fetch_index(repo, component).await?;
                self.cache.write(&key, &current)?;
                notifier.repo_observed(repo).await?;
                continue;
            }

            let cached = self.cache.read(&key)?;
            let current = self.fetcher.fetch_index(repo, component).await?;

            if cached == current {
                tracing::debug!("No changes in {} component={}", repo.url, component);
                continue;
            }

            let previous = PackagesIndex::parse(&cached);
            let latest = PackagesIndex::parse(&current);
            let added = new_packages(&previous.packages, &latest.packages);

            // Raw content can change without identity-level additions; the
            // cache still has to track the server's current state.
            self.cache.write(&key, &current)?;

            tracing::info!(
                "Found {} new packages in {} distribution={} component={} architecture={}",
                added.len(),
                repo.url,
                repo.distribution,
                component,
                repo.architecture
            );

            notifier.changes_detected(repo, component, &added).await?;
            reports.push(ComponentReport {
                component: component.clone(),
                new_packages: added,
            });
        }

        Ok(reports)
    }
}
