//! aptwatch repository tracking
//!
//! This crate wires the core snapshot model to the outside world:
//!
//! - **Configuration**: YAML watch list of repositories plus the webhook
//!   endpoint
//! - **Index fetching**: HTTP(S) transport behind the [`IndexFetcher`] seam
//! - **Snapshot cache**: verbatim last-seen index text, one file per
//!   (repository, component) key, written atomically
//! - **Tracking**: the fetch → compare → parse → diff → cache-update cycle,
//!   one report per component
//! - **Notification**: structured signals behind the [`Notifier`] seam, with
//!   a Teams-style webhook implementation
//!
//! ## Example
//!
//! ```rust,no_run
//! use aptwatch_repo::{HttpFetcher, NullNotifier, Repository, SnapshotCache, Tracker};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = Repository::new("https://apt.example.org/debian", "bookworm", "amd64");
//!
//! let tracker = Tracker::new(HttpFetcher::new()?, SnapshotCache::open_at("cache")?);
//! let reports = tracker.check_updates(&repo, &NullNotifier).await?;
//!
//! for report in reports {
//!     for package in &report.new_packages {
//!         println!("{}: {}", report.component, package);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod notify;
pub mod tracker;

// Re-exports for convenience
pub use cache::{SnapshotCache, SnapshotKey};
pub use config::{Config, DEFAULT_CONFIG_FILE, Repository};
pub use error::{RepoError, Result};
pub use fetch::{HttpFetcher, IndexFetcher};
pub use notify::{Notifier, NullNotifier, WebhookNotifier};
pub use tracker::{ComponentReport, Tracker};
