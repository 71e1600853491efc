//! Core types for aptwatch
//!
//! This crate holds the I/O-free heart of the monitor:
//!
//! - **Package records**: value type with the checksum-or-version identity
//!   rule used for set membership
//! - **Index parsing**: best-effort extraction of records from the
//!   paragraph-per-package `Packages` text format
//! - **Change sets**: membership difference between two parsed snapshots
//!
//! Fetching, caching and notification live in `aptwatch-repo`.

pub mod diff;
pub mod error;
pub mod index;
pub mod package;

// Re-exports for convenience
pub use diff::new_packages;
pub use error::{CoreError, Result};
pub use index::PackagesIndex;
pub use package::Package;
