//! Check cycle command

use std::path::Path;

use serde_json::json;

use aptwatch_repo::{
    Config, HttpFetcher, Notifier, NullNotifier, SnapshotCache, Tracker, WebhookNotifier,
};

use crate::error::Result;

/// Run one check cycle over all configured repositories, in order.
///
/// A fetch or cache failure aborts the run; the exit status then tells a
/// scheduler that the cycle (not the configuration) failed.
pub async fn run(config_path: &Path, no_notify: bool, json: bool) -> Result<()> {
    let config = Config::load_from(config_path)?;

    let notifier: Box<dyn Notifier> = if no_notify {
        Box::new(NullNotifier)
    } else {
        Box::new(WebhookNotifier::new(&config.webhook_url)?)
    };

    let cache = SnapshotCache::open_at(&config.cache_dir)?;
    let tracker = Tracker::new(HttpFetcher::new()?, cache);

    let mut summaries = Vec::new();
    let mut total_new = 0usize;

    for repo in &config.repositories {
        let reports = tracker.check_updates(repo, notifier.as_ref()).await?;
        total_new += reports.iter().map(|r| r.new_packages.len()).sum::<usize>();

        if json {
            summaries.push(json!({
                "url": repo.url,
                "distribution": repo.distribution,
                "architecture": repo.architecture,
                "reports": reports,
            }));
            continue;
        }

        for report in &reports {
            println!(
                "{}: {} new package(s) in {}/{}",
                repo.url,
                report.new_packages.len(),
                repo.distribution,
                report.component
            );
            for package in &report.new_packages {
                println!("  {}", package);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries).unwrap());
    } else if total_new == 0 {
        println!("No new packages.");
    }

    Ok(())
}
