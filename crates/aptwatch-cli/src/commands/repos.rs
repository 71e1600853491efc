//! Repository listing command

use std::path::Path;

use aptwatch_repo::Config;

use crate::error::Result;

/// Print the configured repositories as a table.
pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;

    if config.repositories.is_empty() {
        println!("No repositories configured.");
        return Ok(());
    }

    println!(
        "{:<50} {:<15} {:<8} {}",
        "URL", "DISTRIBUTION", "ARCH", "COMPONENTS"
    );
    println!("{}", "-".repeat(90));

    for repo in &config.repositories {
        println!(
            "{:<50} {:<15} {:<8} {}",
            repo.url,
            repo.distribution,
            repo.architecture,
            repo.components.join(", ")
        );
    }

    Ok(())
}
