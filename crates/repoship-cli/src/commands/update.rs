//! Update command - publish one release version to the package archive

use std::path::Path;

use repoship_core::ReleaseConfig;
use repoship_repo::{CreateRepo, GsUtil, YumDownloader, publish_release};

use crate::error::{CliError, Result};

pub fn run(
    version: &str,
    target_bucket: Option<&str>,
    build_server: Option<&str>,
    config_file: Option<&Path>,
) -> Result<()> {
    let mut config = match config_file {
        Some(path) => ReleaseConfig::load_from(path).map_err(|e| {
            CliError::input(format!("Cannot load {}: {}", path.display(), e))
        })?,
        None => ReleaseConfig::default(),
    };

    // Command-line overrides win over file/default values
    if let Some(bucket) = target_bucket {
        config.target_bucket = bucket.to_string();
    }
    if let Some(server) = build_server {
        config.build_server = server.to_string();
    }

    println!(
        "Publishing {} from {}",
        version,
        config.build_results(version)
    );

    let store = GsUtil::default();
    let fetcher = YumDownloader::default();
    let index = CreateRepo::default();

    publish_release(&config, version, &store, &fetcher, &index)
        .map_err(|e| CliError::update(e.to_string()))?;

    println!("Updated {}", config.binary_target());
    println!("Updated {}", config.source_target());
    Ok(())
}
