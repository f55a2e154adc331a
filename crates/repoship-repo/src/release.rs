//! Release orchestration
//!
//! A release publishes two repositories from the same build: binary RPMs
//! into the arch sub-path and source RPMs into SRPMS. Both updates share
//! one scratch root, created here and removed when this call returns,
//! whether the release succeeded or failed partway.

use std::path::Path;

use tracing::info;

use repoship_core::ReleaseConfig;

use crate::error::Result;
use crate::tools::{IndexBuilder, ObjectStore, PackageFetcher, PackageKind};
use crate::updater::RepositoryUpdater;

/// Publish one release version to the configured package archive.
///
/// The scratch root lives under the system temporary directory; see
/// [`publish_release_in`] to place it elsewhere.
pub fn publish_release(
    config: &ReleaseConfig,
    version: &str,
    store: &dyn ObjectStore,
    fetcher: &dyn PackageFetcher,
    index: &dyn IndexBuilder,
) -> Result<()> {
    publish_release_in(&std::env::temp_dir(), config, version, store, fetcher, index)
}

/// Publish one release version, creating the scratch root inside `parent`.
///
/// Runs the repository update twice, strictly in sequence: the binary
/// package set against the arch repository, then the source package set
/// against the SRPMS repository, both pinned to the same versioned
/// build-server location. Succeeds only if both updates succeed.
pub fn publish_release_in(
    parent: &Path,
    config: &ReleaseConfig,
    version: &str,
    store: &dyn ObjectStore,
    fetcher: &dyn PackageFetcher,
    index: &dyn IndexBuilder,
) -> Result<()> {
    let source = config.build_results(version);
    let updater = RepositoryUpdater::new(store, fetcher, index);

    // Removed on drop, on success and on every failure path
    let scratch_root = tempfile::tempdir_in(parent)?;

    info!(version, source, "updating binary repository");
    updater.update(
        &scratch_root.path().join("binary"),
        &config.binary_target(),
        &source,
        &config.binary_packages,
        PackageKind::Binary,
    )?;

    info!(version, source, "updating source repository");
    updater.update(
        &scratch_root.path().join("source"),
        &config.source_target(),
        &source,
        &config.source_packages,
        PackageKind::Source,
    )?;

    scratch_root.close()?;
    Ok(())
}
