//! The five-step repository update

use std::path::Path;

use tracing::{debug, info};

use crate::error::{RepoError, Result};
use crate::repofile::RepoDefinition;
use crate::tools::{IndexBuilder, ObjectStore, PackageFetcher, PackageKind};

/// Repository id used in the transient definition file
const BUILD_REPO_ID: &str = "build";

/// Brings one published repository up to date with one build.
///
/// The updater owns no state of its own; everything it touches lives in
/// the scratch directory or behind the tool traits. The first failing step
/// aborts the whole update. The scratch directory is never removed here:
/// its lifetime belongs to the caller's scratch-root scope, which cleans
/// up on success and on every failure path alike.
pub struct RepositoryUpdater<'a> {
    store: &'a dyn ObjectStore,
    fetcher: &'a dyn PackageFetcher,
    index: &'a dyn IndexBuilder,
}

impl<'a> RepositoryUpdater<'a> {
    pub fn new(
        store: &'a dyn ObjectStore,
        fetcher: &'a dyn PackageFetcher,
        index: &'a dyn IndexBuilder,
    ) -> Self {
        Self {
            store,
            fetcher,
            index,
        }
    }

    /// Update `target` with `packages` at the pinned `source` location.
    ///
    /// `scratch` must not exist yet; this invocation takes exclusive
    /// ownership of it. The target location is only written in the final
    /// publish step, so any earlier failure leaves it untouched. The
    /// publish itself is not atomic.
    pub fn update(
        &self,
        scratch: &Path,
        target: &str,
        source: &str,
        packages: &[String],
        kind: PackageKind,
    ) -> Result<()> {
        if packages.is_empty() {
            return Err(RepoError::EmptyPackageSet {
                target: target.to_string(),
            });
        }
        if scratch.exists() {
            return Err(RepoError::ScratchExists {
                path: scratch.display().to_string(),
            });
        }
        std::fs::create_dir(scratch)?;

        info!(target, "mirroring published repository");
        self.store.download_tree(target, scratch)?;

        info!(source, ?kind, "fetching packages");
        let repo = RepoDefinition::new(BUILD_REPO_ID, "Build Results", source);
        let repo_file = repo.write_to(scratch)?;
        let fetched = self
            .fetcher
            .fetch(&repo_file, &repo.id, kind, packages, scratch);
        if let Err(e) = std::fs::remove_file(&repo_file) {
            // The scratch root is removed by the caller either way
            debug!(error = %e, "could not remove transient repo definition");
        }
        fetched?;

        info!("regenerating repository metadata");
        self.index.update(scratch)?;

        info!(target, "publishing merged repository");
        self.store.upload_tree(scratch, target)?;
        Ok(())
    }
}
