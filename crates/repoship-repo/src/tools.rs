//! Tool traits for the update flow
//!
//! Each external tool the updater shells out to is modeled as a narrow
//! trait, so the orchestration can run against fake implementations in
//! tests. The production implementations live in [`crate::system`].

use std::path::Path;

use crate::error::Result;

/// Which package artifacts to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// Compiled binary packages
    Binary,
    /// Source packages corresponding to a set of binary package names
    Source,
}

/// Recursive copy against a remote object-storage location
pub trait ObjectStore {
    /// Mirror the full content of a remote location into a local directory
    fn download_tree(&self, remote: &str, local: &Path) -> Result<()>;

    /// Upload a local directory's content to a remote location with
    /// public-read access on every object
    fn upload_tree(&self, local: &Path, remote: &str) -> Result<()>;
}

/// Package download restricted to one repository definition
pub trait PackageFetcher {
    /// Fetch `packages` into `dest`, reading only from the repository
    /// identified by `repo_id` in the definition file at `repo_file`
    fn fetch(
        &self,
        repo_file: &Path,
        repo_id: &str,
        kind: PackageKind,
        packages: &[String],
        dest: &Path,
    ) -> Result<()>;
}

/// Repository index metadata regeneration
pub trait IndexBuilder {
    /// Regenerate metadata over `dir`, merging new files into the existing
    /// metadata rather than rebuilding from scratch
    fn update(&self, dir: &Path) -> Result<()>;
}
