//! Repoship Repository Update Flow
//!
//! This crate implements the release-time repository update: bring a
//! publicly-served yum repository up to date with one new build while
//! preserving everything already published there.
//!
//! The flow for one repository is strictly sequential:
//!
//! 1. Create a scratch directory (it must not already exist)
//! 2. Mirror the published repository into it
//! 3. Fetch the requested packages for one version from the build server,
//!    via a transient repository-definition file
//! 4. Regenerate the yum metadata incrementally
//! 5. Upload the merged tree back with public-read access
//!
//! A release runs this twice - binary RPMs into the arch repository and
//! source RPMs into SRPMS - under one scratch root that is removed when the
//! outer operation finishes, whether it succeeded or failed.
//!
//! External tooling (`gsutil`, `yumdownloader`, `createrepo`) sits behind
//! the narrow traits in [`tools`], so the orchestration is testable against
//! fakes without subprocesses or network access.
//!
//! ## Limitations
//!
//! There is no retry, no rollback and no locking. The final upload is not
//! atomic: an interrupted publish can leave the remote repository with a
//! mix of old and new files. Re-running the update is the only recovery
//! mechanism, and concurrent runs against one target location will race.

pub mod error;
pub mod release;
pub mod repofile;
pub mod system;
pub mod tools;
pub mod updater;

// Re-exports for convenience
pub use error::{RepoError, Result};
pub use release::{publish_release, publish_release_in};
pub use repofile::RepoDefinition;
pub use system::{CreateRepo, GsUtil, YumDownloader};
pub use tools::{IndexBuilder, ObjectStore, PackageFetcher, PackageKind};
pub use updater::RepositoryUpdater;
