//! Repoship Core - Core types for the release repository updater
//!
//! This crate provides the foundational types used throughout repoship:
//! - `ReleaseConfig`: Explicit configuration for one release publication
//! - `Distribution`: The distribution/release/arch triple a repository serves
//! - `RpmVersion`: Mapping from versioneer-style version strings to RPM
//!   version/release pairs

pub mod config;
pub mod error;
pub mod version;

pub use config::{Distribution, ReleaseConfig};
pub use error::{CoreError, Result};
pub use version::RpmVersion;
