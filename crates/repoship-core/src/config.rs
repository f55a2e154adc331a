//! Release configuration
//!
//! All remote locations and package sets are carried explicitly in a
//! `ReleaseConfig` built at the outermost entry point. Nothing in the
//! update flow reads process-wide constants; the production defaults live
//! only in `Default` and can be overridden per field or replaced wholesale
//! by a YAML file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Configuration for one release publication
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConfig {
    /// Base URL of the published repository bucket
    #[serde(default = "default_target_bucket")]
    pub target_bucket: String,

    /// Base URL of the build server holding per-version results
    #[serde(default = "default_build_server")]
    pub build_server: String,

    /// Distribution the repository serves
    #[serde(default)]
    pub distribution: Distribution,

    /// Binary packages pulled into the arch repository
    #[serde(default = "default_packages")]
    pub binary_packages: Vec<String>,

    /// Packages whose source RPMs are pulled into the SRPMS repository
    #[serde(default = "default_packages")]
    pub source_packages: Vec<String>,
}

fn default_target_bucket() -> String {
    "gs://archive.example.com".to_string()
}

fn default_build_server() -> String {
    "http://build.example".to_string()
}

fn default_packages() -> Vec<String> {
    vec![
        "python-driftd".to_string(),
        "driftd-cli".to_string(),
        "driftd-node".to_string(),
    ]
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            target_bucket: default_target_bucket(),
            build_server: default_build_server(),
            distribution: Distribution::default(),
            binary_packages: default_packages(),
            source_packages: default_packages(),
        }
    }
}

impl ReleaseConfig {
    /// Load configuration from a YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Remote location of the binary-package repository
    pub fn binary_target(&self) -> String {
        let d = &self.distribution;
        format!(
            "{}/{}/{}/{}",
            self.target_bucket.trim_end_matches('/'),
            d.flavor,
            d.release,
            d.arch
        )
    }

    /// Remote location of the source-package repository
    pub fn source_target(&self) -> String {
        let d = &self.distribution;
        format!(
            "{}/{}/{}/SRPMS",
            self.target_bucket.trim_end_matches('/'),
            d.flavor,
            d.release
        )
    }

    /// Build-server location of the results for one version
    pub fn build_results(&self, version: &str) -> String {
        let d = &self.distribution;
        format!(
            "{}/results/{}/{}/{}/{}",
            self.build_server.trim_end_matches('/'),
            d.flavor,
            d.release,
            d.arch,
            version
        )
    }
}

/// Distribution/release/architecture triple served by the repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    /// Distribution flavor (e.g. "fedora")
    pub flavor: String,

    /// Distribution release (e.g. "20")
    pub release: String,

    /// Machine architecture (e.g. "x86_64")
    pub arch: String,
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            flavor: "fedora".to_string(),
            release: "20".to_string(),
            arch: "x86_64".to_string(),
        }
    }
}
