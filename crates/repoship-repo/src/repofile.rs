//! Transient yum repository definition
//!
//! The fetch step pins the package source by writing a one-section
//! repository definition into the scratch directory, pointing the fetch
//! tool at it, and deleting it again right after the fetch.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// A single-repository yum definition file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDefinition {
    /// Section name, also used as the repository id for `--enablerepo`
    pub id: String,

    /// Human-readable repository name
    pub name: String,

    /// Base URL the packages are fetched from
    pub baseurl: String,
}

impl RepoDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        baseurl: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            baseurl: baseurl.into(),
        }
    }

    /// Render the ini-like file content
    pub fn render(&self) -> String {
        format!(
            "[{}]\nname={}\nbaseurl={}\n",
            self.id, self.name, self.baseurl
        )
    }

    /// Write the definition as `<id>.repo` inside `dir`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!("{}.repo", self.id));
        std::fs::write(&path, self.render())?;
        Ok(path)
    }
}
