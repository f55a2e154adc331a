//! RPM version mapping
//!
//! Release versions follow the versioneer convention:
//! `tag[-distance-gshortid[-dirty]]`, where the tag may carry a `preN` or
//! `devN` suffix (e.g. `0.1.2-69-gd2ff20c-dirty`). RPM splits this into a
//! `Version` and a `Release` field, and pre-release builds must sort below
//! the final release, which the Fedora naming guidelines achieve with a
//! `0.`-prefixed release (`0.1.2pre2` becomes version `0.1.2`,
//! release `0.pre.2`).

use std::fmt;

use crate::error::{CoreError, Result};

const PRERELEASE_SUFFIXES: [&str; 2] = ["pre", "dev"];

/// An RPM-compatible version/release pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpmVersion {
    /// RPM `Version` field
    pub version: String,

    /// RPM `Release` field
    pub release: String,
}

impl RpmVersion {
    /// Parse a versioneer-style version string into an RPM version.
    ///
    /// A plain tag maps to release `1`. A `preN`/`devN` tag maps to a
    /// `0.pre.N`/`0.dev.N` release. Any distance/shortid/dirty segments
    /// after the tag are appended to the release, dot-separated; untagged
    /// builds therefore stay identifiable in the published repository.
    pub fn parse(release_version: &str) -> Result<Self> {
        let mut parts = release_version.split('-');
        // split always yields at least one element
        let tag = parts.next().unwrap_or_default();
        let remainder: Vec<&str> = parts.collect();

        let (version, mut release) = Self::split_tag(release_version, tag)?;
        release.extend(remainder.iter().map(|s| s.to_string()));

        Ok(Self {
            version,
            release: release.join("."),
        })
    }

    fn split_tag(full: &str, tag: &str) -> Result<(String, Vec<String>)> {
        for suffix in PRERELEASE_SUFFIXES {
            let Some(idx) = tag.rfind(suffix) else {
                continue;
            };
            let version = &tag[..idx];
            let number = &tag[idx + suffix.len()..];
            if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CoreError::InvalidVersion {
                    version: full.to_string(),
                    message: format!("non-integer value \"{}\" for \"{}\"", number, suffix),
                });
            }
            return Ok((
                version.to_string(),
                vec!["0".to_string(), suffix.to_string(), number.to_string()],
            ));
        }

        // No pre-release suffix: the tag is the RPM version as-is
        Ok((tag.to_string(), vec!["1".to_string()]))
    }
}

impl fmt::Display for RpmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.version, self.release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> RpmVersion {
        RpmVersion::parse(s).unwrap()
    }

    #[test]
    fn test_tagged_release() {
        assert_eq!(parse("0.1.2").version, "0.1.2");
        assert_eq!(parse("0.1.2").release, "1");
    }

    #[test]
    fn test_dev_release() {
        let v = parse("1.2.3dev1");
        assert_eq!(v.version, "1.2.3");
        assert_eq!(v.release, "0.dev.1");
    }

    #[test]
    fn test_pre_release() {
        let v = parse("0.1.2pre2");
        assert_eq!(v.version, "0.1.2");
        assert_eq!(v.release, "0.pre.2");
    }

    #[test]
    fn test_untagged_build_keeps_distance_and_shortid() {
        let v = parse("0.1.2-69-gd2ff20c");
        assert_eq!(v.version, "0.1.2");
        assert_eq!(v.release, "1.69.gd2ff20c");
    }

    #[test]
    fn test_dirty_pre_release() {
        let v = parse("0.1.2pre2-3-g9f7a1b2-dirty");
        assert_eq!(v.version, "0.1.2");
        assert_eq!(v.release, "0.pre.2.3.g9f7a1b2.dirty");
    }

    #[test]
    fn test_non_integer_suffix_number_rejected() {
        assert!(RpmVersion::parse("0.1.2devx").is_err());
        assert!(RpmVersion::parse("0.1.2pre").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(parse("1.2.3dev1").to_string(), "1.2.3-0.dev.1");
    }
}
