//! Production tool implementations
//!
//! Each tool shells out to the real binary with `std::process::Command`,
//! blocking until it exits. A non-zero exit status maps to
//! [`RepoError::CommandFailed`] with the captured stderr; a missing binary
//! maps to [`RepoError::ToolNotFound`]. Nothing is retried.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{RepoError, Result};
use crate::tools::{IndexBuilder, ObjectStore, PackageFetcher, PackageKind};

/// Run a tool to completion, mapping failure modes to `RepoError`
fn run(tool: &str, args: &[OsString]) -> Result<()> {
    debug!(tool, ?args, "invoking external tool");
    let output = Command::new(tool).args(args).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RepoError::ToolNotFound {
                tool: tool.to_string(),
                message: e.to_string(),
            }
        } else {
            RepoError::Io(e)
        }
    })?;

    if !output.status.success() {
        return Err(RepoError::CommandFailed {
            tool: tool.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

/// `gsutil`-backed object store
#[derive(Debug, Clone)]
pub struct GsUtil {
    program: String,
}

impl Default for GsUtil {
    fn default() -> Self {
        Self {
            program: "gsutil".to_string(),
        }
    }
}

impl GsUtil {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn download_args(remote: &str, local: &Path) -> Vec<OsString> {
        vec![
            "cp".into(),
            "-R".into(),
            format!("{}/*", remote.trim_end_matches('/')).into(),
            local.into(),
        ]
    }

    fn upload_args(local: &Path, remote: &str) -> Vec<OsString> {
        vec![
            "cp".into(),
            "-R".into(),
            "-a".into(),
            "public-read".into(),
            {
                let mut glob = local.as_os_str().to_os_string();
                glob.push("/*");
                glob
            },
            remote.into(),
        ]
    }
}

impl ObjectStore for GsUtil {
    fn download_tree(&self, remote: &str, local: &Path) -> Result<()> {
        run(&self.program, &Self::download_args(remote, local))
    }

    fn upload_tree(&self, local: &Path, remote: &str) -> Result<()> {
        run(&self.program, &Self::upload_args(local, remote))
    }
}

/// `yumdownloader`-backed package fetcher
#[derive(Debug, Clone)]
pub struct YumDownloader {
    program: String,
}

impl Default for YumDownloader {
    fn default() -> Self {
        Self {
            program: "yumdownloader".to_string(),
        }
    }
}

impl YumDownloader {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn fetch_args(
        repo_file: &Path,
        repo_id: &str,
        kind: PackageKind,
        packages: &[String],
        dest: &Path,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-c".into(),
            repo_file.into(),
            "--disablerepo=*".into(),
            format!("--enablerepo={}", repo_id).into(),
            "--destdir".into(),
            dest.into(),
        ];
        if kind == PackageKind::Source {
            args.push("--source".into());
        }
        args.extend(packages.iter().map(OsString::from));
        args
    }
}

impl PackageFetcher for YumDownloader {
    fn fetch(
        &self,
        repo_file: &Path,
        repo_id: &str,
        kind: PackageKind,
        packages: &[String],
        dest: &Path,
    ) -> Result<()> {
        run(
            &self.program,
            &Self::fetch_args(repo_file, repo_id, kind, packages, dest),
        )
    }
}

/// `createrepo`-backed index builder
#[derive(Debug, Clone)]
pub struct CreateRepo {
    program: String,
}

impl Default for CreateRepo {
    fn default() -> Self {
        Self {
            program: "createrepo".to_string(),
        }
    }
}

impl CreateRepo {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl IndexBuilder for CreateRepo {
    fn update(&self, dir: &Path) -> Result<()> {
        run(&self.program, &["--update".into(), dir.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_download_args_glob_remote() {
        let args = GsUtil::download_args("gs://bucket/fedora/20/x86_64/", Path::new("/tmp/repo"));
        assert_eq!(args[0], "cp");
        assert_eq!(args[2], "gs://bucket/fedora/20/x86_64/*");
        assert_eq!(args[3], "/tmp/repo");
    }

    #[test]
    fn test_upload_args_public_read() {
        let args = GsUtil::upload_args(Path::new("/tmp/repo"), "gs://bucket/fedora/20/x86_64");
        assert_eq!(args[..4], ["cp", "-R", "-a", "public-read"].map(OsString::from));
        assert_eq!(args[4], "/tmp/repo/*");
        assert_eq!(args[5], "gs://bucket/fedora/20/x86_64");
    }

    #[test]
    fn test_fetch_args_binary() {
        let packages = vec!["pkg-a".to_string(), "pkg-b".to_string()];
        let args = YumDownloader::fetch_args(
            Path::new("/scratch/build.repo"),
            "build",
            PackageKind::Binary,
            &packages,
            Path::new("/scratch"),
        );
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect();
        assert_eq!(
            args,
            [
                "-c",
                "/scratch/build.repo",
                "--disablerepo=*",
                "--enablerepo=build",
                "--destdir",
                "/scratch",
                "pkg-a",
                "pkg-b",
            ]
        );
    }

    #[test]
    fn test_fetch_args_source_flag_before_packages() {
        let packages = vec!["pkg-a".to_string()];
        let args = YumDownloader::fetch_args(
            Path::new("/scratch/build.repo"),
            "build",
            PackageKind::Source,
            &packages,
            Path::new("/scratch"),
        );
        let source_pos = args.iter().position(|a| a == "--source").unwrap();
        let pkg_pos = args.iter().position(|a| a == "pkg-a").unwrap();
        assert!(source_pos < pkg_pos);
    }

    #[test]
    fn test_run_maps_nonzero_exit() {
        let err = run("false", &[]).unwrap_err();
        match err {
            RepoError::CommandFailed { tool, .. } => assert_eq!(tool, "false"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_maps_missing_tool() {
        let err = run("repoship-no-such-tool", &[]).unwrap_err();
        match err {
            RepoError::ToolNotFound { tool, .. } => {
                assert_eq!(tool, "repoship-no-such-tool")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_with_program_override() {
        let store = GsUtil::with_program(PathBuf::from("/opt/gsutil").display().to_string());
        assert_eq!(store.program, "/opt/gsutil");
    }
}
