//! Local repository discovery.
//!
//! Finds the working tree root and works out which GitHub repository the
//! `origin` remote points at. All git invocations go through [`run_git`].

use crate::utils::error::{AppError, AppResult};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

static REMOTE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:https?://(?:[^@/]+@)?(?i:github\.com)/",
        r"|git@(?i:github\.com):",
        r"|ssh://git@(?i:github\.com)/",
        r"|git://(?i:github\.com)/)",
        r"(?P<owner>[-_A-Za-z0-9]+)/(?P<name>[-_.A-Za-z0-9]+?)(?:\.git)?/?$",
    ))
    .expect("remote URL pattern is valid")
});

/// A GitHub repository identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GHRepo {
    pub owner: String,
    pub name: String,
}

impl GHRepo {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse a GitHub remote URL (HTTPS, SSH or git protocol)
    pub fn from_url(url: &str) -> AppResult<Self> {
        let caps = REMOTE_URL_RE
            .captures(url.trim())
            .ok_or_else(|| AppError::Repository(format!("Not a GitHub repository URL: {}", url)))?;
        let name = &caps["name"];
        if name == "." || name == ".." {
            return Err(AppError::Repository(format!(
                "Invalid repository name in URL: {}",
                url
            )));
        }
        Ok(Self::new(&caps["owner"], name))
    }
}

impl fmt::Display for GHRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Run git in `cwd` and return its trimmed stdout
pub fn run_git(cwd: &Path, args: &[&str]) -> AppResult<String> {
    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            AppError::Repository(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(AppError::Repository(format!(
            "git {} failed (exit code {}): {}",
            args.join(" "),
            output.status.code().unwrap_or(-1),
            stderr
        )))
    }
}

fn start_dir(dir: Option<&Path>) -> AppResult<PathBuf> {
    match dir {
        Some(d) => Ok(d.to_path_buf()),
        None => std::env::current_dir().map_err(|e| AppError::Io(e.to_string())),
    }
}

/// Top level of the working tree containing `dir` (or the current directory)
pub fn find_repo_root(dir: Option<&Path>) -> AppResult<PathBuf> {
    let cwd = start_dir(dir)?;
    let toplevel = run_git(&cwd, &["rev-parse", "--show-toplevel"])
        .map_err(|_| AppError::Repository(format!("{} is not in a git repository", cwd.display())))?;
    Ok(PathBuf::from(toplevel))
}

/// The GitHub repository that `origin` points at
pub fn local_repo(dir: Option<&Path>) -> AppResult<GHRepo> {
    let cwd = start_dir(dir)?;
    let url = run_git(&cwd, &["remote", "get-url", "origin"]).map_err(|_| {
        AppError::Repository(format!(
            "Could not determine the \"origin\" remote URL for {}",
            cwd.display()
        ))
    })?;
    GHRepo::from_url(&url)
}
