//! GitHub token discovery
//!
//! Sources are tried in order and the first non-empty token wins:
//! `GH_TOKEN`, `GITHUB_TOKEN`, the gh CLI's `hosts.yml`, hub's config file,
//! and finally the `hub.oauthtoken` git config key.

use crate::repo::run_git;
use crate::utils::error::{AppError, AppResult};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];
const GITHUB_HOST: &str = "github.com";

/// Where to look for a token. Built from the process environment in the
/// binary; tests construct it directly.
#[derive(Debug, Clone, Default)]
pub struct TokenSources {
    pub env: HashMap<String, String>,
    pub home: Option<PathBuf>,
    pub git_dir: Option<PathBuf>,
}

impl TokenSources {
    pub fn from_env(git_dir: Option<&Path>) -> Self {
        Self {
            env: std::env::vars().collect(),
            home: dirs::home_dir(),
            git_dir: git_dir
                .map(Path::to_path_buf)
                .or_else(|| std::env::current_dir().ok()),
        }
    }

    fn var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// `$<override>`, else `$XDG_CONFIG_HOME/<app>`, else `~/.config/<app>`
    fn config_path(&self, override_var: &str, app: &str) -> Option<PathBuf> {
        if let Some(path) = self.var(override_var) {
            return Some(PathBuf::from(path));
        }
        if let Some(xdg) = self.var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join(app));
        }
        self.home.as_ref().map(|h| h.join(".config").join(app))
    }

    fn from_env_vars(&self) -> Option<String> {
        TOKEN_ENV_VARS
            .iter()
            .find_map(|key| self.var(key))
            .map(str::to_string)
    }

    fn from_gh(&self) -> Option<String> {
        let path = self.config_path("GH_CONFIG_DIR", "gh")?.join("hosts.yml");
        let hosts = read_yaml(&path)?;
        non_empty(hosts.get(GITHUB_HOST)?.get("oauth_token")?)
    }

    fn from_hub(&self) -> Option<String> {
        let path = self.config_path("HUB_CONFIG", "hub")?;
        let config = read_yaml(&path)?;
        non_empty(config.get(GITHUB_HOST)?.get(0)?.get("oauth_token")?)
    }

    fn from_git_config(&self) -> Option<String> {
        let dir = self.git_dir.as_deref()?;
        run_git(dir, &["config", "--get", "hub.oauthtoken"])
            .ok()
            .filter(|t| !t.is_empty())
    }

    pub fn find_token(&self) -> AppResult<String> {
        self.from_env_vars()
            .or_else(|| self.from_gh())
            .or_else(|| self.from_hub())
            .or_else(|| self.from_git_config())
            .ok_or_else(|| {
                AppError::Credential(
                    "GitHub token not found.  Set via GH_TOKEN, GITHUB_TOKEN, gh, hub, or hub.oauthtoken."
                        .to_string(),
                )
            })
    }
}

fn read_yaml(path: &Path) -> Option<Value> {
    let content = std::fs::read(path).ok()?;
    serde_yaml::from_slice(&content).ok()
}

fn non_empty(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
