//! Dependabot configuration
//!
//! Only the `updates[].labels` part of `.github/dependabot.yml` matters here;
//! every other key is ignored.

use crate::utils::error::{AppError, AppResult};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Location of the Dependabot config relative to the repository root
pub const CONFIG_PATH: [&str; 2] = [".github", "dependabot.yml"];

#[derive(Debug, Clone, Deserialize)]
pub struct DependabotConfig {
    pub updates: Vec<DependabotUpdate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependabotUpdate {
    #[serde(default)]
    pub labels: Vec<String>,
}

impl DependabotConfig {
    pub fn from_yaml(content: &[u8]) -> AppResult<Self> {
        serde_yaml::from_slice(content)
            .map_err(|e| AppError::Config(format!("Failed to parse dependabot.yml: {}", e)))
    }

    pub fn load(repo_root: &Path) -> AppResult<Self> {
        let path = Self::config_file_path(repo_root);
        let content = std::fs::read(&path)
            .map_err(|e| AppError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn config_file_path(repo_root: &Path) -> PathBuf {
        CONFIG_PATH.iter().fold(repo_root.to_path_buf(), |p, c| p.join(c))
    }

    /// Every label mentioned by any update entry, deduplicated
    pub fn label_names(&self) -> BTreeSet<String> {
        self.updates
            .iter()
            .flat_map(|update| update.labels.iter().cloned())
            .collect()
    }
}

/// Parse a Dependabot config and collect the labels it uses
pub fn extract_label_names(content: &[u8]) -> AppResult<BTreeSet<String>> {
    Ok(DependabotConfig::from_yaml(content)?.label_names())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_union_of_labels() {
        let yaml = r#"
version: 2
updates:
  - package-ecosystem: github-actions
    directory: /
    schedule:
      interval: weekly
    labels:
      - dependencies
      - d:github-actions
  - package-ecosystem: cargo
    directory: /
    schedule:
      interval: weekly
    labels:
      - dependencies
      - d:cargo
"#;
        let names = extract_label_names(yaml.as_bytes()).unwrap();
        let expected: BTreeSet<String> = ["d:cargo", "d:github-actions", "dependencies"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_updates_without_labels() {
        let yaml = r#"
version: 2
updates:
  - package-ecosystem: pip
    directory: /
"#;
        let names = extract_label_names(yaml.as_bytes()).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_empty_updates_list() {
        let names = extract_label_names(b"updates: []\n").unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_missing_updates_is_config_error() {
        let err = extract_label_names(b"version: 2\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_wrong_label_type_is_config_error() {
        let yaml = "updates:\n  - labels: dependencies\n";
        let err = extract_label_names(yaml.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let err = extract_label_names(b"updates: [\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_load_from_repo_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".github")).unwrap();
        std::fs::write(
            dir.path().join(".github").join("dependabot.yml"),
            "updates:\n  - labels: [d:python]\n",
        )
        .unwrap();

        let config = DependabotConfig::load(dir.path()).unwrap();
        assert_eq!(config.updates.len(), 1);
        assert!(config.label_names().contains("d:python"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DependabotConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
