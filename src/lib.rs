//! dependalabels - Create GitHub PR labels used by Dependabot config
//!
//! Dependabot applies the custom labels named in `.github/dependabot.yml` to
//! its pull requests, but it will not create them. This library extracts
//! those labels and makes sure each one exists on the GitHub repository,
//! giving well-known labels a fixed color and description.

pub mod cli;
pub mod config;
pub mod labels;
pub mod reconcile;
pub mod remote;
pub mod repo;
pub mod token;
pub mod utils;

pub use config::{DependabotConfig, extract_label_names};
pub use labels::{DesiredLabel, LabelColor, LabelDetails};
pub use reconcile::{LabelAction, LabelMaker, RunSummary, sync_labels};
pub use remote::{LabelApi, RemoteLabelSet, fetch_all_labels, github::GitHubClient};
pub use repo::GHRepo;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
