use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

use crate::config::DependabotConfig;
use crate::reconcile::{RunSummary, sync_labels};
use crate::remote::github::GitHubClient;
use crate::repo::{find_repo_root, local_repo};
use crate::token::TokenSources;
use crate::utils::error::AppResult;
use crate::utils::{OutputStyle, print_info, print_success};

/// Create GitHub PR labels used by Dependabot config
///
/// Visit <https://github.com/jwodder/dependalabels> for more information.
#[derive(Parser, Debug)]
#[command(name = "dependalabels")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        help = "Ensure predefined labels have the same colors & descriptions as when created"
    )]
    pub force: bool,

    #[arg(
        value_name = "DIRPATH",
        value_parser = existing_dir,
        help = "Directory inside the repository to configure [default: current directory]"
    )]
    pub dirpath: Option<PathBuf>,
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else if path.exists() {
        Err(format!("'{}' is not a directory", value))
    } else {
        Err(format!("'{}' does not exist", value))
    }
}

impl Cli {
    pub async fn execute(self) -> AppResult<()> {
        let dir = self.dirpath.as_deref();

        let root = find_repo_root(dir)?;
        let names = DependabotConfig::load(&root)?.label_names();
        if names.is_empty() {
            print_info("No Dependabot labels to configure");
            return Ok(());
        }

        let token = TokenSources::from_env(dir).find_token()?;
        let client = GitHubClient::new(local_repo(dir)?, token)?;

        print_info(&format!(
            "Fetching current labels for {} ...",
            OutputStyle::repo(&client.repo().to_string())
        ));
        let mut rng = StdRng::from_entropy();
        let summary = sync_labels(&client, &names, self.force, &mut rng).await?;
        print_summary(&summary);

        Ok(())
    }
}

fn print_summary(summary: &RunSummary) {
    print_success(&format!(
        "{} created, {} updated, {} unchanged",
        summary.created, summary.updated, summary.unchanged
    ));
}
