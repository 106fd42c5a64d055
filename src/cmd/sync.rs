use crate::{
    config::Config,
    modules::{
        leetcode::client::LeetcodeClient,
        repo::{git::GitCli, syncer::RepoSyncer},
        solutions::syncer::SolutionSyncer,
    },
};
use anyhow::Result;
use clap::Parser;
use std::process;

#[derive(Debug, Parser)]
#[command(name = "leetcode_sync")]
#[command(about = "Sync accepted LeetCode submissions into a local solutions repository")]
pub struct SyncArgs {
    /// Skip fetching submissions and writing solution files
    #[arg(long)]
    no_solution_sync: bool,
    /// Skip committing and pushing the solutions repository
    #[arg(long)]
    no_repo_sync: bool,
}

pub async fn run(args: SyncArgs) -> Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(_) => {
            tracing::error!("Set all env variables, see README for all required");
            process::exit(1);
        }
    };

    if !args.no_solution_sync {
        let client = LeetcodeClient::new(&config);
        let syncer = SolutionSyncer::new(&client, config.solutions_dir.clone());
        syncer.run().await?;
    }

    if !args.no_repo_sync {
        let Some(repo_url) = config.repo_url.clone() else {
            tracing::error!("REPO_URL env variable not set");
            process::exit(1);
        };

        let git = GitCli::new(config.solutions_dir.clone());
        let syncer = RepoSyncer::new(git, repo_url);
        syncer.sync().await?;
    }

    Ok(())
}
