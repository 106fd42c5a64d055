use crate::modules::repo::git::Git;
use anyhow::Result;

const REMOTE: &str = "origin";
const BRANCH: &str = "master";

/// Stage two of the pipeline: commit the solutions tree and push it to the
/// configured remote.
pub struct RepoSyncer<G: Git> {
    git: G,
    repo_url: String,
}

impl<G: Git> RepoSyncer<G> {
    pub fn new(git: G, repo_url: String) -> Self {
        RepoSyncer { git, repo_url }
    }

    pub async fn sync(&self) -> Result<()> {
        if !self.git.is_work_tree().await {
            self.git.init().await?;
        }

        self.git.set_branch(BRANCH).await?;

        match self.git.remote_url(REMOTE).await {
            Some(_) => self.git.set_remote_url(REMOTE, &self.repo_url).await?,
            None => self.git.add_remote(REMOTE, &self.repo_url).await?,
        }

        // A failure here means the remote has no history yet; keep going.
        if let Err(e) = self.fetch_and_reset().await {
            tracing::warn!("could not reset onto remote history: {:?}", e);
        }

        let changed = self.git.status().await?;
        if changed.is_empty() {
            tracing::info!("No changes detected, skipping commit.");
            return Ok(());
        }

        tracing::info!("Detected {} changed files", changed.len());

        self.git.add_all().await?;
        self.git
            .commit(&format!(
                "chore(solutions): updated {} submissions",
                changed.len()
            ))
            .await?;
        self.git.push_upstream(REMOTE).await?;

        Ok(())
    }

    async fn fetch_and_reset(&self) -> Result<()> {
        self.git.fetch(REMOTE).await?;
        self.git.reset_soft(&format!("{}/{}", REMOTE, BRANCH)).await?;

        Ok(())
    }
}
