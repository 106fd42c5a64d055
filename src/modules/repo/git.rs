use anyhow::Result;
use async_trait::async_trait;
use std::{path::PathBuf, process::Output};
use tokio::process::Command;

/// Capability interface over the external git binary. The syncer decides
/// what to run and in what order; implementations only execute commands.
#[async_trait]
pub trait Git {
    async fn is_work_tree(&self) -> bool;
    async fn init(&self) -> Result<()>;
    async fn set_branch(&self, name: &str) -> Result<()>;
    async fn remote_url(&self, name: &str) -> Option<String>;
    async fn add_remote(&self, name: &str, url: &str) -> Result<()>;
    async fn set_remote_url(&self, name: &str, url: &str) -> Result<()>;
    async fn fetch(&self, remote: &str) -> Result<()>;
    async fn reset_soft(&self, target: &str) -> Result<()>;
    async fn status(&self) -> Result<Vec<String>>;
    async fn add_all(&self) -> Result<()>;
    async fn commit(&self, message: &str) -> Result<()>;
    async fn push_upstream(&self, remote: &str) -> Result<()>;
}

/// Runs git against the solutions directory via subprocess.
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    pub fn new(dir: PathBuf) -> Self {
        GitCli { dir }
    }

    async fn run(&self, args: &[&str]) -> Result<Output> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .output()
            .await?;

        if !output.status.success() {
            anyhow::bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output)
    }
}

#[async_trait]
impl Git for GitCli {
    async fn is_work_tree(&self) -> bool {
        self.run(&["rev-parse", "--is-inside-work-tree"]).await.is_ok()
    }

    async fn init(&self) -> Result<()> {
        self.run(&["init"]).await?;
        Ok(())
    }

    async fn set_branch(&self, name: &str) -> Result<()> {
        self.run(&["branch", "-M", name]).await?;
        Ok(())
    }

    async fn remote_url(&self, name: &str) -> Option<String> {
        let output = self.run(&["remote", "get-url", name]).await.ok()?;
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.run(&["remote", "add", name, url]).await?;
        Ok(())
    }

    async fn set_remote_url(&self, name: &str, url: &str) -> Result<()> {
        self.run(&["remote", "set-url", name, url]).await?;
        Ok(())
    }

    async fn fetch(&self, remote: &str) -> Result<()> {
        self.run(&["fetch", remote]).await?;
        Ok(())
    }

    async fn reset_soft(&self, target: &str) -> Result<()> {
        self.run(&["reset", "--soft", target]).await?;
        Ok(())
    }

    async fn status(&self) -> Result<Vec<String>> {
        let output = self.run(&["status", "--porcelain"]).await?;

        let lines = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect();

        Ok(lines)
    }

    async fn add_all(&self) -> Result<()> {
        self.run(&["add", "."]).await?;
        Ok(())
    }

    async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await?;
        Ok(())
    }

    async fn push_upstream(&self, remote: &str) -> Result<()> {
        self.run(&["push", "-u", remote, "HEAD"]).await?;
        Ok(())
    }
}
