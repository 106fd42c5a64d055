use anyhow::Result;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Judge-reported language identifier to file extension. Unknown languages
/// fall back to "txt".
static EXTENSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("cpp", "cpp"),
        ("python3", "py"),
        ("javascript", "js"),
        ("c", "c"),
        ("golang", "go"),
        ("rust", "rs"),
    ])
});

pub fn extension_for(lang: &str) -> &'static str {
    EXTENSIONS.get(lang).copied().unwrap_or("txt")
}

/// Writes solution sources into a difficulty-partitioned tree under `root`.
pub struct SolutionWriter {
    root: PathBuf,
}

impl SolutionWriter {
    pub fn new(root: PathBuf) -> Self {
        SolutionWriter { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the three standard difficulty folders.
    pub async fn prepare(&self) -> Result<()> {
        for difficulty in ["easy", "medium", "hard"] {
            fs::create_dir_all(self.root.join(difficulty)).await?;
        }

        Ok(())
    }

    /// Writes `code` to `<root>/<difficulty>/<qid>.<ext>`, overwriting any
    /// previous content at that path.
    pub async fn write(
        &self,
        code: &str,
        lang: &str,
        qid: &str,
        difficulty: &str,
    ) -> Result<PathBuf> {
        let folder = self.root.join(difficulty);
        fs::create_dir_all(&folder).await?;

        let file = folder.join(format!("{}.{}", qid, extension_for(lang)));
        fs::write(&file, code).await?;

        Ok(file)
    }
}
