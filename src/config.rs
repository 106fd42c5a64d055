use anyhow::{Context, Result};
use std::{env, path::PathBuf};

/// Process configuration, read from the environment once at startup and
/// passed explicitly into each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub session: String,
    pub csrf_token: String,
    pub repo_url: Option<String>,
    pub solutions_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let session: String = env::var("LEETCODE_SESSION").with_context(|| {
            let message = "LEETCODE_SESSION must be configured.";
            tracing::error!(message);
            message
        })?;

        let csrf_token: String = env::var("CSRF_TOKEN").with_context(|| {
            let message = "CSRF_TOKEN must be configured.";
            tracing::error!(message);
            message
        })?;

        // REPO_URL is only required once the repository stage actually runs.
        let repo_url = env::var("REPO_URL").ok();

        let solutions_dir =
            PathBuf::from(env::var("SOLUTIONS_DIR").unwrap_or(String::from("../solutions")));

        Ok(Config {
            session,
            csrf_token,
            repo_url,
            solutions_dir,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // One test so the env mutations don't race across test threads.
    #[test]
    fn test_from_env_requires_both_secrets() {
        env::remove_var("LEETCODE_SESSION");
        env::remove_var("CSRF_TOKEN");
        assert!(Config::from_env().is_err());

        env::set_var("LEETCODE_SESSION", "session");
        assert!(Config::from_env().is_err());

        env::set_var("CSRF_TOKEN", "csrf");
        env::remove_var("REPO_URL");
        env::remove_var("SOLUTIONS_DIR");
        let config = Config::from_env().unwrap();
        assert_eq!(config.session, "session");
        assert_eq!(config.csrf_token, "csrf");
        assert!(config.repo_url.is_none());
        assert_eq!(config.solutions_dir, PathBuf::from("../solutions"));
    }
}
