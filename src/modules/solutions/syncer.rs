use crate::modules::{
    leetcode::{
        client::LeetcodeClient,
        fetcher::{latest_accepted, SubmissionFetcher},
    },
    solutions::writer::SolutionWriter,
};
use crate::types::{question::QuestionInfo, submission::SubmissionDetail};
use anyhow::Result;
use std::path::PathBuf;

/// Stage one of the pipeline: fetch recent submissions, deduplicate to the
/// latest accepted entry per problem and write the sources locally.
pub struct SolutionSyncer<'a> {
    client: &'a LeetcodeClient,
    writer: SolutionWriter,
}

impl<'a> SolutionSyncer<'a> {
    pub fn new(client: &'a LeetcodeClient, solutions_dir: PathBuf) -> Self {
        SolutionSyncer {
            client,
            writer: SolutionWriter::new(solutions_dir),
        }
    }

    pub async fn run(&self) -> Result<()> {
        self.writer.prepare().await?;

        let fetcher = SubmissionFetcher::new(self.client);
        let all = fetcher.fetch_all().await?;
        let latest = latest_accepted(all);

        let mut problem_count = 0;

        for sub in latest.iter() {
            let detail = self.client.fetch_submission_detail(sub.id).await?;

            // Question info is only worth a round trip when the detail is
            // visible to us.
            let info = if detail.is_some() {
                Some(self.client.fetch_question_info(&sub.title_slug).await?)
            } else {
                None
            };

            if write_latest(&self.writer, detail, info).await? {
                problem_count += 1;
            }
        }

        tracing::info!(
            "Wrote {} submissions to {}",
            problem_count,
            self.writer.root().display()
        );

        Ok(())
    }
}

/// Writes one deduplicated submission. A missing detail drops the
/// submission: no file, no effect on the written-problem count.
pub(crate) async fn write_latest(
    writer: &SolutionWriter,
    detail: Option<SubmissionDetail>,
    info: Option<QuestionInfo>,
) -> Result<bool> {
    let (Some(detail), Some(info)) = (detail, info) else {
        return Ok(false);
    };

    tracing::info!("Writing solution {} to {}/", info.qid, info.difficulty);
    writer
        .write(&detail.code, &detail.lang.name, &info.qid, &info.difficulty)
        .await?;

    Ok(true)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::submission::LangInfo;

    fn detail(code: &str, lang: &str) -> SubmissionDetail {
        SubmissionDetail {
            code: String::from(code),
            lang: LangInfo {
                name: String::from(lang),
            },
        }
    }

    fn info(qid: &str, difficulty: &str) -> QuestionInfo {
        QuestionInfo {
            qid: String::from(qid),
            difficulty: String::from(difficulty),
        }
    }

    #[tokio::test]
    async fn test_missing_detail_writes_nothing_and_is_not_counted() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SolutionWriter::new(dir.path().to_path_buf());

        let written = write_latest(&writer, None, None).await.unwrap();

        assert!(!written);
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 0);
    }

    #[tokio::test]
    async fn test_visible_detail_is_written_and_counted() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SolutionWriter::new(dir.path().to_path_buf());

        let written = write_latest(
            &writer,
            Some(detail("fn main() {}", "rust")),
            Some(info("42", "medium")),
        )
        .await
        .unwrap();

        assert!(written);
        assert!(dir.path().join("medium").join("42.rs").is_file());
    }
}
