use crate::{modules::leetcode::client::LeetcodeClient, types::submission::Submission};
use anyhow::Result;
use chrono::Utc;
use std::collections::HashMap;

const PAGE_SIZE: i64 = 10;
const RETENTION_SECONDS: i64 = 30 * 24 * 60 * 60;

pub struct SubmissionFetcher<'a> {
    client: &'a LeetcodeClient,
}

impl<'a> SubmissionFetcher<'a> {
    pub fn new(client: &'a LeetcodeClient) -> Self {
        SubmissionFetcher { client }
    }

    /// Pages through the submission list, collecting everything newer than
    /// the 30-day cutoff.
    pub async fn fetch_all(&self) -> Result<Vec<Submission>> {
        let mut offset: i64 = 0;
        let mut last_key: Option<String> = None;
        let cutoff = Utc::now().timestamp() - RETENTION_SECONDS;

        let mut all: Vec<Submission> = Vec::new();

        loop {
            let page = self
                .client
                .fetch_submission_page(offset, PAGE_SIZE, last_key.as_deref())
                .await?;

            tracing::info!("Fetching submissions {}..{}", offset, offset + PAGE_SIZE);

            if take_until_cutoff(page.submissions, cutoff, &mut all) {
                return Ok(all);
            }

            if !page.has_next {
                break;
            }

            last_key = page.last_key;
            offset += PAGE_SIZE;
        }

        Ok(all)
    }
}

/// Appends submissions to `out` in page order, stopping at the first entry
/// older than `cutoff`. Returns true when the cutoff was hit and paging
/// should stop.
///
/// Relies on the list arriving newest first; an out-of-order page would end
/// the scan early and silently drop the rest.
pub fn take_until_cutoff(subs: Vec<Submission>, cutoff: i64, out: &mut Vec<Submission>) -> bool {
    for sub in subs {
        if sub.timestamp < cutoff {
            return true;
        }
        out.push(sub);
    }

    false
}

/// Reduces the submission list to the latest accepted entry per problem,
/// in order of each slug's first occurrence.
pub fn latest_accepted(subs: Vec<Submission>) -> Vec<Submission> {
    let mut latest: Vec<Submission> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for sub in subs {
        if sub.status_display != "Accepted" {
            continue;
        }

        match index.get(&sub.title_slug) {
            Some(&i) => {
                if sub.timestamp > latest[i].timestamp {
                    latest[i] = sub;
                }
            }
            None => {
                index.insert(sub.title_slug.clone(), latest.len());
                latest.push(sub);
            }
        }
    }

    latest
}
