use crate::{
    config::Config,
    types::{
        question::{QuestionData, QuestionInfo},
        submission::{SubmissionDetail, SubmissionDetailData, SubmissionListData, SubmissionListPage},
    },
};
use anyhow::Result;
use reqwest::{header, Client, Url};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::time::Duration;

const SUBMISSION_LIST_QUERY: &str = r#"
query submissionList($offset: Int!, $limit: Int!, $lastKey: String) {
  submissionList(offset: $offset, limit: $limit, lastKey: $lastKey) {
    hasNext
    lastKey
    submissions {
      id
      title
      titleSlug
      statusDisplay
      lang
      timestamp
    }
  }
}
"#;

const SUBMISSION_DETAIL_QUERY: &str = r#"
query submissionDetails($submissionId: Int!) {
  submissionDetails(submissionId: $submissionId) {
    code
    lang { name verboseName }
    timestamp
    statusCode
  }
}
"#;

const QUESTION_QUERY: &str = r#"
query questionTitle($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionFrontendId
    difficulty
  }
}
"#;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("GraphQL error: {0}")]
    Graphql(String),
    #[error("malformed GraphQL response: data field is missing")]
    MissingData,
}

/// Response envelope of the GraphQL endpoint. `errors` is non-empty on
/// failure, in which case `data` must not be trusted.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<Value>>,
}

pub struct LeetcodeClient {
    url: Url,
    client: Client,
    session: String,
    csrf_token: String,
}

impl LeetcodeClient {
    pub fn new(config: &Config) -> Self {
        LeetcodeClient {
            url: Url::parse("https://leetcode.com/graphql").unwrap(),
            client: Client::builder()
                .gzip(true)
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap(),
            session: config.session.clone(),
            csrf_token: config.csrf_token.clone(),
        }
    }

    /// Sends one authenticated query and unwraps the `data` field of the
    /// response envelope.
    pub async fn query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let res = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-CSRFToken", &self.csrf_token)
            .header(header::REFERER, "https://leetcode.com/")
            .header(
                header::COOKIE,
                format!(
                    "LEETCODE_SESSION={}; csrftoken={}",
                    self.session, self.csrf_token
                ),
            )
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let body: GraphqlResponse<T> = res.json().await?;

        if let Some(errors) = body.errors {
            if !errors.is_empty() {
                let payload = serde_json::to_string_pretty(&errors)?;
                tracing::error!("{}", payload);
                return Err(ClientError::Graphql(payload).into());
            }
        }

        body.data.ok_or(ClientError::MissingData.into())
    }

    pub async fn fetch_submission_page(
        &self,
        offset: i64,
        limit: i64,
        last_key: Option<&str>,
    ) -> Result<SubmissionListPage> {
        let data: SubmissionListData = self
            .query(
                SUBMISSION_LIST_QUERY,
                json!({ "offset": offset, "limit": limit, "lastKey": last_key }),
            )
            .await?;

        Ok(data.submission_list)
    }

    /// Fetches the source code of one submission. Returns `None` when the
    /// endpoint reports no detail for the id.
    pub async fn fetch_submission_detail(&self, id: i64) -> Result<Option<SubmissionDetail>> {
        let data: SubmissionDetailData = self
            .query(SUBMISSION_DETAIL_QUERY, json!({ "submissionId": id }))
            .await?;

        Ok(data.submission_details)
    }

    pub async fn fetch_question_info(&self, slug: &str) -> Result<QuestionInfo> {
        let data: QuestionData = self
            .query(QUESTION_QUERY, json!({ "titleSlug": slug }))
            .await?;

        Ok(QuestionInfo::from(data.question))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_envelope_with_errors() {
        let body = r#"{"data": null, "errors": [{"message": "user not found"}]}"#;
        let res: GraphqlResponse<SubmissionDetailData> = serde_json::from_str(body).unwrap();

        assert!(res.data.is_none());
        assert_eq!(res.errors.unwrap().len(), 1);
    }

    #[test]
    fn test_envelope_with_null_detail() {
        let body = r#"{"data": {"submissionDetails": null}}"#;
        let res: GraphqlResponse<SubmissionDetailData> = serde_json::from_str(body).unwrap();

        assert!(res.errors.is_none());
        assert!(res.data.unwrap().submission_details.is_none());
    }

    #[test]
    fn test_envelope_with_detail() {
        let body = r#"{"data": {"submissionDetails": {"code": "fn main() {}", "lang": {"name": "rust"}}}}"#;
        let res: GraphqlResponse<SubmissionDetailData> = serde_json::from_str(body).unwrap();

        let detail = res.data.unwrap().submission_details.unwrap();
        assert_eq!(detail.code, "fn main() {}");
        assert_eq!(detail.lang.name, "rust");
    }

    #[test]
    fn test_page_without_last_key() {
        let body = r#"{"hasNext": false, "lastKey": null, "submissions": []}"#;
        let page: SubmissionListPage = serde_json::from_str(body).unwrap();

        assert!(!page.has_next);
        assert!(page.last_key.is_none());
        assert!(page.submissions.is_empty());
    }
}
