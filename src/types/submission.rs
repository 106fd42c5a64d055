use serde::Deserialize;

/// One entry of the submission list. `timestamp` is unix seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub title: String,
    pub title_slug: String,
    pub status_display: String,
    pub lang: String,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionListData {
    pub submission_list: SubmissionListPage,
}

/// One page of the paginated submission list. `last_key` is an opaque
/// pagination token and is absent on the final page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionListPage {
    pub has_next: bool,
    pub last_key: Option<String>,
    pub submissions: Vec<Submission>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDetailData {
    // null when the submission is not visible to the session
    pub submission_details: Option<SubmissionDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDetail {
    pub code: String,
    pub lang: LangInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LangInfo {
    pub name: String,
}
