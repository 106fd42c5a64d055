use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionData {
    pub question: Question,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_frontend_id: String,
    pub difficulty: String,
}

/// Problem metadata as consumed by the writer: frontend-facing problem
/// number and lowercased difficulty.
#[derive(Debug)]
pub struct QuestionInfo {
    pub qid: String,
    pub difficulty: String,
}

impl From<Question> for QuestionInfo {
    fn from(question: Question) -> QuestionInfo {
        QuestionInfo {
            qid: question.question_frontend_id,
            difficulty: question.difficulty.to_lowercase(),
        }
    }
}
