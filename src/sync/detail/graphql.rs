extern crate serde;
extern crate serde_json;

use super::DetailProvider;
use crate::{
    client::Session,
    error::{extraction_error, Result},
    types::SubmissionDetail,
};
use serde::Deserialize;
use serde_json::json;

const QUERY: &str = r#"
query submissionDetails($submissionId: Int!) {
  submissionDetails(submissionId: $submissionId) {
    id
    code
    lang
    runtime
    memory
    question {
      titleSlug
      title
    }
  }
}
"#;

#[derive(Deserialize)]
#[serde(untagged)]
enum Lang {
    Name(String),
    Object { name: String },
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Question {
    title_slug: Option<String>,
}
#[derive(Deserialize)]
struct RawDetail {
    code: Option<String>,
    lang: Option<Lang>,
    question: Option<Question>,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Data {
    submission_details: Option<RawDetail>,
}

impl RawDetail {
    fn normalize(self, id: u64) -> Result<SubmissionDetail> {
        Ok(SubmissionDetail {
            code: self.code.ok_or_else(|| extraction_error(id, "code"))?,
            language: match self.lang.ok_or_else(|| extraction_error(id, "lang"))? {
                Lang::Name(x) | Lang::Object { name: x } => x,
            },
            slug: self
                .question
                .and_then(|x| x.title_slug)
                .ok_or_else(|| extraction_error(id, "question.titleSlug"))?,
        })
    }
}

/// The `submissionDetails` query.
pub struct GraphqlDetails<'a> {
    session: &'a Session,
}
impl<'a> GraphqlDetails<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}
impl DetailProvider for GraphqlDetails<'_> {
    async fn fetch_detail(&self, id: u64) -> Result<SubmissionDetail> {
        let data: Data = self
            .session
            .graphql(QUERY, json!({ "submissionId": id }))
            .await?;
        data.submission_details
            .ok_or_else(|| extraction_error(id, "submissionDetails"))?
            .normalize(id)
    }
}
