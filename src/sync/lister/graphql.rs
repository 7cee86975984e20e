extern crate serde;
extern crate serde_json;

use super::PageSource;
use crate::{
    client::Session,
    error::{protocol_error, Result},
    types::{Page, Status, SubmissionSummary},
};
use serde::Deserialize;
use serde_json::json;

const QUERY: &str = r#"
query submissionList($username: String!, $offset: Int!, $limit: Int!) {
  submissionList(username: $username, offset: $offset, limit: $limit) {
    hasNext
    submissions {
      id
      statusDisplay
      lang
      titleSlug
      timestamp
    }
  }
}
"#;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubmission {
    id: String,
    status_display: String,
    lang: String,
    title_slug: String,
    timestamp: Option<String>,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    has_next: bool,
    submissions: Vec<RawSubmission>,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Data {
    submission_list: Option<RawPage>,
}

impl RawSubmission {
    fn normalize(self) -> Result<SubmissionSummary> {
        Ok(SubmissionSummary {
            id: self
                .id
                .parse()
                .map_err(|_| protocol_error(format!("malformed submission id {}", self.id)))?,
            status: Status::from_display(&self.status_display),
            timestamp: self.timestamp.and_then(|x| x.parse().ok()),
            slug: self.title_slug,
            language: self.lang,
        })
    }
}
impl RawPage {
    fn normalize(self) -> Result<Page> {
        Ok(Page {
            submissions: self
                .submissions
                .into_iter()
                .map(RawSubmission::normalize)
                .collect::<Result<_>>()?,
            has_more: self.has_next,
        })
    }
}

/// The public `submissionList` query.
pub struct GraphqlPages<'a> {
    session: &'a Session,
    username: &'a str,
}
impl<'a> GraphqlPages<'a> {
    pub fn new(session: &'a Session, username: &'a str) -> Self {
        Self { session, username }
    }
}
impl PageSource for GraphqlPages<'_> {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Page> {
        let data: Data = self
            .session
            .graphql(
                QUERY,
                json!({ "username": self.username, "offset": offset, "limit": limit }),
            )
            .await?;
        data.submission_list
            .ok_or_else(|| protocol_error("submissionList is null"))?
            .normalize()
    }
}
