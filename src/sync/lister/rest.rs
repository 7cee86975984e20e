extern crate serde;

use super::PageSource;
use crate::{
    client::Session,
    config::lister::REST_PATH,
    error::Result,
    types::{Page, Status, SubmissionSummary},
};
use serde::Deserialize;

#[derive(Deserialize)]
struct RawSubmission {
    id: u64,
    status_display: String,
    lang: String,
    title_slug: String,
    #[serde(default)]
    timestamp: Option<i64>,
}
#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    has_next: bool,
    #[serde(default)]
    submissions_dump: Vec<RawSubmission>,
}

impl From<RawSubmission> for SubmissionSummary {
    fn from(raw: RawSubmission) -> Self {
        SubmissionSummary {
            id: raw.id,
            slug: raw.title_slug,
            language: raw.lang,
            status: Status::from_display(&raw.status_display),
            timestamp: raw.timestamp,
        }
    }
}
impl From<RawPage> for Page {
    fn from(raw: RawPage) -> Self {
        Page {
            submissions: raw.submissions_dump.into_iter().map(Into::into).collect(),
            has_more: raw.has_next,
        }
    }
}

/// The authenticated `/api/submissions/` endpoint.
pub struct RestPages<'a> {
    session: &'a Session,
}
impl<'a> RestPages<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}
impl PageSource for RestPages<'_> {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Page> {
        let raw: RawPage = self
            .session
            .get_json(
                REST_PATH,
                &[("offset", offset.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        Ok(raw.into())
    }
}
