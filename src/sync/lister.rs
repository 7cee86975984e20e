extern crate futures;
extern crate tokio;

use crate::{
    config::lister::{PAGE_DELAY, PAGE_SIZE},
    error::Result,
    types::{Page, Status, SubmissionSummary},
};
use futures::stream::{self, Stream};
use log::debug;
use std::{collections::VecDeque, time::Duration};
use tokio::time::sleep;

pub mod graphql;
pub mod rest;

pub use graphql::GraphqlPages;
pub use rest::RestPages;

/// One upstream listing shape, normalized to [`Page`].
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Page>;
}

struct Cursor {
    offset: usize,
    has_more: bool,
    buffer: VecDeque<SubmissionSummary>,
}

pub struct Lister<S: PageSource> {
    source: S,
    page_size: usize,
    delay: Duration,
}
impl<S: PageSource> Lister<S> {
    pub fn new(source: S) -> Self {
        Self::with_pacing(source, PAGE_SIZE, PAGE_DELAY)
    }
    pub fn with_pacing(source: S, page_size: usize, delay: Duration) -> Self {
        Lister {
            source,
            page_size,
            delay,
        }
    }

    /// Accepted submissions, most recent first, fetched one page at a time.
    ///
    /// Listing stops only when the source reports no further pages. The first
    /// failed page request ends the stream with that error.
    pub fn list_accepted(&self) -> impl Stream<Item = Result<SubmissionSummary>> + '_ {
        let cursor = Cursor {
            offset: 0,
            has_more: true,
            buffer: VecDeque::new(),
        };
        stream::try_unfold(cursor, move |mut cursor| async move {
            loop {
                if let Some(v) = cursor.buffer.pop_front() {
                    return Ok(Some((v, cursor)));
                }
                if !cursor.has_more {
                    return Ok(None);
                }
                if cursor.offset != 0 {
                    sleep(self.delay).await;
                }
                debug!("fetching page at offset {}", cursor.offset);
                let page = self.source.fetch_page(cursor.offset, self.page_size).await?;
                cursor.has_more = page.has_more;
                cursor.offset += self.page_size;
                cursor.buffer.extend(
                    page.submissions
                        .into_iter()
                        .filter(|x| x.status == Status::Accepted),
                );
            }
        })
    }
}
