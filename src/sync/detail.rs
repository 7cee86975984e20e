use crate::{error::Result, types::SubmissionDetail};

pub mod graphql;
pub mod page;

pub use graphql::GraphqlDetails;
pub use page::{PageDetails, Scraper};

/// Source of full submission text by submission id.
#[allow(async_fn_in_trait)]
pub trait DetailProvider {
    async fn fetch_detail(&self, id: u64) -> Result<SubmissionDetail>;
}
