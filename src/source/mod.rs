pub mod model;
pub mod quote_garden;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Pagination, Quote, QueryOptions};

/// Page size used when listing genres and authors. A single request is
/// issued; entries beyond the first page are not fetched.
pub const LIST_PAGE_LIMIT: u32 = 100;

#[async_trait]
pub trait QuoteSource {
    /// Fetches one random quote from the whole corpus.
    async fn random_quote(&self) -> Result<Quote>;

    /// Fetches up to [`LIST_PAGE_LIMIT`] genre names, in backend order.
    async fn all_genres(&self) -> Result<Vec<String>>;

    /// Fetches up to [`LIST_PAGE_LIMIT`] author names, in backend order.
    async fn all_authors(&self) -> Result<Vec<String>>;

    /// Fetches the page of quotes selected by `options`.
    async fn quotes(&self, options: &QueryOptions) -> Result<(Vec<Quote>, Pagination)>;
}
