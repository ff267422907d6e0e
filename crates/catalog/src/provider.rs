//! Catalog provider trait definition

use async_trait::async_trait;

use crate::{CatalogError, DetailRecord, MovieId, Page, Review, SearchQuery, SummaryRecord};

/// Backend seam for movie data.
///
/// Implemented by the in-memory [`crate::FixtureCatalog`] and the
/// TMDB-backed [`crate::TmdbCatalog`]; both page listings at
/// [`crate::PAGE_SIZE`], so either can sit behind [`crate::Catalog`].
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Trending listing, in the backend's stable order.
    async fn trending(&self, page: u32) -> Result<Page<SummaryRecord>, CatalogError>;

    /// Movies whose title matches the query.
    async fn search(
        &self,
        query: &SearchQuery,
        page: u32,
    ) -> Result<Page<SummaryRecord>, CatalogError>;

    /// Full detail for one movie, or `None` when the id is unknown.
    async fn detail(&self, id: MovieId) -> Result<Option<DetailRecord>, CatalogError>;

    /// Every review for one movie, as a single page.
    async fn reviews(&self, id: MovieId) -> Result<Page<Review>, CatalogError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
