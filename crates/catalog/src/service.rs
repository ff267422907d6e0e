//! Failure-catching front door over a catalog provider.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tmdb::TmdbClient;

use crate::{
    Backend, CatalogConfig, CatalogError, CatalogProvider, ConfigError, DetailRecord,
    FixtureCatalog, ImageResolver, MovieId, Notifier, Page, Review, SearchQuery, SummaryRecord,
    TmdbCatalog,
};

const TRENDING_FAILED: &str = "Couldn't load trending movies";
const SEARCH_FAILED: &str = "Couldn't search for movies";
const DETAIL_FAILED: &str = "Couldn't load movie details";
const REVIEWS_FAILED: &str = "Couldn't load movie reviews";

/// Outcome of a detail lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailLookup {
    Found(DetailRecord),
    NotFound,
    Failed,
}

/// Catalog access for the view controllers.
///
/// Backend errors stop here: they are logged, reported once to the
/// notifier, and returned as `None` / [`DetailLookup::Failed`].
///
/// # Example
///
/// ```ignore
/// let catalog = Catalog::new(Arc::new(FixtureCatalog::sample()), Arc::new(TracingNotifier));
/// let page = catalog.search("joker", 1).await;
/// ```
#[derive(Clone)]
pub struct Catalog {
    provider: Arc<dyn CatalogProvider>,
    notifier: Arc<dyn Notifier>,
    images: ImageResolver,
}

impl Catalog {
    pub fn new(provider: Arc<dyn CatalogProvider>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            provider,
            notifier,
            images: ImageResolver::default(),
        }
    }

    pub fn with_images(mut self, images: ImageResolver) -> Self {
        self.images = images;
        self
    }

    /// Build the backend selected by `config`.
    pub fn from_config(
        config: &CatalogConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, CatalogError> {
        config.validate()?;

        let provider: Arc<dyn CatalogProvider> = match config.backend {
            Backend::Fixture => Arc::new(FixtureCatalog::sample()),
            Backend::Remote => {
                let api_key = config.api_key.clone().ok_or(ConfigError::MissingApiKey)?;
                let http = reqwest::Client::builder()
                    .timeout(Duration::from_secs(config.request_timeout_secs))
                    .build()
                    .map_err(|e| CatalogError::HttpClient(e.to_string()))?;
                let client = TmdbClient::new(http, Arc::new(RwLock::new(api_key)))
                    .with_base_url(config.api_base_url.as_str())
                    .with_language(config.language.as_str());
                Arc::new(TmdbCatalog::new(Arc::new(client)))
            }
        };

        tracing::info!("Using {} catalog backend", provider.name());

        Ok(Self::new(provider, notifier).with_images(ImageResolver::new(
            config.image_base_url.as_str(),
        )))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn images(&self) -> &ImageResolver {
        &self.images
    }

    pub async fn list_trending(&self, page: u32) -> Option<Page<SummaryRecord>> {
        let result = self.provider.trending(page).await;
        self.report(result, TRENDING_FAILED)
    }

    /// Search by title. A blank query is a no-op and yields `None` without
    /// reporting anything.
    pub async fn search(&self, query: &str, page: u32) -> Option<Page<SummaryRecord>> {
        let query = SearchQuery::new(query)?;
        let result = self.provider.search(&query, page).await;
        self.report(result, SEARCH_FAILED)
    }

    pub async fn get_detail(&self, id: MovieId) -> DetailLookup {
        match self.provider.detail(id).await {
            Ok(Some(record)) => DetailLookup::Found(record),
            Ok(None) => DetailLookup::NotFound,
            Err(e) if e.is_not_found() => DetailLookup::NotFound,
            Err(e) => {
                self.fail(&e, DETAIL_FAILED);
                DetailLookup::Failed
            }
        }
    }

    pub async fn get_reviews(&self, id: MovieId) -> Option<Page<Review>> {
        let result = self.provider.reviews(id).await;
        self.report(result, REVIEWS_FAILED)
    }

    fn report<T>(&self, result: Result<T, CatalogError>, message: &str) -> Option<T> {
        result.map_err(|e| self.fail(&e, message)).ok()
    }

    fn fail(&self, error: &CatalogError, message: &str) {
        tracing::warn!("{} ({} backend): {}", message, self.provider.name(), error);
        self.notifier.notify_error(message);
    }
}
