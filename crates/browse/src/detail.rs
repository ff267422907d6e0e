//! Detail view controller: one movie plus its reviews.

use catalog::{Catalog, DetailLookup, DetailRecord, MovieId, Page, Review};

use crate::Resolution;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailError {
    /// Unknown id; rendered as a not-found page with a way back.
    NotFound,
    /// Backend failure.
    Failed,
}

impl DetailError {
    pub fn message(&self) -> &'static str {
        match self {
            DetailError::NotFound => "Movie not found",
            DetailError::Failed => "Failed to load movie details",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailStatus {
    #[default]
    Idle,
    Loading,
    Loaded(DetailRecord),
    Error(DetailError),
}

/// Identifies the `open` call a detail or review result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    movie_id: MovieId,
    generation: u64,
}

impl DetailTicket {
    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }
}

/// State owner for the detail view.
///
/// Detail and reviews resolve independently. Reviews carry their own
/// loading flag so the page can render as soon as the detail arrives.
#[derive(Debug, Default)]
pub struct DetailController {
    movie_id: Option<MovieId>,
    generation: u64,
    status: DetailStatus,
    reviews: Vec<Review>,
    reviews_loading: bool,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movie_id(&self) -> Option<MovieId> {
        self.movie_id
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    pub fn record(&self) -> Option<&DetailRecord> {
        match &self.status {
            DetailStatus::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Reviews to display; always empty once the detail has failed.
    pub fn reviews(&self) -> &[Review] {
        match self.status {
            DetailStatus::Error(_) => &[],
            _ => &self.reviews,
        }
    }

    pub fn reviews_loading(&self) -> bool {
        self.reviews_loading
    }

    /// Switch to another movie and start loading it.
    pub fn open(&mut self, movie_id: MovieId) -> DetailTicket {
        self.generation += 1;
        self.movie_id = Some(movie_id);
        self.status = DetailStatus::Loading;
        self.reviews.clear();
        self.reviews_loading = true;

        tracing::debug!("Opening movie {} (generation {})", movie_id, self.generation);
        DetailTicket {
            movie_id,
            generation: self.generation,
        }
    }

    pub fn resolve_detail(&mut self, ticket: DetailTicket, lookup: DetailLookup) -> Resolution {
        if !self.is_current(ticket) || self.status != DetailStatus::Loading {
            tracing::debug!("Discarding stale detail for movie {}", ticket.movie_id);
            return Resolution::Discarded;
        }

        self.status = match lookup {
            DetailLookup::Found(record) => DetailStatus::Loaded(record),
            DetailLookup::NotFound => DetailStatus::Error(DetailError::NotFound),
            DetailLookup::Failed => DetailStatus::Error(DetailError::Failed),
        };
        if matches!(self.status, DetailStatus::Error(_)) {
            self.reviews.clear();
        }
        Resolution::Applied
    }

    /// Store reviews (`None` = failure, shown as no reviews).
    pub fn resolve_reviews(
        &mut self,
        ticket: DetailTicket,
        page: Option<Page<Review>>,
    ) -> Resolution {
        if !self.is_current(ticket) || !self.reviews_loading {
            tracing::debug!("Discarding stale reviews for movie {}", ticket.movie_id);
            return Resolution::Discarded;
        }

        self.reviews_loading = false;
        self.reviews = match (&self.status, page) {
            (DetailStatus::Error(_), _) | (_, None) => Vec::new(),
            (_, Some(page)) => page.results,
        };
        Resolution::Applied
    }

    /// Open `movie_id` and fetch its detail and reviews concurrently,
    /// applying each result as soon as it arrives.
    pub async fn load(&mut self, catalog: &Catalog, movie_id: MovieId) {
        let ticket = self.open(movie_id);

        let detail = catalog.get_detail(movie_id);
        let reviews = catalog.get_reviews(movie_id);
        tokio::pin!(detail, reviews);

        let (mut detail_done, mut reviews_done) = (false, false);
        while !(detail_done && reviews_done) {
            tokio::select! {
                lookup = &mut detail, if !detail_done => {
                    detail_done = true;
                    self.resolve_detail(ticket, lookup);
                }
                page = &mut reviews, if !reviews_done => {
                    reviews_done = true;
                    self.resolve_reviews(ticket, page);
                }
            }
        }
    }

    fn is_current(&self, ticket: DetailTicket) -> bool {
        ticket.generation == self.generation && Some(ticket.movie_id) == self.movie_id
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use catalog::{
        CatalogError, CatalogProvider, CollectingNotifier, FixtureCatalog, SearchQuery,
        SummaryRecord,
    };
    use chrono::Utc;

    use super::*;

    const JOKER_ID: MovieId = 475557;

    /// Wraps the sample catalog and fails detail and/or reviews on demand.
    struct Partial {
        inner: FixtureCatalog,
        fail_detail: bool,
        fail_reviews: bool,
    }

    #[async_trait]
    impl CatalogProvider for Partial {
        async fn trending(&self, page: u32) -> Result<Page<SummaryRecord>, CatalogError> {
            self.inner.trending(page).await
        }

        async fn search(
            &self,
            query: &SearchQuery,
            page: u32,
        ) -> Result<Page<SummaryRecord>, CatalogError> {
            self.inner.search(query, page).await
        }

        async fn detail(&self, id: MovieId) -> Result<Option<DetailRecord>, CatalogError> {
            if self.fail_detail {
                return Err(CatalogError::HttpClient("reset by peer".into()));
            }
            self.inner.detail(id).await
        }

        async fn reviews(&self, id: MovieId) -> Result<Page<Review>, CatalogError> {
            if self.fail_reviews {
                return Err(CatalogError::HttpClient("reset by peer".into()));
            }
            self.inner.reviews(id).await
        }

        fn name(&self) -> &'static str {
            "partial"
        }
    }

    fn catalog(fail_detail: bool, fail_reviews: bool) -> (Catalog, Arc<CollectingNotifier>) {
        let notifier = Arc::new(CollectingNotifier::new());
        let provider = Partial {
            inner: FixtureCatalog::sample(),
            fail_detail,
            fail_reviews,
        };
        (Catalog::new(Arc::new(provider), notifier.clone()), notifier)
    }

    fn review(id: &str) -> Review {
        Review {
            id: id.to_string(),
            author: "tester".to_string(),
            content: "fine".to_string(),
            created_at: Utc::now(),
            rating: Some(6.0),
        }
    }

    #[tokio::test]
    async fn test_load_found_movie_with_reviews() {
        let (catalog, notifier) = catalog(false, false);
        let mut detail = DetailController::new();

        detail.load(&catalog, JOKER_ID).await;

        let record = detail.record().unwrap();
        assert_eq!(record.title, "Joker");
        assert!(!detail.reviews_loading());
        assert_eq!(detail.reviews().len(), 3);
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_movie_ends_in_not_found_without_reviews() {
        let (catalog, notifier) = catalog(false, false);
        let mut detail = DetailController::new();

        detail.load(&catalog, 1).await;

        assert_eq!(*detail.status(), DetailStatus::Error(DetailError::NotFound));
        assert_eq!(DetailError::NotFound.message(), "Movie not found");
        assert!(detail.reviews().is_empty());
        assert!(!detail.reviews_loading());
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_detail_failure_hides_reviews() {
        let (catalog, notifier) = catalog(true, false);
        let mut detail = DetailController::new();

        detail.load(&catalog, JOKER_ID).await;

        assert_eq!(*detail.status(), DetailStatus::Error(DetailError::Failed));
        assert!(detail.reviews().is_empty());
        assert_eq!(notifier.messages(), vec!["Couldn't load movie details"]);
    }

    #[tokio::test]
    async fn test_review_failure_does_not_affect_detail() {
        let (catalog, notifier) = catalog(false, true);
        let mut detail = DetailController::new();

        detail.load(&catalog, JOKER_ID).await;

        assert!(detail.record().is_some());
        assert!(detail.reviews().is_empty());
        assert!(!detail.reviews_loading());
        assert_eq!(notifier.messages(), vec!["Couldn't load movie reviews"]);
    }

    #[test]
    fn test_detail_renders_before_reviews_arrive() {
        let mut detail = DetailController::new();
        let ticket = detail.open(7);
        assert_eq!(*detail.status(), DetailStatus::Loading);

        let record = DetailRecord::from_summary(
            SummaryRecord {
                id: 7,
                title: "Seven".to_string(),
                poster_path: None,
                backdrop_path: None,
                vote_average: 8.3,
                vote_count: 1,
                release_date: "1995-09-22".to_string(),
                overview: String::new(),
                genre_ids: vec![80, 9648],
            },
            Default::default(),
        );
        detail.resolve_detail(ticket, DetailLookup::Found(record));
        assert!(detail.record().is_some());
        assert!(detail.reviews_loading());

        detail.resolve_reviews(ticket, Some(Page::single(vec![review("r1")])));
        assert!(!detail.reviews_loading());
        assert_eq!(detail.reviews().len(), 1);
    }

    #[test]
    fn test_reviews_before_not_found_are_hidden() {
        let mut detail = DetailController::new();
        let ticket = detail.open(7);

        detail.resolve_reviews(ticket, Some(Page::single(vec![review("r1")])));
        assert_eq!(detail.reviews().len(), 1);

        detail.resolve_detail(ticket, DetailLookup::NotFound);
        assert!(detail.reviews().is_empty());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut detail = DetailController::new();
        let old = detail.open(1);
        let new = detail.open(2);

        assert_eq!(
            detail.resolve_detail(old, DetailLookup::NotFound),
            Resolution::Discarded
        );
        assert_eq!(
            detail.resolve_reviews(old, Some(Page::single(vec![review("old")]))),
            Resolution::Discarded
        );
        assert_eq!(*detail.status(), DetailStatus::Loading);
        assert!(detail.reviews_loading());

        assert_eq!(
            detail.resolve_reviews(new, Some(Page::single(vec![]))),
            Resolution::Applied
        );
        assert_eq!(new.movie_id(), 2);
        assert_eq!(detail.movie_id(), Some(2));
    }

    #[test]
    fn test_reopening_same_movie_discards_older_ticket() {
        let mut detail = DetailController::new();
        let first = detail.open(5);
        let second = detail.open(5);

        assert_eq!(
            detail.resolve_detail(first, DetailLookup::Failed),
            Resolution::Discarded
        );
        assert_eq!(
            detail.resolve_detail(second, DetailLookup::NotFound),
            Resolution::Applied
        );
        assert_eq!(
            detail.resolve_detail(second, DetailLookup::Failed),
            Resolution::Discarded
        );
        assert_eq!(*detail.status(), DetailStatus::Error(DetailError::NotFound));
    }
}
