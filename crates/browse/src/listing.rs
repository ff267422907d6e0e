//! Listing view controller: trending / search with incremental loading.

use catalog::{Catalog, Page, SummaryRecord};

use crate::{Navigator, Resolution};

pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No movies found. Try a different search term.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListingStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// What the listing should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView {
    /// First page still in flight.
    Loading,
    Failure(String),
    /// A valid query with zero results.
    Empty,
    /// Loaded results; `error` is set when a later page failed to load.
    Results { error: Option<String> },
}

impl ListingView {
    /// Inline message for the failure and empty views, or for a failed
    /// "load more" below existing results.
    pub fn message(&self) -> Option<&str> {
        match self {
            ListingView::Failure(message) => Some(message),
            ListingView::Empty => Some(EMPTY_MESSAGE),
            ListingView::Results { error } => error.as_deref(),
            ListingView::Loading => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingMode {
    Trending,
    Search(String),
}

impl ListingMode {
    pub fn heading(&self) -> &'static str {
        match self {
            ListingMode::Trending => "Trending Movies",
            ListingMode::Search(_) => "Search Results",
        }
    }
}

/// A listing fetch, tagged with the state it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    generation: u64,
    query: String,
    page: u32,
}

impl FetchRequest {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    /// Run the fetch: trending for an empty query, title search otherwise.
    pub async fn fetch(&self, catalog: &Catalog) -> Option<Page<SummaryRecord>> {
        if self.query.is_empty() {
            catalog.list_trending(self.page).await
        } else {
            catalog.search(&self.query, self.page).await
        }
    }
}

/// State owner for the listing view.
///
/// Every new search bumps a generation counter. Results are only merged
/// when their [`FetchRequest`] still matches the current generation, query
/// and page, so a slow response for an abandoned search or page never
/// lands in the accumulated list.
#[derive(Debug)]
pub struct ListingController<N> {
    navigator: N,
    query: String,
    page: u32,
    total_pages: u32,
    results: Vec<SummaryRecord>,
    status: ListingStatus,
    generation: u64,
}

impl<N: Navigator> ListingController<N> {
    pub fn new(navigator: N) -> Self {
        let query = navigator.query().unwrap_or_default();
        Self {
            navigator,
            query,
            page: 1,
            total_pages: 0,
            results: Vec::new(),
            status: ListingStatus::Idle,
            generation: 0,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn results(&self) -> &[SummaryRecord] {
        &self.results
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListingStatus::Loading
    }

    pub fn mode(&self) -> ListingMode {
        if self.query.is_empty() {
            ListingMode::Trending
        } else {
            ListingMode::Search(self.query.clone())
        }
    }

    pub fn can_load_more(&self) -> bool {
        !self.is_loading() && self.page < self.total_pages
    }

    pub fn view(&self) -> ListingView {
        match &self.status {
            ListingStatus::Idle => ListingView::Loading,
            ListingStatus::Loading if self.results.is_empty() => ListingView::Loading,
            ListingStatus::Error(message) if self.results.is_empty() => {
                ListingView::Failure(message.clone())
            }
            _ if self.results.is_empty() => ListingView::Empty,
            ListingStatus::Error(message) => ListingView::Results {
                error: Some(message.clone()),
            },
            _ => ListingView::Results { error: None },
        }
    }

    /// Re-issue the search held by the navigator, e.g. after a reload.
    pub fn restore(&mut self) -> FetchRequest {
        let query = self.navigator.query().unwrap_or_default();
        self.submit(&query)
    }

    /// Start a new search. An empty query switches back to trending.
    pub fn submit(&mut self, query: &str) -> FetchRequest {
        let query = query.trim().to_string();

        self.generation += 1;
        self.results.clear();
        self.page = 1;
        self.total_pages = 0;
        self.navigator
            .set_query(Some(query.as_str()).filter(|q| !q.is_empty()));
        self.query = query;
        self.status = ListingStatus::Loading;

        tracing::debug!(
            "Listing search '{}' (generation {})",
            self.query,
            self.generation
        );
        self.request()
    }

    /// Ask for the next page. `None` while loading or on the last page.
    pub fn request_more(&mut self) -> Option<FetchRequest> {
        if !self.can_load_more() {
            return None;
        }
        self.page += 1;
        self.status = ListingStatus::Loading;
        Some(self.request())
    }

    /// Merge a resolved fetch (`None` = failure) into the state.
    pub fn apply(
        &mut self,
        request: &FetchRequest,
        outcome: Option<Page<SummaryRecord>>,
    ) -> Resolution {
        if !self.is_current(request) {
            tracing::debug!(
                "Discarding stale listing response for '{}' page {}",
                request.query,
                request.page
            );
            return Resolution::Discarded;
        }

        match outcome {
            Some(page) => {
                if request.is_first_page() {
                    self.results = page.results;
                } else {
                    self.results.extend(page.results);
                }
                self.total_pages = page.total_pages;
                self.status = ListingStatus::Loaded;
            }
            None => {
                if request.is_first_page() {
                    self.results.clear();
                    self.total_pages = 0;
                } else {
                    // Keep what was loaded and let "load more" retry this page.
                    self.page -= 1;
                }
                self.status = ListingStatus::Error(FAILURE_MESSAGE.to_string());
            }
        }
        Resolution::Applied
    }

    /// Fetch `request` and merge the result.
    pub async fn execute(&mut self, catalog: &Catalog, request: FetchRequest) -> Resolution {
        let outcome = request.fetch(catalog).await;
        self.apply(&request, outcome)
    }

    /// Initial load from the navigator's query.
    pub async fn start(&mut self, catalog: &Catalog) -> Resolution {
        let request = self.restore();
        self.execute(catalog, request).await
    }

    pub async fn search(&mut self, catalog: &Catalog, query: &str) -> Resolution {
        let request = self.submit(query);
        self.execute(catalog, request).await
    }

    pub async fn load_more(&mut self, catalog: &Catalog) -> Option<Resolution> {
        let request = self.request_more()?;
        Some(self.execute(catalog, request).await)
    }

    fn request(&self) -> FetchRequest {
        FetchRequest {
            generation: self.generation,
            query: self.query.clone(),
            page: self.page,
        }
    }

    fn is_current(&self, request: &FetchRequest) -> bool {
        self.is_loading()
            && request.generation == self.generation
            && request.page == self.page
            && request.query == self.query
    }
}
