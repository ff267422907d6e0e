//! In-memory catalog backend

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    fixtures, CatalogError, CatalogProvider, DetailExtras, DetailRecord, MovieId, Page, Review,
    SearchQuery, SummaryRecord,
};

/// One fixture entry: the listing record plus its detail-only fields.
#[derive(Debug, Clone)]
pub struct FixtureMovie {
    pub summary: SummaryRecord,
    pub extras: DetailExtras,
}

/// Catalog backed by a fixed set of records.
///
/// Listing order is insertion order, so pages are deterministic.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    summaries: Vec<SummaryRecord>,
    extras: HashMap<MovieId, DetailExtras>,
    reviews: HashMap<MovieId, Vec<Review>>,
}

impl FixtureCatalog {
    pub fn new(movies: Vec<FixtureMovie>) -> Self {
        let mut catalog = Self::default();
        for movie in movies {
            catalog.extras.insert(movie.summary.id, movie.extras);
            catalog.summaries.push(movie.summary);
        }
        catalog
    }

    /// The bundled 20-movie sample catalog with a few reviews.
    pub fn sample() -> Self {
        let mut catalog = Self::new(fixtures::sample_movies());
        for (movie_id, reviews) in fixtures::sample_reviews() {
            catalog = catalog.with_reviews(movie_id, reviews);
        }
        catalog
    }

    /// Attach reviews to a movie, appending to any already present.
    pub fn with_reviews(mut self, movie_id: MovieId, reviews: Vec<Review>) -> Self {
        self.reviews.entry(movie_id).or_default().extend(reviews);
        self
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for FixtureCatalog {
    async fn trending(&self, page: u32) -> Result<Page<SummaryRecord>, CatalogError> {
        Page::paginate(&self.summaries, page)
    }

    async fn search(
        &self,
        query: &SearchQuery,
        page: u32,
    ) -> Result<Page<SummaryRecord>, CatalogError> {
        let matched: Vec<&SummaryRecord> = self
            .summaries
            .iter()
            .filter(|movie| query.matches(&movie.title))
            .collect();

        tracing::debug!(
            "Fixture search '{}' matched {} movies",
            query.as_str(),
            matched.len()
        );

        Ok(Page::paginate(&matched, page)?.map(|movie| movie.clone()))
    }

    async fn detail(&self, id: MovieId) -> Result<Option<DetailRecord>, CatalogError> {
        Ok(self
            .summaries
            .iter()
            .find(|movie| movie.id == id)
            .map(|summary| {
                let extras = self.extras.get(&id).cloned().unwrap_or_default();
                DetailRecord::from_summary(summary.clone(), extras)
            }))
    }

    async fn reviews(&self, id: MovieId) -> Result<Page<Review>, CatalogError> {
        Ok(Page::single(
            self.reviews.get(&id).cloned().unwrap_or_default(),
        ))
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const JOKER_ID: MovieId = 475557;

    fn movie(id: MovieId, title: &str, genre_ids: Vec<i64>) -> FixtureMovie {
        FixtureMovie {
            summary: SummaryRecord {
                id,
                title: title.to_string(),
                poster_path: None,
                backdrop_path: None,
                vote_average: 7.0,
                vote_count: 10,
                release_date: String::new(),
                overview: String::new(),
                genre_ids,
            },
            extras: DetailExtras::default(),
        }
    }

    #[tokio::test]
    async fn test_sample_trending_pages() {
        let catalog = FixtureCatalog::sample();
        assert_eq!(catalog.len(), 20);

        let first = catalog.trending(1).await.unwrap();
        assert_eq!(first.results.len(), 10);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_results, 20);

        let second = catalog.trending(2).await.unwrap();
        assert_eq!(second.results.len(), 10);

        let ids: HashSet<MovieId> = first
            .results
            .iter()
            .chain(second.results.iter())
            .map(|m| m.id)
            .collect();
        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    async fn test_pages_cover_catalog_without_gaps() {
        let movies: Vec<FixtureMovie> = (1..=37)
            .map(|id| movie(id, &format!("Movie {id}"), vec![]))
            .collect();
        let catalog = FixtureCatalog::new(movies);

        let first = catalog.trending(1).await.unwrap();
        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let page = catalog.trending(page).await.unwrap();
            assert!(page.results.len() <= crate::PAGE_SIZE);
            seen.extend(page.results.into_iter().map(|m| m.id));
        }

        assert_eq!(seen.len() as u32, first.total_results);
        assert_eq!(seen, (1..=37).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_trending_is_deterministic() {
        let catalog = FixtureCatalog::sample();
        let a = catalog.trending(2).await.unwrap();
        let b = catalog.trending(2).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_search_joker() {
        let catalog = FixtureCatalog::sample();
        let query = SearchQuery::new("joker").unwrap();

        let page = catalog.search(&query, 1).await.unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Joker");
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_search_titles_contain_query() {
        let catalog = FixtureCatalog::sample();
        for raw in ["the", "AVENGERS", "o"] {
            let query = SearchQuery::new(raw).unwrap();
            let first = catalog.search(&query, 1).await.unwrap();
            assert!(first.total_results > 0, "no results for {raw}");
            for page in 1..=first.total_pages {
                let page = catalog.search(&query, page).await.unwrap();
                for movie in page.results {
                    assert!(
                        movie.title.to_lowercase().contains(&raw.to_lowercase()),
                        "{} does not contain {raw}",
                        movie.title
                    );
                }
            }
        }
    }

    #[tokio::test]
    async fn test_search_no_match_is_empty_page() {
        let catalog = FixtureCatalog::sample();
        let query = SearchQuery::new("zzzz-no-such-title").unwrap();
        let page = catalog.search(&query, 1).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_results, 0);
    }

    #[tokio::test]
    async fn test_detail_resolves_genres() {
        let catalog = FixtureCatalog::sample();
        let detail = catalog.detail(JOKER_ID).await.unwrap().unwrap();
        assert_eq!(detail.title, "Joker");
        assert_eq!(detail.genres, vec!["Crime", "Thriller", "Drama"]);
        assert_eq!(detail.runtime, 122);
    }

    #[tokio::test]
    async fn test_detail_drops_unknown_genres() {
        let catalog = FixtureCatalog::new(vec![movie(1, "Oddity", vec![424242, 27])]);
        let detail = catalog.detail(1).await.unwrap().unwrap();
        assert_eq!(detail.genres, vec!["Horror"]);
    }

    #[tokio::test]
    async fn test_detail_is_idempotent() {
        let catalog = FixtureCatalog::sample();
        let a = catalog.detail(JOKER_ID).await.unwrap();
        let b = catalog.detail(JOKER_ID).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_detail_unknown_id() {
        let catalog = FixtureCatalog::sample();
        assert!(catalog.detail(-1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reviews_single_page() {
        let catalog = FixtureCatalog::sample();
        let reviews = catalog.reviews(JOKER_ID).await.unwrap();
        assert!(!reviews.is_empty());
        assert_eq!(reviews.page, 1);
        assert_eq!(reviews.total_pages, 1);
        assert_eq!(reviews.total_results as usize, reviews.results.len());

        let none = catalog.reviews(-1).await.unwrap();
        assert!(none.is_empty());
    }
}
