//! TMDB catalog backend

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tmdb::{SearchMovieParams, TimeWindow, TmdbClient};

use crate::{
    genres, models::saturating_u32, CatalogError, CatalogProvider, DetailRecord, MovieId, Page,
    Review, SearchQuery, SummaryRecord, PAGE_SIZE,
};

/// Results per upstream page.
const UPSTREAM_PAGE_SIZE: usize = 20;

/// Local pages served by one upstream page.
const PAGES_PER_UPSTREAM: u32 = (UPSTREAM_PAGE_SIZE / PAGE_SIZE) as u32;

/// TMDB-backed catalog.
///
/// TMDB pages hold 20 movies; each local page of [`PAGE_SIZE`] is cut from
/// the matching half of an upstream page.
pub struct TmdbCatalog {
    client: Arc<TmdbClient>,
    window: TimeWindow,
}

impl TmdbCatalog {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self {
            client,
            window: TimeWindow::Week,
        }
    }

    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }
}

#[async_trait]
impl CatalogProvider for TmdbCatalog {
    async fn trending(&self, page: u32) -> Result<Page<SummaryRecord>, CatalogError> {
        let (upstream, half) = upstream_position(page)?;
        let response = self.client.trending_movies(self.window, upstream).await?;
        localize(response, page, half)
    }

    async fn search(
        &self,
        query: &SearchQuery,
        page: u32,
    ) -> Result<Page<SummaryRecord>, CatalogError> {
        let (upstream, half) = upstream_position(page)?;
        let params = SearchMovieParams::new(query.as_str(), upstream);
        let response = self.client.search_movie(&params).await?;
        localize(response, page, half)
    }

    async fn detail(&self, id: MovieId) -> Result<Option<DetailRecord>, CatalogError> {
        match self.client.get_movie(id).await {
            Ok(movie) => Ok(Some(DetailRecord::from(movie))),
            Err(e) if e.is_not_found() => {
                tracing::debug!("TMDB movie {} not found", id);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn reviews(&self, id: MovieId) -> Result<Page<Review>, CatalogError> {
        let first = match self.client.get_movie_reviews(id, 1).await {
            Ok(first) => first,
            Err(e) if e.is_not_found() => {
                tracing::debug!("TMDB movie {} not found, no reviews", id);
                return Ok(Page::single(Vec::new()));
            }
            Err(e) => return Err(e.into()),
        };
        let last_page = u32::try_from(first.total_pages.max(1)).unwrap_or(u32::MAX);
        let mut raw = first.results;

        for page in 2..=last_page {
            let next = self.client.get_movie_reviews(id, page).await?;
            raw.extend(next.results);
        }

        let reviews = raw
            .into_iter()
            .filter_map(|review| {
                let created_at = match DateTime::parse_from_rfc3339(&review.created_at) {
                    Ok(at) => at.with_timezone(&Utc),
                    Err(e) => {
                        tracing::warn!(
                            "Skipping review {} with bad timestamp '{}': {}",
                            review.id,
                            review.created_at,
                            e
                        );
                        return None;
                    }
                };
                Some(Review {
                    id: review.id,
                    author: review.author,
                    content: review.content,
                    created_at,
                    rating: review.author_details.rating,
                })
            })
            .collect();

        Ok(Page::single(reviews))
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

/// Map a local page number to (upstream page, half within it).
fn upstream_position(page: u32) -> Result<(u32, usize), CatalogError> {
    if page == 0 {
        return Err(CatalogError::PageOutOfRange {
            page,
            total_pages: 0,
        });
    }
    let upstream = (page - 1) / PAGES_PER_UPSTREAM + 1;
    let half = ((page - 1) % PAGES_PER_UPSTREAM) as usize;
    Ok((upstream, half))
}

fn localize(
    response: tmdb::PaginatedResponse<tmdb::Movie>,
    page: u32,
    half: usize,
) -> Result<Page<SummaryRecord>, CatalogError> {
    let total_results = u32::try_from(response.total_results.max(0)).unwrap_or(u32::MAX);
    let upstream_pages = u32::try_from(response.total_pages.max(0)).unwrap_or(u32::MAX);
    let total_pages = saturating_u32((total_results as usize).div_ceil(PAGE_SIZE))
        .min(upstream_pages.saturating_mul(PAGES_PER_UPSTREAM));

    if page > total_pages.max(1) {
        return Err(CatalogError::PageOutOfRange { page, total_pages });
    }

    let results = response
        .results
        .into_iter()
        .skip(half * PAGE_SIZE)
        .take(PAGE_SIZE)
        .map(SummaryRecord::from)
        .collect();

    Ok(Page {
        results,
        page,
        total_pages,
        total_results,
    })
}

impl From<tmdb::Movie> for SummaryRecord {
    fn from(movie: tmdb::Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            poster_path: movie.poster_path,
            backdrop_path: movie.backdrop_path,
            vote_average: movie.vote_average,
            vote_count: u64::try_from(movie.vote_count).unwrap_or(0),
            release_date: movie.release_date.unwrap_or_default(),
            overview: movie.overview,
            genre_ids: movie.genre_ids,
        }
    }
}

impl From<tmdb::MovieDetail> for DetailRecord {
    fn from(movie: tmdb::MovieDetail) -> Self {
        let genre_ids: Vec<i64> = movie.genres.iter().map(|genre| genre.id).collect();
        Self {
            id: movie.id,
            title: movie.title,
            poster_path: movie.poster_path,
            backdrop_path: movie.backdrop_path,
            vote_average: movie.vote_average,
            vote_count: u64::try_from(movie.vote_count).unwrap_or(0),
            release_date: movie.release_date.unwrap_or_default(),
            overview: movie.overview,
            genres: genres::genre_names(&genre_ids),
            runtime: movie
                .runtime
                .and_then(|minutes| u32::try_from(minutes).ok())
                .unwrap_or(0),
            status: movie.status.unwrap_or_default(),
            tagline: movie.tagline.unwrap_or_default(),
            revenue: movie
                .revenue
                .and_then(|amount| u64::try_from(amount).ok())
                .unwrap_or(0),
            budget: movie
                .budget
                .and_then(|amount| u64::try_from(amount).ok())
                .unwrap_or(0),
        }
    }
}
