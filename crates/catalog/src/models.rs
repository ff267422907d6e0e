//! Catalog data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{genres, CatalogError};

/// Number of summary records per listing page.
pub const PAGE_SIZE: usize = 10;

/// Movie identifier, as used by the catalog backend.
pub type MovieId = i64;

/// Movie as shown in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: MovieId,
    pub title: String,
    /// Poster reference (relative path or absolute URL)
    pub poster_path: Option<String>,
    /// Backdrop reference (relative path or absolute URL)
    pub backdrop_path: Option<String>,
    /// Average rating (0-10)
    pub vote_average: f64,
    pub vote_count: u64,
    /// Release date (YYYY-MM-DD), empty when unknown
    pub release_date: String,
    pub overview: String,
    pub genre_ids: Vec<i64>,
}

impl SummaryRecord {
    pub fn release_year(&self) -> Option<i32> {
        extract_year(&self.release_date)
    }
}

/// Detail-only fields, carried alongside a summary by the fixture backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailExtras {
    /// Runtime in minutes
    pub runtime: u32,
    pub status: String,
    pub tagline: String,
    pub revenue: u64,
    pub budget: u64,
}

/// Full movie detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f64,
    pub vote_count: u64,
    pub release_date: String,
    pub overview: String,
    /// Genre names resolved from the genre table
    pub genres: Vec<String>,
    /// Runtime in minutes
    pub runtime: u32,
    pub status: String,
    pub tagline: String,
    pub revenue: u64,
    pub budget: u64,
}

impl DetailRecord {
    /// Build a detail from its summary, expanding genre ids through the genre table.
    pub fn from_summary(summary: SummaryRecord, extras: DetailExtras) -> Self {
        Self {
            genres: genres::genre_names(&summary.genre_ids),
            id: summary.id,
            title: summary.title,
            poster_path: summary.poster_path,
            backdrop_path: summary.backdrop_path,
            vote_average: summary.vote_average,
            vote_count: summary.vote_count,
            release_date: summary.release_date,
            overview: summary.overview,
            runtime: extras.runtime,
            status: extras.status,
            tagline: extras.tagline,
            revenue: extras.revenue,
            budget: extras.budget,
        }
    }

    pub fn release_year(&self) -> Option<i32> {
        extract_year(&self.release_date)
    }
}

/// User review of a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Author rating (0-10), if given
    pub rating: Option<f64>,
}

/// One numbered slice of an ordered result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    /// 1-based page number
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

impl<T: Clone> Page<T> {
    /// Slice `items` into the requested page of [`PAGE_SIZE`] records.
    ///
    /// An empty set still has a page 1 (with `total_pages == 0`); any other
    /// page outside `1..=total_pages` is rejected.
    pub fn paginate(items: &[T], page: u32) -> Result<Self, CatalogError> {
        let total_results = saturating_u32(items.len());
        let total_pages = saturating_u32(items.len().div_ceil(PAGE_SIZE));

        if page == 0 || page > total_pages.max(1) {
            return Err(CatalogError::PageOutOfRange { page, total_pages });
        }

        let start = (page as usize - 1) * PAGE_SIZE;
        let results = items.iter().skip(start).take(PAGE_SIZE).cloned().collect();

        Ok(Self {
            results,
            page,
            total_pages,
            total_results,
        })
    }
}

impl<T> Page<T> {
    /// Wrap a complete result set as a single page.
    pub fn single(results: Vec<T>) -> Self {
        let total_results = saturating_u32(results.len());
        Self {
            results,
            page: 1,
            total_pages: u32::from(total_results > 0),
            total_results,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}

/// A trimmed, non-empty title query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    needle: String,
}

impl SearchQuery {
    /// Returns `None` when the query is blank after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            needle: text.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Case-insensitive substring match against a title.
    pub fn matches(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.needle)
    }
}

/// Extract year from date string (YYYY-MM-DD)
pub fn extract_year(date: &str) -> Option<i32> {
    date.split('-').next().and_then(|y| y.parse().ok())
}

pub(crate) fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
