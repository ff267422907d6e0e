use serde::{Deserialize, Serialize};

/// Movie as it appears in list endpoints (trending, search).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub video: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub page: i64,
    pub results: Vec<T>,
    pub total_pages: i64,
    pub total_results: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

// ============ Movie Details ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub adult: bool,
    pub runtime: Option<i64>,
    pub status: Option<String>,
    pub tagline: Option<String>,
    pub budget: Option<i64>,
    pub revenue: Option<i64>,
    pub imdb_id: Option<String>,
    pub homepage: Option<String>,
}

// ============ Reviews ============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorDetails {
    pub name: Option<String>,
    pub username: Option<String>,
    pub avatar_path: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub author_details: AuthorDetails,
    pub content: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub url: Option<String>,
}

/// `/movie/{id}/reviews` wraps the usual pagination fields with the movie id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsResponse {
    pub id: i64,
    pub page: i64,
    pub results: Vec<Review>,
    pub total_pages: i64,
    pub total_results: i64,
}
