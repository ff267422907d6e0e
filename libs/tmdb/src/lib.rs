mod client;
mod error;
mod movie;
mod search;
mod trending;
pub mod models;

pub use client::{ApiKey, TmdbClient, DEFAULT_BASE_URL};
pub use error::TmdbError;
pub use models::{
    AuthorDetails, Genre, Movie, MovieDetail, PaginatedResponse, Review, ReviewsResponse,
};
pub use search::SearchMovieParams;
pub use trending::TimeWindow;

pub type Result<T> = std::result::Result<T, TmdbError>;
