use std::fmt;

use crate::{
    models::{Movie, PaginatedResponse},
    TmdbClient,
};

/// Window for the trending endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeWindow::Day => write!(f, "day"),
            TimeWindow::Week => write!(f, "week"),
        }
    }
}

impl TmdbClient {
    /// Get trending movies for the given window.
    ///
    /// GET /trending/movie/{time_window}
    pub async fn trending_movies(
        &self,
        window: TimeWindow,
        page: u32,
    ) -> crate::Result<PaginatedResponse<Movie>> {
        let page = page.to_string();
        self.get(
            &format!("/trending/movie/{}", window),
            &[("page", page.as_str())],
        )
        .await
    }
}
