use crate::{
    models::{MovieDetail, ReviewsResponse},
    TmdbClient,
};

impl TmdbClient {
    /// Get movie details
    ///
    /// GET /movie/{movie_id}
    pub async fn get_movie(&self, movie_id: i64) -> crate::Result<MovieDetail> {
        self.get(&format!("/movie/{}", movie_id), &[]).await
    }

    /// Get one page of user reviews for a movie.
    ///
    /// GET /movie/{movie_id}/reviews
    pub async fn get_movie_reviews(
        &self,
        movie_id: i64,
        page: u32,
    ) -> crate::Result<ReviewsResponse> {
        let page = page.to_string();
        self.get(
            &format!("/movie/{}/reviews", movie_id),
            &[("page", page.as_str())],
        )
        .await
    }
}
