use crate::{
    models::{Movie, PaginatedResponse},
    TmdbClient,
};

/// Parameters for the movie search endpoint.
#[derive(Debug, Clone)]
pub struct SearchMovieParams {
    pub query: String,
    pub page: u32,
    pub include_adult: bool,
}

impl SearchMovieParams {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            include_adult: false,
        }
    }
}

impl TmdbClient {
    /// Search movies by title.
    ///
    /// GET /search/movie
    pub async fn search_movie(
        &self,
        params: &SearchMovieParams,
    ) -> crate::Result<PaginatedResponse<Movie>> {
        let page = params.page.to_string();
        let include_adult = if params.include_adult { "true" } else { "false" };

        self.get(
            "/search/movie",
            &[
                ("query", params.query.as_str()),
                ("page", page.as_str()),
                ("include_adult", include_adult),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockito::{Matcher, Server};
    use parking_lot::RwLock;

    use super::*;

    #[tokio::test]
    async fn test_search_movie_encodes_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "the dark knight".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("include_adult".into(), "false".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
                    "page": 1,
                    "results": [{"id": 155, "title": "The Dark Knight", "poster_path": null,
                                 "backdrop_path": null, "release_date": "2008-07-16"}],
                    "total_pages": 1,
                    "total_results": 1
                }"#,
            )
            .create_async()
            .await;

        let client = TmdbClient::new(reqwest::Client::new(), Arc::new(RwLock::new("k".into())))
            .with_base_url(server.url());
        let response = client
            .search_movie(&SearchMovieParams::new("the dark knight", 1))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.total_results, 1);
        assert_eq!(response.results[0].id, 155);
        assert!(response.results[0].genre_ids.is_empty());
    }
}
