use thiserror::Error;

/// Errors raised by catalog backends.
///
/// These never reach the view controllers: [`crate::Catalog`] logs them,
/// reports them to the notifier and hands back a sentinel instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TMDB error: {0}")]
    Tmdb(#[from] tmdb::TmdbError),

    #[error("Page {page} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page: u32, total_pages: u32 },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CatalogError {
    /// True when the backend reported the requested record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Tmdb(e) if e.is_not_found())
    }
}

/// Errors produced while reading [`crate::CatalogConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TMDB_API_KEY is required for the remote backend")]
    MissingApiKey,

    #[error("Unknown catalog backend '{0}' (expected 'remote' or 'fixture')")]
    InvalidBackend(String),

    #[error("Invalid request timeout '{0}'")]
    InvalidTimeout(String),
}
