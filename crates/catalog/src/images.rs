//! Poster and backdrop URL resolution.

use std::fmt;

use url::Url;

/// TMDB image base URL
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Shown when a movie has no poster.
pub const PLACEHOLDER_POSTER: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PosterSize {
    W92,
    W154,
    W185,
    #[default]
    W342,
    W500,
    W780,
    Original,
}

impl fmt::Display for PosterSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        };
        f.write_str(size)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackdropSize {
    W300,
    W780,
    #[default]
    W1280,
    Original,
}

impl fmt::Display for BackdropSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        };
        f.write_str(size)
    }
}

/// Turns image references into URLs.
///
/// A reference is either a path relative to the image host (`/abc.jpg`),
/// an absolute URL, or missing.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a reference at the given size variant.
    ///
    /// Absolute http(s) URLs pass through untouched; blank references give `None`.
    pub fn resolve(&self, path: Option<&str>, size: impl fmt::Display) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;

        if let Ok(url) = Url::parse(path) {
            if matches!(url.scheme(), "http" | "https") {
                return Some(path.to_string());
            }
        }

        let path = path.trim_start_matches('/');
        Some(format!("{}/{}/{}", self.base_url, size, path))
    }

    /// Poster URL, falling back to the placeholder asset.
    pub fn poster(&self, path: Option<&str>, size: PosterSize) -> String {
        self.resolve(path, size)
            .unwrap_or_else(|| PLACEHOLDER_POSTER.to_string())
    }

    /// Backdrop URL; a missing backdrop is simply not shown.
    pub fn backdrop(&self, path: Option<&str>, size: BackdropSize) -> Option<String> {
        self.resolve(path, size)
    }
}
