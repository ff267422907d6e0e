//! Query-string synchronization for the listing view.

use url::Url;

/// Query-string key holding the active search.
pub const QUERY_KEY: &str = "query";

/// Externally visible navigation state (address bar, deep link, ...).
pub trait Navigator {
    /// Current search query, `None` when absent or blank.
    fn query(&self) -> Option<String>;

    /// Store the query, or remove it when `None`.
    fn set_query(&mut self, query: Option<&str>);
}

/// Navigator backed by a URL.
///
/// Other query pairs are preserved; the `?` is dropped once no pairs remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlNavigator {
    url: Url,
}

impl UrlNavigator {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Url::parse(url).map(Self::new)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Navigator for UrlNavigator {
    fn query(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == QUERY_KEY)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn set_query(&mut self, query: Option<&str>) {
        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(key, _)| key != QUERY_KEY)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let query = query.map(str::trim).filter(|q| !q.is_empty());

        if kept.is_empty() && query.is_none() {
            self.url.set_query(None);
            return;
        }

        let mut pairs = self.url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        if let Some(query) = query {
            pairs.append_pair(QUERY_KEY, query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_query() {
        let nav = UrlNavigator::parse("https://movies.example/?query=the%20matrix").unwrap();
        assert_eq!(nav.query().as_deref(), Some("the matrix"));

        let nav = UrlNavigator::parse("https://movies.example/?query=").unwrap();
        assert_eq!(nav.query(), None);

        let nav = UrlNavigator::parse("https://movies.example/").unwrap();
        assert_eq!(nav.query(), None);
    }

    #[test]
    fn test_set_and_clear_query() {
        let mut nav = UrlNavigator::parse("https://movies.example/").unwrap();

        nav.set_query(Some("joker"));
        assert_eq!(nav.url().as_str(), "https://movies.example/?query=joker");

        nav.set_query(Some("  "));
        assert_eq!(nav.url().as_str(), "https://movies.example/");

        nav.set_query(Some("dark knight"));
        nav.set_query(None);
        assert_eq!(nav.url().query(), None);
    }

    #[test]
    fn test_keeps_other_pairs() {
        let mut nav = UrlNavigator::parse("https://movies.example/?lang=en&query=old").unwrap();

        nav.set_query(Some("new"));
        assert_eq!(nav.url().query(), Some("lang=en&query=new"));

        nav.set_query(None);
        assert_eq!(nav.url().query(), Some("lang=en"));
    }
}
