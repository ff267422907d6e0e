mod fixture_adapter;
mod tmdb_adapter;

pub use fixture_adapter::{FixtureCatalog, FixtureMovie};
pub use tmdb_adapter::TmdbCatalog;
