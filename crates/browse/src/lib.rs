//! View state for browsing the movie catalog
//!
//! Two controllers sit on top of [`catalog::Catalog`]:
//!
//! - [`ListingController`]: trending and search listings with incremental
//!   "load more" pagination, synced to a [`Navigator`] query string.
//! - [`DetailController`]: one movie's detail and its reviews, loaded
//!   concurrently and rendered independently.
//!
//! Every fetch is tagged when it is issued. A result that arrives after the
//! view has moved on is dropped and reported as [`Resolution::Discarded`].

mod detail;
mod listing;
mod navigation;
mod state;

pub use detail::{DetailController, DetailError, DetailStatus, DetailTicket};
pub use listing::{
    FetchRequest, ListingController, ListingMode, ListingStatus, ListingView, EMPTY_MESSAGE,
    FAILURE_MESSAGE,
};
pub use navigation::{Navigator, UrlNavigator, QUERY_KEY};
pub use state::Resolution;
