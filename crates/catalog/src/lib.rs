//! Movie catalog access layer
//!
//! This crate provides a single provider interface over two interchangeable
//! backends, plus the failure-catching [`Catalog`] used by the views.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   Catalog                    │
//! │  errors -> tracing + Notifier + None/Failed  │
//! └──────────────────────────────────────────────┘
//!                        │
//! ┌──────────────────────────────────────────────┐
//! │            CatalogProvider trait             │
//! │  trending / search / detail / reviews        │
//! └──────────────────────────────────────────────┘
//!              △                      △
//!     ┌────────┴───────┐     ┌────────┴───────┐
//!     │ FixtureCatalog │     │  TmdbCatalog   │
//!     └────────────────┘     └────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use catalog::{Catalog, CatalogConfig, TracingNotifier};
//! use std::sync::Arc;
//!
//! let config = CatalogConfig::from_env()?;
//! let catalog = Catalog::from_config(&config, Arc::new(TracingNotifier))?;
//! let trending = catalog.list_trending(1).await;
//! ```

mod adapters;
mod config;
mod error;
mod fixtures;
mod provider;
mod service;

pub mod format;
pub mod genres;
pub mod images;
pub mod models;
pub mod notifier;

pub use adapters::{FixtureCatalog, FixtureMovie, TmdbCatalog};
pub use config::{Backend, CatalogConfig};
pub use error::{CatalogError, ConfigError};
pub use images::{BackdropSize, ImageResolver, PosterSize};
pub use models::{
    DetailExtras, DetailRecord, MovieId, Page, Review, SearchQuery, SummaryRecord, PAGE_SIZE,
};
pub use notifier::{CollectingNotifier, Notifier, TracingNotifier};
pub use provider::CatalogProvider;
pub use service::{Catalog, DetailLookup};
