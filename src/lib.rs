//! Browsekit - an incremental search, filter, sort and pagination controller
//!
//! This library drives a searchable list over two differently shaped
//! sources: the items a caller owns right now, and a possibly slow catalog
//! of every definition those items could be instances of. It is written for
//! immediate-mode UIs and recomputes only when something asked it to, once
//! per frame, during the host's measurement pass.
//!
//! # Modules
//!
//! - [`browse`] - the [`Browser`](browse::Browser) controller
//! - [`search`] - pure query matching and ordering
//! - [`paging`] - pure page arithmetic
//! - [`catalog`] - catalog polling and snapshot caching
//! - [`disclosure`] - single-open expand/collapse state per scope
//! - [`ui`] - the [`Frontend`](ui::Frontend) trait hosts implement, plus a
//!   headless recorder
//! - [`config`] - explicit browser configuration

pub mod browse;
pub mod catalog;
pub mod config;
pub mod disclosure;
pub mod paging;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use browse::{Browser, Projections, RenderOptions, RowCallbacks, RowView};
pub use catalog::{CatalogError, CatalogResult};
pub use config::BrowserConfig;
