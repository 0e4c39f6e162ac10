//! Core library surface for the glossary browser TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as headless tests can reuse the same pieces: the
//! data loader, the domain model, the pure filter/sort/paginate pipeline,
//! and the interactive front end.

pub mod data;
pub mod models;
pub mod pipeline;
pub mod ui;

/// Convenience re-exports for the data layer, typically used by `main.rs`
/// to bring up the dataset before handing control to the UI.
pub use data::{entries_from_json, load_or_seed_entries, DataError};

/// The domain type every layer manipulates.
pub use models::Entry;

/// The pipeline pieces embedders and tests reach for most often.
pub use pipeline::{visible_page, BrowseState, CategoryFilter, PageView, SortKey};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
