//! UI layer for the catalog viewer: app shell and themes.

pub mod app;
pub mod theme;

pub use app::{CatalogApp, StartupConfig};
