//! View-state engine and data loading for the course catalog.

pub mod config;
pub mod engine;
pub mod numeric;
pub mod source;

pub use config::{load_settings, load_settings_with, Settings};
pub use engine::{compute_view, ViewState, ViewStateEngine, PAGE_SIZE};
pub use source::{
    load_catalog, parse_catalog, CatalogSource, DataSource, DataSourceError, FileSource,
    HttpSource, StaticSource,
};
