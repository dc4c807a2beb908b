//! Where the raw course list comes from.

use std::{fmt, path::PathBuf};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use shared::{
    domain::CourseRecord,
    error::{CatalogError, ErrorCode},
};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to read catalog file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch catalog from {url}: {source}")]
    Http {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("catalog document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog document must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },
}

impl DataSourceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DataSourceError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorCode::NotFound
            }
            DataSourceError::Io { .. } => ErrorCode::Transport,
            DataSourceError::Http { source, .. }
                if source.status() == Some(StatusCode::NOT_FOUND) =>
            {
                ErrorCode::NotFound
            }
            DataSourceError::Http { .. } => ErrorCode::Transport,
            DataSourceError::Parse(_) | DataSourceError::NotAnArray { .. } => ErrorCode::Parse,
        }
    }

    pub fn to_catalog_error(&self) -> CatalogError {
        CatalogError::new(self.code(), self.to_string())
    }
}

/// One-shot supplier of the raw course list.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable origin, used in logs and the status line.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Vec<CourseRecord>, DataSourceError>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<CourseRecord>, DataSourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DataSourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_catalog(&bytes)
    }
}

pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn load(&self) -> Result<Vec<CourseRecord>, DataSourceError> {
        let http_err = |source: reqwest::Error| DataSourceError::Http {
            url: self.url.clone(),
            source,
        };
        let bytes = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?
            .bytes()
            .await
            .map_err(http_err)?;
        parse_catalog(&bytes)
    }
}

/// Records already in memory; handy for tests and embedding.
pub struct StaticSource {
    records: Vec<CourseRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }

    async fn load(&self) -> Result<Vec<CourseRecord>, DataSourceError> {
        Ok(self.records.clone())
    }
}

/// A configured catalog location: an `http(s)` URL or a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(Url),
}

impl CatalogSource {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => CatalogSource::Http(url),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(CatalogSource::File)
                .unwrap_or_else(|()| CatalogSource::File(PathBuf::from(raw))),
            _ => CatalogSource::File(PathBuf::from(raw)),
        }
    }

    pub fn open(&self) -> Box<dyn DataSource> {
        match self {
            CatalogSource::File(path) => Box::new(FileSource::new(path.clone())),
            CatalogSource::Http(url) => Box::new(HttpSource::new(url.clone())),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Http(url) => write!(f, "{url}"),
        }
    }
}

/// Decodes a catalog document. The top level must be an array; entries
/// that are not objects become empty records, which the title filter
/// then excludes.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<CourseRecord>, DataSourceError> {
    let document: Value = serde_json::from_slice(bytes)?;
    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(DataSourceError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let record = match entry {
            Value::Object(_) => serde_json::from_value(entry)?,
            _ => CourseRecord::default(),
        };
        records.push(record);
    }
    Ok(records)
}

/// Runs the one-time load and logs its outcome.
pub async fn load_catalog(source: &dyn DataSource) -> Result<Vec<CourseRecord>, DataSourceError> {
    let origin = source.describe();
    match source.load().await {
        Ok(records) => {
            info!(source = %origin, records = records.len(), "catalog loaded");
            Ok(records)
        }
        Err(err) => {
            warn!(source = %origin, error = %err, "catalog load failed");
            Err(err)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
