use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Transport,
    Parse,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogError {
    pub code: ErrorCode,
    pub message: String,
}

impl CatalogError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column '{input}' (expected one of: {expected})")]
pub struct ColumnParseError {
    pub input: String,
    pub expected: String,
}

impl ColumnParseError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected: Column::ALL
                .iter()
                .map(|column| column.json_key())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
