//! Backend-to-UI events and error modeling for the catalog controller.

use chrono::{DateTime, Local};
use shared::{
    domain::CourseRecord,
    error::{CatalogError, ErrorCode},
};

pub enum UiEvent {
    CatalogLoaded {
        source: String,
        records: Vec<CourseRecord>,
        loaded_at: DateTime<Local>,
    },
    LoadFailed {
        source: String,
        error: UiError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    NotFound,
    Transport,
    Parse,
    Unknown,
}

impl UiErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            UiErrorCategory::NotFound => "Catalog not found",
            UiErrorCategory::Transport => "Catalog unreachable",
            UiErrorCategory::Parse => "Catalog malformed",
            UiErrorCategory::Unknown => "Catalog error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn from_catalog_error(err: &CatalogError) -> Self {
        let category = match err.code {
            ErrorCode::NotFound => UiErrorCategory::NotFound,
            ErrorCode::Transport => UiErrorCategory::Transport,
            ErrorCode::Parse => UiErrorCategory::Parse,
            ErrorCode::Internal => UiErrorCategory::Unknown,
        };
        Self {
            category,
            message: err.message.clone(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Banner text: category label followed by the underlying message.
    pub fn banner_text(&self) -> String {
        format!("{}: {}", self.category.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_codes_to_categories() {
        let cases = [
            (ErrorCode::NotFound, UiErrorCategory::NotFound),
            (ErrorCode::Transport, UiErrorCategory::Transport),
            (ErrorCode::Parse, UiErrorCategory::Parse),
            (ErrorCode::Internal, UiErrorCategory::Unknown),
        ];
        for (code, expected) in cases {
            let err = UiError::from_catalog_error(&CatalogError::new(code, "boom"));
            assert_eq!(err.category(), expected);
        }
    }

    #[test]
    fn banner_text_leads_with_category() {
        let err = UiError::from_catalog_error(&CatalogError::new(
            ErrorCode::Parse,
            "catalog document must be a JSON array, found an object",
        ));
        assert_eq!(
            err.banner_text(),
            "Catalog malformed: catalog document must be a JSON array, found an object"
        );
    }
}
