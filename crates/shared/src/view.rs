//! Presentation surface handed from the view-state engine to a renderer.

use crate::domain::{Column, CourseRecord, DisplayMode, SortSpec};

/// Everything a renderer needs to draw one page of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    pub visible_rows: Vec<&'a CourseRecord>,
    pub total_pages: usize,
    pub current_page: usize,
    pub filtered_count: usize,
    /// Zero-based index of `visible_rows[0]` within the sorted-filtered sequence.
    pub first_row_index: usize,
    pub sort: Option<SortSpec>,
    pub display_mode: DisplayMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    pub column: Column,
    pub glyph: Option<char>,
}

impl HeaderState {
    pub fn text(&self) -> String {
        match self.glyph {
            Some(glyph) => format!("{} {glyph}", self.column.label()),
            None => self.column.label().to_string(),
        }
    }
}

impl<'a> CatalogView<'a> {
    pub fn empty(display_mode: DisplayMode) -> Self {
        Self {
            visible_rows: Vec::new(),
            total_pages: 0,
            current_page: 1,
            filtered_count: 0,
            first_row_index: 0,
            sort: None,
            display_mode,
        }
    }

    pub fn page_buttons(&self) -> impl Iterator<Item = PageButton> + '_ {
        (1..=self.total_pages).map(move |number| PageButton {
            number,
            active: number == self.current_page,
        })
    }

    pub fn header(&self, column: Column) -> HeaderState {
        let glyph = self
            .sort
            .filter(|sort| sort.column == column)
            .map(|sort| sort.direction.glyph());
        HeaderState { column, glyph }
    }

    pub fn headers(&self) -> Vec<HeaderState> {
        Column::ALL
            .into_iter()
            .map(|column| self.header(column))
            .collect()
    }

    /// "Showing 101–200 of 250 courses", or `None` when nothing is visible.
    pub fn range_label(&self) -> Option<String> {
        if self.visible_rows.is_empty() {
            return None;
        }
        let first = self.first_row_index + 1;
        let last = self.first_row_index + self.visible_rows.len();
        Some(format!(
            "Showing {first}–{last} of {} courses",
            self.filtered_count
        ))
    }
}
