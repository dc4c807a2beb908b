//! Filter, sort and paginate a loaded course list.

use std::cmp::Ordering;

use shared::{
    domain::{Column, CourseRecord, DisplayMode, SortDirection, SortSpec},
    view::CatalogView,
};
use tracing::debug;

use crate::numeric::numeric_value;

pub const PAGE_SIZE: usize = 100;

/// Session view state. Only [`ViewStateEngine`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    filter_text: String,
    sort: Option<SortSpec>,
    current_page: usize,
    display_mode: DisplayMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            sort: None,
            current_page: 1,
            display_mode: DisplayMode::Light,
        }
    }
}

impl ViewState {
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewStateEngine {
    records: Vec<CourseRecord>,
    state: ViewState,
}

impl ViewStateEngine {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self {
            records,
            state: ViewState::default(),
        }
    }

    /// Installs the records of a completed load, keeping filter, sort and
    /// display mode and pulling the current page back into range.
    pub fn load_records(&mut self, records: Vec<CourseRecord>) {
        debug!(records = records.len(), "installing catalog records");
        self.records = records;
        let page = self.state.current_page;
        self.set_page(page);
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.state.filter_text = text.into();
        self.state.current_page = 1;
    }

    /// Header click: reselecting the ascending column flips it to
    /// descending, anything else sorts `column` ascending.
    pub fn set_sort(&mut self, column: Column, numeric: bool) {
        let direction = match self.state.sort {
            Some(current)
                if current.column == column && current.direction == SortDirection::Ascending =>
            {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.state.sort = Some(SortSpec {
            column,
            direction,
            numeric,
        });
    }

    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.state.current_page = page.clamp(1, last);
    }

    pub fn toggle_display_mode(&mut self) {
        self.state.display_mode = self.state.display_mode.toggled();
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.state.display_mode
    }

    pub fn filtered_count(&self) -> usize {
        let needle = self.state.filter_text.to_lowercase();
        self.records
            .iter()
            .filter(|record| matches_filter(record, &needle))
            .count()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(PAGE_SIZE)
    }

    pub fn compute_view(&self) -> CatalogView<'_> {
        compute_view(&self.records, &self.state)
    }
}

/// Pure view computation: filter by title, stable sort, then slice one page.
pub fn compute_view<'a>(records: &'a [CourseRecord], state: &ViewState) -> CatalogView<'a> {
    let needle = state.filter_text.to_lowercase();
    let mut rows: Vec<&CourseRecord> = records
        .iter()
        .filter(|record| matches_filter(record, &needle))
        .collect();

    if let Some(sort) = state.sort {
        sort_rows(&mut rows, sort);
    }

    let filtered_count = rows.len();
    let total_pages = filtered_count.div_ceil(PAGE_SIZE);
    let start = state
        .current_page
        .saturating_sub(1)
        .saturating_mul(PAGE_SIZE)
        .min(filtered_count);
    let end = start.saturating_add(PAGE_SIZE).min(filtered_count);
    let visible_rows = rows[start..end].to_vec();

    CatalogView {
        visible_rows,
        total_pages,
        current_page: state.current_page,
        filtered_count,
        first_row_index: start,
        sort: state.sort,
        display_mode: state.display_mode,
    }
}

/// `needle` must already be lowercase. Records without a title never match.
pub fn matches_filter(record: &CourseRecord, needle: &str) -> bool {
    record
        .title
        .as_deref()
        .is_some_and(|title| title.to_lowercase().contains(needle))
}

fn sort_rows(rows: &mut [&CourseRecord], sort: SortSpec) {
    if sort.numeric {
        sort_pinning_incomparable(
            rows,
            |record| Some(numeric_value(record.field(sort.column))).filter(|value| !value.is_nan()),
            |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal),
            sort.direction,
        );
    } else {
        sort_pinning_incomparable(
            rows,
            |record| record.field(sort.column),
            |a, b| a.cmp(b),
            sort.direction,
        );
    }
}

// Rows whose key is incomparable (NaN or absent) keep their index; the
// remaining rows are stably sorted into the free slots.
fn sort_pinning_incomparable<'r, K>(
    rows: &mut [&'r CourseRecord],
    key_of: impl Fn(&'r CourseRecord) -> Option<K>,
    compare: impl Fn(&K, &K) -> Ordering,
    direction: SortDirection,
) {
    let mut slots = Vec::with_capacity(rows.len());
    let mut keyed = Vec::with_capacity(rows.len());
    for (index, record) in rows.iter().copied().enumerate() {
        if let Some(key) = key_of(record) {
            slots.push(index);
            keyed.push((key, record));
        }
    }

    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Ascending => compare(a, b),
        SortDirection::Descending => compare(b, a),
    });

    for (slot, (_, record)) in slots.into_iter().zip(keyed) {
        rows[slot] = record;
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
