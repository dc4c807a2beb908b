//! Maps table interactions onto view-state mutators.

use catalog_core::ViewStateEngine;
use shared::domain::Column;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    FilterChanged(String),
    HeaderClicked(Column),
    PageSelected(usize),
    ToggleDisplayMode,
}

pub fn apply(engine: &mut ViewStateEngine, action: UiAction) {
    match action {
        UiAction::FilterChanged(text) => engine.set_filter_text(text),
        UiAction::HeaderClicked(column) => engine.set_sort(column, column.is_numeric()),
        UiAction::PageSelected(page) => engine.set_page(page),
        UiAction::ToggleDisplayMode => engine.toggle_display_mode(),
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::{CourseRecord, DisplayMode, SortDirection};

    use super::*;

    fn engine_with(count: usize) -> ViewStateEngine {
        ViewStateEngine::new(
            (0..count)
                .map(|i| CourseRecord {
                    code: Some(format!("{}", 300 - i)),
                    title: Some(format!("Course {i}")),
                    ..CourseRecord::default()
                })
                .collect(),
        )
    }

    #[test]
    fn header_click_uses_the_column_numeric_flag() {
        let mut engine = engine_with(3);
        apply(&mut engine, UiAction::HeaderClicked(Column::Code));
        let sort = engine.state().sort().expect("sort");
        assert!(sort.numeric);

        apply(&mut engine, UiAction::HeaderClicked(Column::Room));
        assert!(!engine.state().sort().expect("sort").numeric);
    }

    #[test]
    fn repeated_header_clicks_cycle_direction() {
        let mut engine = engine_with(3);
        let mut directions = Vec::new();
        for _ in 0..3 {
            apply(&mut engine, UiAction::HeaderClicked(Column::Title));
            directions.push(engine.state().sort().expect("sort").direction);
        }
        assert_eq!(
            directions,
            vec![
                SortDirection::Ascending,
                SortDirection::Descending,
                SortDirection::Ascending
            ]
        );
    }

    #[test]
    fn typing_in_search_returns_to_first_page() {
        let mut engine = engine_with(250);
        apply(&mut engine, UiAction::PageSelected(3));
        assert_eq!(engine.state().current_page(), 3);

        apply(&mut engine, UiAction::FilterChanged("course 2".into()));
        assert_eq!(engine.state().current_page(), 1);
        assert_eq!(engine.state().filter_text(), "course 2");
    }

    #[test]
    fn toggle_action_flips_display_mode() {
        let mut engine = engine_with(1);
        apply(&mut engine, UiAction::ToggleDisplayMode);
        assert_eq!(engine.display_mode(), DisplayMode::Dark);
    }
}
