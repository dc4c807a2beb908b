//! Plain-text rendering of a catalog page.

use shared::{domain::Column, view::CatalogView};

const COLUMN_GAP: &str = "  ";

pub fn render_page(view: &CatalogView<'_>) -> String {
    let headers: Vec<String> = view.headers().iter().map(|header| header.text()).collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for record in &view.visible_rows {
        for (width, column) in widths.iter_mut().zip(Column::ALL) {
            *width = (*width).max(record.cell(column).chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for record in &view.visible_rows {
        push_row(
            &mut out,
            Column::ALL.into_iter().map(|column| record.cell(column)),
            &widths,
        );
    }

    if view.total_pages == 0 {
        out.push_str("No matching courses\n");
    } else {
        out.push_str(&format!(
            "Page {} of {} ({} matching)\n",
            view.current_page, view.total_pages, view.filtered_count
        ));
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join(COLUMN_GAP).trim_end());
    out.push('\n');
}
