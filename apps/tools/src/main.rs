use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog_core::{load_catalog, load_settings, ViewStateEngine};
use clap::{Parser, Subcommand};
use shared::domain::{Column, CourseRecord};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod check;
mod render;

use check::CatalogReport;

#[derive(Parser, Debug)]
struct Cli {
    /// Catalog location: a path or an http(s) URL. Overrides catalog.toml.
    #[arg(long)]
    source: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of the catalog.
    View {
        #[arg(long, default_value = "")]
        filter: String,
        /// Header click; repeat the same column to sort descending.
        #[arg(long = "sort", value_name = "COLUMN")]
        sort: Vec<Column>,
        /// Compare sort values as text even on numeric columns.
        #[arg(long)]
        text: bool,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Report records that will not display or sort as expected.
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref());
    if let Some(source) = cli.source {
        settings.source = source;
    }
    let source = settings.catalog_source();
    let records = load_catalog(source.open().as_ref())
        .await
        .with_context(|| format!("loading catalog from {source}"))?;
    info!(source = %source, records = records.len(), "catalog loaded");

    match cli.command {
        Command::View {
            filter,
            sort,
            text,
            page,
        } => {
            let engine = build_view(records, &filter, &sort, text, page);
            print!("{}", render::render_page(&engine.compute_view()));
        }
        Command::Check => {
            let report = CatalogReport::from_records(&records);
            debug!(clean = report.is_clean(), "catalog checked");
            print!("{report}");
            if !report.is_clean() {
                std::process::exit(2);
            }
        }
    }

    Ok(())
}

fn build_view(
    records: Vec<CourseRecord>,
    filter: &str,
    sort: &[Column],
    force_text: bool,
    page: usize,
) -> ViewStateEngine {
    debug!(filter, sorts = sort.len(), force_text, page, "building view");
    let mut engine = ViewStateEngine::new(records);
    engine.set_filter_text(filter);
    for column in sort {
        engine.set_sort(*column, column.is_numeric() && !force_text);
    }
    engine.set_page(page);
    engine
}

#[cfg(test)]
mod tests {
    use shared::domain::SortDirection;

    use super::*;

    fn records() -> Vec<CourseRecord> {
        (0..150)
            .map(|i| CourseRecord {
                code: Some(format!("{i}")),
                title: Some(format!("Course {i}")),
                ..CourseRecord::default()
            })
            .collect()
    }

    #[test]
    fn repeated_sort_flag_acts_like_repeated_header_clicks() {
        let engine = build_view(records(), "", &[Column::Code, Column::Code], false, 1);
        let sort = engine.state().sort().expect("sort");
        assert_eq!(sort.direction, SortDirection::Descending);
        assert!(sort.numeric);
        assert_eq!(engine.compute_view().visible_rows[0].cell(Column::Code), "149");
    }

    #[test]
    fn text_flag_forces_string_comparison() {
        let engine = build_view(records(), "", &[Column::Code], true, 1);
        let view = engine.compute_view();
        assert_eq!(view.visible_rows[1].cell(Column::Code), "1");
        assert_eq!(view.visible_rows[2].cell(Column::Code), "10");
    }

    #[test]
    fn page_is_clamped_after_filtering() {
        let engine = build_view(records(), "course 1", &[], false, 9);
        let view = engine.compute_view();
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn cli_parses_view_arguments() {
        let cli = Cli::try_parse_from([
            "catalog", "--source", "c.json", "view", "--sort", "seats", "--sort", "Code", "--page",
            "2",
        ])
        .expect("parse");
        match cli.command {
            Command::View { sort, page, .. } => {
                assert_eq!(sort, vec![Column::Seat, Column::Code]);
                assert_eq!(page, 2);
            }
            Command::Check => panic!("expected view"),
        }
        assert_eq!(cli.source.as_deref(), Some("c.json"));
    }
}
