//! Data-quality summary for a loaded catalog.

use std::fmt;

use catalog_core::numeric::numeric_value;
use shared::domain::{Column, CourseRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    pub total: usize,
    pub missing_title: usize,
    /// Numeric columns with the count of values that cannot be parsed
    /// (these never move when sorting by that column).
    pub unparsable: Vec<(Column, usize)>,
}

impl CatalogReport {
    pub fn from_records(records: &[CourseRecord]) -> Self {
        let missing_title = records.iter().filter(|r| r.title.is_none()).count();
        let unparsable = Column::ALL
            .into_iter()
            .filter(|column| column.is_numeric())
            .map(|column| {
                let bad = records
                    .iter()
                    .filter(|r| numeric_value(r.field(column)).is_nan())
                    .count();
                (column, bad)
            })
            .collect();

        Self {
            total: records.len(),
            missing_title,
            unparsable,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.missing_title == 0 && self.unparsable.iter().all(|(_, bad)| *bad == 0)
    }
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records: {}", self.total)?;
        writeln!(f, "without title (never shown): {}", self.missing_title)?;
        for (column, bad) in &self.unparsable {
            writeln!(f, "unparsable {}: {bad}", column.json_key())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_missing_titles_and_unparsable_numbers() {
        let records = vec![
            CourseRecord {
                code: Some("101".into()),
                title: Some("Intro".into()),
                section: Some("1".into()),
                seat: Some("TBA".into()),
                ..CourseRecord::default()
            },
            CourseRecord {
                code: Some("CSE-9".into()),
                ..CourseRecord::default()
            },
        ];

        let report = CatalogReport::from_records(&records);
        assert_eq!(report.total, 2);
        assert_eq!(report.missing_title, 1);
        assert_eq!(
            report.unparsable,
            vec![(Column::Code, 1), (Column::Section, 1), (Column::Seat, 2)]
        );
        assert!(!report.is_clean());
        assert!(report.to_string().contains("unparsable seat: 2"));
    }

    #[test]
    fn empty_catalog_is_clean() {
        assert!(CatalogReport::from_records(&[]).is_clean());
    }
}
