use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ColumnParseError;

/// One row of the course catalog as it appears in the static JSON document.
///
/// Every field is optional. Strings, numbers and booleans are all accepted
/// and kept in their textual form so a catalog that mixes `"seat": 30` and
/// `"seat": "30"` still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub faculty_initial: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    #[serde(
        rename = "Semester",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub semester: Option<String>,
}

impl CourseRecord {
    pub fn field(&self, column: Column) -> Option<&str> {
        let value = match column {
            Column::Code => &self.code,
            Column::Title => &self.title,
            Column::Section => &self.section,
            Column::FacultyInitial => &self.faculty_initial,
            Column::Time => &self.time,
            Column::Room => &self.room,
            Column::Seat => &self.seat,
            Column::Semester => &self.semester,
        };
        value.as_deref()
    }

    /// Cell text for rendering; absent values render blank.
    pub fn cell(&self, column: Column) -> &str {
        self.field(column).unwrap_or_default()
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        other => Some(other.to_string()),
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Code,
    Title,
    Section,
    FacultyInitial,
    Time,
    Room,
    Seat,
    Semester,
}

impl Column {
    /// Columns in display order.
    pub const ALL: [Column; 8] = [
        Column::Code,
        Column::Title,
        Column::Section,
        Column::FacultyInitial,
        Column::Time,
        Column::Room,
        Column::Seat,
        Column::Semester,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Code => "Code",
            Column::Title => "Title",
            Column::Section => "Section",
            Column::FacultyInitial => "Faculty",
            Column::Time => "Time",
            Column::Room => "Room",
            Column::Seat => "Seats",
            Column::Semester => "Semester",
        }
    }

    pub fn json_key(self) -> &'static str {
        match self {
            Column::Code => "code",
            Column::Title => "title",
            Column::Section => "section",
            Column::FacultyInitial => "faculty_initial",
            Column::Time => "time",
            Column::Room => "room",
            Column::Seat => "seat",
            Column::Semester => "Semester",
        }
    }

    /// Whether a header click on this column sorts numerically.
    pub fn is_numeric(self) -> bool {
        matches!(self, Column::Code | Column::Section | Column::Seat)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_key())
    }
}

impl FromStr for Column {
    type Err = ColumnParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Column::ALL
            .into_iter()
            .find(|column| {
                column.json_key().eq_ignore_ascii_case(wanted)
                    || column.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ColumnParseError::new(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn glyph(self) -> char {
        match self {
            SortDirection::Ascending => '↑',
            SortDirection::Descending => '↓',
        }
    }
}

/// Active sort column, its direction, and whether values compare as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: Column,
    pub direction: SortDirection,
    pub numeric: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    /// Caption of the button that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayMode::Light => "Switch to Dark Mode",
            DisplayMode::Dark => "Switch to Light Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_field_types_and_semester_key() {
        let record: CourseRecord = serde_json::from_str(
            r#"{"code": 101, "title": "Intro", "seat": "30", "section": null, "Semester": "Fall"}"#,
        )
        .expect("record");

        assert_eq!(record.code.as_deref(), Some("101"));
        assert_eq!(record.seat.as_deref(), Some("30"));
        assert_eq!(record.section, None);
        assert_eq!(record.semester.as_deref(), Some("Fall"));
        assert_eq!(record.cell(Column::Room), "");
    }

    #[test]
    fn parses_columns_by_key_or_label() {
        assert_eq!("faculty".parse::<Column>().expect("label"), Column::FacultyInitial);
        assert_eq!(
            "faculty_initial".parse::<Column>().expect("key"),
            Column::FacultyInitial
        );
        assert_eq!("SEATS".parse::<Column>().expect("label"), Column::Seat);
        assert_eq!("semester".parse::<Column>().expect("key"), Column::Semester);
        assert!("credits".parse::<Column>().is_err());
    }

    #[test]
    fn toggle_label_names_the_other_mode() {
        assert_eq!(DisplayMode::Light.toggle_label(), "Switch to Dark Mode");
        assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
        assert!(DisplayMode::Dark.is_dark());
    }
}
