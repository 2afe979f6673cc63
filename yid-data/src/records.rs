//! Record types returned by the year-in-data API.
//!
//! Every endpoint returns a JSON array of flat records with a `date` field
//! in "YYYY-MM-DD" form plus one or more value fields. The structs here
//! keep dates as strings: that is the form cal-heatmap consumes, and the
//! form every comparison in the app needs. `dates::parse_date` validates
//! them where a calendar date is actually required.

use serde::{Deserialize, Serialize};

/// One day of gym activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub date: String,
    pub workout_duration_minutes: f64,
}

/// One (day, book) slice of Kindle reading activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    pub date: String,
    #[serde(rename = "ASIN")]
    pub asin: String,
    pub total_reading_minutes: f64,
}

/// A book that appears in the reading activity for a year.
///
/// The order of the list returned by the API defines the stable index the
/// filter carousel reports back; `book_image` is absent for books Amazon
/// has no cover art for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistinctBook {
    #[serde(rename = "ASIN")]
    pub asin: String,
    #[serde(default)]
    pub book_image: Option<String>,
}

/// One day of GitHub commit activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubRecord {
    pub date: String,
    pub total_commits: f64,
}

/// One night of sleep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub date: String,
    pub total_duration_hours: f64,
}

/// A normalized (date, value) record for the generic time-series views
/// (steps, calories, running distance).
///
/// The API exposes these under per-category column names, so rows are
/// normalized through [`GenericRecord::from_rows`] rather than a direct
/// serde derive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericRecord {
    pub date: String,
    pub value: f64,
}

impl GenericRecord {
    /// Normalize raw JSON rows into (date, value) records, reading the
    /// value from `value_col`. Rows missing either field are skipped.
    pub fn from_rows(rows: &[serde_json::Value], value_col: &str) -> Vec<GenericRecord> {
        rows.iter()
            .filter_map(|row| {
                let date = row.get("date")?.as_str()?.to_string();
                let value = row.get(value_col)?.as_f64()?;
                Some(GenericRecord { date, value })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reading_record_uses_api_field_names() {
        let raw = r#"{"date":"2024-03-01","ASIN":"B00ABC1234","total_reading_minutes":42.0}"#;
        let record: ReadingRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.asin, "B00ABC1234");
        assert_eq!(record.total_reading_minutes, 42.0);
    }

    #[test]
    fn test_distinct_book_image_is_optional() {
        let with: DistinctBook = serde_json::from_str(
            r#"{"ASIN":"B01","book_image":"https://img/cover.jpg"}"#,
        )
        .unwrap();
        let without: DistinctBook = serde_json::from_str(r#"{"ASIN":"B02"}"#).unwrap();
        assert_eq!(with.book_image.as_deref(), Some("https://img/cover.jpg"));
        assert_eq!(without.book_image, None);
    }

    #[test]
    fn test_generic_records_from_rows() {
        let rows = vec![
            json!({"date": "2024-01-01", "steps": 4200}),
            json!({"date": "2024-01-02", "steps": 11000.5}),
            json!({"date": "2024-01-03"}),
            json!({"steps": 100}),
        ];
        let records = GenericRecord::from_rows(&rows, "steps");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "2024-01-01");
        assert_eq!(records[0].value, 4200.0);
        assert_eq!(records[1].value, 11000.5);
    }
}
