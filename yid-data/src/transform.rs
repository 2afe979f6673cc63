//! Pure transforms the views apply before (re)painting a heatmap.
//!
//! Everything here is plain data-in/data-out so it can be unit tested on
//! the host; no DOM, no signals.

use crate::records::{DistinctBook, GenericRecord, ReadingRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// How multiple records on the same date combine into one day cell.
///
/// Duration totals sum; a day's peak workout duration does not, which is
/// why the workout view overrides the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Sum,
    Max,
}

impl Default for Aggregation {
    fn default() -> Self {
        Aggregation::Sum
    }
}

impl Aggregation {
    /// The cal-heatmap `data.groupY` keyword for this mode.
    pub fn as_group_y(&self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Max => "max",
        }
    }

    /// Combine the values observed on a single date.
    pub fn combine(&self, values: &[f64]) -> f64 {
        match self {
            Aggregation::Sum => values.iter().sum(),
            Aggregation::Max => values.iter().copied().fold(0.0, f64::max),
        }
    }
}

/// A (date, value) pair after per-day aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayValue {
    pub date: String,
    pub value: f64,
}

/// Collapse records sharing a date into one value per day, ordered by date.
pub fn aggregate_daily<I>(points: I, mode: Aggregation) -> Vec<DayValue>
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut by_date: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (date, value) in points {
        by_date.entry(date).or_default().push(value);
    }
    by_date
        .into_iter()
        .map(|(date, values)| DayValue {
            value: mode.combine(&values),
            date,
        })
        .collect()
}

/// Reading records for the carousel selection `index`.
///
/// Index `-1` (and any index with no matching book) means "show all"; a
/// valid index keeps only the records of that book, matched by ASIN. The
/// caller owns the full dataset, so this always returns a fresh vector.
pub fn select_book(
    records: &[ReadingRecord],
    books: &[DistinctBook],
    index: i32,
) -> Vec<ReadingRecord> {
    let selected = usize::try_from(index).ok().and_then(|i| books.get(i));
    match selected {
        Some(book) => records
            .iter()
            .filter(|record| record.asin == book.asin)
            .cloned()
            .collect(),
        None => records.to_vec(),
    }
}

/// Ordered value buckets for the generic time-series views.
///
/// Each breakpoint labels the half-open interval starting at itself and
/// ending at the next breakpoint; the last interval is open-ended. Values
/// below the first breakpoint belong to no bucket and only appear under
/// "show all". The breakpoints double as the threshold color domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueBuckets {
    entries: Vec<(f64, String)>,
}

impl ValueBuckets {
    /// Build buckets from (breakpoint, label) pairs, sorted by breakpoint.
    pub fn new<S: Into<String>>(pairs: impl IntoIterator<Item = (f64, S)>) -> Self {
        let mut entries: Vec<(f64, String)> = pairs
            .into_iter()
            .map(|(breakpoint, label)| (breakpoint, label.into()))
            .collect();
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));
        ValueBuckets { entries }
    }

    /// Bucket labels in breakpoint order, for the filter carousel.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, label)| label.as_str()).collect()
    }

    /// The ascending breakpoints.
    pub fn breakpoints(&self) -> Vec<f64> {
        self.entries.iter().map(|(breakpoint, _)| *breakpoint).collect()
    }

    /// Whether `value` falls into the bucket at `index`.
    pub fn contains(&self, index: usize, value: f64) -> bool {
        let Some((low, _)) = self.entries.get(index) else {
            return false;
        };
        if value < *low {
            return false;
        }
        match self.entries.get(index + 1) {
            Some((high, _)) => value < *high,
            None => true,
        }
    }

    /// Records for the carousel selection `index`: `-1` (or out of range)
    /// keeps everything, otherwise only the records whose value falls into
    /// that bucket.
    pub fn filter(&self, records: &[GenericRecord], index: i32) -> Vec<GenericRecord> {
        match usize::try_from(index).ok().filter(|i| *i < self.entries.len()) {
            Some(i) => records
                .iter()
                .filter(|record| self.contains(i, record.value))
                .cloned()
                .collect(),
            None => records.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(date: &str, asin: &str, minutes: f64) -> ReadingRecord {
        ReadingRecord {
            date: date.to_string(),
            asin: asin.to_string(),
            total_reading_minutes: minutes,
        }
    }

    fn book(asin: &str) -> DistinctBook {
        DistinctBook {
            asin: asin.to_string(),
            book_image: None,
        }
    }

    #[test]
    fn test_same_day_values_sum_by_default() {
        let points = vec![
            ("2024-05-01".to_string(), 30.0),
            ("2024-05-01".to_string(), 50.0),
            ("2024-05-02".to_string(), 10.0),
        ];
        let daily = aggregate_daily(points, Aggregation::Sum);
        assert_eq!(
            daily,
            vec![
                DayValue { date: "2024-05-01".to_string(), value: 80.0 },
                DayValue { date: "2024-05-02".to_string(), value: 10.0 },
            ]
        );
    }

    #[test]
    fn test_same_day_values_take_max_when_asked() {
        let points = vec![
            ("2024-05-01".to_string(), 30.0),
            ("2024-05-01".to_string(), 50.0),
        ];
        let daily = aggregate_daily(points, Aggregation::Max);
        assert_eq!(daily[0].value, 50.0);
    }

    #[test]
    fn test_aggregation_keywords_match_chart_library() {
        assert_eq!(Aggregation::Sum.as_group_y(), "sum");
        assert_eq!(Aggregation::Max.as_group_y(), "max");
        assert_eq!(Aggregation::default(), Aggregation::Sum);
    }

    #[test]
    fn test_select_book_filters_by_asin() {
        let records = vec![
            reading("2024-01-01", "B01", 20.0),
            reading("2024-01-02", "B02", 35.0),
            reading("2024-01-03", "B01", 15.0),
        ];
        let books = vec![book("B01"), book("B02"), book("B03")];

        let only_b02 = select_book(&records, &books, 1);
        assert_eq!(only_b02.len(), 1);
        assert!(only_b02.iter().all(|record| record.asin == "B02"));
    }

    #[test]
    fn test_select_book_minus_one_restores_full_dataset() {
        let records = vec![
            reading("2024-01-01", "B01", 20.0),
            reading("2024-01-02", "B02", 35.0),
            reading("2024-01-03", "B03", 50.0),
        ];
        let books = vec![book("B01"), book("B02"), book("B03")];

        // Select a book, then "show all": the derived view must carry no
        // residue of the earlier selection.
        let filtered = select_book(&records, &books, 1);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].asin, "B02");
        let restored = select_book(&records, &books, -1);
        assert_eq!(restored, records);
    }

    #[test]
    fn test_select_book_out_of_range_shows_all() {
        let records = vec![reading("2024-01-01", "B01", 20.0)];
        let books = vec![book("B01")];
        assert_eq!(select_book(&records, &books, 7), records);
    }

    #[test]
    fn test_bucket_intervals_are_half_open() {
        let buckets = ValueBuckets::new([
            (1500.0, "low"),
            (2000.0, "normal"),
            (3000.0, "active"),
            (3500.0, "very active"),
        ]);
        assert_eq!(buckets.labels(), vec!["low", "normal", "active", "very active"]);
        assert!(buckets.contains(0, 1500.0));
        assert!(buckets.contains(0, 1999.9));
        assert!(!buckets.contains(0, 2000.0));
        assert!(buckets.contains(3, 9000.0));
        // Below the first breakpoint belongs to no bucket.
        assert!(!buckets.contains(0, 1200.0));
    }

    #[test]
    fn test_bucket_filter_and_show_all() {
        let buckets = ValueBuckets::new([(1000.0, "low"), (5000.0, "mid"), (10000.0, "high")]);
        let records = vec![
            GenericRecord { date: "2024-01-01".to_string(), value: 800.0 },
            GenericRecord { date: "2024-01-02".to_string(), value: 4200.0 },
            GenericRecord { date: "2024-01-03".to_string(), value: 12000.0 },
        ];

        let mid = buckets.filter(&records, 1);
        assert_eq!(mid.len(), 1);
        assert_eq!(mid[0].date, "2024-01-02");

        assert_eq!(buckets.filter(&records, -1), records);
    }
}
