//! Date helpers shared across the dashboard crates.

use chrono::NaiveDate;

/// Date format used by the year-in-data API: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The first year the dashboard has data for.
pub const FIRST_DASHBOARD_YEAR: i32 = 2023;

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}

/// "YYYY-01-01" for the given year; the calendar paints one year starting here.
pub fn year_start(year: i32) -> String {
    format!("{year}-01-01")
}

/// Every year from `start` through `end`, inclusive and ascending.
///
/// The navbar offers 2023 through the current year; when they coincide the
/// range degenerates to the single entry rather than going empty or
/// descending.
pub fn year_range(start: i32, end: i32) -> Vec<i32> {
    if end < start {
        return vec![start];
    }
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_year_range_is_inclusive_and_ascending() {
        assert_eq!(year_range(2023, 2026), vec![2023, 2024, 2025, 2026]);
        for end in 2023..2040 {
            let range = year_range(FIRST_DASHBOARD_YEAR, end);
            assert_eq!(range.len(), (end - 2022) as usize);
            assert_eq!(range.first(), Some(&FIRST_DASHBOARD_YEAR));
            assert_eq!(range.last(), Some(&end));
            assert!(range.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_year_range_degenerates_to_single_entry() {
        assert_eq!(year_range(2023, 2023), vec![2023]);
        // A clock skewed before the first year must still yield something.
        assert_eq!(year_range(2023, 2022), vec![2023]);
    }

    #[test]
    fn test_format_and_parse() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let formatted = format_date(&date);
        assert_eq!(formatted, "2024-06-15");
        let parsed = parse_date(&formatted).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_year_start() {
        assert_eq!(year_start(2024), "2024-01-01");
        assert!(parse_date(&year_start(2023)).is_ok());
    }
}
