//! # Date Formatting
//!
//! Turns the bill's ISO date into the form printed on the split.
//!
//! ```text
//! "2024-03-21"  ──►  "2024年3月21日"
//! "2024-12-01"  ──►  "2024年12月1日"
//! "2024/03/21"  ──►  BillError::InvalidDate
//! ```

use chrono::{Datelike, NaiveDate};

use crate::error::{BillError, BillResult};

/// Formats a `YYYY-MM-DD` date as `{year}年{month}月{day}日`.
///
/// Each dash-separated part must be plain ASCII digits; leading zeros are
/// accepted and dropped. The parts must also name a real calendar date.
///
/// ## Example
/// ```rust
/// use splitbill_core::format_date;
///
/// assert_eq!(format_date("2024-01-21").unwrap(), "2024年1月21日");
/// assert!(format_date("2024-02-30").is_err());
/// assert!(format_date("not-a-date").is_err());
/// ```
pub fn format_date(date: &str) -> BillResult<String> {
    let date = parse_date(date)?;
    Ok(format!("{}年{}月{}日", date.year(), date.month(), date.day()))
}

fn parse_date(input: &str) -> BillResult<NaiveDate> {
    let parts: Vec<&str> = input.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(BillError::invalid_date(
            input,
            format!("expected YYYY-MM-DD, found {} part(s)", parts.len()),
        ));
    };

    let year: i32 = parse_part(input, "year", year)?;
    let month: u32 = parse_part(input, "month", month)?;
    let day: u32 = parse_part(input, "day", day)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| BillError::invalid_date(input, "not a calendar date"))
}

fn parse_part<T: std::str::FromStr>(input: &str, label: &str, part: &str) -> BillResult<T> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BillError::invalid_date(
            input,
            format!("{} '{}' is not a number", label, part),
        ));
    }

    part.parse()
        .map_err(|_| BillError::invalid_date(input, format!("{} '{}' is out of range", label, part)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_month_and_day() {
        assert_eq!(format_date("2024-12-21").unwrap(), "2024年12月21日");
    }

    #[test]
    fn test_one_digit_month() {
        assert_eq!(format_date("2024-01-21").unwrap(), "2024年1月21日");
    }

    #[test]
    fn test_one_digit_day() {
        assert_eq!(format_date("2024-12-01").unwrap(), "2024年12月1日");
    }

    #[test]
    fn test_unpadded_parts_are_accepted() {
        assert_eq!(format_date("2024-3-5").unwrap(), "2024年3月5日");
    }

    #[test]
    fn test_wrong_separator_is_rejected() {
        let err = format_date("2024/03/21").unwrap_err();
        assert!(matches!(err, BillError::InvalidDate { ref input, .. } if input == "2024/03/21"));
    }

    #[test]
    fn test_wrong_part_count_is_rejected() {
        assert!(format_date("2024-03").is_err());
        assert!(format_date("2024-03-21-01").is_err());
        assert!(format_date("").is_err());
    }

    #[test]
    fn test_non_numeric_parts_are_rejected() {
        assert!(format_date("2024-Mar-21").is_err());
        assert!(format_date("2024-03-2x").is_err());
        assert!(format_date("2024- 3-21").is_err());
        assert!(format_date("2024--21").is_err());
    }

    #[test]
    fn test_impossible_dates_are_rejected() {
        assert!(format_date("2024-13-01").is_err());
        assert!(format_date("2023-02-29").is_err());
        assert_eq!(format_date("2024-02-29").unwrap(), "2024年2月29日");
    }

    #[test]
    fn test_formatting_is_pure() {
        assert_eq!(format_date("2024-03-21"), format_date("2024-03-21"));
    }
}
