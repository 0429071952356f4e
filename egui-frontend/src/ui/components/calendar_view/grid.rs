//! # Date Grid Utility
//!
//! Month-grid math for the calendar panel. The grid is always 42 cells
//! (6 full weeks) starting on the Sunday on or before the 1st, so the
//! calendar keeps a stable height across months.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// One cell of the month grid. Transient: recomputed whenever the
/// displayed month changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the cell belongs to the displayed month (filler otherwise)
    pub in_month: bool,
    /// ISO form, used as the event-index key
    pub iso: String,
}

/// ISO date string (YYYY-MM-DD).
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Build the 42-cell grid for a month (1-based). An out-of-range month
/// yields an empty grid rather than panicking.
pub fn month_grid(year: i32, month: u32) -> Vec<DayCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);

    start
        .iter_days()
        .take(42)
        .map(|date| DayCell {
            date,
            in_month: date.month() == month && date.year() == year,
            iso: to_iso(date),
        })
        .collect()
}

/// Shift a date by whole calendar months, clamping the day-of-month to
/// the target month's length (Jan 31 + 1 month lands on Feb 28/29, it
/// never skips into March).
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;

    for day in (1..=date.day()).rev() {
        if let Some(shifted) = NaiveDate::from_ymd_opt(year, month, day) {
            return shifted;
        }
    }
    date
}

/// Calendar-field day equality.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Calendar-field month equality.
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Weekday index of a cell with Sunday as 0, matching the grid columns.
pub fn weekday_column(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Short weekday name for popover headers.
pub fn weekday_short(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_always_six_full_weeks_starting_sunday() {
        for (year, month) in [(2026, 2), (2026, 3), (2024, 2), (2025, 12), (2026, 1)] {
            let cells = month_grid(year, month);
            assert_eq!(cells.len(), 42, "{}-{} wrong size", year, month);
            assert_eq!(
                cells[0].date.weekday(),
                Weekday::Sun,
                "{}-{} does not start on Sunday",
                year,
                month
            );
            // Consecutive days, no gaps
            for pair in cells.windows(2) {
                assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
            }
        }
    }

    #[test]
    fn grid_marks_in_month_cells() {
        let cells = month_grid(2026, 2);
        // February 2026 starts on a Sunday, so cell 0 is Feb 1
        assert_eq!(cells[0].date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert!(cells[0].in_month);
        assert_eq!(cells[0].iso, "2026-02-01");

        let in_month = cells.iter().filter(|c| c.in_month).count();
        assert_eq!(in_month, 28);
        // Trailing cells spill into March
        assert!(!cells[41].in_month);
    }

    #[test]
    fn grid_contains_today_matched_by_same_day() {
        let today = chrono::Local::now().date_naive();
        let cells = month_grid(today.year(), today.month());
        assert!(cells.iter().any(|c| is_same_day(c.date, today)));
    }

    #[test]
    fn add_months_clamps_instead_of_skipping() {
        let jan31 = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let feb = add_months(jan31, 1);
        assert_eq!(feb, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());

        let leap = add_months(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(), 1);
        assert_eq!(leap, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn add_months_crosses_year_boundaries() {
        let dec = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        assert_eq!(add_months(dec, 1), NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(add_months(dec, -12), NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
    }

    #[test]
    fn same_month_ignores_the_day() {
        let a = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let c = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert!(is_same_month(a, b));
        assert!(!is_same_month(a, c));
    }
}
