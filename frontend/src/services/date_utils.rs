use chrono::{Datelike, Duration, NaiveDate};

/// Number of cells in the month grid (6 weeks)
pub const GRID_CELLS: usize = 42;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Step a (year, month) pair by one month in either direction
pub fn shift_month(year: i32, month: u32, forward: bool) -> (i32, u32) {
    match (month, forward) {
        (12, true) => (year + 1, 1),
        (1, false) => (year - 1, 12),
        (m, true) => (year, m + 1),
        (m, false) => (year, m - 1),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

/// Cells for a Sunday-first month grid, padded with the neighbouring
/// months' days to a full six weeks.
pub fn month_grid(year: i32, month: u32) -> Vec<CalendarCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday() as i64;
    let grid_start = first - Duration::days(leading);

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            CalendarCell {
                date,
                is_current_month: date.month() == month && date.year() == year,
            }
        })
        .collect()
}
