//! Month grid construction.
//!
//! The month view renders complete Monday-start weeks, so the grid for a
//! month includes leading and trailing days from the adjacent months. Grid
//! building is pure: "today" is passed in rather than read from the system
//! clock, which keeps it deterministic and testable.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// One rendered day slot in a month grid, possibly from an adjacent month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the date belongs to the month being displayed.
    pub in_month: bool,
    pub is_today: bool,
}

/// Build the ordered cells of the month view around `reference`.
///
/// Covers the whole month containing `reference`, extended back to the
/// nearest Monday and forward to the following Sunday, so the result always
/// starts on a Monday, ends on a Sunday, and has a length that is a
/// multiple of 7.
pub fn month_grid(reference: NaiveDate, today: NaiveDate) -> Vec<DayCell> {
    let first = month_start(reference);
    let last = month_end(reference);

    let mut day = week_start(first);
    let end = week_start(last) + Duration::days(6);

    let mut cells = Vec::with_capacity(42);
    while day <= end {
        cells.push(DayCell {
            date: day,
            in_month: day.month() == reference.month() && day.year() == reference.year(),
            is_today: day == today,
        });
        day += Duration::days(1);
    }
    cells
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    next_month(month_start(date)) - Duration::days(1)
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The seven days (Monday..Sunday) of the week containing `reference`.
pub fn week_of(reference: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(reference);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Same day one month later, clamped to the target month's length.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap()
}

/// Same day one month earlier, clamped to the target month's length.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap()
}
