use chrono::{Datelike, NaiveDate};

/// The month currently on screen, held as a single date.
///
/// Only `advance`, `retreat` and `reset_to` move it. The day-of-month is kept
/// where the target month allows it and clamped to the month's last day
/// otherwise, so Jan 31 advances to Feb 28 (or 29).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    date: NaiveDate,
}

impl MonthCursor {
    pub fn new(date: NaiveDate) -> Self {
        MonthCursor { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn advance(&mut self) {
        self.date = add_months(self.date, 1);
    }

    pub fn retreat(&mut self) {
        self.date = add_months(self.date, -1);
    }

    /// Jumps straight to the month containing `today`.
    pub fn reset_to(&mut self, today: NaiveDate) {
        self.date = today;
    }
}

/// Number of days in `month` of `year`, or 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(0)
}

/// Shifts `date` by `months` calendar months, clamping the day to the target
/// month's length. Returns `date` unchanged if the result is out of range.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + (date.month() as i32 - 1) + months;
    let new_year = total.div_euclid(12);
    let new_month = (total.rem_euclid(12) + 1) as u32;
    let new_day = date.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}
