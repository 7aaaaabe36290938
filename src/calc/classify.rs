use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Work,
    Off,
}

impl Shift {
    pub fn is_work(self) -> bool {
        self == Shift::Work
    }
}

/// Whole calendar days from `reference` to `date`; negative when `date` is
/// earlier.
pub fn days_since(reference: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(reference).num_days()
}

/// Even day offsets from the reference are work days, odd offsets are off.
/// Uses Euclidean remainder so days before the reference keep alternating.
pub fn classify(date: NaiveDate, reference: NaiveDate) -> Shift {
    if days_since(reference, date).rem_euclid(2) == 0 {
        Shift::Work
    } else {
        Shift::Off
    }
}

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}
