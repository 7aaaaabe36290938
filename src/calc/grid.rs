use crate::calc::classify::{classify, is_today, Shift};
use crate::calc::month::{month_end, month_start};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub shift: Shift,
    pub is_today: bool,
}

impl DayCell {
    pub fn is_work_day(&self) -> bool {
        self.shift.is_work()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Slot {
    Blank,
    Day(DayCell),
}

impl Slot {
    pub fn day(&self) -> Option<&DayCell> {
        match self {
            Slot::Blank => None,
            Slot::Day(cell) => Some(cell),
        }
    }
}

/// One month laid out as a calendar page: leading blanks so that column 0 is
/// Sunday, then every day of the month in order. No trailing padding, so the
/// last row may hold fewer than seven slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekGrid {
    pub year: i32,
    pub month: u32,
    pub slots: Vec<Slot>,
}

impl WeekGrid {
    pub fn leading_blanks(&self) -> usize {
        self.slots
            .iter()
            .take_while(|s| matches!(s, Slot::Blank))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.slots.iter().filter_map(Slot::day)
    }

    /// Slots grouped into week rows of seven.
    pub fn rows(&self) -> impl Iterator<Item = &[Slot]> {
        self.slots.chunks(DAYS_PER_WEEK)
    }

    pub fn row_count(&self) -> usize {
        self.slots.len().div_ceil(DAYS_PER_WEEK)
    }
}

/// Column of `date` in a Sunday-first week (0 = Sunday … 6 = Saturday).
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Lays out the month containing `month` and labels every day against
/// `reference`. Rebuilding from the same inputs yields the same grid.
pub fn build_grid(month: NaiveDate, reference: NaiveDate, today: NaiveDate) -> WeekGrid {
    let first = month_start(month);
    let last = month_end(month);
    let lead = weekday_index(first);

    let mut slots = Vec::with_capacity(lead + 31);
    slots.extend(std::iter::repeat_n(Slot::Blank, lead));
    slots.extend(
        first
            .iter_days()
            .take_while(|date| *date <= last)
            .map(|date| {
                Slot::Day(DayCell {
                    date,
                    shift: classify(date, reference),
                    is_today: is_today(date, today),
                })
            }),
    );

    WeekGrid {
        year: first.year(),
        month: first.month(),
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::month::{add_months, days_in_month};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_march_2024_layout() {
        let grid = build_grid(d(2024, 3, 15), d(2024, 1, 1), d(2000, 1, 1));
        assert_eq!((grid.year, grid.month), (2024, 3));
        assert_eq!(grid.leading_blanks(), 5);
        assert_eq!(grid.days().count(), 31);
        assert_eq!(grid.slots.len(), 36);
        assert_eq!(grid.row_count(), 6);
        assert_eq!(grid.rows().last().map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_days_are_in_order_after_blanks() {
        let grid = build_grid(d(2024, 3, 1), d(2024, 1, 1), d(2000, 1, 1));
        let days: Vec<u32> = grid.days().map(|c| c.date.day()).collect();
        assert_eq!(days, (1..=31).collect::<Vec<_>>());
        assert!(grid.slots[..5].iter().all(|s| *s == Slot::Blank));
        assert!(grid.slots[5..].iter().all(|s| s.day().is_some()));
    }

    #[test]
    fn test_slot_counts_for_many_months() {
        let mut month = d(2023, 1, 31);
        for _ in 0..36 {
            let grid = build_grid(month, d(2024, 1, 1), d(2000, 1, 1));
            let first = month_start(month);
            assert_eq!(
                grid.days().count() as u32,
                days_in_month(month.year(), month.month())
            );
            assert_eq!(grid.leading_blanks(), weekday_index(first));
            month = add_months(month, 1);
        }
    }

    #[test]
    fn test_february_starting_sunday_has_no_blanks() {
        // 2015-02-01 was a Sunday; 28 days fill exactly four rows
        let grid = build_grid(d(2015, 2, 10), d(2015, 2, 1), d(2000, 1, 1));
        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.slots.len(), 28);
        assert_eq!(grid.row_count(), 4);
    }

    #[test]
    fn test_cells_carry_classification() {
        let grid = build_grid(d(2024, 1, 1), d(2024, 1, 1), d(2000, 1, 1));
        let cells: Vec<&DayCell> = grid.days().take(3).collect();
        assert!(cells[0].is_work_day());
        assert!(!cells[1].is_work_day());
        assert!(cells[2].is_work_day());
    }

    #[test]
    fn test_today_is_marked_once() {
        let grid = build_grid(d(2024, 3, 1), d(2024, 1, 1), d(2024, 3, 9));
        let today: Vec<NaiveDate> = grid.days().filter(|c| c.is_today).map(|c| c.date).collect();
        assert_eq!(today, vec![d(2024, 3, 9)]);
    }

    #[test]
    fn test_today_outside_month_marks_nothing() {
        let grid = build_grid(d(2024, 3, 1), d(2024, 1, 1), d(2024, 4, 1));
        assert!(grid.days().all(|c| !c.is_today));
    }

    #[test]
    fn test_rebuild_is_identical() {
        let a = build_grid(d(2024, 7, 4), d(2024, 1, 1), d(2024, 7, 4));
        let b = build_grid(d(2024, 7, 20), d(2024, 1, 1), d(2024, 7, 4));
        assert_eq!(a, b);
    }

    #[test]
    fn test_grid_serializes_with_slot_kind() {
        let grid = build_grid(d(2024, 3, 1), d(2024, 3, 1), d(2000, 1, 1));
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["slots"][0]["kind"], "blank");
        assert_eq!(json["slots"][5]["kind"], "day");
        assert_eq!(json["slots"][5]["date"], "2024-03-01");
        assert_eq!(json["slots"][5]["shift"], "work");
        assert_eq!(json["slots"][6]["shift"], "off");
    }
}
