//! Brazilian Portuguese display strings. The calendar is single-locale.

use crate::calc::Shift;
use chrono::{Datelike, NaiveDate, Weekday};

/// Column headers, Sunday first.
pub const WEEKDAY_HEADER: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "janeiro",
        2 => "fevereiro",
        3 => "março",
        4 => "abril",
        5 => "maio",
        6 => "junho",
        7 => "julho",
        8 => "agosto",
        9 => "setembro",
        10 => "outubro",
        11 => "novembro",
        12 => "dezembro",
        _ => "desconhecido",
    }
}

/// e.g. "março 2024"
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

pub fn weekday_abbr(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "dom",
        Weekday::Mon => "seg",
        Weekday::Tue => "ter",
        Weekday::Wed => "qua",
        Weekday::Thu => "qui",
        Weekday::Fri => "sex",
        Weekday::Sat => "sáb",
    }
}

pub fn date_weekday_abbr(date: NaiveDate) -> &'static str {
    weekday_abbr(date.weekday())
}

pub fn shift_label(shift: Shift) -> &'static str {
    match shift {
        Shift::Work => "Trabalho",
        Shift::Off => "Folga",
    }
}
