use crate::calc::{build_grid, Slot, WeekGrid};
use crate::ui::locale::{month_label, WEEKDAY_HEADER};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

const COL_WIDTH: usize = 6;
const PAGE_WIDTH: usize = COL_WIDTH * 7 + 6;

pub fn run(month: Option<&str>, json: bool, reference: NaiveDate, today: NaiveDate) -> Result<()> {
    let month = match month {
        Some(s) => parse_month(s)?,
        None => today,
    };
    let grid = build_grid(month, reference, today);
    let mut out = std::io::stdout();
    if json {
        write_json(&grid, &mut out)
    } else {
        write_month(&grid, &mut out)
    }
}

/// Parses `YYYY-MM` into the first day of that month.
pub(crate) fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .with_context(|| format!("invalid month '{s}', expected YYYY-MM"))
}

/// Prints the grid as a plain calendar page. Each day shows its number, `T`
/// (Trabalho) or `F` (Folga), and `*` for today.
pub(crate) fn write_month<W: std::io::Write>(grid: &WeekGrid, out: &mut W) -> Result<()> {
    let label = month_label(grid.year, grid.month);
    writeln!(out, "{}", format!("{label:^w$}", w = PAGE_WIDTH).trim_end())?;

    let header: Vec<String> = WEEKDAY_HEADER
        .iter()
        .map(|name| format!("{name:>w$} ", w = COL_WIDTH - 1))
        .collect();
    writeln!(out, "{}", header.join(" ").trim_end())?;

    for week in grid.rows() {
        let cells: Vec<String> = week.iter().map(text_cell).collect();
        writeln!(out, "{}", cells.join(" ").trim_end())?;
    }

    writeln!(out, "---")?;
    writeln!(out, "T = Trabalho  F = Folga  * = hoje")?;
    Ok(())
}

fn text_cell(slot: &Slot) -> String {
    match slot.day() {
        None => " ".repeat(COL_WIDTH),
        Some(day) => format!(
            "{:>3} {}{}",
            day.date.day(),
            if day.is_work_day() { 'T' } else { 'F' },
            if day.is_today { '*' } else { ' ' }
        ),
    }
}

pub(crate) fn write_json<W: std::io::Write>(grid: &WeekGrid, out: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(grid).context("failed to serialize grid")?;
    writeln!(out, "{json}")?;
    Ok(())
}
