use crate::calc::{classify, is_today};
use crate::calc::classify::days_since;
use crate::ui::locale::{date_weekday_abbr, shift_label};
use anyhow::Result;
use chrono::NaiveDate;

pub fn run(date: Option<NaiveDate>, reference: NaiveDate, today: NaiveDate) -> Result<()> {
    write_day(date.unwrap_or(today), reference, today, &mut std::io::stdout())
}

pub(crate) fn write_day<W: std::io::Write>(
    date: NaiveDate,
    reference: NaiveDate,
    today: NaiveDate,
    out: &mut W,
) -> Result<()> {
    let shift = classify(date, reference);
    let suffix = if is_today(date, today) { " (hoje)" } else { "" };
    writeln!(
        out,
        "{} {:<4} {}{}",
        date.format("%Y-%m-%d"),
        date_weekday_abbr(date),
        shift_label(shift),
        suffix
    )?;
    writeln!(
        out,
        "  {} dia(s) desde {}",
        days_since(reference, date),
        reference.format("%Y-%m-%d")
    )?;
    Ok(())
}
