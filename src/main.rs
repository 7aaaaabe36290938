mod calc;
mod cmd;
mod data;
mod logging;
mod ui;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use data::{AppSettings, Persistable};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folga", about = "alternating work/off-day calendar")]
struct Cli {
    /// Path to the directory containing settings.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Day the work/off alternation starts from (YYYY-MM-DD, default: today)
    #[arg(long, value_parser = parse_date)]
    reference: Option<NaiveDate>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default settings.yaml into the data directory
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Print one month as a calendar page
    Month {
        /// Month to print (YYYY-MM, default: current month)
        month: Option<String>,
        /// Print the grid as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Print whether a single date is a work day or an off day
    Day {
        /// Date to classify (YYYY-MM-DD, default: today)
        #[arg(value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logger = logging::init(cli.log_file.as_deref(), cli.command.is_none())?;

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir);

    let today = Local::now().date_naive();

    match cli.command {
        None => {
            let (settings, reference) = load_settings(cli.reference, today)?;
            cmd::root::run(&settings, reference, today)
        }
        Some(Commands::Init { force }) => cmd::init::run(force),
        Some(Commands::Month { month, json }) => {
            let (_, reference) = load_settings(cli.reference, today)?;
            cmd::month::run(month.as_deref(), json, reference, today)
        }
        Some(Commands::Day { date }) => {
            let (_, reference) = load_settings(cli.reference, today)?;
            cmd::day::run(date, reference, today)
        }
    }
}

/// Loads settings.yaml and resolves the reference date for this run.
fn load_settings(
    cli_reference: Option<NaiveDate>,
    today: NaiveDate,
) -> anyhow::Result<(AppSettings, NaiveDate)> {
    let settings = AppSettings::load()?;
    let reference = settings.resolve_reference(cli_reference, today);
    log::debug!("reference date {reference}, today {today}");
    Ok((settings, reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_tui() {
        let cli = Cli::try_parse_from(["folga"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.reference.is_none());
        assert_eq!(cli.data_dir, PathBuf::from("./config"));
    }

    #[test]
    fn test_cli_parses_reference_and_month() {
        let cli =
            Cli::try_parse_from(["folga", "--reference", "2024-01-01", "month", "2024-03", "--json"])
                .unwrap();
        assert_eq!(cli.reference, NaiveDate::from_ymd_opt(2024, 1, 1));
        match cli.command {
            Some(Commands::Month { month, json }) => {
                assert_eq!(month.as_deref(), Some("2024-03"));
                assert!(json);
            }
            _ => panic!("expected month command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_reference() {
        assert!(Cli::try_parse_from(["folga", "--reference", "01/01/2024"]).is_err());
    }

    #[test]
    fn test_cli_parses_day() {
        let cli = Cli::try_parse_from(["folga", "day", "2024-01-02"]).unwrap();
        match cli.command {
            Some(Commands::Day { date }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2));
            }
            _ => panic!("expected day command"),
        }
    }

    #[test]
    fn test_cli_parses_init_force() {
        let cli = Cli::try_parse_from(["folga", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }
}
