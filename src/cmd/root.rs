use crate::data::AppSettings;
use crate::ui::calendar_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::NaiveDate;

pub fn run(settings: &AppSettings, reference: NaiveDate, today: NaiveDate) -> Result<()> {
    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    log::info!("starting calendar (reference {reference}, today {today})");

    let mut terminal = setup_terminal()?;
    let mut app = App::new(settings.title.clone(), reference, today);

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    result
}
