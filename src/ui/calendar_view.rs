use crate::calc::grid::DAYS_PER_WEEK;
use crate::calc::{build_grid, DayCell, MonthCursor, Slot, WeekGrid};
use crate::ui::locale::{date_weekday_abbr, month_label, shift_label, WEEKDAY_HEADER};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

// Calendar cell colors
const WORK_BG: Color = Color::Rgb(227, 242, 253); // light blue
const OFF_BG: Color = Color::Rgb(232, 245, 233); // light green
const WORK_FG: Color = Color::Rgb(52, 152, 219);
const OFF_FG: Color = Color::Rgb(39, 174, 96);
const TITLE_FG: Color = Color::Rgb(26, 35, 126);

const CELL_WIDTH: u16 = 10;
const CELL_HEIGHT: u16 = 3;

pub struct App {
    cursor: MonthCursor,
    /// Origin of the work/off alternation, fixed for the lifetime of the app.
    reference: NaiveDate,
    today: NaiveDate,
    title: String,
    /// Rebuilt from scratch whenever the cursor moves.
    grid: WeekGrid,
}

impl App {
    pub fn new(title: String, reference: NaiveDate, today: NaiveDate) -> Self {
        let cursor = MonthCursor::new(today);
        let grid = build_grid(cursor.date(), reference, today);
        App {
            cursor,
            reference,
            today,
            title,
            grid,
        }
    }

    pub fn grid(&self) -> &WeekGrid {
        &self.grid
    }

    /// Moves "today" forward when the clock passes midnight. The reference
    /// date never changes.
    pub fn set_today(&mut self, today: NaiveDate) {
        if today != self.today {
            log::info!("date changed from {} to {today}", self.today);
            self.today = today;
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        self.grid = build_grid(self.cursor.date(), self.reference, self.today);
        log::debug!(
            "showing {}-{:02} ({} blanks, {} days)",
            self.cursor.year(),
            self.cursor.month(),
            self.grid.leading_blanks(),
            self.grid.days().count()
        );
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => {
                self.cursor.retreat();
                self.rebuild();
            }
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l') => {
                self.cursor.advance();
                self.rebuild();
            }
            KeyCode::Char('t') => {
                self.cursor.reset_to(self.today);
                self.rebuild();
            }
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            _ => {}
        }
        false
    }

    pub fn render(&self, f: &mut Frame) {
        let grid_height = 2 + 1 + self.grid.row_count() as u16 * CELL_HEIGHT;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),           // title
                Constraint::Length(1),           // month label + navigation
                Constraint::Length(grid_height), // grid (borders + weekday header + rows)
                Constraint::Min(4),              // help
            ])
            .split(f.area());

        self.render_title(f, chunks[0]);
        self.render_month_bar(f, chunks[1]);
        render_grid(f, chunks[2], self.grid());
        render_help(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            self.title.clone(),
            Style::default().fg(TITLE_FG).add_modifier(Modifier::BOLD),
        )))
        .centered();
        f.render_widget(title, area);
    }

    fn render_month_bar(&self, f: &mut Frame, area: Rect) {
        let bar = Paragraph::new(Line::from(vec![
            Span::styled("◀ p  ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(
                month_label(self.grid.year, self.grid.month),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  n ▶", Style::default().add_modifier(Modifier::DIM)),
        ]))
        .centered();
        f.render_widget(bar, area);
    }
}

// ── Grid rendering ────────────────────────────────────────────────────────────

fn render_grid(f: &mut Frame, area: Rect, grid: &WeekGrid) {
    let header = Row::new(WEEKDAY_HEADER.iter().map(|name| {
        Cell::from(Line::from(*name).centered())
    }))
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = grid
        .rows()
        .map(|week| {
            let mut cells: Vec<Cell> = week.iter().map(slot_cell).collect();
            // The grid has no trailing padding; fill the last row for the table.
            cells.resize_with(DAYS_PER_WEEK, || Cell::from(""));
            Row::new(cells).height(CELL_HEIGHT)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(CELL_WIDTH); DAYS_PER_WEEK])
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(table, area);
}

fn slot_cell(slot: &Slot) -> Cell<'static> {
    match slot {
        Slot::Blank => Cell::from(""),
        Slot::Day(day) => {
            let text = Text::from(vec![
                Line::from(day.date.day().to_string()).centered(),
                Line::from(date_weekday_abbr(day.date)).centered(),
                Line::from(shift_label(day.shift)).centered(),
            ]);
            Cell::from(text).style(day_style(day))
        }
    }
}

/// Work and off days get distinct colors; today is additionally bold and
/// reversed.
pub(crate) fn day_style(day: &DayCell) -> Style {
    let (fg, bg) = if day.is_work_day() {
        (WORK_FG, WORK_BG)
    } else {
        (OFF_FG, OFF_BG)
    };
    let style = Style::default().fg(fg).bg(bg);
    if day.is_today {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

fn render_help(f: &mut Frame, area: Rect) {
    let key_rows = vec![
        Row::new(vec!["← / p / h", "Mês anterior", "→ / n / l", "Próximo mês"]),
        Row::new(vec!["t", "Mês atual", "q / Esc", "Sair"]),
    ];
    let help = Table::new(
        key_rows,
        [
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(16),
        ],
    )
    .block(Block::default().borders(Borders::TOP))
    .column_spacing(1);
    f.render_widget(help, area);
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.set_today(Local::now().date_naive());
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}
