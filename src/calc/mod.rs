pub mod classify;
pub mod grid;
pub mod month;

pub use classify::{classify, is_today, Shift};
pub use grid::{build_grid, DayCell, Slot, WeekGrid};
pub use month::MonthCursor;
