//! Terminal front-end.
//!
//! A line-oriented presentation layer: it renders `RoundView` snapshots
//! as text, turns typed positions into card selections, and schedules
//! the flip-back of mismatched pairs on the caller's clock.

pub mod app;
pub mod command;
pub mod render;

pub use app::{App, Control};
pub use command::{parse_command, Command, CommandError, HELP};
pub use render::{render_board, win_message};
