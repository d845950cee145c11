//! The interactive loop, minus the I/O plumbing.
//!
//! `App` owns the game and the one flip-back timer that can be pending at
//! a time. The caller feeds it input lines and the current time, and
//! wakes it up at `deadline()` so due flips get resolved.

use std::io::{self, Write};
use std::time::Instant;

use super::command::{parse_command, Command, HELP};
use super::render::{render_board, win_message};
use crate::core::{CardId, FlipResolution, PendingFlip, Selection};
use crate::game::MemoryGame;

/// Whether the loop should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Clone, Copy, Debug)]
struct ScheduledFlip {
    due: Instant,
    flip: PendingFlip,
}

/// Terminal front-end state.
pub struct App {
    game: MemoryGame,
    scheduled: Option<ScheduledFlip>,
    styled: bool,
}

impl App {
    #[must_use]
    pub fn new(game: MemoryGame, styled: bool) -> Self {
        Self {
            game,
            scheduled: None,
            styled,
        }
    }

    #[must_use]
    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    /// When the pending flip-back is due, if one is scheduled.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.scheduled.map(|s| s.due)
    }

    /// Print the board.
    pub fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        let board = render_board(&self.game.view(), self.game.config().columns, self.styled);
        write!(out, "\n{board}")?;
        out.flush()
    }

    /// Handle one line of input received at `now`.
    pub fn handle_line(&mut self, line: &str, now: Instant, out: &mut impl Write) -> io::Result<Control> {
        let command = match parse_command(line, self.game.config().columns) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(Control::Continue);
            }
        };

        match command {
            Command::Quit => return Ok(Control::Quit),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Control::Continue);
            }
            Command::Restart => {
                self.game.restart();
                self.scheduled = None;
            }
            Command::Select(card) => self.select(card, now, out)?,
        }

        self.draw(out)?;
        Ok(Control::Continue)
    }

    fn select(&mut self, card: CardId, now: Instant, out: &mut impl Write) -> io::Result<()> {
        match self.game.select_card(card) {
            Selection::Ignored(reason) => writeln!(out, "{reason}")?,
            Selection::Revealed(_) => {}
            Selection::Matched { completed, .. } => {
                if let Some(done) = completed {
                    self.draw(out)?;
                    writeln!(out, "\n{}", win_message(done.moves))?;
                    self.game.restart();
                }
            }
            Selection::Mismatched(flip) => {
                self.scheduled = Some(ScheduledFlip {
                    due: now + flip.delay,
                    flip,
                });
            }
        }
        Ok(())
    }

    /// Resolve the pending flip if it is due at `now`.
    ///
    /// Returns true if the board changed.
    pub fn fire_due(&mut self, now: Instant, out: &mut impl Write) -> io::Result<bool> {
        let Some(scheduled) = self.scheduled else {
            return Ok(false);
        };
        if now < scheduled.due {
            return Ok(false);
        }

        self.scheduled = None;
        match self.game.resolve(&scheduled.flip) {
            FlipResolution::FlippedBack(_) => {
                self.draw(out)?;
                Ok(true)
            }
            FlipResolution::Stale => Ok(false),
        }
    }
}
