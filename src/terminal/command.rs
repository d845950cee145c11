//! Parsing player input.
//!
//! A card is addressed either by its 1-based position (`7`) or by row
//! letter and 1-based column (`b3`). Everything else is a word command.

use thiserror::Error;

use crate::core::CardId;

/// A parsed line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Turn a card face up.
    Select(CardId),
    /// Deal a new round.
    Restart,
    /// Print the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Errors from parsing a line of input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("enter a card position, or 'h' for help")]
    Empty,

    #[error("unknown command '{0}', type 'h' for help")]
    Unknown(String),

    #[error("positions start at 1")]
    ZeroPosition,

    #[error("position is off the board")]
    PositionOutOfRange,

    #[error("column {column} is off the board (1-{columns})")]
    ColumnOutOfRange { column: usize, columns: usize },
}

pub const HELP: &str = "\
commands:
  <n>        reveal card number n (1-based, row by row)
  <row><col> reveal a card by coordinate, e.g. b3
  r          restart with a new deck
  h          show this help
  q          quit";

/// Parse one line of input for a board `columns` wide.
///
/// Positions past the last card are passed through; the round reports
/// them as out of range. Positions too large to name any card are
/// rejected here.
pub fn parse_command(input: &str, columns: usize) -> Result<Command, CommandError> {
    let input = input.trim().to_ascii_lowercase();

    match input.as_str() {
        "" => return Err(CommandError::Empty),
        "r" | "restart" => return Ok(Command::Restart),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    if let Ok(position) = input.parse::<usize>() {
        return position_to_card(position);
    }

    let mut chars = input.chars();
    if let Some(row @ 'a'..='z') = chars.next() {
        if let Ok(column) = chars.as_str().parse::<usize>() {
            return coordinate_to_card(row, column, columns);
        }
    }

    Err(CommandError::Unknown(input))
}

fn position_to_card(position: usize) -> Result<Command, CommandError> {
    if position == 0 {
        return Err(CommandError::ZeroPosition);
    }
    card_at(position - 1)
}

fn coordinate_to_card(row: char, column: usize, columns: usize) -> Result<Command, CommandError> {
    if column == 0 {
        return Err(CommandError::ZeroPosition);
    }
    if column > columns {
        return Err(CommandError::ColumnOutOfRange { column, columns });
    }
    let row = (row as u8 - b'a') as usize;
    let index = row
        .checked_mul(columns)
        .and_then(|start| start.checked_add(column - 1))
        .ok_or(CommandError::PositionOutOfRange)?;
    card_at(index)
}

fn card_at(index: usize) -> Result<Command, CommandError> {
    let index = u32::try_from(index).map_err(|_| CommandError::PositionOutOfRange)?;
    Ok(Command::Select(CardId::new(index)))
}
