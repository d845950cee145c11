//! Text rendering of a round.

use colored::Colorize;

use crate::core::{CardStatus, CardView, RoundView};

const HIDDEN_FACE: &str = "??";

/// Render the move counter and the board.
///
/// With `styled` set, face-down cards are blue and matched cards green.
#[must_use]
pub fn render_board(view: &RoundView, columns: usize, styled: bool) -> String {
    let mut out = format!(
        "Moves: {}   Pairs: {}/{}\n",
        view.moves, view.matched_pairs, view.pair_count
    );

    out.push_str("  ");
    for column in 1..=columns {
        out.push_str(&format!(" {column:^4}"));
    }
    out.push('\n');

    for (row, cards) in view.cards.chunks(columns).enumerate() {
        out.push(row_label(row));
        out.push(' ');
        for card in cards {
            out.push(' ');
            out.push_str(&render_cell(card, styled));
        }
        out.push('\n');
    }

    out
}

fn row_label(row: usize) -> char {
    if row < 26 {
        (b'a' + row as u8) as char
    } else {
        ' '
    }
}

fn render_cell(card: &CardView, styled: bool) -> String {
    let face = card.symbol.as_ref().map_or(HIDDEN_FACE, |s| s.as_str());
    let cell = format!("[{face}]");

    if !styled {
        return cell;
    }
    match card.status {
        CardStatus::Hidden => cell.as_str().blue().to_string(),
        CardStatus::Revealed => cell.as_str().bold().to_string(),
        CardStatus::Matched => cell.as_str().green().to_string(),
    }
}

/// Closing line shown when a round is won.
#[must_use]
pub fn win_message(moves: u32) -> String {
    format!("Congratulations! You matched all cards in {moves} moves.")
}
