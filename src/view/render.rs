//! Text rendering of the board.

use crossterm::style::{Stylize, style};
use tictactoe_board::{Board, Coords, Mark};

/// Renders the board as rows of boxes separated by ` |`, with a dash line
/// between rows.
///
/// Empty boxes show their 1-based box number and occupied boxes show the
/// mark glyph, both right-aligned to the width of the largest box number.
/// With `color` set, glyphs carry ANSI colour codes.
pub fn render_board(board: &Board, color: bool) -> String {
    let dimension = board.dimension();
    let width = (dimension * dimension).to_string().len();
    let dashes = "-".repeat((4 + width - 1) * dimension);

    let mut out = String::new();
    for (row, cells) in board.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            out.push(' ');
            let label = match cell.mark() {
                Some(mark) => mark.to_string(),
                None => Coords::new(row, col).box_number(dimension).to_string(),
            };
            out.push_str(&" ".repeat(width - label.len()));
            match cell.mark() {
                Some(mark) if color => out.push_str(&paint(mark)),
                _ => out.push_str(&label),
            }
            if col + 1 < dimension {
                out.push_str(" |");
            }
        }
        out.push('\n');

        if row + 1 < dimension {
            out.push_str(&dashes);
            out.push('\n');
        }
    }
    out
}

fn paint(mark: Mark) -> String {
    let glyph = style(mark);
    match mark {
        Mark::X => glyph.red().bold().to_string(),
        Mark::O => glyph.blue().bold().to_string(),
    }
}
