//! Key helpers for board navigation.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves the board cursor one cell for an arrow key, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Cell for a digit key, `1` = top-left through `9` = bottom-right.
pub fn digit_position(c: char) -> Option<Position> {
    Position::from_number(c.to_digit(10)? as usize)
}
