//! Keyboard move entry.

use chess::{Square, SquareError};

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Enter a move as two squares, e.g. 'e2 e3'")]
    Shape,
    #[error(transparent)]
    Square(#[from] SquareError),
}

/// Parse `e2 e3`, `e2-e3` or `e2e3` into an origin and destination.
pub fn parse_move_input(input: &str) -> Result<(Square, Square), InputError> {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|p| !p.is_empty())
        .collect();

    let (from, to) = match parts.as_slice() {
        [from, to] => (*from, *to),
        [joined] if joined.len() == 4 && joined.is_ascii() => joined.split_at(2),
        _ => return Err(InputError::Shape),
    };

    Ok((Square::parse(from)?, Square::parse(to)?))
}
