//! The seam between the board logic and whatever draws the board.

use crate::grid::Grid;
use crate::square::{Square, SquareError};

/// A drop gesture as reported by a view: the dragged symbol and both squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveAttempt {
    pub symbol: char,
    pub from: Square,
    pub to: Square,
}

impl MoveAttempt {
    pub fn new(symbol: char, from: Square, to: Square) -> Self {
        Self { symbol, from, to }
    }

    /// Build an attempt from raw square identifiers.
    pub fn parse(symbol: char, from: &str, to: &str) -> Result<Self, SquareError> {
        Ok(Self::new(symbol, Square::parse(from)?, Square::parse(to)?))
    }
}

impl std::fmt::Display for MoveAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}-{}", self.symbol, self.from, self.to)
    }
}

/// A rendering surface driven by [`crate::BoardController`].
///
/// Views never decide legality and never own the authoritative board; they
/// draw the grid they are handed and report gestures as [`MoveAttempt`]s.
pub trait BoardView {
    /// Draw the full board.
    fn render(&mut self, grid: &Grid);

    /// A move was accepted and the grid already reflects it.
    fn apply_move(&mut self, from: Square, to: Square);

    /// A move was refused; tell the user.
    fn reject(&mut self, attempt: &MoveAttempt);
}
