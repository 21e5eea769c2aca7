//! Crate-level error for callers that handle both notation and square input.

use crate::fen::NotationError;
use crate::square::SquareError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error(transparent)]
    MalformedNotation(#[from] NotationError),

    #[error(transparent)]
    MalformedSquare(#[from] SquareError),
}
