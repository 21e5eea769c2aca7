//! Geometric move-shape check.
//!
//! The check looks only at the piece and the displacement between two
//! squares. Occupancy, blocking pieces, turn order and king safety are not
//! considered, so a pawn may step diagonally onto an empty square and a rook
//! may pass through other pieces.

use crate::square::{Square, SquareError};
use crate::types::{Piece, PieceColor, PieceKind};

/// Signed displacement from one square to another.
///
/// Positive `rows` points toward rank 8, positive `cols` toward the h-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement {
    pub cols: i8,
    pub rows: i8,
}

impl Displacement {
    pub fn between(from: Square, to: Square) -> Self {
        Self {
            cols: to.file() as i8 - from.file() as i8,
            rows: to.rank() as i8 - from.rank() as i8,
        }
    }

    fn is_straight(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    fn is_diagonal(self) -> bool {
        self.rows.abs() == self.cols.abs()
    }
}

impl Piece {
    /// Whether `from -> to` has a shape this piece may move in.
    pub fn is_legal_shape(self, from: Square, to: Square) -> bool {
        let d = Displacement::between(from, to);
        match (self.kind, self.color) {
            (PieceKind::Pawn, PieceColor::White) => d.rows == 1 && d.cols.abs() <= 1,
            (PieceKind::Pawn, PieceColor::Black) => d.rows == -1 && d.cols.abs() <= 1,
            (PieceKind::Rook, _) => d.is_straight(),
            (PieceKind::Bishop, _) => d.is_diagonal(),
            (PieceKind::Queen, _) => d.is_straight() || d.is_diagonal(),
            (PieceKind::King, _) => d.rows.abs() <= 1 && d.cols.abs() <= 1,
            (PieceKind::Knight, _) => {
                matches!((d.rows.abs(), d.cols.abs()), (2, 1) | (1, 2))
            }
        }
    }
}

/// Check a move given as a piece symbol and two square identifiers.
///
/// `symbol` may be a board glyph (`♘`) or a notation letter (`N`). An
/// unrecognized symbol is never legal and its squares are not inspected.
pub fn is_legal_shape(symbol: char, start: &str, end: &str) -> Result<bool, SquareError> {
    let Some(piece) = Piece::from_symbol(symbol) else {
        tracing::debug!(%symbol, "unrecognized piece symbol");
        return Ok(false);
    };
    let from = Square::parse(start)?;
    let to = Square::parse(end)?;
    let legal = piece.is_legal_shape(from, to);
    tracing::debug!(%piece, %from, %to, legal, "shape check");
    Ok(legal)
}

/// Every square `piece` could reach from `from` by shape alone.
pub fn legal_destinations(piece: Piece, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| to != from && piece.is_legal_shape(from, to))
        .collect()
}
