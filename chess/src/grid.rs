//! The decoded 8x8 board that the controller keeps as the source of truth.

use crate::square::Square;
use crate::types::Piece;
use serde::Serialize;

/// Row 0 is rank 8, column 0 is the a-file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: [[Option<Piece>; 8]; 8],
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[Option<Piece>; 8]; 8]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.rows
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.grid_index();
        self.rows[row][col]
    }

    /// Place (or clear) a square, returning what stood there before.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let (row, col) = square.grid_index();
        std::mem::replace(&mut self.rows[row][col], piece)
    }

    /// Move whatever stands on `from` to `to`.
    ///
    /// Returns `None` when `from` is empty (nothing changes), otherwise
    /// `Some(previous occupant of to)`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Option<Piece>> {
        let piece = self.piece_at(from)?;
        if from == to {
            return Some(None);
        }
        self.set(from, None);
        Some(self.set(to, Some(piece)))
    }

    /// Occupied squares with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }
}

/// Plain-text diagram, rank 8 on top, `.` for empty squares.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_idx, row) in self.rows.iter().enumerate() {
            write!(f, "{} ", 8 - row_idx)?;
            for cell in row {
                let c = cell.map(Piece::to_fen_char).unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 'a'..='h' {
            write!(f, " {file}")?;
        }
        Ok(())
    }
}
