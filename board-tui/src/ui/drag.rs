//! Mouse drag-and-drop gesture tracking.
//!
//! Press on an occupied square starts a drag, movement only updates the
//! hover square, and release turns the gesture into a [`MoveAttempt`].

use chess::{Grid, MoveAttempt, Piece, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        from: Square,
        piece: Piece,
        hover: Option<Square>,
    },
}

impl DragState {
    /// Drag start. Ignored on empty squares; returns whether a drag began.
    pub fn begin(&mut self, square: Square, grid: &Grid) -> bool {
        match grid.piece_at(square) {
            Some(piece) => {
                *self = Self::Dragging {
                    from: square,
                    piece,
                    hover: Some(square),
                };
                true
            }
            None => {
                *self = Self::Idle;
                false
            }
        }
    }

    /// Drag over. Tracks the square under the pointer, nothing else.
    pub fn hover(&mut self, square: Option<Square>) {
        if let Self::Dragging { hover, .. } = self {
            *hover = square;
        }
    }

    /// Drop. Returns the attempt carrying the dragged glyph, or `None` when
    /// the drop lands off the board or back on the origin square.
    pub fn drop_on(&mut self, square: Option<Square>) -> Option<MoveAttempt> {
        let Self::Dragging { from, piece, .. } = std::mem::take(self) else {
            return None;
        };
        let to = square.filter(|&to| to != from)?;
        Some(MoveAttempt::new(piece.glyph(), from, to))
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn origin(&self) -> Option<(Square, Piece)> {
        match *self {
            Self::Dragging { from, piece, .. } => Some((from, piece)),
            Self::Idle => None,
        }
    }

    pub fn hovered(&self) -> Option<Square> {
        match *self {
            Self::Dragging { hover, .. } => hover,
            Self::Idle => None,
        }
    }
}
