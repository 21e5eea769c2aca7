//! Owns the grid and applies move attempts coming back from a [`BoardView`].

use crate::fen::{self, NotationError};
use crate::grid::Grid;
use crate::types::Piece;
use crate::view::{BoardView, MoveAttempt};

/// What happened to a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved; `captured` is whatever stood on the target square.
    Moved { captured: Option<Piece> },
    /// The shape is not allowed for the piece, or the symbol is unknown.
    Rejected,
    /// The shape passed but the origin square holds no piece.
    Vacant,
}

/// Keeps the grid as the single source of truth and tells the view to follow.
pub struct BoardController<V: BoardView> {
    grid: Grid,
    view: V,
}

impl<V: BoardView> BoardController<V> {
    pub fn new(grid: Grid, view: V) -> Self {
        Self { grid, view }
    }

    pub fn from_notation(notation: &str, view: V) -> Result<Self, NotationError> {
        Ok(Self::new(fen::decode(notation)?, view))
    }

    /// Paint the initial board.
    pub fn start(&mut self) {
        tracing::info!(placement = %fen::encode_placement(&self.grid), "rendering board");
        self.view.render(&self.grid);
    }

    pub fn handle_move_attempt(&mut self, attempt: &MoveAttempt) -> MoveOutcome {
        if !self.is_legal_shape(attempt) {
            tracing::info!(%attempt, "move rejected");
            self.view.reject(attempt);
            return MoveOutcome::Rejected;
        }

        let Some(captured) = self.grid.relocate(attempt.from, attempt.to) else {
            tracing::warn!(%attempt, "no piece on origin square");
            return MoveOutcome::Vacant;
        };

        tracing::info!(%attempt, captured = ?captured.map(Piece::to_fen_char), "move applied");
        self.view.apply_move(attempt.from, attempt.to);
        self.view.render(&self.grid);
        MoveOutcome::Moved { captured }
    }

    /// Shape check only, without touching the grid or the view.
    pub fn is_legal_shape(&self, attempt: &MoveAttempt) -> bool {
        Piece::from_symbol(attempt.symbol)
            .is_some_and(|piece| piece.is_legal_shape(attempt.from, attempt.to))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
