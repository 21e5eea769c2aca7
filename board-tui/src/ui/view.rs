use chess::{BoardView, Grid, MoveAttempt, Square};

/// Message shown in the modal when a move is refused.
pub const ILLEGAL_MOVE_NOTICE: &str = "Illegal move!";

/// Terminal-side state the controller drives.
///
/// Holds the last grid it was told to render; the controller's grid stays
/// authoritative.
#[derive(Debug, Clone, Default)]
pub struct TuiView {
    grid: Grid,
    last_move: Option<(Square, Square)>,
    notice: Option<Notice>,
    status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub detail: Option<String>,
}

impl TuiView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}

impl BoardView for TuiView {
    fn render(&mut self, grid: &Grid) {
        self.grid = grid.clone();
    }

    fn apply_move(&mut self, from: Square, to: Square) {
        self.last_move = Some((from, to));
        self.status = Some(format!("Moved {from}-{to}"));
    }

    fn reject(&mut self, attempt: &MoveAttempt) {
        tracing::debug!(%attempt, "showing rejection notice");
        self.notice = Some(Notice {
            message: ILLEGAL_MOVE_NOTICE.to_string(),
            detail: Some(attempt.to_string()),
        });
        self.status = Some(format!("Rejected {attempt}"));
    }
}
