pub mod controller;
pub mod error;
pub mod fen;
pub mod grid;
pub mod legality;
pub mod square;
pub mod types;
pub mod view;

pub use controller::{BoardController, MoveOutcome};
pub use error::ChessError;
pub use fen::{decode, encode_placement, expand_rank, NotationError, STARTING_FEN};
pub use grid::Grid;
pub use legality::{is_legal_shape, legal_destinations, Displacement};
pub use square::{Square, SquareError};
pub use types::{Piece, PieceColor, PieceKind};
pub use view::{BoardView, MoveAttempt};
