//! Decoding of the FEN piece-placement field into a [`Grid`].

use crate::grid::Grid;
use crate::types::Piece;

/// The standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const RANK_SEPARATOR: char = '/';

/// Notation that does not describe eight well-formed ranks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("Empty board notation")]
    Empty,
    #[error("Expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("Rank {rank} expands to {width} squares, expected 8")]
    RankWidth { rank: u8, width: usize },
    #[error("Invalid piece character: {0:?}")]
    InvalidPiece(char),
}

/// Decode the board layout of `notation`.
///
/// Only the first whitespace-separated field is read; side to move, castling
/// rights and the counters may be present and are ignored.
pub fn decode(notation: &str) -> Result<Grid, NotationError> {
    let placement = notation
        .split_whitespace()
        .next()
        .ok_or(NotationError::Empty)?;

    let groups: Vec<&str> = placement.split(RANK_SEPARATOR).collect();
    if groups.len() != 8 {
        return Err(NotationError::RankCount(groups.len()));
    }

    let mut rows = [[None; 8]; 8];
    for (row_idx, group) in groups.iter().enumerate() {
        let cells = expand_rank(group)?;
        if cells.len() != 8 {
            return Err(NotationError::RankWidth {
                rank: 8 - row_idx as u8,
                width: cells.len(),
            });
        }
        rows[row_idx].copy_from_slice(&cells);
    }

    tracing::debug!(placement, "decoded board notation");
    Ok(Grid::from_rows(rows))
}

/// Expand one rank-group left to right without checking its width.
///
/// A digit contributes that many empty cells, a letter one piece cell.
pub fn expand_rank(group: &str) -> Result<Vec<Option<Piece>>, NotationError> {
    let mut row = Vec::with_capacity(8);
    for c in group.chars() {
        if let Some(run) = c.to_digit(10) {
            row.extend(std::iter::repeat(None).take(run as usize));
        } else {
            let piece = Piece::from_fen_char(c).ok_or(NotationError::InvalidPiece(c))?;
            row.push(Some(piece));
        }
    }
    Ok(row)
}

/// Encode the grid back into a placement field, compressing empty runs.
pub fn encode_placement(grid: &Grid) -> String {
    let mut out = String::with_capacity(64);
    for (row_idx, row) in grid.rows().iter().enumerate() {
        if row_idx > 0 {
            out.push(RANK_SEPARATOR);
        }
        let mut empty = 0;
        for cell in row {
            match cell {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
    }
    out
}
