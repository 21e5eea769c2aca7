//! Square identifiers in `<file><rank>` form, e.g. `e4`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A board square. `file` 0 is the a-file, `rank` 0 is rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    file: u8,
    rank: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// Not a file letter a-h followed by a rank digit 1-8.
    #[error("Malformed square: {0:?}")]
    Malformed(String),
}

impl Square {
    /// Build from zero-based file and rank indices.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    /// Build from grid coordinates (row 0 is rank 8, column 0 is the a-file).
    pub fn from_grid(row: usize, col: usize) -> Option<Self> {
        if row > 7 || col > 7 {
            return None;
        }
        Self::new(col as u8, 7 - row as u8)
    }

    /// Parse a square identifier.
    pub fn parse(s: &str) -> Result<Self, SquareError> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::Malformed(s.to_string()));
        };
        if !('a'..='h').contains(&f) || !('1'..='8').contains(&r) {
            return Err(SquareError::Malformed(s.to_string()));
        }
        Ok(Self {
            file: f as u8 - b'a',
            rank: r as u8 - b'1',
        })
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }

    /// `(row, col)` in the grid.
    pub fn grid_index(self) -> (usize, usize) {
        (7 - self.rank as usize, self.file as usize)
    }

    pub fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 1
    }

    /// Every square, a1..h1 then a2..h2 and so on.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_string()
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
