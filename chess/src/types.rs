//! Canonical piece and color types for the project.
//!
//! Board notation uses ASCII letters while the board view draws Unicode
//! glyphs; both are conversions of the same [`Piece`] value.

use serde::{Deserialize, Serialize};

/// Project-owned piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Project-owned color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

/// A colored piece as it stands on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    pub fn to_char_upper(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    pub fn to_char_lower(self) -> char {
        self.to_char_upper().to_ascii_lowercase()
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Pawn),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'r' => Some(Self::Rook),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }
}

impl PieceColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Parse a notation letter; uppercase is white.
    pub fn from_fen_char(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        Some(Self::new(kind, color))
    }

    pub fn to_fen_char(self) -> char {
        match self.color {
            PieceColor::White => self.kind.to_char_upper(),
            PieceColor::Black => self.kind.to_char_lower(),
        }
    }

    /// Unicode chess glyph used by the board view.
    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (PieceColor::White, PieceKind::King) => '♔',
            (PieceColor::White, PieceKind::Queen) => '♕',
            (PieceColor::White, PieceKind::Rook) => '♖',
            (PieceColor::White, PieceKind::Bishop) => '♗',
            (PieceColor::White, PieceKind::Knight) => '♘',
            (PieceColor::White, PieceKind::Pawn) => '♙',
            (PieceColor::Black, PieceKind::King) => '♚',
            (PieceColor::Black, PieceKind::Queen) => '♛',
            (PieceColor::Black, PieceKind::Rook) => '♜',
            (PieceColor::Black, PieceKind::Bishop) => '♝',
            (PieceColor::Black, PieceKind::Knight) => '♞',
            (PieceColor::Black, PieceKind::Pawn) => '♟',
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        let (color, kind) = match c {
            '♔' => (PieceColor::White, PieceKind::King),
            '♕' => (PieceColor::White, PieceKind::Queen),
            '♖' => (PieceColor::White, PieceKind::Rook),
            '♗' => (PieceColor::White, PieceKind::Bishop),
            '♘' => (PieceColor::White, PieceKind::Knight),
            '♙' => (PieceColor::White, PieceKind::Pawn),
            '♚' => (PieceColor::Black, PieceKind::King),
            '♛' => (PieceColor::Black, PieceKind::Queen),
            '♜' => (PieceColor::Black, PieceKind::Rook),
            '♝' => (PieceColor::Black, PieceKind::Bishop),
            '♞' => (PieceColor::Black, PieceKind::Knight),
            '♟' => (PieceColor::Black, PieceKind::Pawn),
            _ => return None,
        };
        Some(Self::new(kind, color))
    }

    /// Accept either a glyph or a notation letter.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::from_glyph(c).or_else(|| Self::from_fen_char(c))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char_upper())
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
