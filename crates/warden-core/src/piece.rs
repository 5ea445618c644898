//! A colored piece together with how often it has moved.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece on the board.
///
/// `move_count == 0` means the piece has never moved, which is what pawn
/// double steps and castling eligibility key off.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    move_count: u16,
}

impl Piece {
    /// A piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            move_count: 0,
        }
    }

    /// The same piece with an explicit move count.
    #[inline]
    pub const fn with_move_count(self, move_count: u16) -> Piece {
        Piece { move_count, ..self }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn move_count(self) -> u16 {
        self.move_count
    }

    #[inline]
    pub const fn has_moved(self) -> bool {
        self.move_count > 0
    }

    #[inline]
    pub const fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind as u8 == kind as u8 && self.color as u8 == color as u8
    }

    /// The piece after one more move.
    #[inline]
    pub(crate) const fn moved(self) -> Piece {
        self.with_move_count(self.move_count.saturating_add(1))
    }

    /// A promoted pawn keeps its color and history, only the kind changes.
    #[inline]
    pub(crate) const fn promoted(self, kind: PieceKind) -> Piece {
        Piece { kind, ..self }
    }

    /// Uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind.symbol().to_ascii_uppercase();
        write!(f, "{color_prefix}{kind_char}#{}", self.move_count)
    }
}
