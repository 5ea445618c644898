//! Move records produced by the generator and consumed by the applicator.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces in index order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }
}

/// One piece relocating from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub from: Square,
    pub to: Square,
}

impl Step {
    pub const fn new(from: Square, to: Square) -> Step {
        Step { from, to }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// A complete move as the generator describes it.
///
/// - `primary`: the moving piece.
/// - `secondary`: the rook's step when castling.
/// - `captured`: square of the piece removed by this move.
/// - `promotion`: set when a pawn reaches the last rank; the caller must then
///   supply a [`PromotionPiece`] when applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveInfo {
    pub primary: Step,
    pub secondary: Option<Step>,
    pub captured: Option<Square>,
    pub promotion: Option<Square>,
}

impl MoveInfo {
    pub const fn new(from: Square, to: Square) -> MoveInfo {
        MoveInfo {
            primary: Step::new(from, to),
            secondary: None,
            captured: None,
            promotion: None,
        }
    }

    /// A castling move: the king's two-square step plus the rook's step.
    pub const fn castle(king: Step, rook: Step) -> MoveInfo {
        MoveInfo {
            primary: king,
            secondary: Some(rook),
            captured: None,
            promotion: None,
        }
    }

    #[must_use]
    pub const fn with_capture(mut self, sq: Square) -> MoveInfo {
        self.captured = Some(sq);
        self
    }

    #[must_use]
    pub const fn with_promotion(mut self, sq: Square) -> MoveInfo {
        self.promotion = Some(sq);
        self
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.primary.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.primary.to
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.secondary.is_some()
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for MoveInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        if let Some(rook) = self.secondary {
            write!(f, "+{rook}")?;
        }
        if self.promotion.is_some() {
            write!(f, "=?")?;
        }
        Ok(())
    }
}
