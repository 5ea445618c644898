//! Pawn-specific move details.

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// `Some(to)` when a pawn landing on `to` must promote.
pub(super) fn promotion_square(piece: Piece, to: Square) -> Option<Square> {
    (piece.kind() == PieceKind::Pawn && to.rank() == piece.color().promotion_rank()).then_some(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn only_pawns_on_the_far_rank_promote() {
        let white = Piece::new(PieceKind::Pawn, Color::White);
        let black = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(promotion_square(white, Square::C8), Some(Square::C8));
        assert_eq!(promotion_square(white, Square::C1), None);
        assert_eq!(promotion_square(black, Square::C1), Some(Square::C1));
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert_eq!(promotion_square(rook, Square::C8), None);
    }
}
