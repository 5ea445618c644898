//! Pin restriction of a piece's movement catalog.

use crate::movement::{FigureMovement, potential_movements};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::AttackInfo;

/// The catalog movements `piece` on `from` may still use given the attack
/// lines around its king.
///
/// A pinned piece keeps only the linear movements running along the pin
/// axis, either way. Knights never move along a line, so a pinned knight
/// keeps nothing.
pub(super) fn real_movements(piece: Piece, from: Square, lines: &[AttackInfo]) -> Vec<FigureMovement> {
    let movements = potential_movements(piece);
    let Some(axis) = lines
        .iter()
        .filter(|line| line.defender == Some(from))
        .find_map(AttackInfo::direction)
    else {
        return movements;
    };

    if piece.kind() == PieceKind::Knight {
        return Vec::new();
    }
    movements
        .into_iter()
        .filter(|m| m.movement.direction().is_some_and(|d| d.is_parallel(axis)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::color::Color;
    use crate::geometry::Direction;
    use crate::movegen::attack_lines;
    use crate::movement::Intent;
    use crate::testing::board_from_diagram;

    const DIAGONAL_PIN: &str = "
        .......k
        ........
        ........
        ........
        .......q
        ........
        .....P..
        ....K...
    ";

    #[test]
    fn unpinned_piece_keeps_its_catalog() {
        let board = Board::starting_position();
        let knight = board.piece_at(Square::B1).unwrap();
        let lines = attack_lines(&board, Square::E1, Color::White);
        assert_eq!(real_movements(knight, Square::B1, &lines), potential_movements(knight));
    }

    #[test]
    fn diagonally_pinned_pawn_keeps_only_its_capture_toward_the_pinner() {
        let board = board_from_diagram(DIAGONAL_PIN);
        let pawn = board.piece_at(Square::F2).unwrap();
        let lines = attack_lines(&board, Square::E1, Color::White);
        let kept = real_movements(pawn, Square::F2, &lines);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].intent, Intent::Attack);
        assert_eq!(kept[0].movement.direction(), Some(Direction::NORTH_EAST));
    }

    #[test]
    fn pinned_knight_keeps_nothing() {
        let board = board_from_diagram(DIAGONAL_PIN)
            .with_piece(Square::F2, Piece::new(PieceKind::Knight, Color::White));
        let knight = board.piece_at(Square::F2).unwrap();
        let lines = attack_lines(&board, Square::E1, Color::White);
        assert!(real_movements(knight, Square::F2, &lines).is_empty());
    }
}
