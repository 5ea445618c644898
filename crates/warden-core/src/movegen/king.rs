//! King destinations.

use crate::board::Board;
use crate::movement::potential_movements;
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::{is_square_attacked, realize};

/// Ring steps of the king on `from` that do not land on an attacked square.
///
/// The attack test never treats the king's own body as a blocker, so retreating
/// along a checking line is rejected.
pub(super) fn king_destinations(board: &Board, from: Square, king: Piece) -> SquareSet {
    let enemy = king.color().flip();
    realize(board, from, &potential_movements(king))
        .filter(|&to| !is_square_attacked(board, to, enemy))
        .collect()
}
