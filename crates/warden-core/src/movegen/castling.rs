//! Castling move generation.

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{MoveInfo, Step};
use crate::color::Color;
use crate::config::RulesConfig;
use crate::geometry::{Direction, ray_path};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{CheckState, is_square_attacked};

/// File both kings start on.
const KING_HOME_FILE: i8 = 4;

/// Castling moves available to `king` on `from`.
///
/// Each side needs its right, the king on its home square, the own rook on its
/// corner and nothing standing between them. With castling safety on, the king
/// must also not be in check and may not cross or land on an attacked square.
pub(super) fn castling_moves(
    board: &Board,
    from: Square,
    king: Piece,
    state: &CheckState<'_>,
    rules: RulesConfig,
) -> Vec<MoveInfo> {
    let color = king.color();
    if from.rank() != color.back_rank() || from.file() != KING_HOME_FILE {
        return Vec::new();
    }
    if rules.castling_safety && state.is_check() {
        return Vec::new();
    }
    CastleSide::ALL
        .into_iter()
        .filter_map(|side| castle(board, from, color, side, rules))
        .collect()
}

fn castle(
    board: &Board,
    king_sq: Square,
    color: Color,
    side: CastleSide,
    rules: RulesConfig,
) -> Option<MoveInfo> {
    if !board.castling().has(color, side) {
        return None;
    }
    let rook_sq = side.rook_home(color);
    if !board
        .piece_at(rook_sq)
        .is_some_and(|p| p.is(PieceKind::Rook, color))
    {
        return None;
    }

    let (dir, distance) = Direction::between(king_sq, rook_sq)?;
    if ray_path(king_sq, dir, distance - 1).any(|sq| board.is_occupied(sq)) {
        return None;
    }

    // The king crosses one square and lands on the next.
    if rules.castling_safety
        && ray_path(king_sq, dir, 2).any(|sq| is_square_attacked(board, sq, color.flip()))
    {
        trace!(%color, ?side, "castling path attacked");
        return None;
    }

    let king_to = Square::from_coords(color.back_rank(), side.king_target_file())?;
    let rook_to = Square::from_coords(color.back_rank(), side.rook_target_file())?;
    Some(MoveInfo::castle(
        Step::new(king_sq, king_to),
        Step::new(rook_sq, rook_to),
    ))
}
