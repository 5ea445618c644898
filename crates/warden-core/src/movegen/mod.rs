//! Legal move generation.
//!
//! A piece's catalog movements are filtered in three stages: pin restriction,
//! realization against the actual board, then intersection with the squares
//! that resolve a single check. Kings skip the first and last stage and
//! instead drop every destination an enemy piece could capture on.

mod attacks;
mod castling;
mod check;
mod king;
mod pawns;
mod pins;

use tracing::trace;

use crate::board::Board;
use crate::chess_move::MoveInfo;
use crate::color::Color;
use crate::config::RulesConfig;
use crate::error::MoveError;
use crate::geometry::{Coord, Segment, ray_length, ring_path};
use crate::movement::{FigureMovement, Intent, Movement};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

pub use self::attacks::{AttackInfo, attack_lines, attacks_on, is_square_attacked};
pub use self::check::CheckState;

/// Every legal move of the piece standing on `pos`.
///
/// Legality is judged against the king of the piece's own color, whichever
/// side is to move. A side without a king has no checks or pins to respect.
///
/// # Errors
///
/// - [`MoveError::PosOutsideBoard`] if `pos` is off the grid.
/// - [`MoveError::NoFigureOnPos`] if the square is empty.
/// - [`MoveError::InvalidBoard`] if the piece's side has more than one king.
pub fn legal_moves(
    board: &Board,
    pos: impl Into<Coord>,
    rules: RulesConfig,
) -> Result<Vec<MoveInfo>, MoveError> {
    let pos = pos.into();
    let from = pos.to_square().ok_or(MoveError::PosOutsideBoard {
        rank: pos.rank,
        file: pos.file,
    })?;
    let piece = board
        .piece_at(from)
        .ok_or(MoveError::NoFigureOnPos { square: from })?;
    let color = piece.color();

    let lines = match board.king_square(color)? {
        Some(king_sq) => attack_lines(board, king_sq, color),
        None => Vec::new(),
    };
    let state = CheckState::classify(&lines);

    let destinations = if piece.kind() == PieceKind::King {
        king::king_destinations(board, from, piece)
    } else {
        match state {
            CheckState::DoubleCheck => SquareSet::EMPTY,
            CheckState::NotInCheck => {
                let movements = pins::real_movements(piece, from, &lines);
                realize(board, from, &movements)
            }
            CheckState::SingleCheck(check) => {
                let movements = pins::real_movements(piece, from, &lines);
                realize(board, from, &movements)
                    & check::resolving_squares(board, from, &movements, check)
            }
        }
    };

    let mut moves: Vec<MoveInfo> = destinations
        .map(|to| describe(board, piece, from, to))
        .collect();
    if piece.kind() == PieceKind::King {
        moves.extend(castling::castling_moves(board, from, piece, &state, rules));
    }

    trace!(square = %from, piece = %piece.kind(), ?state, count = moves.len(), "legal moves");
    Ok(moves)
}

/// Every legal move of every `color` piece, in square order.
///
/// # Errors
///
/// [`MoveError::InvalidBoard`] if `color` has more than one king.
pub fn legal_moves_for(
    board: &Board,
    color: Color,
    rules: RulesConfig,
) -> Result<Vec<MoveInfo>, MoveError> {
    let mut moves = Vec::new();
    for (sq, _) in board.pieces(color) {
        moves.extend(legal_moves(board, sq, rules)?);
    }
    Ok(moves)
}

/// Return `true` if any `color` piece has a legal move.
///
/// # Errors
///
/// [`MoveError::InvalidBoard`] if `color` has more than one king.
pub fn has_legal_move(board: &Board, color: Color, rules: RulesConfig) -> Result<bool, MoveError> {
    for (sq, _) in board.pieces(color) {
        if !legal_moves(board, sq, rules)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Return `true` if `color`'s king stands on a square the opponent attacks.
/// A side without a king is never in check.
///
/// # Errors
///
/// [`MoveError::InvalidBoard`] if `color` has more than one king.
pub fn is_in_check(board: &Board, color: Color) -> Result<bool, MoveError> {
    Ok(board
        .king_square(color)?
        .is_some_and(|king_sq| is_square_attacked(board, king_sq, color.flip())))
}

/// In check with no legal move.
///
/// # Errors
///
/// [`MoveError::InvalidBoard`] if `color` has more than one king.
pub fn is_checkmate(board: &Board, color: Color, rules: RulesConfig) -> Result<bool, MoveError> {
    Ok(is_in_check(board, color)? && !has_legal_move(board, color, rules)?)
}

/// Not in check, yet no legal move.
///
/// # Errors
///
/// [`MoveError::InvalidBoard`] if `color` has more than one king.
pub fn is_stalemate(board: &Board, color: Color, rules: RulesConfig) -> Result<bool, MoveError> {
    Ok(!is_in_check(board, color)? && !has_legal_move(board, color, rules)?)
}

/// How far a linear movement actually travels from `from`: up to and
/// including the first occupied square, capped by the movement's reach.
fn travel(board: &Board, from: Square, movement: Movement) -> Option<Segment> {
    let Movement::Linear { direction, reach } = movement else {
        return None;
    };
    let blocked = ray_length(from, direction, board.occupied());
    let length = reach.map_or(blocked, |r| blocked.min(r));
    Some(Segment::ray(from, direction, length))
}

/// Turn movement shapes into destination squares on the real board.
///
/// A move needs an empty destination, an attack needs an enemy one. Sliders
/// stop at the first occupied square.
pub(crate) fn realize(board: &Board, from: Square, movements: &[FigureMovement]) -> SquareSet {
    let Some(mover) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    let enemy = board.side(mover.color().flip());
    let empty = !board.occupied();

    let mut targets = SquareSet::EMPTY;
    for m in movements {
        let reached = match m.movement {
            Movement::Linear { .. } => travel(board, from, m.movement)
                .map_or(SquareSet::EMPTY, |segment| segment.squares()),
            Movement::Ring { radius } => ring_path(from, radius).collect(),
        };
        targets |= match m.intent {
            Intent::Move => reached & empty,
            Intent::Attack => reached & enemy,
        };
    }
    targets
}

fn describe(board: &Board, piece: Piece, from: Square, to: Square) -> MoveInfo {
    let mut info = MoveInfo::new(from, to);
    if board.is_occupied(to) {
        info = info.with_capture(to);
    }
    if let Some(sq) = pawns::promotion_square(piece, to) {
        info = info.with_promotion(sq);
    }
    info
}
