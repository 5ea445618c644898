//! Check and pin detection around a single square.
//!
//! A virtual queen of the defending color is dropped on the target square of a
//! board stripped of every defending piece. Each of its rays stops at the
//! first enemy piece. That piece is a threat only if its own catalog contains
//! the mirrored attack: the same line, pointing back at the target, within
//! reach. Walking the real board between the two then decides between a
//! check (nothing in the way), a pin (one defender in the way), or nothing.
//! Ring attackers (knights, kings) cannot be blocked, so they are always checks.

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::geometry::{Direction, Segment, ray_length, ray_path, ring_path};
use crate::movement::{FigureMovement, Intent, Movement, potential_movements};
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// One line or ring through which an enemy piece threatens a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackInfo {
    /// Where the threatening piece stands.
    pub attacker: Square,
    /// The attacker's movement toward the target. Linear threats carry the
    /// exact distance as their reach.
    pub movement: FigureMovement,
    /// `None` for a direct threat (check). `Some(sq)` when exactly one
    /// defending piece on `sq` blocks the line: that piece is pinned.
    pub defender: Option<Square>,
}

impl AttackInfo {
    #[inline]
    pub fn is_check(&self) -> bool {
        self.defender.is_none()
    }

    #[inline]
    pub fn is_pin(&self) -> bool {
        self.defender.is_some()
    }

    /// Direction of the threat line, from attacker to target.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.movement.movement.direction()
    }

    /// The attacker's square followed by every square strictly between it and
    /// the target. `None` for ring threats, which have no line to block.
    pub fn line(&self) -> Option<Segment> {
        match self.movement.movement {
            Movement::Linear {
                direction,
                reach: Some(distance),
            } => Some(Segment::new(self.attacker.coord(), direction, distance)),
            _ => None,
        }
    }

    /// Squares where a defending piece ends this threat: capture or block.
    pub fn resolution_squares(&self) -> SquareSet {
        self.line()
            .map_or(self.attacker.set(), |segment| segment.squares())
    }
}

/// Every enemy line or ring that reaches `target`, from the point of view of
/// a `color` piece standing there.
///
/// `target` does not need to hold a piece, which is how king destinations are
/// tested. Kings of `color` never count as blockers, so a king stepping along
/// a checking line cannot shield itself.
pub fn attack_lines(board: &Board, target: Square, color: Color) -> Vec<AttackInfo> {
    let enemy = color.flip();
    // The virtual queen replaces whatever stands on the target.
    let stripped = board.side(enemy).without(target);
    let mut lines = Vec::new();

    for dir in Direction::ALL {
        let distance = ray_length(target, dir, stripped);
        let Some(first) = target.coord().step(dir, distance).to_square() else {
            continue;
        };
        if distance == 0 || !stripped.contains(first) {
            continue;
        }
        let Some(attacker) = board.piece_at(first) else {
            continue;
        };

        let toward_target = dir.reverse();
        let threatens = potential_movements(attacker)
            .iter()
            .any(|m| m.attacks_along(toward_target, distance));
        if !threatens {
            continue;
        }

        let mut blockers = ray_path(target, dir, distance - 1).filter(|&sq| {
            board
                .piece_at(sq)
                .is_some_and(|p| p.color() == color && p.kind() != PieceKind::King)
        });
        let defender = match (blockers.next(), blockers.next()) {
            (None, _) => None,
            (Some(single), None) => Some(single),
            (Some(_), Some(_)) => continue,
        };

        lines.push(AttackInfo {
            attacker: first,
            movement: FigureMovement::new(
                Intent::Attack,
                Movement::Linear {
                    direction: toward_target,
                    reach: Some(distance),
                },
            ),
            defender,
        });
    }

    for radius in [1, 2] {
        for sq in ring_path(target, radius) {
            let Some(piece) = board.piece_at(sq).filter(|p| p.color() == enemy) else {
                continue;
            };
            if potential_movements(piece)
                .iter()
                .any(|m| m.attacks_ring(radius))
            {
                lines.push(AttackInfo {
                    attacker: sq,
                    movement: FigureMovement::new(Intent::Attack, Movement::Ring { radius }),
                    defender: None,
                });
            }
        }
    }

    trace!(
        target = %target,
        %color,
        checks = lines.iter().filter(|l| l.is_check()).count(),
        pins = lines.iter().filter(|l| l.is_pin()).count(),
        "attack lines"
    );
    lines
}

/// [`attack_lines`] for the piece standing on `square`.
///
/// # Errors
///
/// [`MoveError::NoFigureOnPos`] if `square` is empty.
pub fn attacks_on(board: &Board, square: Square) -> Result<Vec<AttackInfo>, MoveError> {
    let piece = board
        .piece_at(square)
        .ok_or(MoveError::NoFigureOnPos { square })?;
    Ok(attack_lines(board, square, piece.color()))
}

/// Return `true` if a piece of `by` could capture on `sq` right now.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    attack_lines(board, sq, by.flip())
        .iter()
        .any(AttackInfo::is_check)
}
