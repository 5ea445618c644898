//! The movement catalog: what each piece kind could do on an empty board.
//!
//! Shapes are color- and square-independent except for pawns, whose forward
//! direction comes from their color and whose reach depends on whether they
//! have moved. Realizing a shape on an actual board is the move generator's job.

use crate::color::Color;
use crate::geometry::Direction;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Whether a movement relocates a piece to an empty square or captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Move,
    Attack,
}

/// A geometric movement descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Slide along `direction`. `reach` of `None` means until blocked or the edge.
    Linear {
        direction: Direction,
        reach: Option<u8>,
    },
    /// Step to a fixed ring pattern: radius 1 is the king, radius 2 the knight.
    Ring { radius: u8 },
}

impl Movement {
    /// Whether a slide of `distance` squares is within reach.
    #[inline]
    pub fn reaches(&self, distance: u8) -> bool {
        match *self {
            Movement::Linear { reach, .. } => reach.is_none_or(|r| distance <= r),
            Movement::Ring { .. } => false,
        }
    }

    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            Movement::Linear { direction, .. } => Some(direction),
            Movement::Ring { .. } => None,
        }
    }
}

/// A movement descriptor paired with its intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FigureMovement {
    pub intent: Intent,
    pub movement: Movement,
}

impl FigureMovement {
    pub const fn new(intent: Intent, movement: Movement) -> FigureMovement {
        FigureMovement { intent, movement }
    }

    /// True if this movement captures along `direction` over `distance` squares.
    pub fn attacks_along(&self, direction: Direction, distance: u8) -> bool {
        self.intent == Intent::Attack
            && self.movement.direction() == Some(direction)
            && self.movement.reaches(distance)
    }

    /// True if this movement captures via the ring of the given radius.
    pub fn attacks_ring(&self, radius: u8) -> bool {
        self.intent == Intent::Attack && self.movement == Movement::Ring { radius }
    }
}

fn slides(directions: &[Direction], reach: Option<u8>) -> Vec<Movement> {
    directions
        .iter()
        .map(|&direction| Movement::Linear { direction, reach })
        .collect()
}

/// Non-pawns move and capture with the same geometry.
fn both_intents(shapes: Vec<Movement>) -> Vec<FigureMovement> {
    shapes
        .into_iter()
        .flat_map(|m| {
            [
                FigureMovement::new(Intent::Move, m),
                FigureMovement::new(Intent::Attack, m),
            ]
        })
        .collect()
}

fn pawn_movements(color: Color, has_moved: bool) -> Vec<FigureMovement> {
    let (forward, captures) = match color {
        Color::White => (
            Direction::NORTH,
            [Direction::NORTH_WEST, Direction::NORTH_EAST],
        ),
        Color::Black => (
            Direction::SOUTH,
            [Direction::SOUTH_WEST, Direction::SOUTH_EAST],
        ),
    };

    let push = Movement::Linear {
        direction: forward,
        reach: Some(if has_moved { 1 } else { 2 }),
    };
    let mut movements = vec![FigureMovement::new(Intent::Move, push)];
    movements.extend(captures.map(|direction| {
        FigureMovement::new(
            Intent::Attack,
            Movement::Linear {
                direction,
                reach: Some(1),
            },
        )
    }));
    movements
}

/// The unfiltered movement set of `piece`, before any legality check.
pub fn potential_movements(piece: Piece) -> Vec<FigureMovement> {
    match piece.kind() {
        PieceKind::Pawn => pawn_movements(piece.color(), piece.has_moved()),
        PieceKind::Knight => both_intents(vec![Movement::Ring { radius: 2 }]),
        PieceKind::Bishop => both_intents(slides(&Direction::DIAGONAL, None)),
        PieceKind::Rook => both_intents(slides(&Direction::ORTHOGONAL, None)),
        PieceKind::Queen => both_intents(slides(&Direction::ALL, None)),
        PieceKind::King => both_intents(vec![Movement::Ring { radius: 1 }]),
    }
}
