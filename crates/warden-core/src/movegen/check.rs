//! Check classification and the squares that resolve a single check.

use crate::board::Board;
use crate::geometry::ring_path;
use crate::movement::{FigureMovement, Movement};
use crate::square::Square;
use crate::square_set::SquareSet;

use super::AttackInfo;
use super::travel;

/// How many enemy pieces give check to a king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState<'a> {
    NotInCheck,
    /// Exactly one checker. Non-king pieces may capture or block it.
    SingleCheck(&'a AttackInfo),
    /// Two or more checkers. Only the king may move.
    DoubleCheck,
}

impl<'a> CheckState<'a> {
    /// Classify the attack lines computed around a king.
    pub fn classify(lines: &'a [AttackInfo]) -> CheckState<'a> {
        let mut checks = lines.iter().filter(|line| line.is_check());
        match (checks.next(), checks.next()) {
            (None, _) => CheckState::NotInCheck,
            (Some(check), None) => CheckState::SingleCheck(check),
            (Some(_), Some(_)) => CheckState::DoubleCheck,
        }
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        !matches!(self, CheckState::NotInCheck)
    }
}

/// Squares reachable from `from` through `movements` that capture or block
/// `check`.
///
/// Each linear path is intersected with the check line. Ring jumps land on
/// fixed cells, which are tested one by one. A ring checker has no line, so
/// only its own square resolves it.
pub(super) fn resolving_squares(
    board: &Board,
    from: Square,
    movements: &[FigureMovement],
    check: &AttackInfo,
) -> SquareSet {
    let Some(line) = check.line() else {
        return check.attacker.set();
    };

    let mut squares = SquareSet::EMPTY;
    for m in movements {
        squares |= match m.movement {
            Movement::Linear { .. } => travel(board, from, m.movement)
                .map_or(SquareSet::EMPTY, |path| path.intersection(&line)),
            Movement::Ring { radius } => ring_path(from, radius)
                .filter(|sq| line.contains(sq.coord()))
                .collect(),
        };
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::attack_lines;
    use crate::movement::potential_movements;
    use crate::testing::board_from_diagram;

    #[test]
    fn classify_counts_only_direct_threats() {
        let board = board_from_diagram(
            "
            ....r..k
            ........
            ........
            ........
            .b......
            ........
            ...P....
            ....K...
            ",
        );
        let lines = attack_lines(&board, Square::E1, crate::color::Color::White);
        assert_eq!(lines.len(), 2);
        let state = CheckState::classify(&lines);
        assert!(matches!(state, CheckState::SingleCheck(info) if info.attacker == Square::E8));
        assert!(state.is_check());
    }

    #[test]
    fn empty_lines_are_not_check() {
        assert_eq!(CheckState::classify(&[]), CheckState::NotInCheck);
        assert!(!CheckState::NotInCheck.is_check());
    }

    #[test]
    fn diagonal_check_blocked_by_a_crossing_rook() {
        // Bishop a5 checks e1 along a5-b4-c3-d2.
        let board = board_from_diagram(
            "
            .......k
            ........
            ........
            b.......
            ........
            ........
            ........
            .R..K...
            ",
        );
        let lines = attack_lines(&board, Square::E1, crate::color::Color::White);
        let CheckState::SingleCheck(check) = CheckState::classify(&lines) else {
            panic!("expected a single check");
        };
        let rook = board.piece_at(Square::B1).unwrap();
        let squares = resolving_squares(&board, Square::B1, &potential_movements(rook), check);
        let found: Vec<Square> = squares.collect();
        assert_eq!(found, vec![Square::B4]);
    }
}
