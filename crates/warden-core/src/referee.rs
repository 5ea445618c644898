//! A rules session: one board, one writer.

use tracing::{debug, warn};

use crate::board::Board;
use crate::chess_move::{MoveInfo, PromotionPiece};
use crate::color::Color;
use crate::config::RulesConfig;
use crate::error::MoveError;
use crate::geometry::Coord;
use crate::movegen;

/// Holds the current position and answers legality queries about it.
///
/// Queries borrow the board; only [`Referee::apply_move`] and
/// [`Referee::load`] replace it. Every operation fails with
/// [`MoveError::BoardIsNull`] until a board is loaded.
#[derive(Debug, Clone, Default)]
pub struct Referee {
    board: Option<Board>,
    rules: RulesConfig,
}

impl Referee {
    /// A session with no board loaded.
    pub fn new(rules: RulesConfig) -> Referee {
        Referee { board: None, rules }
    }

    /// A session on the standard starting position.
    pub fn with_starting_position(rules: RulesConfig) -> Referee {
        Referee {
            board: Some(Board::starting_position()),
            rules,
        }
    }

    /// Replace the current board after checking its structure.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidBoard`] if `board` fails [`Board::validate`]. The
    /// previous board stays loaded.
    pub fn load(&mut self, board: Board) -> Result<(), MoveError> {
        board.validate()?;
        debug!(side = %board.side_to_move(), castling = %board.castling(), "board loaded");
        self.board = Some(board);
        Ok(())
    }

    /// The current board.
    ///
    /// # Errors
    ///
    /// [`MoveError::BoardIsNull`] if no board is loaded.
    pub fn board(&self) -> Result<&Board, MoveError> {
        self.board.as_ref().ok_or(MoveError::BoardIsNull)
    }

    /// Legal moves of the piece on `pos`. See [`movegen::legal_moves`].
    pub fn legal_moves(&self, pos: impl Into<Coord>) -> Result<Vec<MoveInfo>, MoveError> {
        movegen::legal_moves(self.board()?, pos, self.rules)
    }

    /// Legal moves of every `color` piece.
    pub fn legal_moves_for(&self, color: Color) -> Result<Vec<MoveInfo>, MoveError> {
        movegen::legal_moves_for(self.board()?, color, self.rules)
    }

    /// Validate and play `mv` for the side to move.
    ///
    /// # Errors
    ///
    /// See [`Board::make_move`]. A rejected move leaves the board unchanged.
    pub fn apply_move(
        &mut self,
        mv: &MoveInfo,
        promotion: Option<PromotionPiece>,
    ) -> Result<(), MoveError> {
        let rules = self.rules;
        let board = self.board.as_mut().ok_or(MoveError::BoardIsNull)?;
        match board.apply_move(mv, promotion, rules) {
            Ok(()) => {
                debug!(mv = %mv, next = %board.side_to_move(), "move accepted");
                Ok(())
            }
            Err(e) => {
                warn!(mv = %mv, error = %e, "move rejected");
                Err(e)
            }
        }
    }

    pub fn is_in_check(&self, color: Color) -> Result<bool, MoveError> {
        movegen::is_in_check(self.board()?, color)
    }

    pub fn is_checkmate(&self, color: Color) -> Result<bool, MoveError> {
        movegen::is_checkmate(self.board()?, color, self.rules)
    }

    pub fn is_stalemate(&self, color: Color) -> Result<bool, MoveError> {
        movegen::is_stalemate(self.board()?, color, self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn empty_session_reports_null_board() {
        let referee = Referee::default();
        assert_eq!(referee.board().unwrap_err(), MoveError::BoardIsNull);
        assert_eq!(referee.legal_moves(Square::E2).unwrap_err(), MoveError::BoardIsNull);
        assert_eq!(referee.is_in_check(Color::White).unwrap_err(), MoveError::BoardIsNull);

        let mut referee = Referee::new(RulesConfig::default());
        let err = referee
            .apply_move(&MoveInfo::new(Square::E2, Square::E4), None)
            .unwrap_err();
        assert_eq!(err, MoveError::BoardIsNull);
    }

    #[test]
    fn load_rejects_two_kings_and_keeps_the_old_board() {
        let mut referee = Referee::with_starting_position(RulesConfig::default());
        let bad = Board::starting_position()
            .with_piece(Square::E4, Piece::new(PieceKind::King, Color::White));
        let err = referee.load(bad).unwrap_err();
        assert_eq!(
            err,
            MoveError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    color: "white",
                    count: 2
                }
            }
        );
        assert_eq!(*referee.board().unwrap(), Board::starting_position());
    }

    #[test]
    fn opening_moves_alternate_sides() {
        let mut referee = Referee::with_starting_position(RulesConfig::default());
        referee
            .apply_move(&MoveInfo::new(Square::E2, Square::E4), None)
            .unwrap();
        assert_eq!(referee.board().unwrap().side_to_move(), Color::Black);

        let err = referee
            .apply_move(&MoveInfo::new(Square::D2, Square::D4), None)
            .unwrap_err();
        assert!(matches!(err, MoveError::ImpossibleMove { .. }));

        referee
            .apply_move(&MoveInfo::new(Square::E7, Square::E5), None)
            .unwrap();
        assert_eq!(referee.legal_moves_for(Color::White).unwrap().len(), 29);
    }

    #[test]
    fn fools_mate() {
        let mut referee = Referee::with_starting_position(RulesConfig::default());
        for (from, to) in [
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
            (Square::D8, Square::H4),
        ] {
            referee.apply_move(&MoveInfo::new(from, to), None).unwrap();
        }
        assert!(referee.is_in_check(Color::White).unwrap());
        assert!(referee.is_checkmate(Color::White).unwrap());
        assert!(!referee.is_stalemate(Color::White).unwrap());
    }
}
