//! Move execution via copy-make.

use tracing::debug;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::{MoveInfo, PromotionPiece};
use crate::config::RulesConfig;
use crate::error::MoveError;
use crate::movegen::legal_moves;
use crate::piece_kind::PieceKind;

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NoFigureOnPos`] if the source square is empty.
    /// - [`MoveError::ImpossibleMove`] if the piece belongs to the side not to
    ///   move, or the generator would not produce `mv` for it.
    /// - [`MoveError::PromotionRequired`] if `mv` promotes and `promotion` is `None`.
    /// - [`MoveError::ImpossibleMove`] as well if `promotion` is given for a move
    ///   that does not promote.
    /// - [`MoveError::InvalidBoard`] if the mover's side has more than one king.
    pub fn make_move(
        &self,
        mv: &MoveInfo,
        promotion: Option<PromotionPiece>,
        rules: RulesConfig,
    ) -> Result<Board, MoveError> {
        let mut board = *self;
        board.apply_move(mv, promotion, rules)?;
        Ok(board)
    }

    /// In-place form of [`Board::make_move`]. On error the board is untouched.
    ///
    /// # Errors
    ///
    /// Same as [`Board::make_move`].
    pub fn apply_move(
        &mut self,
        mv: &MoveInfo,
        promotion: Option<PromotionPiece>,
        rules: RulesConfig,
    ) -> Result<(), MoveError> {
        let from = mv.from();
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoFigureOnPos { square: from })?;

        let impossible = MoveError::ImpossibleMove { from, to: mv.to() };
        if piece.color() != self.side_to_move() {
            return Err(impossible);
        }
        if !legal_moves(self, from, rules)?.contains(mv) {
            return Err(impossible);
        }
        match (mv.promotion, promotion) {
            (Some(square), None) => return Err(MoveError::PromotionRequired { square }),
            (None, Some(_)) => return Err(impossible),
            _ => {}
        }

        self.apply_unchecked(mv, promotion);
        Ok(())
    }

    /// Carry out `mv` without validating it.
    ///
    /// The source square must be occupied; if it is not, nothing happens.
    pub(crate) fn apply_unchecked(&mut self, mv: &MoveInfo, promotion: Option<PromotionPiece>) {
        let Some(mut piece) = self.take(mv.from()) else {
            return;
        };
        let color = piece.color();

        if let Some(sq) = mv.captured
            && sq != mv.to()
        {
            self.take(sq);
        }

        piece = piece.moved();
        if mv.promotion.is_some()
            && let Some(kind) = promotion
        {
            piece = piece.promoted(kind.to_piece_kind());
        }
        self.put(mv.to(), piece);

        if let Some(rook_step) = mv.secondary
            && let Some(rook) = self.take(rook_step.from)
        {
            self.put(rook_step.to, rook.moved());
        }

        let mut revoked = CastleRights::for_rook_home(mv.from())
            .insert(CastleRights::for_rook_home(mv.to()));
        if piece.kind() == PieceKind::King {
            revoked = revoked.insert(CastleRights::for_color(color));
        }
        let before = self.castling();
        let after = before.remove(revoked);
        if after != before {
            debug!(from = %before, to = %after, "castling rights revoked");
            self.set_castling(after);
        }

        self.set_side_to_move(color.flip());
        debug!(mv = %mv, %color, "applied move");
    }
}
