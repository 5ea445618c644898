//! The board: piece placement, side to move and castling rights.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Complete position state.
///
/// Each square is `None` (empty) or `Some(piece)`. Analysis code only ever
/// borrows a `Board` immutably; the move applicator is the one place that
/// takes `&mut self`. Cloning is a plain copy.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    castling: CastleRights,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// A board with no pieces, White to move and no castling rights.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty().with_castling(CastleRights::ALL);
        for color in Color::ALL {
            for (file, kind) in (0i8..).zip(BACK_RANK) {
                if let Some(sq) = Square::from_coords(color.back_rank(), file) {
                    board.put(sq, Piece::new(kind, color));
                }
                if let Some(sq) = Square::from_coords(color.pawn_rank(), file) {
                    board.put(sq, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board
    }

    /// Place `piece` on `sq`, replacing whatever was there.
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Board {
        self.put(sq, piece);
        self
    }

    /// Clear `sq`.
    #[must_use]
    pub fn without_piece(mut self, sq: Square) -> Board {
        self.take(sq);
        self
    }

    #[must_use]
    pub fn with_side_to_move(mut self, color: Color) -> Board {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn with_castling(mut self, rights: CastleRights) -> Board {
        self.castling = rights;
        self
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Every occupied square.
    pub fn occupied(&self) -> SquareSet {
        Square::all().filter(|&sq| self.is_occupied(sq)).collect()
    }

    /// Squares holding a piece of `color`.
    pub fn side(&self, color: Color) -> SquareSet {
        self.pieces(color).map(|(sq, _)| sq).collect()
    }

    /// All pieces of `color` with their squares, in square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.color() == color)
                .map(|piece| (sq, piece))
        })
    }

    /// The square of `color`'s king, `None` if that side has no king.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidKingCount`] if the side has more than one king.
    pub fn king_square(&self, color: Color) -> Result<Option<Square>, BoardError> {
        let mut kings = self
            .pieces(color)
            .filter(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq);
        let first = kings.next();
        let extra = kings.count() as u32;
        if extra > 0 {
            return Err(BoardError::InvalidKingCount {
                color: color_name(color),
                count: extra + 1,
            });
        }
        Ok(first)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Check the structural invariants: at most one king per side and no
    /// pawns on the first or eighth rank.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            self.king_square(color)?;
        }

        let pawn_on_edge = Square::all().find(|&sq| {
            (sq.rank() == 0 || sq.rank() == 7)
                && self
                    .piece_at(sq)
                    .is_some_and(|piece| piece.kind() == PieceKind::Pawn)
        });
        if let Some(square) = pawn_on_edge {
            return Err(BoardError::PawnOnBackRank { square });
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("side_to_move", &self.side_to_move)
            .field("castling", &self.castling)
            .field("pieces", &self.occupied().map(|sq| (sq, self.squares[sq.index()])).collect::<Vec<_>>())
            .finish()
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0i8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0i8..8 {
                let c = Square::from_coords(rank, file)
                    .and_then(|sq| board.piece_at(sq))
                    .map_or('.', Piece::symbol);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        let board = Board::starting_position();
        board.validate().unwrap();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.side(Color::White).count(), 16);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling(), CastleRights::ALL);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        let white = |kind| Some(Piece::new(kind, Color::White));
        assert_eq!(board.piece_at(Square::E1), white(PieceKind::King));
        assert_eq!(board.piece_at(Square::D1), white(PieceKind::Queen));
        assert_eq!(board.piece_at(Square::B1), white(PieceKind::Knight));
        assert_eq!(board.piece_at(Square::E2), white(PieceKind::Pawn));
        assert_eq!(
            board.piece_at(Square::E8),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(board.piece_at(Square::E4), None);
    }

    #[test]
    fn king_square_lookup() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Ok(Some(Square::E1)));
        assert_eq!(board.king_square(Color::Black), Ok(Some(Square::E8)));
        assert_eq!(Board::empty().king_square(Color::White), Ok(None));
    }

    #[test]
    fn two_kings_rejected() {
        let king = Piece::new(PieceKind::King, Color::White);
        let board = Board::empty()
            .with_piece(Square::A1, king)
            .with_piece(Square::H1, king);
        assert_eq!(
            board.king_square(Color::White),
            Err(BoardError::InvalidKingCount {
                color: "white",
                count: 2
            })
        );
        assert!(board.validate().is_err());
    }

    #[test]
    fn pawn_on_back_rank_rejected() {
        let board = Board::empty().with_piece(Square::C8, Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(
            board.validate(),
            Err(BoardError::PawnOnBackRank { square: Square::C8 })
        );
    }

    #[test]
    fn with_and_without_piece() {
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        let board = Board::empty().with_piece(Square::D4, rook);
        assert_eq!(board.piece_at(Square::D4), Some(rook));
        let cleared = board.without_piece(Square::D4);
        assert!(!cleared.is_occupied(Square::D4));
        assert!(board.is_occupied(Square::D4), "builders work on copies");
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Board::starting_position().pretty());
        assert!(output.contains("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.contains("a b c d e f g h"));
    }
}
