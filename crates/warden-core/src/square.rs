//! Board squares, stored rank-major: index = rank * 8 + file, so a1 = 0 and h8 = 63.

use std::fmt;

use crate::geometry::Coord;
use crate::square_set::SquareSet;

/// A square that is guaranteed to lie on the 8x8 board.
///
/// Raw `(rank, file)` pairs coming from outside are carried as [`Coord`] and
/// only become a `Square` after passing the on-board check.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

macro_rules! rank_squares {
    (@emit $rank:expr, $file:expr;) => {};
    (@emit $rank:expr, $file:expr; $name:ident $(, $rest:ident)*) => {
        pub const $name: Square = Square($rank * 8 + $file);
        rank_squares!(@emit $rank, $file + 1; $($rest),*);
    };
    ($rank:expr; $($name:ident),+) => {
        rank_squares!(@emit $rank, 0u8; $($name),+);
    };
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from zero-based rank and file, `None` when off the board.
    #[inline]
    pub const fn from_coords(rank: i8, file: i8) -> Option<Square> {
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square(rank as u8 * 8 + file as u8))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let &[file, rank] = s.as_bytes() else {
            return None;
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Square::from_coords((rank - b'1') as i8, (file - b'a') as i8)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based rank, 0 for White's back rank.
    #[inline]
    pub const fn rank(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Zero-based file, 0 for the a-file.
    #[inline]
    pub const fn file(self) -> i8 {
        (self.0 % 8) as i8
    }

    #[inline]
    pub const fn coord(self) -> Coord {
        Coord::new(self.rank(), self.file())
    }

    /// The square `(dr, df)` away, if it is still on the board.
    #[inline]
    pub const fn offset(self, dr: i8, df: i8) -> Option<Square> {
        Square::from_coords(self.rank() + dr, self.file() + df)
    }

    /// A set holding only this square.
    #[inline]
    pub const fn set(self) -> SquareSet {
        SquareSet::new(1u64 << self.0)
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    rank_squares!(0; A1, B1, C1, D1, E1, F1, G1, H1);
    rank_squares!(1; A2, B2, C2, D2, E2, F2, G2, H2);
    rank_squares!(2; A3, B3, C3, D3, E3, F3, G3, H3);
    rank_squares!(3; A4, B4, C4, D4, E4, F4, G4, H4);
    rank_squares!(4; A5, B5, C5, D5, E5, F5, G5, H5);
    rank_squares!(5; A6, B6, C6, D6, E6, F6, G6, H6);
    rank_squares!(6; A7, B7, C7, D7, E7, F7, G7, H7);
    rank_squares!(7; A8, B8, C8, D8, E8, F8, G8, H8);
}

impl From<Square> for Coord {
    fn from(sq: Square) -> Coord {
        sq.coord()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        write!(f, "{file}{}", self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn named_constants() {
        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::E1.index(), 4);
        assert_eq!(Square::A8.index(), 56);
        assert_eq!(Square::E8.index(), 60);
        assert_eq!(Square::H8.index(), 63);
        assert_eq!((Square::D5.rank(), Square::D5.file()), (4, 3));
    }

    #[test]
    fn from_coords_rejects_off_board() {
        assert_eq!(Square::from_coords(0, 0), Some(Square::A1));
        assert_eq!(Square::from_coords(7, 7), Some(Square::H8));
        assert!(Square::from_coords(-1, 0).is_none());
        assert!(Square::from_coords(0, 8).is_none());
        assert!(Square::from_coords(8, 3).is_none());
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::E4.offset(1, 1), Some(Square::F5));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
    }

    #[test]
    fn algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::E4));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
        assert_eq!(format!("{}", Square::E4), "e4");
        assert_eq!(format!("{:?}", Square::C7), "Square(c7)");
    }

    #[test]
    fn all_squares_roundtrip() {
        assert_eq!(Square::all().count(), Square::COUNT);
        for sq in Square::all() {
            assert_eq!(Square::from_coords(sq.rank(), sq.file()), Some(sq));
        }
    }
}
