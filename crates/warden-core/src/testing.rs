//! Board diagrams for unit tests.
//!
//! Integration tests carry a copy in `tests/common/mod.rs`; keep the two in step.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Build a board from eight rows of eight cells, rank 8 first.
///
/// `.` is an empty square, letters are pieces (uppercase White). Pawns off
/// their home rank count as already moved. White to move, no castling rights.
pub(crate) fn board_from_diagram(diagram: &str) -> Board {
    let rows: Vec<Vec<char>> = diagram
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();
    assert_eq!(rows.len(), 8, "diagram needs 8 rows");

    let mut board = Board::empty();
    for (row, cells) in rows.iter().enumerate() {
        assert_eq!(cells.len(), 8, "row {row} needs 8 cells");
        let rank = 7 - row as i8;
        for (file, &c) in (0i8..).zip(cells) {
            if c == '.' {
                continue;
            }
            let kind = PieceKind::from_symbol(c).unwrap_or_else(|| panic!("bad piece {c:?}"));
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let mut piece = Piece::new(kind, color);
            if kind == PieceKind::Pawn && rank != color.pawn_rank() {
                piece = piece.with_move_count(1);
            }
            let sq = Square::from_coords(rank, file).unwrap();
            board = board.with_piece(sq, piece);
        }
    }
    board
}
