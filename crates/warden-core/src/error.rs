//! Errors reported by move queries and move application.

use crate::square::Square;

/// Structural problems with a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side has more than one king.
    #[error("expected at most 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank { square: Square },
}

/// Errors returned to the caller of a legality query or a move.
///
/// Every variant is recoverable; the caller decides how to surface it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// No board has been loaded.
    #[error("no board loaded")]
    BoardIsNull,

    /// The queried coordinates are not on the 8x8 grid.
    #[error("position ({rank}, {file}) is outside the board")]
    PosOutsideBoard { rank: i8, file: i8 },

    /// The queried square is empty.
    #[error("no piece on {square}")]
    NoFigureOnPos { square: Square },

    /// The move is not among the legal moves of the side to move.
    #[error("impossible move {from}{to}")]
    ImpossibleMove { from: Square, to: Square },

    /// The move reaches the last rank but no replacement kind was supplied.
    #[error("promotion on {square} needs a piece kind")]
    PromotionRequired { square: Square },

    /// The board failed validation while a query was running.
    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}
