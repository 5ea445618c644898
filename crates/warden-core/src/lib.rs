//! Chess legality engine: board model, movement catalog, check and pin
//! analysis, legal move generation, castling and move application.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod config;
mod error;
mod geometry;
mod make_move;
mod movement;
mod piece;
mod piece_kind;
mod referee;
mod square;
mod square_set;

pub mod movegen;
pub mod perft;

#[cfg(test)]
mod testing;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{MoveInfo, PromotionPiece, Step};
pub use color::Color;
pub use config::RulesConfig;
pub use error::{BoardError, MoveError};
pub use geometry::{Coord, Direction, Segment, on_board, ray_length, ray_path, ring_path};
pub use movegen::{
    AttackInfo, CheckState, attack_lines, attacks_on, is_checkmate, is_in_check,
    is_square_attacked, is_stalemate, legal_moves, legal_moves_for,
};
pub use movement::{FigureMovement, Intent, Movement, potential_movements};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use referee::Referee;
pub use square::Square;
pub use square_set::SquareSet;
