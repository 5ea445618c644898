//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::chess_move::{MoveInfo, PromotionPiece};
use crate::config::RulesConfig;
use crate::error::MoveError;
use crate::movegen::legal_moves_for;

/// Every child position of `mv`: one per promotion piece for promoting moves.
fn children(board: &Board, mv: &MoveInfo) -> Vec<Board> {
    let choices: Vec<Option<PromotionPiece>> = if mv.promotion.is_some() {
        PromotionPiece::ALL.map(Some).to_vec()
    } else {
        vec![None]
    };
    choices
        .into_iter()
        .map(|promotion| {
            let mut child = *board;
            child.apply_unchecked(mv, promotion);
            child
        })
        .collect()
}

/// Count the number of leaf nodes at the given depth for the side to move.
///
/// Depth 0 returns 1 (the current position). A promoting move counts once per
/// promotion piece.
///
/// # Errors
///
/// [`MoveError::InvalidBoard`] if a side has more than one king.
pub fn perft(board: &Board, depth: usize, rules: RulesConfig) -> Result<u64, MoveError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves_for(board, board.side_to_move(), rules)?;

    if depth == 1 {
        return Ok(moves
            .iter()
            .map(|mv| if mv.promotion.is_some() { 4 } else { 1 })
            .sum());
    }

    let mut nodes = 0u64;
    for mv in &moves {
        for child in children(board, mv) {
            nodes += perft(&child, depth - 1, rules)?;
        }
    }
    Ok(nodes)
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted alphabetically. Promotion
/// children are summed under their move.
///
/// # Errors
///
/// Same as [`perft`].
pub fn divide(board: &Board, depth: usize, rules: RulesConfig) -> Result<Vec<(String, u64)>, MoveError> {
    let moves = legal_moves_for(board, board.side_to_move(), rules)?;
    let mut results = Vec::with_capacity(moves.len());
    for mv in &moves {
        let mut count = 0u64;
        for child in children(board, mv) {
            count += if depth <= 1 { 1 } else { perft(&child, depth - 1, rules)? };
        }
        results.push((mv.to_string(), count));
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::castle_rights::CastleRights;
    use crate::testing::board_from_diagram;

    const RULES: RulesConfig = RulesConfig {
        castling_safety: true,
    };

    // --- Position 1: Starting position ---

    #[test]
    fn perft_startpos_depth_1() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, 1, RULES).unwrap(), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, 2, RULES).unwrap(), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, 3, RULES).unwrap(), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, 4, RULES).unwrap(), 197_281);
    }

    // --- Position 2: "Kiwipete", castling on both wings ---

    fn kiwipete() -> Board {
        board_from_diagram(
            "
            r...k..r
            p.ppqpb.
            bn..pnp.
            ...PN...
            .p..P...
            ..N..Q.p
            PPPBBPPP
            R...K..R
            ",
        )
        .with_castling(CastleRights::ALL)
    }

    #[test]
    fn perft_kiwipete_depth_1() {
        assert_eq!(perft(&kiwipete(), 1, RULES).unwrap(), 48);
    }

    // --- Position 3: rook and pawn endgame with discovered checks ---

    fn position_3() -> Board {
        board_from_diagram(
            "
            ........
            ..p.....
            ...p....
            KP.....r
            .R...p.k
            ........
            ....P.P.
            ........
            ",
        )
    }

    #[test]
    fn perft_position_3_depth_1() {
        assert_eq!(perft(&position_3(), 1, RULES).unwrap(), 14);
    }

    #[test]
    fn perft_position_3_depth_2() {
        assert_eq!(perft(&position_3(), 2, RULES).unwrap(), 191);
    }

    // --- Position 4: promotions, pins and a king in check ---

    fn position_4() -> Board {
        board_from_diagram(
            "
            r...k..r
            Pppp.ppp
            .b...nbN
            nP......
            BBP.P...
            q....N..
            Pp.P..PP
            R..Q.RK.
            ",
        )
        .with_castling(CastleRights::BLACK_BOTH)
    }

    #[test]
    fn perft_position_4_depth_1() {
        assert_eq!(perft(&position_4(), 1, RULES).unwrap(), 6);
    }

    #[test]
    fn perft_position_4_depth_2() {
        assert_eq!(perft(&position_4(), 2, RULES).unwrap(), 264);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::starting_position();
        let breakdown = divide(&board, 2, RULES).unwrap();
        assert_eq!(breakdown.len(), 20);
        assert_eq!(breakdown.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert!(breakdown.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
