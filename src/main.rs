use anyhow::{Context, Result};
use tracing::info;
use warden_core::{Color, MoveInfo, Referee, RulesConfig, Square};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("warden starting");

    let mut referee = Referee::with_starting_position(RulesConfig::default());
    let opening = [
        (Square::E2, Square::E4),
        (Square::E7, Square::E5),
        (Square::F1, Square::C4),
        (Square::B8, Square::C6),
        (Square::D1, Square::H5),
        (Square::G8, Square::F6),
        (Square::H5, Square::F7),
    ];
    for (from, to) in opening {
        let mv = MoveInfo::new(from, to);
        let mv = if referee.board()?.is_occupied(to) {
            mv.with_capture(to)
        } else {
            mv
        };
        referee
            .apply_move(&mv, None)
            .with_context(|| format!("playing {mv}"))?;
    }

    let board = referee.board()?;
    println!("{}", board.pretty());
    info!(
        black_moves = referee.legal_moves_for(Color::Black)?.len(),
        check = referee.is_in_check(Color::Black)?,
        mate = referee.is_checkmate(Color::Black)?,
        "final position"
    );
    Ok(())
}
