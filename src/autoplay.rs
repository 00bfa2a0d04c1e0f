//! Drives the player's side of a match with a second computer opponent.
//!
//! Used by the `watch` command and the `sim` binary.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::core::{EngineError, Match, Opponent, Phase, ShotOutcome, Side};

/// Summary of an automatically played match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplayReport {
    pub winner: Option<Side>,
    pub player_shots: usize,
    pub opponent_shots: usize,
}

/// Place the player's fleet at random, start the battle, and play until the
/// match resolves. `bot` picks the player's shots using its own `bot_rng`.
///
/// A match in the menu or already resolved gets a fresh game first. One in
/// placement has its remaining fleet placed for it.
///
/// `on_shot` sees every resolved shot, for progress output.
pub fn play_out<R, B, F>(
    game: &mut Match<R>,
    bot: &mut Opponent,
    bot_rng: &mut B,
    mut on_shot: F,
) -> Result<AutoplayReport, EngineError>
where
    R: Rng,
    B: Rng + ?Sized,
    F: FnMut(&Match<R>),
{
    if game.phase() != Phase::Placement {
        game.start_new_game()?;
    }
    game.auto_place_player()?;
    game.begin_battle();
    bot.reset();

    let mut report = AutoplayReport {
        winner: None,
        player_shots: 0,
        opponent_shots: 0,
    };
    while game.phase() == Phase::Battle {
        match game.turn() {
            Side::Player => {
                let coord = bot.choose_shot(bot_rng);
                let outcome = game.player_shoot(coord);
                let sunk_cells: Option<Vec<_>> = match outcome {
                    ShotOutcome::Sunk => game
                        .opponent_grid()
                        .vessel_at(coord)
                        .map(|v| v.cells().to_vec()),
                    _ => None,
                };
                bot.record_outcome(coord, outcome, sunk_cells.as_deref());
                report.player_shots += 1;
            }
            Side::Opponent => {
                game.opponent_shoot();
                report.opponent_shots += 1;
            }
        }
        on_shot(game);
    }
    report.winner = game.winner();
    debug!("autoplay finished: {:?}", report);
    Ok(report)
}
