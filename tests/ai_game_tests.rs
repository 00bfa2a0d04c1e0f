use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{play_out, Difficulty, GameConfig, Match, Opponent, Phase, Side};

#[test]
fn test_bot_vs_opponent_game() {
    let mut game = Match::seeded(GameConfig::default(), Difficulty::Medium, 123);
    let mut bot = Opponent::new(Difficulty::Easy, 10);
    let mut bot_rng = SmallRng::seed_from_u64(321);
    let mut shots_seen = 0;
    let report = play_out(&mut game, &mut bot, &mut bot_rng, |_| shots_seen += 1).unwrap();

    assert_eq!(game.phase(), Phase::Resolved);
    assert!(report.winner.is_some());
    assert_eq!(report.winner, game.winner());
    assert_eq!(shots_seen, report.player_shots + report.opponent_shots);
    match report.winner {
        Some(Side::Player) => assert!(game.opponent_grid().all_sunk()),
        Some(Side::Opponent) => assert!(game.player_grid().all_sunk()),
        None => unreachable!(),
    }
}

#[test]
fn test_small_board_game() {
    let config = GameConfig::new(6, vec![3, 2, 1]).unwrap();
    let mut game = Match::seeded(config, Difficulty::Medium, 8);
    let mut bot = Opponent::new(Difficulty::Medium, 6);
    let mut bot_rng = SmallRng::seed_from_u64(9);
    let report = play_out(&mut game, &mut bot, &mut bot_rng, |_| {}).unwrap();
    assert!(report.player_shots <= 36);
    assert!(report.opponent_shots <= 36);
    assert!(report.winner.is_some());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_game_resolves_within_board(seed in any::<u64>(), medium in any::<bool>()) {
        let difficulty = if medium { Difficulty::Medium } else { Difficulty::Easy };
        let mut game = Match::seeded(GameConfig::default(), difficulty, seed);
        let mut bot = Opponent::new(Difficulty::Easy, 10);
        let mut bot_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let report = play_out(&mut game, &mut bot, &mut bot_rng, |_| {}).unwrap();

        prop_assert_eq!(game.phase(), Phase::Resolved);
        prop_assert!(report.opponent_shots <= 100);
        prop_assert!(report.player_shots <= 100);
        // player moves first, so the opponent never gets ahead
        prop_assert!(report.opponent_shots <= report.player_shots);
        prop_assert_eq!(game.opponent().fired().len(), report.opponent_shots);
        prop_assert_eq!(game.player_grid().shots().len(), report.opponent_shots);
    }
}
