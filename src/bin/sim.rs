use clap::Parser;
use sea_battle::cli::{rng_from, GameArgs};
use sea_battle::{init_logging, play_out, Difficulty, Opponent};
use serde_json::json;

/// Play one computer-vs-computer match and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    game: GameArgs,
    /// Seed for the bot playing the player's side.
    #[arg(long)]
    bot_seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut game = args.game.build()?;
    let difficulty = game.difficulty();
    let mut bot = Opponent::new(Difficulty::Medium, game.config().size());
    let mut bot_rng = rng_from(args.bot_seed);

    let report = play_out(&mut game, &mut bot, &mut bot_rng, |_| {})?;

    let result = json!({
        "difficulty": difficulty,
        "size": game.config().size(),
        "player": {"shots": report.player_shots},
        "opponent": {"shots": report.opponent_shots},
        "winner": report.winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
