#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use sea_battle::{
    cli::{render_view, rng_from, run_interactive, GameArgs},
    init_logging, play_out, Difficulty, Opponent, Side,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[cfg(feature = "std")]
fn announce_seed(args: &GameArgs) {
    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game: args } => {
            announce_seed(&args);
            let mut game = args.build()?;
            let stdin = std::io::stdin();
            run_interactive(&mut game, stdin.lock(), std::io::stdout())?;
        }
        Commands::Watch { game: args } => {
            announce_seed(&args);
            let mut game = args.build()?;
            let mut bot = Opponent::new(Difficulty::Medium, game.config().size());
            let mut bot_rng = rng_from(args.seed.map(|s| s.wrapping_add(1)));
            let report = play_out(&mut game, &mut bot, &mut bot_rng, |g| {
                println!("{}", g.status());
            })?;
            println!("\n{}", render_view(&game));
            match report.winner {
                Some(Side::Player) => println!("Player bot wins after {} shots", report.player_shots),
                Some(Side::Opponent) => {
                    println!("Opponent wins after {} shots", report.opponent_shots)
                }
                None => println!("No winner"),
            }
        }
    }
    Ok(())
}
