//! Text front end: board rendering, command parsing and the interactive loop.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use clap::{Args, ValueEnum};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::{
    CellState, Coord, Difficulty, GameConfig, Grid, Match, Phase, Side, BOARD_SIZE,
    CANONICAL_FLEET,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
        }
    }
}

/// Match options shared by the `sea_battle` and `sim` binaries.
#[derive(Args, Clone, Debug)]
pub struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Level::Easy)]
    pub difficulty: Level,
    #[arg(long, default_value_t = BOARD_SIZE)]
    pub size: usize,
    #[arg(long, value_delimiter = ',', help = "Vessel lengths, e.g. --fleet 4,3,3,2")]
    pub fleet: Option<Vec<usize>>,
}

impl GameArgs {
    pub fn config(&self) -> anyhow::Result<GameConfig> {
        let fleet = self
            .fleet
            .clone()
            .unwrap_or_else(|| CANONICAL_FLEET.to_vec());
        Ok(GameConfig::new(self.size, fleet)?)
    }

    /// Build a match in the menu, seeded from `--seed` when given.
    pub fn build(&self) -> anyhow::Result<Match> {
        let config = self.config()?;
        Ok(Match::new(config, self.difficulty.into(), rng_from(self.seed)))
    }
}

/// A `SmallRng` seeded with `seed`, or from the thread RNG without one.
pub fn rng_from(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A board cell: place the next vessel or fire, depending on the phase.
    At(Coord),
    Rotate,
    Undo,
    Auto,
    Begin,
    SetDifficulty(Difficulty),
    NewGame,
    Menu,
    Help,
    Quit,
}

/// Parse one line of input. Returns `None` for anything unrecognised.
pub fn parse_command(line: &str) -> Option<Command> {
    let word = line.trim().to_ascii_lowercase();
    let cmd = match word.as_str() {
        "r" | "rotate" => Command::Rotate,
        "u" | "undo" => Command::Undo,
        "a" | "auto" => Command::Auto,
        "b" | "begin" => Command::Begin,
        "easy" => Command::SetDifficulty(Difficulty::Easy),
        "medium" => Command::SetDifficulty(Difficulty::Medium),
        "n" | "new" => Command::NewGame,
        "m" | "menu" => Command::Menu,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => Command::At(other.parse().ok()?),
    };
    Some(cmd)
}

fn cell_char(state: CellState) -> char {
    match state {
        CellState::Water => '.',
        CellState::ShipPresent => 'S',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Sunk => '#',
    }
}

/// Render a grid with column letters and 1-based row numbers.
pub fn render_grid(grid: &Grid, reveal_ships: bool) -> String {
    let size = grid.size();
    let mut out = String::from("   ");
    for x in 0..size {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    out.push('\n');
    for y in 0..size {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..size {
            let state = grid.cell_state(Coord::new(x, y), reveal_ships);
            let _ = write!(out, " {}", cell_char(state));
        }
        out.push('\n');
    }
    out
}

/// Both boards, the opponent's on top with its vessels hidden until the
/// match is over.
pub fn render_view<R: Rng>(game: &Match<R>) -> String {
    let reveal_opponent = game.phase() == Phase::Resolved;
    format!(
        "Opponent board:\n{}\nYour board:\n{}",
        render_grid(game.opponent_grid(), reveal_opponent),
        render_grid(game.player_grid(), true)
    )
}

fn prompt<R: Rng>(game: &Match<R>) -> String {
    match game.phase() {
        Phase::Menu => format!(
            "Difficulty: {:?}. Commands: easy, medium, new, quit",
            game.difficulty()
        ),
        Phase::Placement => match game.current_vessel_length() {
            Some(length) => format!(
                "Next vessel: {} cell(s), {:?}. Enter a cell (e.g. A1), r rotate, u undo, a auto",
                length,
                game.placement_orientation()
            ),
            None => String::from("All vessels placed. b to begin, u to undo"),
        },
        Phase::Battle => String::from("Enter a cell on the opponent board to fire"),
        Phase::Resolved => String::from("n new game, m menu, q quit"),
    }
}

const HELP: &str = "\
Cells are written as a column letter and a row number, e.g. B7.
Menu:       easy | medium | new | quit
Placement:  <cell> | rotate | undo | auto | begin
Battle:     <cell>
Game over:  new | menu | quit";

/// Run the interactive loop until the player quits or input ends.
pub fn run_interactive<R, I, O>(game: &mut Match<R>, input: I, mut out: O) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut lines = input.lines();
    loop {
        if game.phase() != Phase::Menu {
            writeln!(out, "\n{}", render_view(game))?;
        }
        if !game.status().is_empty() {
            writeln!(out, "{}", game.status())?;
        }
        write!(out, "{}\n> ", prompt(game))?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        let Some(cmd) = parse_command(&line) else {
            writeln!(out, "Unrecognised input; type help for commands")?;
            continue;
        };
        match (game.phase(), cmd) {
            (_, Command::Quit) => return Ok(()),
            (_, Command::Help) => writeln!(out, "{}", HELP)?,
            (_, Command::SetDifficulty(d)) => game.set_difficulty(d),
            (Phase::Menu | Phase::Resolved, Command::NewGame) => game.start_new_game()?,
            (Phase::Resolved, Command::Menu) => {
                game.return_to_menu();
            }
            (Phase::Placement, Command::At(coord)) => {
                game.place_player_vessel(coord);
            }
            (Phase::Placement, Command::Rotate) => game.toggle_placement_orientation(),
            (Phase::Placement, Command::Undo) => {
                game.undo_last_placement();
            }
            (Phase::Placement, Command::Auto) => game.auto_place_player()?,
            (Phase::Placement, Command::Begin) => {
                game.begin_battle();
            }
            (Phase::Battle, Command::At(coord)) => {
                if !game.opponent_grid().in_bounds(coord) {
                    writeln!(out, "{} is off the board", coord)?;
                    continue;
                }
                game.player_shoot(coord);
                while game.phase() == Phase::Battle && game.turn() == Side::Opponent {
                    writeln!(out, "{}", game.status())?;
                    game.opponent_shoot();
                }
            }
            _ => writeln!(out, "That command is not available right now")?,
        }
    }
}
