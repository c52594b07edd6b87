use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::filter::LevelFilter;

use slitherlink::hit::unit_size;
use slitherlink::{Action, Config, Game, History, Location, MoveOutcome, Side};

#[derive(Parser)]
#[command(name = "play")]
#[command(about = "Load a Slitherlink puzzle, apply moves and report the board state")]
struct Cmd {
    /// More log output; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Fraction of a cell near each side that selects it on click
    #[arg(long, default_value_t = Config::DEFAULT_CLICK_REGION, global = true)]
    click_region: f64,

    #[command(subcommand)]
    action: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a puzzle and its status
    Show {
        /// Clue text, or a path to a file holding it
        puzzle: String,
    },
    /// Apply a move script to a puzzle or a saved board
    Play {
        /// Clue text, or a path to a file holding it
        #[arg(long, conflicts_with = "load", required_unless_present = "load")]
        puzzle: Option<String>,
        /// Start from a save written by --save
        #[arg(long)]
        load: Option<PathBuf>,
        /// File of moves, one per line; `-` or nothing reads the moves given inline
        #[arg(long)]
        script: Option<PathBuf>,
        /// Write the final board here
        #[arg(long)]
        save: Option<PathBuf>,
        /// Canvas size `WIDTHxHEIGHT` that click coordinates refer to
        #[arg(long, default_value = "400x400")]
        canvas: String,
        /// Moves such as `line 0 0 top`, `cross 1 2 l`, `click 35.5 12 cross`, `undo` or `redo`,
        /// one per argument or separated by `;`
        moves: Vec<String>,
    },
}

/// Board summary printed after every command.
#[derive(Serialize)]
struct Status {
    columns: usize,
    rows: usize,
    clues: String,
    finished: bool,
    infeasible: Vec<Location>,
    branching_segments: usize,
    lines: usize,
    history: History,
}

impl From<&Game> for Status {
    fn from(game: &Game) -> Self {
        let board = game.board();
        let conflicts = game.conflicts();
        Self {
            columns: board.dims().columns(),
            rows: board.dims().rows(),
            clues: game.board_string(),
            finished: game.is_finished(),
            infeasible: conflicts.cells,
            branching_segments: conflicts.branches.len(),
            lines: board.lines().count(),
            history: game.history().clone(),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    SubscriberBuilder::default().with_target(false).with_max_level(level).with_writer(std::io::stderr).init();

    let mut game = Game::new(Config::default().with_click_region_percent(cmd.click_region));
    match cmd.action {
        Command::Show { puzzle } => {
            game.load_numbers(&read_puzzle(&puzzle)?)?;
        }
        Command::Play { puzzle, load, script, save, canvas, moves } => {
            match (puzzle, load) {
                (Some(puzzle), _) => game.load_numbers(&read_puzzle(&puzzle)?)?,
                (None, Some(path)) => {
                    let bytes = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
                    game.load_save(&bytes)?;
                }
                (None, None) => bail!("either --puzzle or --load is required"),
            }

            let moves = match script {
                Some(path) if path != Path::new("-") => {
                    fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?
                }
                _ => moves.join(";"),
            };
            let unit = canvas_unit(&canvas, &game)?;
            for (n, line) in moves.split(['\n', ';']).map(str::trim).enumerate().filter(|(_, l)| !l.is_empty()) {
                let outcome = apply(&mut game, line, unit).with_context(|| format!("move {}: {line:?}", n + 1))?;
                tracing::info!(line, ?outcome, "move");
                if let MoveOutcome::Finished(_) = outcome {
                    println!("finished after move {}", n + 1);
                }
            }

            if let Some(path) = save {
                fs::write(&path, game.save()).with_context(|| format!("writing {}", path.display()))?;
                tracing::info!(path = %path.display(), "saved");
            }
        }
    }

    print!("{}", game.board().render());
    println!("{}", serde_json::to_string_pretty(&Status::from(&game))?);
    Ok(())
}

/// Treat `puzzle` as a path if one exists there, as clue text otherwise.
fn read_puzzle(puzzle: &str) -> Result<String> {
    let path = Path::new(puzzle);
    if path.is_file() {
        return fs::read_to_string(path).with_context(|| format!("reading {}", path.display()));
    }

    Ok(puzzle.to_owned())
}

fn canvas_unit(canvas: &str, game: &Game) -> Result<f64> {
    let (width, height) = canvas.split_once('x').context("canvas must look like WIDTHxHEIGHT")?;
    let dims = game.board().dims();
    Ok(unit_size(width.trim().parse()?, height.trim().parse()?, dims.columns(), dims.rows()))
}

fn apply(game: &mut Game, line: &str, unit: f64) -> Result<MoveOutcome> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    let outcome = match words.as_slice() {
        ["undo"] => game.undo(),
        ["redo"] => game.redo(),
        [kind @ ("line" | "cross"), x, y, side] => {
            let location = Location(x.parse()?, y.parse()?);
            let side = side.parse::<Side>().map_err(anyhow::Error::msg)?;
            if *kind == "line" {
                game.try_add_edge(location, side)
            } else {
                game.try_add_cross(location, side)
            }
        }
        ["click", x, y, rest @ ..] => {
            let action = match rest {
                [] | ["line"] => Action::Line,
                ["cross"] => Action::Cross,
                _ => bail!("click takes an optional `line` or `cross`"),
            };
            game.click(x.parse()?, y.parse()?, unit, action)
        }
        _ => bail!("unknown move"),
    };

    Ok(outcome)
}
