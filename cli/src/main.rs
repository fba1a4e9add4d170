use anyhow::Context;
use clap::Parser;
use hexsweeper_core::*;
use std::io::{self, BufRead, Write};

use command::{Command, HELP};

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper on a hexagonal grid", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    rows: Coord,

    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    cols: Coord,

    /// Fraction of cells holding a mine, in [0, 1)
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a JSON snapshot per line instead of drawing the board
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new(args.rows, args.cols, args.density)
        .context("Could not configure the board")?;
    let generator = match args.seed {
        Some(seed) => RandomBoardGenerator::new(seed),
        None => RandomBoardGenerator::from_random_seed(),
    };
    log::debug!("seed: {}", generator.seed());

    let mut session = Session::with_generator(config, generator)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    show(&mut stdout, &session, args.json)?;
    for line in stdin.lock().lines() {
        let line = line.context("Could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err:#}");
                continue;
            }
        };
        log::trace!("command: {:?}", command);

        let applied = match command {
            Command::Reveal(coords) => session.reveal(coords).map(|outcome| {
                log::info!("reveal {:?}: {:?}", coords, outcome);
            }),
            Command::Flag(coords) => session.toggle_flag(coords).map(|outcome| {
                log::info!("flag {:?}: {:?}", coords, outcome);
            }),
            Command::Restart => session.restart(),
            Command::Help => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        };

        match applied {
            Ok(()) => show(&mut stdout, &session, args.json)?,
            Err(GameError::InvalidCoordinate) => {
                let (rows, cols) = session.size();
                eprintln!("Coordinates must be within {rows} rows and {cols} columns");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn show(out: &mut impl Write, session: &Session, json: bool) -> anyhow::Result<()> {
    let snapshot = session.snapshot();
    if json {
        writeln!(out, "{}", snapshot.to_json()?)?;
    } else {
        write!(out, "{}", render::render(&snapshot))?;
    }
    out.flush()?;
    Ok(())
}
