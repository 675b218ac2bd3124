use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use knight_coverage::{ConfigError, IntoPretty, Square, Tour, TourConfig};

/// Counts how many knight moves it takes to reach every square of a board.
#[derive(Parser)]
#[command(name = "knight_coverage")]
#[command(version)]
struct Cli {
    /// Sets both board dimensions at once
    #[arg(long, conflicts_with_all = ["width", "height"])]
    dim: Option<u16>,

    #[arg(long, default_value_t = knight_coverage::DEFAULT_DIM)]
    width: u16,

    #[arg(long, default_value_t = knight_coverage::DEFAULT_DIM)]
    height: u16,

    #[arg(long, default_value_t = knight_coverage::DEFAULT_START.x)]
    start_x: u16,

    #[arg(long, default_value_t = knight_coverage::DEFAULT_START.y)]
    start_y: u16,

    /// Marks squares the knight has not reached yet
    #[arg(long, default_value_t = knight_coverage::DEFAULT_UNVISITED_GLYPH)]
    glyph: char,

    /// Start right away instead of waiting for enter
    #[arg(long)]
    no_prompt: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

enum Failure {
    Config(ConfigError),
    Io(io::Error),
}

impl From<ConfigError> for Failure {
    fn from(err: ConfigError) -> Self {
        Failure::Config(err)
    }
}

impl From<io::Error> for Failure {
    fn from(err: io::Error) -> Self {
        Failure::Io(err)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Config(err)) => {
            eprintln!("Invalid configuration: {err}");
            ExitCode::from(2)
        }
        Err(Failure::Io(err)) => {
            eprintln!("I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let config = config_from(cli);
    let mut tour = Tour::new(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "This program runs a breadth-first search to determine the number of moves it takes for a knight to cover the whole board.")?;
    writeln!(out, "Each square of the board is marked by the move on which it is potentially visitable, while unmarked squares are flagged with '{}'.", config.unvisited_glyph)?;
    writeln!(out)?;

    if !cli.no_prompt {
        writeln!(out, "Press enter when ready to begin!")?;
        out.flush()?;
        io::stdin().lock().read_line(&mut String::new())?;
    }

    for wave in tour.by_ref() {
        writeln!(out)?;
        writeln!(out, "{}", wave.pretty(config.unvisited_glyph))?;
    }

    let coverage = tour.into_coverage();

    writeln!(out)?;
    writeln!(out, "{}", coverage.summary())?;

    Ok(())
}

fn config_from(cli: &Cli) -> TourConfig {
    let (width, height) = match cli.dim {
        Some(dim) => (dim, dim),
        None => (cli.width, cli.height),
    };

    TourConfig::rectangle(width, height)
        .with_start(Square::new(cli.start_x, cli.start_y))
        .with_glyph(cli.glyph)
}
