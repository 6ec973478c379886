//! Command-line configuration

use clap::{Parser, ValueEnum};
use rps_logic::{Move, Session};

/// How the final session is printed on exit
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Summary {
    Text,
    Json,
}

/// Play Rock-Paper-Scissors against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "rock-paper-scissors", version)]
pub struct Config {
    /// Seed for a reproducible computer opponent
    #[arg(long, env = "RPS_SEED")]
    pub seed: Option<u64>,

    /// Play these moves in order without prompting, e.g. rock,paper,scissors
    #[arg(long, value_delimiter = ',')]
    pub moves: Option<Vec<String>>,

    /// Format of the final summary
    #[arg(long, value_enum, default_value_t = Summary::Text)]
    pub summary: Summary,

    /// History lines shown after each round
    #[arg(long, default_value_t = rps_logic::display::HISTORY_ROWS)]
    pub history_rows: usize,

    /// Log each round at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn session(&self) -> Session {
        match self.seed {
            Some(seed) => Session::seeded(seed),
            None => Session::from_entropy(),
        }
    }

    /// Parsed batch moves; the first bad label aborts
    pub fn batch(&self) -> Option<Result<Vec<Move>, rps_logic::RpsError>> {
        self.moves
            .as_ref()
            .map(|labels| labels.iter().map(|l| parse_logged(l)).collect())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        }
    }
}

fn parse_logged(label: &str) -> Result<Move, rps_logic::RpsError> {
    label.parse::<Move>().map_err(|e| {
        log::warn!("rejected player move {:?}", label);
        e
    })
}
