//! Rock-Paper-Scissors console
//!
//! Interactive by default; `--moves` plays a fixed list and exits.
//! With `--summary json`, stdout carries only the final JSON and round text
//! goes to stderr.

mod config;
mod console;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use config::{Config, Summary};
use console::Console;
use rps_logic::display::scoreboard;
use rps_logic::{Move, Opponent, Session, SessionState};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let mut session = config.session();
    let console = Console::new(config.history_rows);

    match config.batch() {
        Some(moves) => {
            let moves = moves.context("bad --moves list")?;
            log::info!("playing {} scripted rounds", moves.len());
            run_batch(
                &mut session,
                &moves,
                &console,
                config.summary,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )
        }
        None => {
            match config.summary {
                Summary::Text => console.run(&mut session, &mut io::stdout())?,
                Summary::Json => console.run(&mut session, &mut io::stderr())?,
            }
            summarize(session.snapshot(), config.summary, &mut io::stdout())
        }
    }
}

/// Play `moves` in order, then write the summary to `out`
///
/// Round text shares `out` with a text summary; a JSON summary keeps `out`
/// clean and the rounds land on `side`.
fn run_batch<O: Opponent>(
    session: &mut Session<O>,
    moves: &[Move],
    console: &Console,
    summary: Summary,
    out: &mut impl Write,
    side: &mut impl Write,
) -> anyhow::Result<()> {
    for m in moves {
        let record = session.play_round(*m);
        match summary {
            Summary::Text => console.render(&mut *out, &record, session.snapshot())?,
            Summary::Json => console.render(&mut *side, &record, session.snapshot())?,
        }
    }
    summarize(session.snapshot(), summary, out)
}

fn summarize(state: &SessionState, summary: Summary, out: &mut impl Write) -> anyhow::Result<()> {
    match summary {
        Summary::Text => {
            writeln!(out)?;
            writeln!(out, "Final score after {} rounds: {}", state.round_count, scoreboard(state))?;
        }
        Summary::Json => {
            let json = serde_json::to_string_pretty(state).context("serialize session")?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
