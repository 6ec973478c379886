//! Interactive console front-end.
//!
//! One menu pick maps to one call into the session, followed by a redraw.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;
use rps_logic::display::{choices_line, history_window, scoreboard};
use rps_logic::{Move, Opponent, Outcome, RoundRecord, Session, SessionState};

/// What the player picked from the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Reset,
    Quit,
}

impl Command {
    pub const MENU: [Command; 5] = [
        Command::Play(Move::Rock),
        Command::Play(Move::Paper),
        Command::Play(Move::Scissors),
        Command::Reset,
        Command::Quit,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Command::Play(m) => m.title(),
            Command::Reset => "Reset",
            Command::Quit => "Quit",
        }
    }
}

pub struct Console {
    history_rows: usize,
}

impl Console {
    pub fn new(history_rows: usize) -> Self {
        Self { history_rows }
    }

    /// Prompt until the player quits, drawing each round to `out`
    pub fn run<O: Opponent>(&self, session: &mut Session<O>, out: &mut impl Write) -> Result<()> {
        log::info!("entering interactive game");
        writeln!(out, "{}", "Rock Paper Scissors".bold())?;
        let items: Vec<&str> = Command::MENU.iter().map(|c| c.title()).collect();
        loop {
            let selection = Select::new()
                .with_prompt("Choose your move")
                .report(false)
                .items(items.as_slice())
                .default(0)
                .interact()?;
            match Command::MENU[selection] {
                Command::Quit => break,
                Command::Reset => {
                    session.reset();
                    writeln!(out, "{}", "Scores cleared.".dimmed())?;
                }
                Command::Play(m) => {
                    let record = session.play_round(m);
                    self.render(&mut *out, &record, session.snapshot())?;
                }
            }
        }
        Ok(())
    }

    /// Write one round's result plus the running score
    pub fn render(
        &self,
        out: &mut impl Write,
        record: &RoundRecord,
        state: &SessionState,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", choices_line(record))?;
        writeln!(out, "{}", banner(record.outcome))?;
        writeln!(out, "{}", scoreboard(state))?;
        writeln!(out, "{}", "Round History".underline())?;
        for line in history_window(state, self.history_rows) {
            writeln!(out, "  {}", line)?;
        }
        Ok(())
    }
}

fn banner(outcome: Outcome) -> colored::ColoredString {
    let text = outcome.banner().bold();
    match outcome {
        Outcome::PlayerWin => text.green(),
        Outcome::ComputerWin => text.red(),
        Outcome::Tie => text.dimmed(),
    }
}
