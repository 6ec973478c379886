//! Game Logic for Rock-Paper-Scissors
//!
//! Core logic for a single-player game against a random computer opponent.
//! This crate is compiled to:
//! - Native (for the console front-end)
//! - WASM (for a browser front-end)

mod error;
mod moves;
mod opponent;
mod random;
mod session;

pub mod display;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{RejectedMove, Role, RpsError};
pub use moves::{Move, Outcome};
pub use opponent::{random_move, Opponent, RandomOpponent, ScriptedOpponent};
pub use random::SeededRng;
pub use session::{RoundRecord, Session, SessionState};

/// Decide a round from the player's point of view
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::PlayerWin
    } else {
        Outcome::ComputerWin
    }
}

/// Decide a round given raw text labels
///
/// Both labels are checked before failing, so the error names every bad
/// argument.
pub fn resolve_labels(player: &str, computer: &str) -> Result<Outcome, RpsError> {
    match (
        Move::parse_as(player, Role::Player),
        Move::parse_as(computer, Role::Computer),
    ) {
        (Ok(p), Ok(c)) => Ok(resolve(p, c)),
        (p, c) => {
            let rejected = [p.err(), c.err()]
                .into_iter()
                .flatten()
                .flat_map(|e| e.rejected().to_vec())
                .collect();
            Err(RpsError::InvalidMove { rejected })
        }
    }
}
