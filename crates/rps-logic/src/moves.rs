//! Move and outcome definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Role, RpsError};

/// A move in Rock-Paper-Scissors
///
/// Deserializes through [`FromStr`], so serialized labels get the same
/// leniency and the same [`RpsError::InvalidMove`] as typed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Move {
    /// Beats Scissors, loses to Paper.
    Rock,
    /// Beats Rock, loses to Scissors.
    Paper,
    /// Beats Paper, loses to Rock.
    Scissors,
}

impl Move {
    /// Every valid move, in menu order
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Lowercase label used at text boundaries
    pub fn label(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Capitalized name for menus and buttons
    pub fn title(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// The move this one defeats
    pub fn victim(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// The move that defeats this one
    pub fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Check if this move beats the other
    pub fn beats(self, other: Move) -> bool {
        self.victim() == other
    }

    /// Parse a label on behalf of the given side of the round
    pub fn parse_as(label: &str, role: Role) -> Result<Move, RpsError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(RpsError::invalid(role, label)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Move {
    type Err = RpsError;

    /// Parses as the player's move; the computer never types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse_as(s, Role::Player)
    }
}

impl TryFrom<String> for Move {
    type Error = RpsError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Result of a single round, from the player's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "player")]
    PlayerWin,
    #[serde(rename = "computer")]
    ComputerWin,
    #[serde(rename = "tie")]
    Tie,
}

impl Outcome {
    /// Same round seen from the computer's side
    pub fn reversed(self) -> Outcome {
        match self {
            Outcome::PlayerWin => Outcome::ComputerWin,
            Outcome::ComputerWin => Outcome::PlayerWin,
            Outcome::Tie => Outcome::Tie,
        }
    }

    /// Result line shown after a round
    pub fn banner(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "You win!",
            Outcome::ComputerWin => "Computer wins!",
            Outcome::Tie => "It's a tie!",
        }
    }

    /// Short winner tag used in history lines
    pub fn winner_label(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "Player",
            Outcome::ComputerWin => "Computer",
            Outcome::Tie => "Tie",
        }
    }
}
