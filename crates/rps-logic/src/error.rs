//! Error types for move parsing and opponent setup.

use std::fmt;

use thiserror::Error;

use crate::moves::Move;

/// Which side of a round supplied a move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Player,
    Computer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Player => write!(f, "player"),
            Role::Computer => write!(f, "computer"),
        }
    }
}

/// A label that failed to parse as a [`Move`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedMove {
    pub role: Role,
    pub label: String,
}

impl fmt::Display for RejectedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.role, self.label)
    }
}

/// Errors surfaced by the game core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpsError {
    /// One or more labels are not Rock, Paper or Scissors
    #[error("Invalid moves: {}; expected one of {}", join_rejected(.rejected), valid_labels())]
    InvalidMove { rejected: Vec<RejectedMove> },

    /// A scripted opponent was given nothing to play
    #[error("Scripted opponent needs at least one move")]
    EmptyScript,
}

impl RpsError {
    /// Single rejected label for the given role
    pub fn invalid(role: Role, label: impl Into<String>) -> Self {
        RpsError::InvalidMove {
            rejected: vec![RejectedMove { role, label: label.into() }],
        }
    }

    /// Rejected labels, empty for non-move errors
    pub fn rejected(&self) -> &[RejectedMove] {
        match self {
            RpsError::InvalidMove { rejected } => rejected,
            RpsError::EmptyScript => &[],
        }
    }
}

fn join_rejected(rejected: &[RejectedMove]) -> String {
    rejected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sorted, the way the old module reported them
fn valid_labels() -> String {
    let mut labels: Vec<&str> = Move::ALL.iter().map(|m| m.label()).collect();
    labels.sort_unstable();
    labels.join(", ")
}
