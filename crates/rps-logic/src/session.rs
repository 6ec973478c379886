//! Session tracking: scores and round history

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::RpsError;
use crate::moves::{Move, Outcome};
use crate::opponent::{Opponent, RandomOpponent};
use crate::resolve;

/// Result of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

impl fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Round {}: You={}  Computer={}  => {}",
            self.round_number,
            self.player_move,
            self.computer_move,
            self.outcome.winner_label(),
        )
    }
}

/// Scores and history accumulated since the session started or was last reset
///
/// `player_wins + computer_wins + ties == round_count == history.len()` holds
/// between calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
    pub round_count: u32,
    pub history: Vec<RoundRecord>,
}

impl SessionState {
    /// Most recent round, if any
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    fn record(&mut self, player_move: Move, computer_move: Move, outcome: Outcome) -> RoundRecord {
        self.round_count += 1;
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }

        let record = RoundRecord {
            round_number: self.round_count,
            player_move,
            computer_move,
            outcome,
        };
        self.history.push(record);
        record
    }
}

/// A game against one computer opponent
///
/// Owns its state outright, so independent sessions never interfere.
#[derive(Clone, Debug)]
pub struct Session<O = RandomOpponent> {
    opponent: O,
    state: SessionState,
}

impl Session<RandomOpponent> {
    /// Session whose computer moves are reproducible from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomOpponent::seeded(seed))
    }

    /// Session seeded from process entropy
    #[cfg(any(not(target_arch = "wasm32"), feature = "wasm"))]
    pub fn from_entropy() -> Self {
        Self::new(RandomOpponent::new(crate::SeededRng::from_entropy()))
    }
}

impl<O: Opponent> Session<O> {
    pub fn new(opponent: O) -> Self {
        Self {
            opponent,
            state: SessionState::default(),
        }
    }

    /// Play one round against the opponent and record it
    pub fn play_round(&mut self, player_move: Move) -> RoundRecord {
        let computer_move = self.opponent.choose();
        let outcome = resolve(player_move, computer_move);
        let record = self.state.record(player_move, computer_move, outcome);

        debug!(
            "round {}: player={} computer={} outcome={:?}",
            record.round_number, player_move, computer_move, outcome
        );
        record
    }

    /// Parse a text move and play it
    ///
    /// A bad label leaves the session untouched.
    pub fn play_label(&mut self, label: &str) -> Result<RoundRecord, RpsError> {
        let player_move = label.parse::<Move>().map_err(|e| {
            warn!("rejected player move {:?}", label);
            e
        })?;
        Ok(self.play_round(player_move))
    }

    /// Clear scores and history
    pub fn reset(&mut self) {
        debug!("reset after {} rounds", self.state.round_count);
        self.state = SessionState::default();
    }

    /// Current scores and full history
    pub fn snapshot(&self) -> &SessionState {
        &self.state
    }

    /// End the session, keeping its final state
    pub fn into_state(self) -> SessionState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::ScriptedOpponent;

    fn assert_consistent(state: &SessionState) {
        assert_eq!(
            state.player_wins + state.computer_wins + state.ties,
            state.round_count
        );
        assert_eq!(state.round_count as usize, state.history.len());
        for (i, record) in state.history.iter().enumerate() {
            assert_eq!(record.round_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_fresh_session_is_empty() {
        let session = Session::seeded(1);
        let state = session.snapshot();

        assert_eq!(*state, SessionState::default());
        assert_eq!(state.round_count, 0);
        assert!(state.is_empty());
        assert!(state.last_round().is_none());
    }

    #[test]
    fn test_rock_beats_forced_scissors() {
        let mut session = Session::new(ScriptedOpponent::always(Move::Scissors));

        let record = session.play_round(Move::Rock);
        let state = session.snapshot();

        assert_eq!(record.outcome, Outcome::PlayerWin);
        assert_eq!(state.player_wins, 1);
        assert_eq!(state.computer_wins, 0);
        assert_eq!(state.ties, 0);
        assert_eq!(state.round_count, 1);
        assert_eq!(
            state.history[0],
            RoundRecord {
                round_number: 1,
                player_move: Move::Rock,
                computer_move: Move::Scissors,
                outcome: Outcome::PlayerWin,
            }
        );
    }

    #[test]
    fn test_returned_record_is_last_history_entry() {
        let mut session = Session::seeded(5);

        for m in [Move::Rock, Move::Paper, Move::Scissors, Move::Rock] {
            let record = session.play_round(m);
            assert_eq!(session.snapshot().last_round(), Some(&record));
            assert_eq!(record.player_move, m);
        }
    }

    #[test]
    fn test_each_outcome_bumps_one_counter() {
        let script = vec![Move::Scissors, Move::Paper, Move::Rock];
        let mut session = Session::new(ScriptedOpponent::new(script).unwrap());

        assert_eq!(session.play_round(Move::Rock).outcome, Outcome::PlayerWin);
        assert_eq!(session.play_round(Move::Rock).outcome, Outcome::ComputerWin);
        assert_eq!(session.play_round(Move::Rock).outcome, Outcome::Tie);

        let state = session.snapshot();
        assert_eq!((state.player_wins, state.computer_wins, state.ties), (1, 1, 1));
        assert_consistent(state);
    }

    #[test]
    fn test_counts_stay_consistent() {
        let mut session = Session::seeded(42);

        for i in 0..100 {
            session.play_round(Move::ALL[i % 3]);
        }

        let state = session.snapshot();
        assert_eq!(state.round_count, 100);
        assert_consistent(state);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::seeded(3);
        for _ in 0..7 {
            session.play_round(Move::Paper);
        }
        assert_eq!(session.snapshot().round_count, 7);

        session.reset();

        assert_eq!(*session.snapshot(), SessionState::default());

        // numbering restarts after a reset
        let record = session.play_round(Move::Rock);
        assert_eq!(record.round_number, 1);
    }

    #[test]
    fn test_play_label_parses_text() {
        let mut session = Session::new(ScriptedOpponent::always(Move::Rock));

        let record = session.play_label("Paper").unwrap();
        assert_eq!(record.player_move, Move::Paper);
        assert_eq!(record.outcome, Outcome::PlayerWin);
    }

    #[test]
    fn test_play_label_rejects_without_side_effects() {
        let script = vec![Move::Rock, Move::Paper];
        let mut session = Session::new(ScriptedOpponent::new(script).unwrap());

        let err = session.play_label("dynamite").unwrap_err();
        assert!(matches!(err, RpsError::InvalidMove { .. }));
        assert_eq!(*session.snapshot(), SessionState::default());

        // the opponent's script was not advanced
        let record = session.play_round(Move::Scissors);
        assert_eq!(record.computer_move, Move::Rock);
    }

    #[test]
    fn test_seeded_sessions_replay_identically() {
        let mut a = Session::seeded(2024);
        let mut b = Session::seeded(2024);

        for m in Move::ALL.iter().cycle().take(30) {
            a.play_round(*m);
            b.play_round(*m);
        }

        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = Session::new(ScriptedOpponent::always(Move::Rock));
        let b = Session::new(ScriptedOpponent::always(Move::Rock));

        a.play_round(Move::Paper);

        assert_eq!(a.snapshot().round_count, 1);
        assert_eq!(b.snapshot().round_count, 0);
    }

    #[test]
    fn test_round_record_display() {
        let record = RoundRecord {
            round_number: 3,
            player_move: Move::Paper,
            computer_move: Move::Scissors,
            outcome: Outcome::ComputerWin,
        };
        assert_eq!(
            record.to_string(),
            "Round 3: You=paper  Computer=scissors  => Computer"
        );
    }

    #[test]
    fn test_state_serializes_to_json() {
        let mut session = Session::new(ScriptedOpponent::always(Move::Rock));
        session.play_round(Move::Rock);

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["ties"], 1);
        assert_eq!(json["round_count"], 1);
        assert_eq!(json["history"][0]["player_move"], "rock");
        assert_eq!(json["history"][0]["outcome"], "tie");

        let back: SessionState = serde_json::from_value(json).unwrap();
        assert_eq!(&back, session.snapshot());
    }
}
