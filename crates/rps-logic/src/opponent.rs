//! Computer opponents

use log::trace;

use crate::error::RpsError;
use crate::moves::Move;
use crate::random::SeededRng;

/// Uniformly random move drawn from `rng`
pub fn random_move(rng: &mut SeededRng) -> Move {
    Move::ALL[rng.next_range(Move::ALL.len() as u32) as usize]
}

/// Source of the computer's moves
pub trait Opponent {
    /// Pick the computer's move for the next round
    fn choose(&mut self) -> Move;
}

impl<O: Opponent + ?Sized> Opponent for Box<O> {
    fn choose(&mut self) -> Move {
        (**self).choose()
    }
}

/// Uniform random choice each round, no memory of earlier rounds
#[derive(Clone, Debug)]
pub struct RandomOpponent {
    rng: SeededRng,
}

impl RandomOpponent {
    pub fn new(rng: SeededRng) -> Self {
        Self { rng }
    }

    /// Reproducible opponent for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededRng::from_seed(seed))
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self) -> Move {
        let m = random_move(&mut self.rng);
        trace!("random opponent chose {}", m);
        m
    }
}

/// Replays a fixed script of moves, wrapping around at the end
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    script: Vec<Move>,
    cursor: usize,
}

impl ScriptedOpponent {
    pub fn new(script: Vec<Move>) -> Result<Self, RpsError> {
        if script.is_empty() {
            return Err(RpsError::EmptyScript);
        }
        Ok(Self { script, cursor: 0 })
    }

    /// Always plays the same move
    pub fn always(m: Move) -> Self {
        Self { script: vec![m], cursor: 0 }
    }
}

impl Opponent for ScriptedOpponent {
    fn choose(&mut self) -> Move {
        let m = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        trace!("scripted opponent played {}", m);
        m
    }
}
