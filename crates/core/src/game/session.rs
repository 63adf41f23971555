use super::*;
use crate::{DisplaySink, GameConfig, MoveSource, RandomMoveSource, PLAYER_COUNT};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub winner: usize,
    /// Turns taken, including the winning one.
    pub turns: usize,
    pub seed: u64,
}

/// A table plus one move source per seat, stepped in strict seat order.
pub struct Session {
    state: GameState,
    seats: Vec<Box<dyn MoveSource>>,
    turn: usize,
}

impl Session {
    pub fn new(state: GameState, seats: Vec<Box<dyn MoveSource>>) -> Result<Self, GameError> {
        if seats.len() != PLAYER_COUNT || state.player_count() != PLAYER_COUNT {
            return Err(GameError::SeatCountMismatch {
                expected: PLAYER_COUNT,
                found: seats.len(),
            });
        }
        Ok(Self {
            state,
            seats,
            turn: 0,
        })
    }

    /// Deals a new game where every seat is played by the computer.
    pub fn automated(config: &GameConfig) -> Self {
        let mut state = GameState::new(config);
        let seats = (0..PLAYER_COUNT)
            .map(|_| Box::new(RandomMoveSource::new(state.fork_rng())) as Box<dyn MoveSource>)
            .collect();
        Self {
            state,
            seats,
            turn: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Index of the current turn, 0-based. Does not move past the winning
    /// turn.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn current_player(&self) -> usize {
        self.turn % self.seats.len()
    }

    /// Plays the current seat's turn and passes play on unless it ended the
    /// game.
    pub fn step(&mut self, display: &mut dyn DisplaySink) -> Result<TurnOutcome, GameError> {
        let player = self.current_player();
        let seat = self.seats[player].as_mut();
        let outcome = self.state.play_turn(player, seat, display)?;
        if !outcome.is_game_over() {
            self.turn += 1;
        }
        Ok(outcome)
    }

    /// Steps until someone wins.
    pub fn run(&mut self, display: &mut dyn DisplaySink) -> Result<SessionSummary, GameError> {
        loop {
            let outcome = self.step(display)?;
            if let Some(winner) = outcome.winner {
                let summary = SessionSummary {
                    winner,
                    turns: self.turn + 1,
                    seed: self.state.seed(),
                };
                info!(winner, turns = summary.turns, "session finished");
                return Ok(summary);
            }
        }
    }
}
