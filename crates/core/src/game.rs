use crate::{AttackState, Card, Deck, GameLog, RngState, TableView};
use thiserror::Error;

mod session;
mod setup;
mod turn;

pub use session::*;
pub use turn::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("discard pile is empty")]
    EmptyDiscardPile,
    #[error("card count drifted: expected {expected}, found {found}")]
    CardCountDrift { expected: usize, found: usize },
    #[error("game is already over, player {} won", .winner + 1)]
    GameOver { winner: usize },
    #[error("expected {expected} seats, got {found}")]
    SeatCountMismatch { expected: usize, found: usize },
    #[error("no player at index {0}")]
    InvalidPlayer(usize),
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub deck: Deck,
    pub hands: Vec<Vec<Card>>,
    pub attack: AttackState,
    pub log: GameLog,
    pub rng: RngState,
    total_cards: usize,
    winner: Option<usize>,
}

impl GameState {
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn top_card(&self) -> Result<Card, GameError> {
        self.deck.top().copied().ok_or(GameError::EmptyDiscardPile)
    }

    /// Cards currently on the table: draw pile, discard pile and every hand.
    pub fn card_count(&self) -> usize {
        self.deck.card_count() + self.hands.iter().map(Vec::len).sum::<usize>()
    }

    pub fn view(&self, player: usize) -> TableView<'_> {
        TableView {
            hands: &self.hands,
            current_player: player,
            discard: &self.deck.discard,
            is_attack: self.attack.is_attack,
            damage: self.attack.damage,
            log: &self.log,
        }
    }

    pub fn check_invariants(&self) -> Result<(), GameError> {
        if self.deck.discard.is_empty() {
            tracing::error!("discard pile emptied during play");
            return Err(GameError::EmptyDiscardPile);
        }
        let found = self.card_count();
        if found != self.total_cards {
            tracing::error!(expected = self.total_cards, found, "card count drifted");
            return Err(GameError::CardCountDrift {
                expected: self.total_cards,
                found,
            });
        }
        Ok(())
    }
}
