use crate::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that happened at the table. Player indices are 0-based; the
/// rendered text uses 1-based seat numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    CardPlayed { player: usize, card: Card },
    CardsDrawn { player: usize, requested: usize },
    DeckRecycled { cards: usize },
    DeckExhausted,
    InvalidSelection { player: usize },
    PlayerWon { player: usize },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::CardPlayed { player, card } => {
                write!(f, "Player {} plays {}", player + 1, card)
            }
            Event::CardsDrawn {
                player,
                requested: 1,
            } => write!(f, "Player {} draws 1 card!", player + 1),
            Event::CardsDrawn { player, requested } => {
                write!(f, "Player {} draws {} card(s)!", player + 1, requested)
            }
            Event::DeckRecycled { .. } => write!(
                f,
                "The deck ran out; the discard pile was shuffled into a new deck."
            ),
            Event::DeckExhausted => write!(f, "The deck is empty. No more cards can be drawn."),
            Event::InvalidSelection { .. } => write!(f, "Invalid input. Playing a random card!"),
            Event::PlayerWon { player } => write!(f, "Player {} wins!", player + 1),
        }
    }
}

/// Append-only table log. The full history is kept; displays only read the
/// tail.
#[derive(Debug, Clone, Default)]
pub struct GameLog {
    events: Vec<Event>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// The most recent `count` events, oldest first.
    pub fn recent(&self, count: usize) -> &[Event] {
        let start = self.events.len().saturating_sub(count);
        &self.events[start..]
    }

    pub fn recent_lines(&self, count: usize) -> Vec<String> {
        self.recent(count).iter().map(Event::to_string).collect()
    }
}
