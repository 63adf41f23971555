use crate::{Card, Event, GameLog, Rank, RngState, Suit, DECK_SIZE};
use tracing::{debug, warn};

/// Draw pile plus discard pile. The last element of each is its top.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    /// The 54-card universe: four suits of 2..A followed by both Jokers.
    pub fn standard54() -> Self {
        let mut draw = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                draw.push(Card::new(suit, rank));
            }
        }
        draw.push(Card::BLACK_JOKER);
        draw.push(Card::COLORED_JOKER);
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    /// Pops up to `count` cards off the draw pile without recycling.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.draw.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    pub fn top(&self) -> Option<&Card> {
        self.discard.last()
    }

    pub fn put(&mut self, card: Card) {
        self.discard.push(card);
    }

    pub fn card_count(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    /// Shuffles everything under the discard top back into an empty draw
    /// pile. Returns whether a recycle happened.
    pub fn refill_if_needed(&mut self, rng: &mut RngState, log: &mut GameLog) -> bool {
        if !self.draw.is_empty() || self.discard.len() <= 1 {
            return false;
        }
        let Some(top) = self.discard.pop() else {
            return false;
        };
        self.draw.append(&mut self.discard);
        rng.shuffle(&mut self.draw);
        self.discard.push(top);
        debug!(cards = self.draw.len(), "recycled discard pile into deck");
        log.push(Event::DeckRecycled {
            cards: self.draw.len(),
        });
        true
    }

    /// Moves up to `count` cards into `hand`, recycling the discard pile when
    /// the draw pile runs dry. Returns how many cards were actually drawn.
    pub fn draw_into(
        &mut self,
        hand: &mut Vec<Card>,
        count: usize,
        rng: &mut RngState,
        log: &mut GameLog,
    ) -> usize {
        self.refill_if_needed(rng, log);
        let mut drawn = 0;
        for _ in 0..count {
            if self.draw.is_empty() {
                self.refill_if_needed(rng, log);
            }
            let Some(card) = self.draw.pop() else {
                warn!(requested = count, drawn, "deck exhausted mid-draw");
                log.push(Event::DeckExhausted);
                break;
            };
            hand.push(card);
            drawn += 1;
        }
        drawn
    }
}
