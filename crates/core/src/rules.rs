//! Card classification and move legality. Everything here is pure.

use crate::{Card, Rank};
use serde::{Deserialize, Serialize};

/// Pending attack chain carried between turns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttackState {
    pub is_attack: bool,
    pub damage: u32,
}

impl AttackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(damage: u32) -> Self {
        Self {
            is_attack: true,
            damage,
        }
    }

    /// Extends the chain with an attack card.
    pub fn extend(&mut self, card: &Card) {
        self.damage += damage_of(card);
        self.is_attack = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies the effect of playing `card` on the chain.
    pub fn apply_play(&mut self, card: &Card) {
        if is_attack_card(card) {
            self.extend(card);
        } else {
            self.reset();
        }
    }
}

pub fn is_attack_card(card: &Card) -> bool {
    card.is_joker() || matches!(card.rank, Rank::Ace | Rank::Two)
}

pub fn damage_of(card: &Card) -> u32 {
    match card.rank {
        Rank::Colored => 10,
        Rank::Black => 7,
        Rank::Ace => 3,
        Rank::Two => 2,
        _ => 0,
    }
}

/// Cards in `hand` that may be played on `top`, in hand order.
pub fn legal_moves(hand: &[Card], top: &Card, attack: &AttackState) -> Vec<Card> {
    if !attack.is_attack && top.is_joker() {
        return hand.to_vec();
    }
    hand.iter()
        .filter(|card| is_legal(card, top, attack))
        .copied()
        .collect()
}

fn is_legal(card: &Card, top: &Card, attack: &AttackState) -> bool {
    if card.is_joker() {
        return true;
    }
    if card.suit != top.suit && card.rank != top.rank {
        return false;
    }
    !attack.is_attack || damage_of(card) >= damage_of(top)
}
