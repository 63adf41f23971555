use crate::{legal_moves, AttackState, Card, GameLog};

/// Read-only snapshot handed to the display before each decision.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub hands: &'a [Vec<Card>],
    pub current_player: usize,
    pub discard: &'a [Card],
    pub is_attack: bool,
    /// Cards owed if the attack is not countered; 0 when no attack is live.
    pub damage: u32,
    pub log: &'a GameLog,
}

impl<'a> TableView<'a> {
    pub fn top(&self) -> Option<&'a Card> {
        self.discard.last()
    }

    pub fn current_hand(&self) -> &'a [Card] {
        &self.hands[self.current_player]
    }

    /// Legal moves for the acting player, in the order they are numbered.
    pub fn available(&self) -> Vec<Card> {
        match self.top() {
            Some(top) => {
                let attack = AttackState {
                    is_attack: self.is_attack,
                    damage: self.damage,
                };
                legal_moves(self.current_hand(), top, &attack)
            }
            None => Vec::new(),
        }
    }
}

pub trait DisplaySink {
    fn render(&mut self, view: &TableView<'_>);
}

/// Display that draws nothing, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn render(&mut self, _view: &TableView<'_>) {}
}

#[cfg(test)]
mod tests {
    use crate::{AttackState, Card, Deck, GameState, Rank, RngState, Suit};

    fn table(attack: AttackState) -> GameState {
        let deck = Deck {
            draw: Vec::new(),
            discard: vec![Card::new(Suit::Hearts, Rank::Ace)],
        };
        let hands = vec![
            vec![
                Card::new(Suit::Hearts, Rank::Two),
                Card::new(Suit::Spades, Rank::Ace),
                Card::new(Suit::Hearts, Rank::Nine),
            ],
            Vec::new(),
        ];
        GameState::from_parts(deck, hands, attack, RngState::from_seed(3)).unwrap()
    }

    #[test]
    fn view_mirrors_the_live_attack() {
        let state = table(AttackState::active(6));
        let view = state.view(0);
        assert!(view.is_attack);
        assert_eq!(view.damage, 6);
        assert_eq!(view.available(), vec![Card::new(Suit::Spades, Rank::Ace)]);
    }

    #[test]
    fn quiet_table_has_no_damage() {
        let state = table(AttackState::default());
        let view = state.view(0);
        assert!(!view.is_attack);
        assert_eq!(view.damage, 0);
        assert_eq!(view.available().len(), 3);
    }
}
