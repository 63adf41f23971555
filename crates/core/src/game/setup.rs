use super::*;
use crate::{GameConfig, CARDS_PER_PLAYER, PLAYER_COUNT};
use tracing::info;

impl GameState {
    /// Shuffles a fresh deck, deals every hand and turns the starting card.
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = RngState::from_seed(config.seed);
        let mut deck = Deck::standard54();
        deck.shuffle(&mut rng);
        let hands: Vec<Vec<Card>> = (0..PLAYER_COUNT)
            .map(|_| deck.deal(CARDS_PER_PLAYER))
            .collect();
        let starter = deck.deal(1);
        deck.discard.extend(starter);
        let total_cards = deck.card_count() + hands.iter().map(Vec::len).sum::<usize>();
        info!(
            seed = config.seed,
            players = PLAYER_COUNT,
            "dealt new game"
        );
        Self {
            deck,
            hands,
            attack: AttackState::default(),
            log: GameLog::new(),
            rng,
            total_cards,
            winner: None,
        }
    }

    /// Builds a table from explicit piles, e.g. to set up a position. The
    /// card total seen here is the one later turns must conserve.
    pub fn from_parts(
        deck: Deck,
        hands: Vec<Vec<Card>>,
        attack: AttackState,
        rng: RngState,
    ) -> Result<Self, GameError> {
        if hands.len() != PLAYER_COUNT {
            return Err(GameError::SeatCountMismatch {
                expected: PLAYER_COUNT,
                found: hands.len(),
            });
        }
        if deck.discard.is_empty() {
            return Err(GameError::EmptyDiscardPile);
        }
        let total_cards = deck.card_count() + hands.iter().map(Vec::len).sum::<usize>();
        Ok(Self {
            deck,
            hands,
            attack,
            log: GameLog::new(),
            rng,
            total_cards,
            winner: None,
        })
    }

    /// Independent RNG stream for an automated seat.
    pub fn fork_rng(&mut self) -> RngState {
        self.rng.fork()
    }
}
