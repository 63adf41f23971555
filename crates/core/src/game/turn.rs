use super::*;
use crate::{legal_moves, DisplaySink, Event, MoveSource};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// `fallback` is set when the seat's selection was invalid and the card
    /// was picked at random instead.
    Played { card: Card, fallback: bool },
    Drew { requested: usize, drawn: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player: usize,
    pub action: TurnAction,
    /// Attack chain left for the next player.
    pub attack: AttackState,
    pub winner: Option<usize>,
}

impl TurnOutcome {
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }
}

impl GameState {
    /// Runs one full turn for `player`: show the table, play a legal card
    /// or take the draw, then check for a win.
    pub fn play_turn(
        &mut self,
        player: usize,
        source: &mut dyn MoveSource,
        display: &mut dyn DisplaySink,
    ) -> Result<TurnOutcome, GameError> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver { winner });
        }
        if player >= self.hands.len() {
            return Err(GameError::InvalidPlayer(player));
        }

        display.render(&self.view(player));
        let top = self.top_card()?;
        let legal = legal_moves(&self.hands[player], &top, &self.attack);

        let action = if legal.is_empty() {
            self.take_draw(player)
        } else {
            self.play_selected(player, &legal, source)
        };
        self.check_invariants()?;

        if self.hands[player].is_empty() {
            info!(player, "hand emptied, game over");
            self.winner = Some(player);
            self.log.push(Event::PlayerWon { player });
            display.render(&self.view(player));
        }

        Ok(TurnOutcome {
            player,
            action,
            attack: self.attack,
            winner: self.winner,
        })
    }

    fn play_selected(
        &mut self,
        player: usize,
        legal: &[Card],
        source: &mut dyn MoveSource,
    ) -> TurnAction {
        let selection = source.select(&self.view(player), legal);
        let (card, fallback) = match selection.resolve(legal.len()) {
            Some(idx) => (legal[idx], false),
            None => {
                warn!(player, ?selection, "invalid selection, picking at random");
                self.log.push(Event::InvalidSelection { player });
                // legal is non-empty on this path
                let idx = self.rng.index(legal.len()).unwrap_or(0);
                (legal[idx], true)
            }
        };

        // legal is drawn from this hand, so the card is always found
        let hand = &mut self.hands[player];
        if let Some(pos) = hand.iter().position(|held| *held == card) {
            hand.remove(pos);
        }
        self.deck.put(card);
        self.log.push(Event::CardPlayed { player, card });
        self.attack.apply_play(&card);
        debug!(player, %card, damage = self.attack.damage, "card played");

        TurnAction::Played { card, fallback }
    }

    fn take_draw(&mut self, player: usize) -> TurnAction {
        let requested = if self.attack.is_attack {
            self.attack.damage as usize
        } else {
            1
        };
        self.log.push(Event::CardsDrawn { player, requested });
        let drawn = self.deck.draw_into(
            &mut self.hands[player],
            requested,
            &mut self.rng,
            &mut self.log,
        );
        self.attack.reset();
        debug!(player, requested, drawn, "cards drawn");
        TurnAction::Drew { requested, drawn }
    }
}
