use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use onecard_core::{format_cards, TableView, LOG_WINDOW};
use std::io::{self, Write};

const RULE: &str = "----------------------------------------";

/// Renders the table to a terminal, clearing it first unless disabled.
pub struct TerminalDisplay<W: Write> {
    out: W,
    clear: bool,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout(clear: bool) -> Self {
        Self::new(io::stdout(), clear)
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    fn draw(&mut self, view: &TableView<'_>) -> io::Result<()> {
        if self.clear {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.out.write_all(render_table(view).as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> onecard_core::DisplaySink for TerminalDisplay<W> {
    fn render(&mut self, view: &TableView<'_>) {
        if let Err(err) = self.draw(view) {
            tracing::warn!(%err, "failed to draw table");
        }
    }
}

pub fn render_table(view: &TableView<'_>) -> String {
    let top = view
        .top()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string());
    let mut out = format!(":: Last Card :: {top}");
    if view.is_attack {
        out.push_str(&format!("  (attack! {} to draw)", view.damage));
    }
    out.push('\n');
    out.push_str(&format!(
        ":: Player {} Hand :: {}\n",
        view.current_player + 1,
        format_cards(view.current_hand())
    ));
    out.push_str(&format!(":: Available :: {}\n", format_cards(&view.available())));
    out.push_str(RULE);
    out.push('\n');
    for line in view.log.recent_lines(LOG_WINDOW) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use onecard_core::{
        AttackState, Card, Deck, DisplaySink, Event, GameState, Rank, RngState, Suit,
    };

    fn state(attack: AttackState) -> GameState {
        let deck = Deck {
            draw: vec![Card::new(Suit::Spades, Rank::Nine)],
            discard: vec![Card::new(Suit::Hearts, Rank::Ace)],
        };
        let hands = vec![
            vec![
                Card::new(Suit::Hearts, Rank::Four),
                Card::new(Suit::Clubs, Rank::Ace),
                Card::new(Suit::Clubs, Rank::King),
            ],
            vec![Card::BLACK_JOKER],
        ];
        GameState::from_parts(deck, hands, attack, RngState::from_seed(1)).unwrap()
    }

    #[test]
    fn renders_top_hand_and_available() {
        let state = state(AttackState::default());
        let text = render_table(&state.view(0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ":: Last Card :: [♥A]");
        assert_eq!(lines[1], ":: Player 1 Hand :: [♥4] [♣A] [♣K]");
        assert_eq!(lines[2], ":: Available :: [♥4] [♣A]");
        assert_eq!(lines[3], RULE);
        assert_eq!(lines[4], RULE);
    }

    #[test]
    fn renders_attack_and_log_tail() {
        let mut state = state(AttackState::active(3));
        for player in 0..12 {
            state.log.push(Event::CardsDrawn {
                player: player % 2,
                requested: 1,
            });
        }
        let text = render_table(&state.view(0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ":: Last Card :: [♥A]  (attack! 3 to draw)");
        assert_eq!(lines[2], ":: Available :: [♣A]");
        assert_eq!(lines.len(), 4 + LOG_WINDOW + 1);
    }

    #[test]
    fn display_writes_without_clearing_when_disabled() {
        let state = state(AttackState::default());
        let mut display = TerminalDisplay::new(Vec::new(), false);
        display.render(&state.view(1));
        let written = String::from_utf8(display.out).unwrap();
        assert!(written.starts_with(":: Last Card :: [♥A]\n:: Player 2 Hand :: [Jokerblack]"));
    }
}
