use crate::{Card, RngState, TableView};

/// What a move source picked out of the legal set it was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 0-based index into the legal moves.
    Index(usize),
    Invalid,
}

impl Selection {
    /// Resolves against a legal set of `count` cards; out-of-range indices
    /// count as invalid.
    pub fn resolve(self, count: usize) -> Option<usize> {
        match self {
            Selection::Index(idx) if idx < count => Some(idx),
            _ => None,
        }
    }
}

/// Parses a 1-based choice typed at the prompt.
pub fn parse_selection(input: &str, count: usize) -> Selection {
    match input.trim().parse::<usize>() {
        Ok(choice) if (1..=count).contains(&choice) => Selection::Index(choice - 1),
        _ => Selection::Invalid,
    }
}

/// Picks a card for one seat. Only called when at least one move is legal.
pub trait MoveSource {
    fn select(&mut self, view: &TableView<'_>, legal: &[Card]) -> Selection;
}

/// Automated seat: uniform choice among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomMoveSource {
    rng: RngState,
}

impl RandomMoveSource {
    pub fn new(rng: RngState) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(RngState::from_seed(seed))
    }
}

impl MoveSource for RandomMoveSource {
    fn select(&mut self, _view: &TableView<'_>, legal: &[Card]) -> Selection {
        match self.rng.index(legal.len()) {
            Some(idx) => Selection::Index(idx),
            None => Selection::Invalid,
        }
    }
}
