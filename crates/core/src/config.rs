//! Fixed rule constants. The game has no configurable rule variants; only
//! the seed differs between sessions.

pub const PLAYER_COUNT: usize = 2;
pub const CARDS_PER_PLAYER: usize = 7;
pub const DECK_SIZE: usize = 54;
pub const LOG_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u64,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: 0xC0FFEE }
    }
}
