//! Core One Card game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod moves;
pub mod rng;
pub mod rules;
pub mod view;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use moves::*;
pub use rng::*;
pub use rules::*;
pub use view::*;
