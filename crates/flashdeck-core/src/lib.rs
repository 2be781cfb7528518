//! flashdeck-core — Card deck model, import/export, and practice scoring.
//!
//! This crate holds everything the interactive trainer needs apart from the
//! command loop itself: the deck, its file format, the quiz logic, and the
//! console seam that makes sessions scriptable.

pub mod codec;
pub mod command;
pub mod config;
pub mod console;
pub mod deck;
pub mod error;
pub mod model;
pub mod practice;

pub use deck::Deck;
pub use error::DeckError;
pub use model::Card;
