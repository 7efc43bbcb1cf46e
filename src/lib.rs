//! Rules engine for a dealer-vs-player blackjack round, with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that deals cards without duplicates,
//! keeps soft-ace adjusted scores for both hands, and resolves the winner
//! once the dealer has played. Presentation layers drive it through return
//! values only.
//!
//! # Example
//!
//! ```
//! use bjcore::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_round().unwrap();
//!
//! if game.state() == GameState::AwaitingPlayerAction {
//!     let turn = game.stand().unwrap();
//!     println!("{}", turn.outcome.message());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deal;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deal::{CardSource, DealtCards, RandomSource, ScriptedSource, deal_card};
pub use error::{ActionError, DealError, HandIdError, ParseCardError};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, Hand, HandId};
pub use options::{AceAdjustment, GameOptions};
pub use result::{DealerTurn, Hit, OpeningDeal, Outcome};
