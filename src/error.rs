//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while dealing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The card source has no more cards to offer.
    #[error("card source is exhausted")]
    SourceExhausted,
    /// Every identity in the deck has already been dealt this round.
    #[error("all 52 cards have been dealt this round")]
    DeckExhausted,
}

/// Errors that can occur during turn actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game phase for this action.
    #[error("invalid game phase for this action")]
    InvalidState,
    /// Dealing the required card failed.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Error returned when a hand identifier cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandIdError {
    /// The identifier names neither the dealer nor the player.
    #[error("invalid hand identifier: {0:?}")]
    InvalidHandIdentifier(String),
}

/// Errors that can occur while parsing a card identity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The code is empty.
    #[error("empty card code")]
    Empty,
    /// The rank part is not one of 2-10, T, J, Q, K, A.
    #[error("invalid rank in card code")]
    InvalidRank,
    /// The suit part is not one of H, D, C, S.
    #[error("invalid suit in card code")]
    InvalidSuit,
}
