//! Outcome and turn report types.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Winner of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (higher score or dealer bust).
    Player,
    /// Dealer wins (player bust or higher dealer score).
    Dealer,
    /// Equal scores.
    Tie,
}

impl Outcome {
    /// Lowercase name, as used by the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Dealer => "dealer",
            Self::Tie => "tie",
        }
    }

    /// Message shown to the player when the round ends.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Player => "Player won!",
            Self::Dealer => "Player lost :(",
            Self::Tie => "It's a tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cards dealt at the start of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningDeal {
    /// The dealer's face-up card.
    pub dealer_up: Card,
    /// The player's two cards, in deal order.
    pub player: [Card; 2],
    /// The dealer's visible score.
    pub dealer_score: u8,
    /// The player's score.
    pub player_score: u8,
}

/// Result of the dealer playing out its hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerTurn {
    /// The hole card, dealt when the dealer's turn begins.
    pub hole_card: Card,
    /// Cards drawn after the hole card.
    pub drawn: Vec<Card>,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// The round's outcome.
    pub outcome: Outcome,
}

/// Result of a player hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// The card dealt to the player.
    pub card: Card,
    /// The player's score after the hit.
    pub player_score: u8,
    /// The dealer's turn, if the hit ended the player's turn at 21.
    pub dealer_turn: Option<DealerTurn>,
    /// The outcome, if the round is over.
    pub outcome: Option<Outcome>,
}
