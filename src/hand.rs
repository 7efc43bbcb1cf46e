//! Dealer and player hand representations.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::HandIdError;
use crate::options::AceAdjustment;

/// Scores above this bust.
pub const BLACKJACK: u8 = 21;

/// Identifies one of the two hands at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandId {
    /// The dealer's hand.
    Dealer,
    /// The player's hand.
    Player,
}

impl HandId {
    /// Lowercase name, as used by the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dealer => "dealer",
            Self::Player => "player",
        }
    }
}

impl fmt::Display for HandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandId {
    type Err = HandIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dealer" => Ok(Self::Dealer),
            "player" => Ok(Self::Player),
            other => Err(HandIdError::InvalidHandIdentifier(other.to_string())),
        }
    }
}

/// Full recount: every Ace that would bust the hand drops to 1.
///
/// Returns the value, saturated at `u8::MAX`, and how many Aces are still
/// counted as 11.
fn evaluate_cards(cards: &[Card]) -> (u8, u8) {
    let mut value: u16 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u16::from(card.points());
    }

    while value > u16::from(BLACKJACK) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (u8::try_from(value).unwrap_or(u8::MAX), aces)
}

/// A hand of cards with a running score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Running score after ace adjustment.
    score: u8,
    /// Aces still counted as 11 (tracked under [`AceAdjustment::Full`] only).
    soft_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            score: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card and adjusts the score.
    ///
    /// Under [`AceAdjustment::SinglePass`], at most one 10-point reduction is
    /// applied per added card, and only if the hand holds any Ace at all. An
    /// Ace already recounted may be recounted again by a later card.
    pub fn add_card(&mut self, card: Card, adjustment: AceAdjustment) {
        self.cards.push(card);

        match adjustment {
            AceAdjustment::SinglePass => {
                self.score = self.score.saturating_add(card.points());
                if self.score > BLACKJACK && self.has_ace() {
                    self.score -= 10;
                }
            }
            AceAdjustment::Full => {
                let (score, soft_aces) = evaluate_cards(&self.cards);
                self.score = score;
                self.soft_aces = soft_aces;
            }
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the running score, saturated at `u8::MAX`.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns whether the hand holds an Ace still counted as 11.
    ///
    /// Always `false` for hands built with [`AceAdjustment::SinglePass`].
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the score is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.score > BLACKJACK
    }

    /// Returns whether the hand holds at least one Ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(Card::is_ace)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.score = 0;
        self.soft_aces = 0;
    }
}
