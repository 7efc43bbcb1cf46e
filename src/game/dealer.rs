use alloc::vec::Vec;

use crate::card::Card;
use crate::deal::CardSource;
use crate::error::ActionError;
use crate::hand::HandId;
use crate::result::DealerTurn;

use super::{Game, GameState};

impl<S: CardSource> Game<S> {
    /// Deals the dealer's hole card and starts the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not awaiting player action, the
    /// dealer does not hold exactly its up card, or no card can be dealt.
    pub fn reveal_hole_card(&mut self) -> Result<Card, ActionError> {
        if self.state != GameState::AwaitingPlayerAction || self.dealer.len() != 1 {
            return Err(ActionError::InvalidState);
        }

        self.add_card(HandId::Dealer).map_err(ActionError::from)
    }

    /// Dealer plays their hand.
    ///
    /// The dealer reveals the hole card, then draws while its score is below
    /// [`GameOptions::dealer_stands_on`](crate::GameOptions::dealer_stands_on).
    /// The outcome is evaluated once after the last draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the hole card cannot be revealed or a card cannot
    /// be dealt.
    pub(super) fn dealer_play(&mut self) -> Result<DealerTurn, ActionError> {
        let hole_card = self.reveal_hole_card()?;

        let mut drawn = Vec::new();
        while self.dealer.score() < self.options.dealer_stands_on {
            drawn.push(self.add_card(HandId::Dealer)?);
        }

        let outcome = self.resolve().ok_or(ActionError::InvalidState)?;

        Ok(DealerTurn {
            hole_card,
            drawn,
            dealer_score: self.dealer.score(),
            outcome,
        })
    }
}
