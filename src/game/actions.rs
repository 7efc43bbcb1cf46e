use crate::deal::CardSource;
use crate::error::{ActionError, DealError};
use crate::hand::{BLACKJACK, HandId};
use crate::result::{DealerTurn, Hit, OpeningDeal};

use super::{Game, GameState};

impl<S: CardSource> Game<S> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::AwaitingPlayerAction || self.dealer.is_empty() {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Resets the table and deals the opening cards: the dealer's up card,
    /// then two cards to the player. The hole card is dealt when the dealer's
    /// turn begins.
    ///
    /// # Errors
    ///
    /// Returns an error if a card cannot be dealt.
    pub fn start_round(&mut self) -> Result<OpeningDeal, DealError> {
        self.reset();

        let dealer_up = self.add_card(HandId::Dealer)?;
        let first = self.add_card(HandId::Player)?;
        let second = self.add_card(HandId::Player)?;

        Ok(OpeningDeal {
            dealer_up,
            player: [first, second],
            dealer_score: self.dealer.score(),
            player_score: self.player.score(),
        })
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching exactly 21 ends the player's turn when
    /// [`GameOptions::auto_stand_on_21`](crate::GameOptions::auto_stand_on_21)
    /// is set. A bust ends the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not awaiting player action or a card
    /// cannot be dealt.
    pub fn hit(&mut self) -> Result<Hit, ActionError> {
        self.ensure_player_turn()?;

        let card = self.add_card(HandId::Player)?;
        let player_score = self.player.score();

        if player_score == BLACKJACK && self.options.auto_stand_on_21 {
            let turn = self.dealer_play()?;
            let outcome = Some(turn.outcome);
            return Ok(Hit {
                card,
                player_score,
                dealer_turn: Some(turn),
                outcome,
            });
        }

        Ok(Hit {
            card,
            player_score,
            dealer_turn: None,
            outcome: self.resolve(),
        })
    }

    /// Player action: Stand (keep current hand). The dealer plays out its
    /// hand and the round is resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not awaiting player action or a card
    /// cannot be dealt.
    pub fn stand(&mut self) -> Result<DealerTurn, ActionError> {
        self.ensure_player_turn()?;
        self.dealer_play()
    }
}
