//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deal::{CardSource, DealtCards, RandomSource, deal_card};
use crate::error::DealError;
use crate::hand::{BLACKJACK, Hand, HandId};
use crate::options::GameOptions;
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A dealer-vs-player blackjack round.
///
/// The game owns both hands, the set of identities dealt this round, and the
/// card source. All mutation goes through `&mut self`; independent games do
/// not share state.
#[derive(Debug, Clone)]
pub struct Game<S = RandomSource<ChaCha8Rng>> {
    /// Game options.
    options: GameOptions,
    /// The dealer's hand.
    dealer: Hand,
    /// The player's hand.
    player: Hand,
    /// Identities dealt to either hand this round.
    dealt: DealtCards,
    /// Current phase.
    state: GameState,
    /// Outcome recorded when the round ended.
    outcome: Option<Outcome>,
    /// Where candidate cards come from.
    source: S,
}

impl Game {
    /// Creates a new game dealing from a `ChaCha8Rng` seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let opening = game.start_round().unwrap();
    /// assert_eq!(game.score(bjcore::HandId::Player), opening.player_score);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, RandomSource::new(ChaCha8Rng::seed_from_u64(seed)))
    }
}

impl<S: CardSource> Game<S> {
    /// Creates a new game dealing from the given source.
    pub fn with_source(options: GameOptions, source: S) -> Self {
        Self {
            options,
            dealer: Hand::new(),
            player: Hand::new(),
            dealt: DealtCards::new(),
            state: GameState::AwaitingPlayerAction,
            outcome: None,
            source,
        }
    }

    /// Deals a card that is not yet in either hand and appends it to `hand`.
    ///
    /// The dealer's second card reveals the hole and moves the round into
    /// [`GameState::DealerResolving`].
    ///
    /// # Errors
    ///
    /// Returns an error if no unused card can be produced.
    pub fn add_card(&mut self, hand: HandId) -> Result<Card, DealError> {
        let card = deal_card(&mut self.source, &self.dealt)?;
        self.dealt.insert(card);

        let adjustment = self.options.ace_adjustment;
        let target = self.hand_mut(hand);
        target.add_card(card, adjustment);
        let score = target.score();
        tracing::debug!(%hand, %card, score, "dealt card");

        if hand == HandId::Dealer
            && self.dealer.len() >= 2
            && self.state == GameState::AwaitingPlayerAction
        {
            self.set_state(GameState::DealerResolving);
        }

        Ok(card)
    }

    /// Returns the running score of `hand`.
    #[must_use]
    pub const fn score(&self, hand: HandId) -> u8 {
        self.hand(hand).score()
    }

    /// Returns `hand`.
    #[must_use]
    pub const fn hand(&self, hand: HandId) -> &Hand {
        match hand {
            HandId::Dealer => &self.dealer,
            HandId::Player => &self.player,
        }
    }

    const fn hand_mut(&mut self, hand: HandId) -> &mut Hand {
        match hand {
            HandId::Dealer => &mut self.dealer,
            HandId::Player => &mut self.player,
        }
    }

    /// Determines the winner from the current state, if there is one.
    ///
    /// A player bust is decided immediately. Otherwise no comparison is made
    /// until the dealer holds at least two cards.
    #[must_use]
    pub fn check_outcome(&self) -> Option<Outcome> {
        let player = self.player.score();
        let dealer = self.dealer.score();

        if player > BLACKJACK {
            return Some(Outcome::Dealer);
        }

        if self.dealer.len() < 2 {
            return None;
        }

        if player == dealer {
            Some(Outcome::Tie)
        } else if player > dealer || dealer > BLACKJACK {
            Some(Outcome::Player)
        } else {
            Some(Outcome::Dealer)
        }
    }

    /// Evaluates [`check_outcome`](Self::check_outcome) and, if decided, ends
    /// the round with that outcome.
    pub fn resolve(&mut self) -> Option<Outcome> {
        let outcome = self.check_outcome()?;
        if self.state != GameState::RoundOver {
            tracing::info!(
                %outcome,
                player = self.player.score(),
                dealer = self.dealer.score(),
                "round resolved"
            );
            self.outcome = Some(outcome);
            self.set_state(GameState::RoundOver);
        }
        self.outcome
    }

    /// Clears both hands and the dealt set, returning to the initial phase.
    pub fn reset(&mut self) {
        self.dealer.clear();
        self.player.clear();
        self.dealt.clear();
        self.outcome = None;
        self.state = GameState::AwaitingPlayerAction;
        tracing::debug!("round reset");
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the outcome recorded when the round ended.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the identities dealt this round.
    #[must_use]
    pub const fn dealt_cards(&self) -> &DealtCards {
        &self.dealt
    }

    /// Returns the card source.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn set_state(&mut self, state: GameState) {
        tracing::debug!(from = ?self.state, to = ?state, "state change");
        self.state = state;
    }
}
