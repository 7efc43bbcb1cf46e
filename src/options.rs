//! Game configuration options.

/// How Aces are recounted from 11 to 1 when a hand goes over 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceAdjustment {
    /// Recount Aces one at a time until the hand is 21 or less or no Ace is
    /// left counted as 11.
    #[default]
    Full,
    /// Subtract 10 at most once per added card if the hand is over 21 and
    /// holds any Ace. Multi-Ace hands can stay over 21 or be reduced twice
    /// for the same Ace.
    SinglePass,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::{AceAdjustment, GameOptions};
///
/// let options = GameOptions::default()
///     .with_ace_adjustment(AceAdjustment::SinglePass)
///     .with_dealer_stands_on(18)
///     .with_auto_stand_on_21(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Soft-ace scoring rule.
    pub ace_adjustment: AceAdjustment,
    /// The dealer draws while its score is below this value.
    pub dealer_stands_on: u8,
    /// Whether a hit that brings the player to exactly 21 ends the player's
    /// turn and plays out the dealer.
    pub auto_stand_on_21: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            ace_adjustment: AceAdjustment::Full,
            dealer_stands_on: 17,
            auto_stand_on_21: true,
        }
    }
}

impl GameOptions {
    /// Sets the soft-ace scoring rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{AceAdjustment, GameOptions};
    ///
    /// let options = GameOptions::default().with_ace_adjustment(AceAdjustment::SinglePass);
    /// assert_eq!(options.ace_adjustment, AceAdjustment::SinglePass);
    /// ```
    #[must_use]
    pub const fn with_ace_adjustment(mut self, adjustment: AceAdjustment) -> Self {
        self.ace_adjustment = adjustment;
        self
    }

    /// Sets the score at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = score;
        self
    }

    /// Sets whether hitting to exactly 21 hands the turn to the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_stand_on_21(false);
    /// assert!(!options.auto_stand_on_21);
    /// ```
    #[must_use]
    pub const fn with_auto_stand_on_21(mut self, enabled: bool) -> Self {
        self.auto_stand_on_21 = enabled;
        self
    }
}
