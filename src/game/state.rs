//! Game state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// The dealer shows at most its up card; the player may hit or stand.
    #[default]
    AwaitingPlayerAction,
    /// The hole card is revealed and the dealer plays out its hand.
    DealerResolving,
    /// The round has an outcome.
    RoundOver,
}

impl GameState {
    /// Returns whether the dealer's hole card has been revealed.
    #[must_use]
    pub const fn is_hole_revealed(self) -> bool {
        !matches!(self, Self::AwaitingPlayerAction)
    }
}
