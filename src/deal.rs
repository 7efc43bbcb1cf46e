//! Card sources and the non-duplicating dealing function.

use alloc::collections::VecDeque;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// Identities dealt so far in the current round, across both hands.
pub type DealtCards = HashSet<Card>;

/// A supplier of candidate cards.
///
/// Sources are not required to avoid duplicates; [`deal_card`] rejects
/// identities that are already in play.
pub trait CardSource {
    /// Returns the next candidate card, or `None` if the source is finite and
    /// has run out.
    fn next_card(&mut self) -> Option<Card>;
}

/// Draws uniformly random ranks and suits from an RNG.
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    /// Wraps an RNG.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CardSource for RandomSource<R> {
    fn next_card(&mut self) -> Option<Card> {
        let rank = Rank::ALL[self.rng.random_range(0..Rank::ALL.len())];
        let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
        Some(Card::new(rank, suit))
    }
}

/// Yields a fixed sequence of cards, front to back.
///
/// ```
/// use bjcore::{Card, CardSource, Rank, ScriptedSource, Suit};
///
/// let mut source = ScriptedSource::new([Card::new(Rank::Ace, Suit::Spades)]);
/// assert_eq!(source.next_card(), Some(Card::new(Rank::Ace, Suit::Spades)));
/// assert_eq!(source.next_card(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    cards: VecDeque<Card>,
}

impl ScriptedSource {
    /// Creates a source that yields `cards` in order.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Appends more cards to the end of the script.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Returns the number of cards left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl CardSource for ScriptedSource {
    fn next_card(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }
}

/// Produces a card whose identity is not in `dealt`.
///
/// Candidates already in play are discarded and the source is asked again,
/// with no cap on retries. The caller is responsible for recording the card
/// in `dealt` and appending it to a hand.
///
/// # Errors
///
/// Returns [`DealError::DeckExhausted`] if all 52 identities are already
/// dealt, or [`DealError::SourceExhausted`] if the source runs dry.
pub fn deal_card<S>(source: &mut S, dealt: &DealtCards) -> Result<Card, DealError>
where
    S: CardSource + ?Sized,
{
    if dealt.len() >= DECK_SIZE {
        return Err(DealError::DeckExhausted);
    }

    loop {
        let card = source.next_card().ok_or(DealError::SourceExhausted)?;
        if !dealt.contains(&card) {
            return Ok(card);
        }
        tracing::trace!(%card, "rejected duplicate card");
    }
}
