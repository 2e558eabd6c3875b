//! Hand representation and blackjack scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u32 = 21;

fn evaluate_cards(cards: &[Card]) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u32::from(card.value());
    }

    // Soften one ace at a time while the hand is over.
    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Calculates the best blackjack total for a sequence of cards.
///
/// Aces count as 11 and are reduced to 1, one at a time, only while the
/// total exceeds 21. An empty slice scores 0.
///
/// ```
/// use bjcrew::{Card, Suit, hand::score};
///
/// let cards = [Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 1), Card::new(Suit::Clubs, 9)];
/// assert_eq!(score(&cards), 21);
/// assert_eq!(score(&[]), 0);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// Returns whether the cards contain an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Cards held by one participant. Grows only through draws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
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
}
