//! The shoe: a shuffled multiset of one or more decks.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Shuffled source of cards for a round.
///
/// Drawing never fails: an empty shoe is rebuilt from fresh decks and
/// reshuffled before the card is taken.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining cards; the top of the shoe is the end of the vector.
    cards: Vec<Card>,
    /// Number of decks used on every refill.
    decks: u8,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates and shuffles a shoe with the specified number of decks.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.refill();
        shoe
    }

    /// Creates a shoe that yields `draws` in the given order before it is
    /// refilled from `decks` fresh decks.
    ///
    /// ```
    /// use bjcrew::{Card, Shoe, Suit};
    ///
    /// let mut shoe = Shoe::stacked(&[Card::new(Suit::Clubs, 10), Card::new(Suit::Hearts, 6)], 2, 7);
    /// assert_eq!(shoe.draw().rank, 10);
    /// assert_eq!(shoe.draw().rank, 6);
    /// assert_eq!(shoe.cards_remaining(), 0);
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card], decks: u8, seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn fresh_cards(decks: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards
    }

    fn refill(&mut self) {
        self.cards = Self::fresh_cards(self.decks);
        self.shuffle();
    }

    /// Randomizes the order of the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card, refilling first if the shoe is empty.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            log::debug!("shoe empty, refilling from {} decks", self.decks);
            self.refill();
            // A zero-deck shoe would never yield a card.
            if self.cards.is_empty() {
                self.decks = 1;
            }
        }
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks used on refill.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }
}
