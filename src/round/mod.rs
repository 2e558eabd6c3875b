//! The round state machine.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::iter;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::{HashMap, HashSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::SetupError;
use crate::hand::{BLACKJACK, Hand};
use crate::options::RoundOptions;
use crate::shoe::Shoe;

mod actions;
mod dealer;
pub mod state;

pub use state::{DealerLog, PlayerState, PlayerStatus, RoundStatus};

/// Name under which the dealer's hand is kept.
///
/// The dealer holds a hand like any participant but is never active: the
/// dealer's turn is driven by [`Round::dealer_play`], not by hit or stand.
pub const DEALER_NAME: &str = "Dealer";

/// One round of blackjack between named participants and the dealer.
///
/// The round owns the shoe, every hand, and the set of participants still
/// eligible to act. All operations take `&self` so the round can be shared by
/// reference with an [`ActionGateway`](crate::ActionGateway).
pub struct Round {
    /// Cards in the shoe.
    shoe: Mutex<Shoe>,
    /// Round options.
    pub options: RoundOptions,
    /// Current round status.
    status: Mutex<RoundStatus>,
    /// Participant names in seating order, dealer excluded.
    participants: Vec<String>,
    /// Hands by name, dealer included.
    hands: Mutex<HashMap<String, Hand>>,
    /// Participants who have not busted, stood, or reached 21.
    active: Mutex<HashSet<String>>,
}

impl Round {
    /// Creates a round for the given participants with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the options ask for zero decks, or a name is
    /// empty, duplicated, or equal to [`DEALER_NAME`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjcrew::{Round, RoundOptions, RoundStatus};
    ///
    /// let round = Round::new(["Human", "AI_Cautious"], RoundOptions::default().with_seed(9)).unwrap();
    /// round.deal_initial_cards();
    /// assert_eq!(round.status(), RoundStatus::InProgress);
    /// ```
    pub fn new<I, S>(participants: I, options: RoundOptions) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let shoe = Shoe::new(options.decks, options.seed);
        Self::with_shoe(participants, options, shoe)
    }

    /// Creates a round that deals from the given shoe.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Round::new`].
    pub fn with_shoe<I, S>(
        participants: I,
        options: RoundOptions,
        shoe: Shoe,
    ) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if options.decks == 0 {
            return Err(SetupError::NoDecks);
        }

        let mut names: Vec<String> = Vec::new();
        for name in participants {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(SetupError::EmptyName);
            }
            if name == DEALER_NAME {
                return Err(SetupError::ReservedName);
            }
            if names.contains(&name) {
                return Err(SetupError::DuplicateName(name));
            }
            names.push(name);
        }

        let hands = Self::empty_hands(&names);
        let active = names.iter().cloned().collect();

        Ok(Self {
            shoe: Mutex::new(shoe),
            options,
            status: Mutex::new(RoundStatus::Ready),
            participants: names,
            hands: Mutex::new(hands),
            active: Mutex::new(active),
        })
    }

    fn empty_hands(names: &[String]) -> HashMap<String, Hand> {
        names
            .iter()
            .map(String::as_str)
            .chain(iter::once(DEALER_NAME))
            .map(|name| (name.to_string(), Hand::new()))
            .collect()
    }

    /// Deals two cards to every participant and the dealer, starting a fresh
    /// round.
    ///
    /// Cards go out one per seat per pass, participants in seating order and
    /// the dealer last. A participant dealt a natural 21 is finished at once
    /// and will report [`PlayerStatus::Stood`].
    pub fn deal_initial_cards(&self) {
        let mut status = self.status.lock();
        let mut active = self.active.lock();
        let mut shoe = self.shoe.lock();
        let mut hands = self.hands.lock();

        *hands = Self::empty_hands(&self.participants);
        active.clear();

        for _ in 0..2 {
            for name in self.seats() {
                if let Some(hand) = hands.get_mut(name) {
                    hand.add_card(shoe.draw());
                }
            }
        }
        drop(shoe);

        for name in &self.participants {
            let natural = hands.get(name).is_some_and(|h| h.value() == BLACKJACK);
            if natural {
                log::debug!("{name} dealt a natural 21");
            } else {
                active.insert(name.clone());
            }
        }

        let up_card = hands.get(DEALER_NAME).and_then(Hand::first);
        drop(hands);

        *status = RoundStatus::InProgress;
        if let Some(card) = up_card {
            log::info!(
                "dealt {} participant(s), dealer shows {card}, {} active",
                self.participants.len(),
                active.len()
            );
        }
    }

    /// Seating order for the deal: participants, then the dealer.
    fn seats(&self) -> impl Iterator<Item = &str> {
        self.participants
            .iter()
            .map(String::as_str)
            .chain(iter::once(DEALER_NAME))
    }

    /// Returns what the named participant (or the dealer) needs to decide.
    ///
    /// Returns `None` if no hand is kept under `name`.
    pub fn get_state(&self, name: &str) -> Option<PlayerState> {
        let hands = self.hands.lock();
        let hand = hands.get(name)?;
        let cards = hand.cards().to_vec();
        let score = hand.value();
        let dealer_up_card = hands.get(DEALER_NAME).and_then(Hand::first);
        drop(hands);

        let status = if score > BLACKJACK {
            PlayerStatus::Busted
        } else if self.is_active(name) {
            PlayerStatus::MustChoose
        } else {
            PlayerStatus::Stood
        };

        Some(PlayerState {
            name: name.to_string(),
            hand: cards,
            score,
            dealer_up_card,
            status,
        })
    }

    /// Returns the current round status.
    pub fn status(&self) -> RoundStatus {
        *self.status.lock()
    }

    /// Returns the participant names in seating order.
    #[must_use]
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Returns whether the participant may still act.
    pub fn is_active(&self, name: &str) -> bool {
        self.active.lock().contains(name)
    }

    /// Returns the number of participants who may still act.
    pub fn active_count(&self) -> usize {
        self.active.lock().len()
    }

    /// Returns the cards held under `name`.
    pub fn hand(&self, name: &str) -> Option<Vec<Card>> {
        self.hands.lock().get(name).map(|h| h.cards().to_vec())
    }

    /// Returns the dealer's face-up card, if dealt.
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.hands.lock().get(DEALER_NAME).and_then(Hand::first)
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.lock().cards_remaining()
    }
}
