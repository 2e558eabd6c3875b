//! Round result types for showdown.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::Serialize;

use crate::card::Card;
use crate::hand::BLACKJACK;

/// Result of a participant's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Participant wins (dealer busts or participant has higher value).
    Win,
    /// Participant loses (participant busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Compares a participant's final score against the dealer's.
    ///
    /// A busted participant loses even when the dealer also busts.
    #[must_use]
    pub const fn decide(player_value: u32, dealer_value: u32) -> Self {
        if player_value > BLACKJACK {
            Self::Lose
        } else if dealer_value > BLACKJACK || player_value > dealer_value {
            Self::Win
        } else if player_value < dealer_value {
            Self::Lose
        } else {
            Self::Push
        }
    }
}

/// Final result for a single participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantResult {
    /// The participant's name.
    pub name: String,
    /// The participant's final cards.
    pub hand: Vec<Card>,
    /// The participant's final score.
    pub value: u32,
    /// Whether the participant busted.
    pub bust: bool,
    /// The outcome against the dealer.
    pub outcome: Outcome,
}

/// The dealer's final hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealerSummary {
    /// The dealer's final cards.
    pub hand: Vec<Card>,
    /// The dealer's final score.
    pub value: u32,
    /// Whether the dealer busted.
    pub bust: bool,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    /// Results for each participant, in seating order.
    pub participants: Vec<ParticipantResult>,
    /// The dealer's final hand.
    pub dealer: DealerSummary,
}

impl RoundResult {
    /// Returns the result for the named participant.
    #[must_use]
    pub fn participant(&self, name: &str) -> Option<&ParticipantResult> {
        self.participants.iter().find(|p| p.name == name)
    }
}

struct Cards<'a>(&'a [Card]);

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Renders a card list as `[A♠, 10♥]`.
pub(crate) fn cards_text(cards: &[Card]) -> impl fmt::Display + '_ {
    Cards(cards)
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Push => "push",
        })
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dealer | Score: {} | Hand: {} | {}",
            self.dealer.value,
            cards_text(&self.dealer.hand),
            if self.dealer.bust { "busted" } else { "stood" },
        )?;
        for p in &self.participants {
            write!(
                f,
                "\n{} | Score: {} | Hand: {} | Outcome: {}",
                p.name,
                p.value,
                cards_text(&p.hand),
                p.outcome,
            )?;
        }
        Ok(())
    }
}
