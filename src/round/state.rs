//! Round state types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::Serialize;

use crate::card::Card;
use crate::result::cards_text;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Constructed, no cards dealt.
    Ready,
    /// Initial cards dealt; participants may act.
    InProgress,
    /// Dealer has played out; results can be read.
    Finished,
}

/// A participant's standing within the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerStatus {
    /// Still active and must choose hit or stand.
    MustChoose,
    /// Scored over 21.
    Busted,
    /// Turn is over without a bust.
    Stood,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MustChoose => "must choose",
            Self::Busted => "busted",
            Self::Stood => "stood",
        })
    }
}

/// Snapshot of what a participant needs to decide their next action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    /// The participant's name.
    pub name: String,
    /// The participant's cards.
    pub hand: Vec<Card>,
    /// The participant's current score.
    pub score: u32,
    /// The dealer's face-up card (`None` before the deal).
    pub dealer_up_card: Option<Card>,
    /// Where the participant stands in their turn.
    pub status: PlayerStatus,
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Hand: {}", cards_text(&self.hand))?;
        writeln!(f, "Score: {}", self.score)?;
        match self.dealer_up_card {
            Some(card) => writeln!(f, "Dealer's up card: {card}")?,
            None => writeln!(f, "Dealer's up card: none")?,
        }
        write!(f, "Status: {}", self.status)
    }
}

/// Record of the dealer's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerLog {
    /// Cards the dealer drew, in order.
    pub cards_drawn: Vec<Card>,
    /// One line per event: the reveal, each draw, and the final outcome.
    pub lines: Vec<String>,
}

impl fmt::Display for DealerLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
