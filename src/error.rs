//! Error types for round operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while setting up a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The shoe would contain no decks.
    #[error("the shoe needs at least one deck")]
    NoDecks,
    /// A participant name is empty or whitespace.
    #[error("participant name is empty")]
    EmptyName,
    /// A participant name appears twice.
    #[error("duplicate participant name: {0}")]
    DuplicateName(String),
    /// A participant uses the name reserved for the dealer.
    #[error("participant name is reserved for the dealer")]
    ReservedName,
}

/// Errors that can occur during dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid round state for dealer play.
    #[error("invalid round state for dealer play")]
    InvalidState,
    /// Participants have not finished their turns.
    #[error("{0} participant(s) still active")]
    PlayersStillActive(usize),
}

/// Errors that can occur when determining the winners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for showdown.
    #[error("invalid round state for showdown")]
    InvalidState,
}

/// Errors that can occur when rendering the scorecard.
#[derive(Debug, Error)]
pub enum ScorecardError {
    /// Results are not available yet.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    /// The results could not be encoded as JSON.
    #[error("failed to encode scorecard: {0}")]
    Encode(serde_json::Error),
}
