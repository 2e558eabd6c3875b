//! The action gateway: the mutation entry point for external callers.

extern crate alloc;

use alloc::string::{String, ToString};

use crate::action::{Action, ActionKind, ActionResult};
use crate::error::{ScorecardError, ShowdownError};
use crate::result::RoundResult;
use crate::round::Round;

/// Message returned for action text that is neither hit nor stand.
pub const INVALID_ACTION_MESSAGE: &str = "Invalid action. Choose 'hit' or 'stand'.";

/// Normalizes raw action requests and forwards them to a [`Round`].
///
/// # Example
///
/// ```
/// use bjcrew::{ActionGateway, ActionKind, Round, RoundOptions};
///
/// let round = Round::new(["Human"], RoundOptions::default().with_seed(3)).unwrap();
/// round.deal_initial_cards();
///
/// let gateway = ActionGateway::new(&round);
/// assert_eq!(gateway.submit("Human", "fold").kind, ActionKind::Invalid);
/// ```
#[derive(Clone, Copy)]
pub struct ActionGateway<'a> {
    round: &'a Round,
}

impl<'a> ActionGateway<'a> {
    /// Creates a gateway over the given round.
    #[must_use]
    pub const fn new(round: &'a Round) -> Self {
        Self { round }
    }

    /// Returns the round this gateway drives.
    #[must_use]
    pub const fn round(&self) -> &'a Round {
        self.round
    }

    /// Submits a raw action for `name`.
    ///
    /// `raw_action` may be `hit`/`stand` in any case with an optional trailing
    /// `()`, or a JSON object such as `{"action": "Hit"}`. Unrecognized text
    /// returns [`ActionKind::Invalid`] and leaves the round unchanged.
    pub fn submit(&self, name: &str, raw_action: &str) -> ActionResult {
        match Action::parse(raw_action) {
            Action::Hit => {
                log::debug!("{name} submits hit");
                self.round.hit(name)
            }
            Action::Stand => {
                log::debug!("{name} submits stand");
                self.round.stand(name)
            }
            Action::Unrecognized => {
                log::warn!("invalid action from {name}: {raw_action:?}");
                ActionResult::new(ActionKind::Invalid, INVALID_ACTION_MESSAGE.to_string())
            }
        }
    }

    /// Returns the final results of the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played yet.
    pub fn result(&self) -> Result<RoundResult, ShowdownError> {
        self.round.determine_winner()
    }

    /// Returns the final results of the round as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played yet or encoding fails.
    pub fn scorecard_json(&self) -> Result<String, ScorecardError> {
        let result = self.result()?;
        serde_json::to_string(&result).map_err(ScorecardError::Encode)
    }
}
