//! The turn guard: a per-participant cap on actions within one round.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::sync::Mutex;

use crate::action::{ActionKind, ActionResult, TURN_COMPLETE_MARKER, TurnEnd};
use crate::gateway::ActionGateway;

/// Caps the number of actions a participant may submit in one round.
///
/// Every submission counts, valid or not. Once a participant goes past the
/// cap, the guard stands them instead of forwarding the request, so an agent
/// that never says "stand" still finishes its turn.
///
/// A guard's counters live as long as the guard; build a new one per round.
///
/// # Example
///
/// ```
/// use bjcrew::{ActionGateway, Round, RoundOptions, TurnGuard};
///
/// let round = Round::new(["AI_1"], RoundOptions::default().with_seed(1)).unwrap();
/// round.deal_initial_cards();
/// let gateway = ActionGateway::new(&round);
/// let guard = TurnGuard::with_max_actions(&gateway, 0);
///
/// assert!(guard.submit("AI_1", "hit").is_turn_complete());
/// assert!(!round.is_active("AI_1"));
/// ```
pub struct TurnGuard<'a> {
    gateway: &'a ActionGateway<'a>,
    max_actions: u32,
    /// Actions submitted this round (`name` -> count).
    counts: Mutex<HashMap<String, u32>>,
}

impl<'a> TurnGuard<'a> {
    /// Creates a guard using the round's `max_actions_per_turn` option.
    #[must_use]
    pub fn new(gateway: &'a ActionGateway<'a>) -> Self {
        let max_actions = gateway.round().options.max_actions_per_turn;
        Self::with_max_actions(gateway, max_actions)
    }

    /// Creates a guard with an explicit cap.
    #[must_use]
    pub fn with_max_actions(gateway: &'a ActionGateway<'a>, max_actions: u32) -> Self {
        Self {
            gateway,
            max_actions,
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the per-participant cap.
    #[must_use]
    pub const fn max_actions(&self) -> u32 {
        self.max_actions
    }

    /// Returns how many actions `name` has submitted through this guard.
    pub fn actions_taken(&self, name: &str) -> u32 {
        self.counts.lock().get(name).copied().unwrap_or(0)
    }

    /// Counts the submission and forwards it, or forces a stand past the cap.
    ///
    /// A forced stand only applies to a round in progress: before the deal
    /// the round's own `AlreadyFinished` result is returned and the
    /// participant stays active.
    pub fn submit(&self, name: &str, raw_action: &str) -> ActionResult {
        let taken = {
            let mut counts = self.counts.lock();
            let count = counts.entry(name.to_string()).or_insert(0);
            *count = count.saturating_add(1);
            *count
        };

        if taken > self.max_actions {
            return self.force_stand(name);
        }

        self.gateway.submit(name, raw_action)
    }

    fn force_stand(&self, name: &str) -> ActionResult {
        let round = self.gateway.round();
        let stood = round.stand(name);
        if round.is_active(name) {
            return stood;
        }
        let score = round.get_state(name).map_or(0, |s| s.score);

        log::warn!(
            "{name} exceeded {} actions, forced to stand on {score} ({:?})",
            self.max_actions,
            stood.kind
        );

        ActionResult::new(
            ActionKind::TurnComplete(TurnEnd::Forced),
            format!(
                "{name} reached the limit of {} actions. Forced to stand with {score}. {TURN_COMPLETE_MARKER}",
                self.max_actions
            ),
        )
    }
}
