extern crate alloc;

use alloc::format;

use crate::action::{ActionKind, ActionResult, TURN_COMPLETE_MARKER, TurnEnd};
use crate::hand::{BLACKJACK, Hand};

use super::{Round, RoundStatus};

impl Round {
    fn already_finished(name: &str) -> ActionResult {
        ActionResult::new(
            ActionKind::AlreadyFinished,
            format!("{name} has already finished their turn. No action taken."),
        )
    }

    fn not_in_progress(&self, name: &str) -> Option<ActionResult> {
        let status = self.status();
        (status != RoundStatus::InProgress).then(|| {
            log::debug!("{name} acted while round is {status:?}");
            ActionResult::new(
                ActionKind::AlreadyFinished,
                format!("No turn is in progress for {name}. No action taken."),
            )
        })
    }

    /// Participant action: Hit (draw a card).
    ///
    /// Drawing past 21 busts the participant and drawing to exactly 21 stands
    /// them automatically; both end the turn. Inactive or unknown names get
    /// [`ActionKind::AlreadyFinished`] and nothing is drawn.
    pub fn hit(&self, name: &str) -> ActionResult {
        if let Some(result) = self.not_in_progress(name) {
            return result;
        }

        let mut active = self.active.lock();
        if !active.contains(name) {
            return Self::already_finished(name);
        }

        let card = self.shoe.lock().draw();

        let mut hands = self.hands.lock();
        let Some(hand) = hands.get_mut(name) else {
            active.remove(name);
            return Self::already_finished(name);
        };
        hand.add_card(card);
        let score = hand.value();
        drop(hands);

        log::debug!("{name} draws {card}, score {score}");

        if score > BLACKJACK {
            active.remove(name);
            ActionResult::new(
                ActionKind::TurnComplete(TurnEnd::Bust),
                format!("{name} draws {card}. Score is {score}. Bust! {TURN_COMPLETE_MARKER}"),
            )
        } else if score == BLACKJACK {
            active.remove(name);
            ActionResult::new(
                ActionKind::TurnComplete(TurnEnd::TwentyOne),
                format!(
                    "{name} draws {card}. Score is 21. Stands automatically. {TURN_COMPLETE_MARKER}"
                ),
            )
        } else {
            ActionResult::new(
                ActionKind::Continue,
                format!("{name} draws {card}. New score is {score}. Choose hit or stand."),
            )
        }
    }

    /// Participant action: Stand (keep current hand).
    ///
    /// Inactive or unknown names get [`ActionKind::AlreadyFinished`].
    pub fn stand(&self, name: &str) -> ActionResult {
        if let Some(result) = self.not_in_progress(name) {
            return result;
        }

        if !self.active.lock().remove(name) {
            return Self::already_finished(name);
        }

        let score = self.hands.lock().get(name).map_or(0, Hand::value);
        log::debug!("{name} stands on {score}");

        ActionResult::new(
            ActionKind::TurnComplete(TurnEnd::Stood),
            format!("{name} stands with a final score of {score}. {TURN_COMPLETE_MARKER}"),
        )
    }
}
