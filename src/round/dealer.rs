extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use crate::error::{DealerError, ShowdownError};
use crate::hand::BLACKJACK;
use crate::result::{DealerSummary, Outcome, ParticipantResult, RoundResult, cards_text};

use super::{DEALER_NAME, DealerLog, Round, RoundStatus};

/// The dealer draws below this total.
const DEALER_STANDS_ON: u32 = 17;

impl Round {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer reveals the hole card and draws while below 17. If
    /// `stand_on_soft_17` is false, the dealer also draws on soft 17.
    /// Finishes the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress or any participant is
    /// still active. Nothing is drawn in either case.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "the round is locked for the entire dealer turn"
    )]
    pub fn dealer_play(&self) -> Result<DealerLog, DealerError> {
        let mut status = self.status.lock();
        if *status != RoundStatus::InProgress {
            return Err(DealerError::InvalidState);
        }

        let still_active = self.active_count();
        if still_active > 0 {
            log::warn!("dealer play requested with {still_active} participant(s) still active");
            return Err(DealerError::PlayersStillActive(still_active));
        }

        let mut shoe = self.shoe.lock();
        let mut hands = self.hands.lock();
        let dealer = hands
            .get_mut(DEALER_NAME)
            .ok_or(DealerError::InvalidState)?;

        let mut lines = Vec::new();
        let mut cards_drawn = Vec::new();
        let mut value = dealer.value();
        lines.push(format!(
            "Dealer reveals full hand: {}, initial score: {value}",
            cards_text(dealer.cards())
        ));

        loop {
            let stands = value > DEALER_STANDS_ON
                || (value == DEALER_STANDS_ON
                    && (self.options.stand_on_soft_17 || !dealer.is_soft()));
            if stands {
                break;
            }

            let card = shoe.draw();
            dealer.add_card(card);
            cards_drawn.push(card);
            value = dealer.value();
            log::debug!("dealer draws {card}, score {value}");
            lines.push(format!("Dealer hits, draws {card}. New score: {value}"));
        }

        if value > BLACKJACK {
            lines.push(format!("Dealer busts with a score of {value}."));
        } else {
            lines.push(format!("Dealer stands with a score of {value}."));
        }
        log::info!("dealer finished on {value} after {} draw(s)", cards_drawn.len());

        *status = RoundStatus::Finished;

        Ok(DealerLog { cards_drawn, lines })
    }

    /// Compares every participant's final hand with the dealer's.
    ///
    /// A busted participant loses regardless of the dealer; otherwise a
    /// dealer bust or a higher score wins and equal scores push. Reading the
    /// result does not change the round, so repeated calls agree.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played yet.
    pub fn determine_winner(&self) -> Result<RoundResult, ShowdownError> {
        if self.status() != RoundStatus::Finished {
            return Err(ShowdownError::InvalidState);
        }

        let hands = self.hands.lock();
        let dealer = hands
            .get(DEALER_NAME)
            .ok_or(ShowdownError::InvalidState)?;
        let dealer_value = dealer.value();
        let summary = DealerSummary {
            hand: dealer.cards().to_vec(),
            value: dealer_value,
            bust: dealer.is_bust(),
        };

        let participants = self
            .participants
            .iter()
            .filter_map(|name| {
                let hand = hands.get(name)?;
                let value = hand.value();
                Some(ParticipantResult {
                    name: name.clone(),
                    hand: hand.cards().to_vec(),
                    value,
                    bust: hand.is_bust(),
                    outcome: Outcome::decide(value, dealer_value),
                })
            })
            .collect();
        drop(hands);

        let result = RoundResult {
            participants,
            dealer: summary,
        };
        log::info!("round resolved, dealer {}", result.dealer.value);

        Ok(result)
    }
}
