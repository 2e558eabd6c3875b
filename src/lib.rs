//! A turn-based blackjack round engine driven by external decision agents,
//! with optional `no_std` support.
//!
//! A [`Round`] owns the shoe, every hand, and the set of participants still
//! eligible to act. Callers deal, then feed each participant's raw decisions
//! through a [`TurnGuard`] and [`ActionGateway`] until the turn completes,
//! then let the dealer play and read the results.
//!
//! # Example
//!
//! ```
//! use bjcrew::{ActionGateway, Round, RoundOptions, TurnGuard};
//!
//! let round = Round::new(["Human", "AI_Cautious"], RoundOptions::default().with_seed(42)).unwrap();
//! round.deal_initial_cards();
//!
//! let gateway = ActionGateway::new(&round);
//! let guard = TurnGuard::new(&gateway);
//! for name in round.participants() {
//!     while round.is_active(name) {
//!         let _ = guard.submit(name, r#"{"action": "Stand"}"#);
//!     }
//! }
//!
//! round.dealer_play().unwrap();
//! let result = gateway.result().unwrap();
//! assert_eq!(result.participants.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod shoe;
mod sync;

// Re-export main types
pub use action::{Action, ActionKind, ActionResult, TURN_COMPLETE_MARKER, TurnEnd};
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{DealerError, ScorecardError, SetupError, ShowdownError};
pub use gateway::ActionGateway;
pub use guard::TurnGuard;
pub use hand::{Hand, score};
pub use options::RoundOptions;
pub use result::{DealerSummary, Outcome, ParticipantResult, RoundResult};
pub use round::{DEALER_NAME, DealerLog, PlayerState, PlayerStatus, Round, RoundStatus};
pub use shoe::Shoe;
