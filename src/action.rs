//! Action normalization and the results returned to acting participants.

extern crate alloc;

use alloc::string::String;

use serde::Deserialize;

/// Text present in every message that ends a participant's turn.
///
/// Text-only consumers can look for this marker to know when to stop
/// prompting a participant.
pub const TURN_COMPLETE_MARKER: &str = "TURN COMPLETE";

/// A normalized participant command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the current hand and end the turn.
    Stand,
    /// Anything else.
    Unrecognized,
}

#[derive(Deserialize)]
struct Payload {
    action: String,
}

impl Action {
    /// Parses a raw action request.
    ///
    /// Accepts the bare words `hit` and `stand` (any case, optional trailing
    /// `()`), or a JSON object whose string field `action` holds one of them.
    ///
    /// ```
    /// use bjcrew::Action;
    ///
    /// assert_eq!(Action::parse(" HIT() "), Action::Hit);
    /// assert_eq!(Action::parse(r#"{"action": "Stand"}"#), Action::Stand);
    /// assert_eq!(Action::parse("double"), Action::Unrecognized);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        let payload = (text.starts_with('{') && text.ends_with('}'))
            .then(|| serde_json::from_str::<Payload>(text).ok())
            .flatten();

        match payload {
            Some(payload) => Self::from_word(&payload.action),
            None => Self::from_word(text),
        }
    }

    fn from_word(word: &str) -> Self {
        let mut word = word.trim();
        while let Some(stripped) = word.strip_suffix("()") {
            word = stripped.trim_end();
        }

        if word.eq_ignore_ascii_case("hit") {
            Self::Hit
        } else if word.eq_ignore_ascii_case("stand") {
            Self::Stand
        } else {
            Self::Unrecognized
        }
    }
}

/// How a participant's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// The participant drew past 21.
    Bust,
    /// The participant drew to exactly 21 and stood automatically.
    TwentyOne,
    /// The participant chose to stand.
    Stood,
    /// The turn guard stood the participant after too many actions.
    Forced,
}

/// Classification of an action result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// The participant is still active and must decide again.
    Continue,
    /// The participant's turn is over.
    TurnComplete(TurnEnd),
    /// The action text was not understood; nothing changed.
    Invalid,
    /// The participant was not active; nothing changed.
    AlreadyFinished,
}

/// Result of a participant action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// What happened.
    pub kind: ActionKind,
    /// Human-readable description of what happened.
    pub message: String,
}

impl ActionResult {
    pub(crate) const fn new(kind: ActionKind, message: String) -> Self {
        Self { kind, message }
    }

    /// Returns whether this result ends the participant's turn.
    #[must_use]
    pub const fn is_turn_complete(&self) -> bool {
        matches!(self.kind, ActionKind::TurnComplete(_))
    }
}
