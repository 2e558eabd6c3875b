//! Round configuration options.

/// Default number of decks in the shoe.
pub const DEFAULT_DECKS: u8 = 4;

/// Default cap on actions a participant may submit in one turn.
pub const DEFAULT_MAX_ACTIONS: u32 = 10;

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcrew::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_decks(2)
///     .with_seed(42)
///     .with_max_actions_per_turn(5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOptions {
    /// Number of decks.
    pub decks: u8,
    /// Seed for the shoe's random number generator.
    pub seed: u64,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Maximum number of actions a participant may take in one turn.
    pub max_actions_per_turn: u32,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            seed: 0,
            stand_on_soft_17: true,
            max_actions_per_turn: DEFAULT_MAX_ACTIONS,
        }
    }
}

impl RoundOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcrew::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the shoe seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcrew::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_seed(7);
    /// assert_eq!(options.seed, 7);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcrew::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the per-turn action cap enforced by the turn guard.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcrew::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_max_actions_per_turn(3);
    /// assert_eq!(options.max_actions_per_turn, 3);
    /// ```
    #[must_use]
    pub const fn with_max_actions_per_turn(mut self, max: u32) -> Self {
        self.max_actions_per_turn = max;
        self
    }
}
