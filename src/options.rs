//! Game configuration options.

use core::time::Duration;

/// Default settle delay applied after every match resolution.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Configuration options for a matching game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use memrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_settle_delay(Duration::from_millis(250))
///     .with_auto_draw(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Pause after a match resolution before input is accepted again.
    ///
    /// This is a minimum feedback-display duration, not a timeout: it lets
    /// the collaborator finish its animation/audio before the next intent.
    pub settle_delay: Duration,
    /// Whether a correct match automatically draws the next card once the
    /// settle delay elapses.
    pub auto_draw: bool,
    /// Whether a won game rejects further draw/select intents outright.
    pub lock_when_won: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            settle_delay: SETTLE_DELAY,
            auto_draw: true,
            lock_when_won: true,
        }
    }
}

impl GameOptions {
    /// Sets the settle delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_settle_delay(Duration::ZERO);
    /// assert_eq!(options.settle_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Sets whether a correct match automatically draws the next card.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_draw(false);
    /// assert_eq!(options.auto_draw, false);
    /// ```
    #[must_use]
    pub const fn with_auto_draw(mut self, auto_draw: bool) -> Self {
        self.auto_draw = auto_draw;
        self
    }

    /// Sets whether a won game rejects further intents.
    ///
    /// With this disabled, a won game still ignores draws and selections in
    /// practice, since the deck is empty and no card is in hand.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_lock_when_won(false);
    /// assert_eq!(options.lock_when_won, false);
    /// ```
    #[must_use]
    pub const fn with_lock_when_won(mut self, lock: bool) -> Self {
        self.lock_when_won = lock;
        self
    }
}
