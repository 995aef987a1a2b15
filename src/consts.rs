pub mod ui_consts {
    //! UI Configuration Constants
    //!
    //! Timing and buffer constants for the terminal UI, organized by
    //! functional area for clarity and maintainability.

    // =============================================================================
    // SPLASH CONFIGURATION
    // =============================================================================

    /// Dwell time of the splash screen before it advances to language
    /// selection (milliseconds). Overridable via config file or CLI flag.
    pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2000;

    /// Period of one full spinner rotation on the splash screen (milliseconds).
    /// Purely decorative; has no effect on the dwell timer.
    pub const SPINNER_PERIOD_MS: u64 = 2000;

    // =============================================================================
    // EVENT LOOP CONFIGURATION
    // =============================================================================

    /// How long the UI loop waits for a key event before redrawing (milliseconds).
    /// Keeps the splash spinner animating while no keys arrive.
    pub const EVENT_POLL_INTERVAL_MS: u64 = 100;

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 50;
}
