//! Activity events recorded by the UI shell.
//!
//! Navigation and selection milestones are captured as timestamped
//! events and shown in the home screen's activity panel.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// The current screen changed.
    ScreenChange,
    /// A language option was selected (not yet confirmed).
    Selection,
    /// A language choice was confirmed.
    Confirmation,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AppEvent {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl AppEvent {
    fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn screen_change(msg: String) -> Self {
        Self::new(msg, EventType::ScreenChange, LogLevel::Info)
    }

    pub fn selection(msg: String) -> Self {
        Self::new(msg, EventType::Selection, LogLevel::Debug)
    }

    pub fn confirmation(msg: String) -> Self {
        Self::new(msg, EventType::Confirmation, LogLevel::Info)
    }

    /// Whether the event passes the RUST_LOG threshold.
    pub fn should_display(&self) -> bool {
        should_log_with_env(self.log_level)
    }
}

impl Display for AppEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.timestamp, self.event_type, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Constructors should tag events with the expected type and level.
    fn test_constructors_set_type_and_level() {
        let event = AppEvent::screen_change("splash finished".to_string());
        assert_eq!(event.event_type, EventType::ScreenChange);
        assert_eq!(event.log_level, LogLevel::Info);

        let event = AppEvent::selection("picked Tamil".to_string());
        assert_eq!(event.event_type, EventType::Selection);
        assert_eq!(event.log_level, LogLevel::Debug);

        let event = AppEvent::confirmation("confirmed Tamil".to_string());
        assert_eq!(event.event_type, EventType::Confirmation);
        assert_eq!(event.log_level, LogLevel::Info);
    }

    #[test]
    // The display form carries the timestamp, type, and message.
    fn test_display_format() {
        let event = AppEvent::confirmation("confirmed English".to_string());
        let rendered = event.to_string();
        assert!(rendered.contains("Confirmation"));
        assert!(rendered.contains("confirmed English"));
        assert!(rendered.starts_with('['));
    }
}
