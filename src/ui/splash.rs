//! Splash screen: dwell timer and rendering.

use crate::consts::ui_consts::SPINNER_PERIOD_MS;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::time::{Duration, Instant};

pub const LOGO_NAME: &str = r#"
   █████╗   █████╗  ██╗   ██╗ ██╗   ██╗
  ██╔══██╗ ██╔══██╗ ╚██╗ ██╔╝ ██║   ██║
  ███████║ ███████║  ╚████╔╝  ██║   ██║
  ██╔══██║ ██╔══██║   ╚██╔╝   ██║   ██║
  ██║  ██║ ██║  ██║    ██║    ╚██████╔╝
  ╚═╝  ╚═╝ ╚═╝  ╚═╝    ╚═╝     ╚═════╝
"#;

/// Spinner glyphs in rotation order.
const SPINNER_FRAMES: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠇'];

/// One-shot dwell timer owned by the splash screen state.
///
/// Dropping the state (unmount) discards the timer, so a pending
/// transition can never fire after the screen is gone. After the
/// first fire every further poll reports false, no matter how often
/// the screen redraws.
#[derive(Debug)]
pub struct DwellTimer {
    started_at: Instant,
    dwell: Duration,
    fired: bool,
}

impl DwellTimer {
    pub fn new(dwell: Duration) -> Self {
        Self::starting_at(Instant::now(), dwell)
    }

    fn starting_at(started_at: Instant, dwell: Duration) -> Self {
        Self {
            started_at,
            dwell,
            fired: false,
        }
    }

    /// Reports true exactly once, on the first poll at or past the
    /// deadline. Polling neither advances nor resets the deadline.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    fn poll_at(&mut self, now: Instant) -> bool {
        if self.fired {
            return false;
        }
        if now.duration_since(self.started_at) >= self.dwell {
            self.fired = true;
            return true;
        }
        false
    }

    /// Time since the splash mounted; drives the spinner only.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Spinner glyph for the given elapsed time. One full rotation every
/// `SPINNER_PERIOD_MS`, linear; purely decorative and independent of
/// the dwell deadline.
pub fn spinner_frame(elapsed: Duration) -> char {
    let period = SPINNER_PERIOD_MS as u128;
    let phase = elapsed.as_millis() % period;
    let index = (phase * SPINNER_FRAMES.len() as u128) / period;
    SPINNER_FRAMES[index as usize]
}

pub fn render_splash(f: &mut Frame, timer: &DwellTimer, with_accent_color: bool) {
    let accent = if with_accent_color {
        Color::LightBlue
    } else {
        Color::Reset
    };

    // Convert LOGO_NAME into styled Lines
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    // Add a spacer line
    lines.push(Line::from(Span::raw(" ")));

    // App name in Sinhala script
    lines.push(
        Span::styled(
            "ආයු",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )
        .into(),
    );

    // Add version line
    lines.push(
        Span::styled(
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(accent).add_modifier(Modifier::ITALIC),
        )
        .into(),
    );

    // Spinner line
    lines.push(Line::from(Span::raw(" ")));
    lines.push(
        Span::styled(
            spinner_frame(timer.elapsed()).to_string(),
            Style::default().fg(accent),
        )
        .into(),
    );

    // Determine the logo height
    let logo_height = (lines.len() + 2) as u16;

    // Vertically center using layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min((f.area().height.saturating_sub(logo_height)) / 2),
            Constraint::Length(logo_height),
            Constraint::Min((f.area().height.saturating_sub(logo_height + 1)) / 2),
        ])
        .split(f.area());

    let centered_area: Rect = vertical_chunks[1];

    let logo = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(logo, centered_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // The timer must not fire before its deadline, however often it is polled.
    fn test_does_not_fire_before_deadline() {
        let start = Instant::now();
        let mut timer = DwellTimer::starting_at(start, Duration::from_millis(2000));

        for millis in [0u64, 100, 500, 1000, 1999] {
            assert!(!timer.poll_at(start + Duration::from_millis(millis)));
        }
    }

    #[test]
    // The timer fires exactly once at or past the deadline.
    fn test_fires_exactly_once() {
        let start = Instant::now();
        let mut timer = DwellTimer::starting_at(start, Duration::from_millis(2000));

        assert!(timer.poll_at(start + Duration::from_millis(2000)));

        // Later polls must stay silent.
        assert!(!timer.poll_at(start + Duration::from_millis(2001)));
        assert!(!timer.poll_at(start + Duration::from_millis(10_000)));
    }

    #[test]
    // Pre-deadline polls (redraws) must not extend the dwell.
    fn test_redraws_do_not_extend_dwell() {
        let start = Instant::now();
        let mut timer = DwellTimer::starting_at(start, Duration::from_millis(2000));

        for millis in (0..2000).step_by(100) {
            assert!(!timer.poll_at(start + Duration::from_millis(millis)));
        }
        assert!(timer.poll_at(start + Duration::from_millis(2000)));
    }

    #[test]
    // An unexpired timer that is dropped never reported a fire.
    fn test_unmounted_timer_never_fired() {
        let start = Instant::now();
        let mut timer = DwellTimer::starting_at(start, Duration::from_millis(2000));

        assert!(!timer.poll_at(start + Duration::from_millis(500)));
        drop(timer);
    }

    #[test]
    // A zero dwell fires on the first poll.
    fn test_zero_dwell_fires_immediately() {
        let start = Instant::now();
        let mut timer = DwellTimer::starting_at(start, Duration::ZERO);
        assert!(timer.poll_at(start));
        assert!(!timer.poll_at(start));
    }

    #[test]
    // The spinner makes one full rotation per period and wraps.
    fn test_spinner_rotation() {
        assert_eq!(spinner_frame(Duration::ZERO), SPINNER_FRAMES[0]);

        let half = Duration::from_millis(SPINNER_PERIOD_MS / 2);
        assert_eq!(spinner_frame(half), SPINNER_FRAMES[SPINNER_FRAMES.len() / 2]);

        let wrapped = Duration::from_millis(SPINNER_PERIOD_MS);
        assert_eq!(spinner_frame(wrapped), SPINNER_FRAMES[0]);
    }
}
