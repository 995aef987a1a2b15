//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::ui_consts::{EVENT_POLL_INTERVAL_MS, MAX_ACTIVITY_LOGS};
use crate::events::AppEvent;
use crate::language::{Language, LanguageConfirmedSink};
use crate::navigator::{Navigator, Route};
use crate::ui::home::{HomeState, render_home};
use crate::ui::language_select::{SelectionState, render_language_select};
use crate::ui::splash::{DwellTimer, render_splash};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::time::Duration;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub splash_delay_ms: u64,
    pub with_accent_color: bool,
}

impl UiConfig {
    pub fn new(splash_delay_ms: u64, with_accent_color: bool) -> Self {
        Self {
            splash_delay_ms,
            with_accent_color,
        }
    }
}

/// The different screens in the application.
///
/// Each variant carries the mounted screen's state. Leaving a screen
/// drops that state, which is what cancels the splash dwell timer on
/// unmount.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash(DwellTimer),
    /// Language selection screen.
    LanguageSelection(SelectionState),
    /// Placeholder home screen.
    Home(HomeState),
}

/// Application state
pub struct App {
    /// Routing table and back-stack; the source of truth for the
    /// current route. The mounted screen always mirrors it.
    navigator: Navigator,

    /// State of the currently mounted screen.
    screen: Screen,

    /// Receives the confirmed language choice (best-effort notify).
    sink: Box<dyn LanguageConfirmedSink>,

    /// Confirmed language, if any; feeds the home screen on mount.
    confirmed_language: Option<Language>,

    /// Recent activity shown on the home screen.
    activity_logs: VecDeque<AppEvent>,

    /// Splash dwell duration.
    splash_delay: Duration,

    /// Whether to use the accent color.
    with_accent_color: bool,
}

impl App {
    /// Creates a new instance of the application, mounted on splash.
    pub fn new(
        navigator: Navigator,
        sink: Box<dyn LanguageConfirmedSink>,
        ui_config: UiConfig,
    ) -> Self {
        let splash_delay = Duration::from_millis(ui_config.splash_delay_ms);
        Self {
            navigator,
            screen: Screen::Splash(DwellTimer::new(splash_delay)),
            sink,
            confirmed_language: None,
            activity_logs: VecDeque::new(),
            splash_delay,
            with_accent_color: ui_config.with_accent_color,
        }
    }

    #[allow(unused)]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    fn record(&mut self, event: AppEvent) {
        if !event.should_display() {
            return;
        }
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Splash dwell expired: advance to language selection. The
    /// splash entry is popped inclusively, so back-navigation can
    /// never return to it.
    fn finish_splash(&mut self) {
        self.navigator
            .navigate(Route::LanguageSelection, Some(Route::Splash));
        self.screen = Screen::LanguageSelection(SelectionState::new());
        self.record(AppEvent::screen_change(format!(
            "Splash finished, navigated to {}",
            Route::LanguageSelection
        )));
    }

    /// Continue with a selection present: notify the sink and advance
    /// to home, popping the selection screen inclusively. A no-op
    /// while nothing is selected.
    fn confirm_language(&mut self) {
        let Screen::LanguageSelection(state) = &self.screen else {
            return;
        };
        let Some(language) = state.confirm() else {
            return;
        };

        self.sink.on_language_confirmed(language);
        self.confirmed_language = Some(language);
        self.navigator
            .navigate(Route::Home, Some(Route::LanguageSelection));
        self.screen = Screen::Home(HomeState::new(self.confirmed_language));
        self.record(AppEvent::confirmation(format!(
            "Language confirmed: {language}"
        )));
    }

    /// Back request. Both forward transitions pop inclusively, so in
    /// this flow there is never history to return to and the request
    /// is ignored; a route reached by a real pop is remounted fresh.
    fn handle_back(&mut self) {
        if self.navigator.pop().is_some() {
            self.screen = self.mount(self.navigator.current());
        }
    }

    fn mount(&self, route: Route) -> Screen {
        match route {
            Route::Splash => Screen::Splash(DwellTimer::new(self.splash_delay)),
            Route::LanguageSelection => Screen::LanguageSelection(SelectionState::new()),
            Route::Home => Screen::Home(HomeState::new(self.confirmed_language)),
        }
    }

    /// Handles one key press. Returns true when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
            return true;
        }
        if code == KeyCode::Backspace {
            self.handle_back();
            return false;
        }

        match self.navigator.current() {
            // The dwell is fixed; keys do not skip the splash.
            Route::Splash => {}
            Route::LanguageSelection => self.handle_selection_key(code),
            // Home is terminal; no further actions defined.
            Route::Home => {}
        }
        false
    }

    fn handle_selection_key(&mut self, code: KeyCode) {
        if code == KeyCode::Enter {
            self.confirm_language();
            return;
        }

        let Screen::LanguageSelection(state) = &mut self.screen else {
            return;
        };
        let mut selected = None;
        match code {
            KeyCode::Up | KeyCode::Char('k') => state.focus_previous(),
            KeyCode::Down | KeyCode::Char('j') => state.focus_next(),
            KeyCode::Char(' ') => {
                let language = state.focused();
                state.select(language);
                selected = Some(language);
            }
            KeyCode::Char(c @ '1'..='3') => {
                let language = Language::ALL[(c as u8 - b'1') as usize];
                state.select(language);
                selected = Some(language);
            }
            _ => {}
        }
        if let Some(language) = selected {
            self.record(AppEvent::selection(format!("Selected {language}")));
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // UI event loop
    loop {
        terminal.draw(|f| render(f, &app))?;

        // Splash dwell check. The timer reports expiry exactly once;
        // redraws while waiting neither advance nor reset it.
        if let Screen::Splash(timer) = &mut app.screen {
            if timer.poll() {
                app.finish_splash();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Splash(timer) => render_splash(f, timer, app.with_accent_color),
        Screen::LanguageSelection(state) => {
            render_language_select(f, state, app.with_accent_color)
        }
        Screen::Home(state) => render_home(f, state, &app.activity_logs, app.with_accent_color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test double for the persistence seam.
    struct RecordingSink(Arc<Mutex<Vec<Language>>>);

    impl LanguageConfirmedSink for RecordingSink {
        fn on_language_confirmed(&mut self, language: Language) {
            self.0.lock().unwrap().push(language);
        }
    }

    fn test_app() -> (App, Arc<Mutex<Vec<Language>>>) {
        let confirmed = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingSink(Arc::clone(&confirmed));
        let app = App::new(Navigator::new(), Box::new(sink), UiConfig::new(2000, true));
        (app, confirmed)
    }

    #[test]
    // The app mounts on splash with an armed dwell timer.
    fn test_app_starts_on_splash() {
        let (app, _) = test_app();
        assert_eq!(app.navigator().current(), Route::Splash);
        assert!(matches!(app.screen(), Screen::Splash(_)));
    }

    #[test]
    // Finishing the splash pops it from history; back cannot reach it.
    fn test_finish_splash_gates_the_way_back() {
        let (mut app, _) = test_app();
        app.finish_splash();

        assert_eq!(app.navigator().current(), Route::LanguageSelection);
        assert!(!app.navigator().can_return_to(Route::Splash));
        assert!(matches!(app.screen(), Screen::LanguageSelection(_)));

        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.navigator().current(), Route::LanguageSelection);
    }

    #[test]
    // Enter with no selection is a no-op: no navigation, no notification.
    fn test_confirm_without_selection_is_noop() {
        let (mut app, confirmed) = test_app();
        app.finish_splash();

        app.handle_key(KeyCode::Enter);

        assert_eq!(app.navigator().current(), Route::LanguageSelection);
        assert!(confirmed.lock().unwrap().is_empty());
    }

    #[test]
    // Selecting Tamil and confirming notifies the sink and lands on home.
    fn test_confirm_tamil_reaches_home() {
        let (mut app, confirmed) = test_app();
        app.finish_splash();

        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.navigator().current(), Route::Home);
        assert_eq!(confirmed.lock().unwrap().as_slice(), &[Language::Tamil]);
        match app.screen() {
            Screen::Home(state) => assert_eq!(state.language, Some(Language::Tamil)),
            other => panic!("expected home screen, got {other:?}"),
        }
    }

    #[test]
    // Focus navigation plus Space selects, and a digit replaces it.
    fn test_selection_keys_are_single_select() {
        let (mut app, _) = test_app();
        app.finish_splash();

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Char('3'));

        match app.screen() {
            Screen::LanguageSelection(state) => {
                assert_eq!(state.selected(), Some(Language::English));
            }
            other => panic!("expected selection screen, got {other:?}"),
        }
    }

    #[test]
    // After confirming, home is terminal: back stays put.
    fn test_home_is_terminal() {
        let (mut app, _) = test_app();
        app.finish_splash();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Enter);

        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.navigator().current(), Route::Home);
        assert!(!app.navigator().can_return_to(Route::LanguageSelection));
        assert!(!app.navigator().can_return_to(Route::Splash));
    }

    #[test]
    // Quit keys request exit from any screen.
    fn test_quit_keys() {
        let (mut app, _) = test_app();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Esc));
        assert!(!app.handle_key(KeyCode::Enter));
    }

    #[test]
    // Keys on the splash screen do not skip the dwell.
    fn test_splash_keys_do_not_skip() {
        let (mut app, _) = test_app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.navigator().current(), Route::Splash);
    }

    #[test]
    // Confirmations are recorded in the activity log.
    fn test_confirmation_is_logged() {
        let (mut app, _) = test_app();
        app.finish_splash();
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Enter);

        assert!(
            app.activity_logs
                .iter()
                .any(|event| event.msg.contains("Tamil"))
        );
    }
}
