//! Language selection screen: selection state and rendering.

use crate::language::Language;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Selection state of the language screen.
///
/// At most one language is selected at any time. The focus cursor is
/// presentation state for keyboard navigation; moving it never
/// changes the selection.
#[derive(Debug)]
pub struct SelectionState {
    selected: Option<Language>,
    focused: usize,
}

impl SelectionState {
    /// Creates the state a freshly mounted screen starts with: no
    /// selection, focus on the first option.
    pub fn new() -> Self {
        Self {
            selected: None,
            focused: 0,
        }
    }

    pub fn selected(&self) -> Option<Language> {
        self.selected
    }

    /// The option the focus cursor is on.
    pub fn focused(&self) -> Language {
        Language::ALL[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % Language::ALL.len();
    }

    pub fn focus_previous(&mut self) {
        self.focused = (self.focused + Language::ALL.len() - 1) % Language::ALL.len();
    }

    /// Selects a language, replacing any previous selection.
    /// Selecting the already-selected language is a no-op
    /// re-selection, not a toggle-off.
    pub fn select(&mut self, language: Language) {
        self.selected = Some(language);
    }

    /// Selects the focused option (the Space key path).
    pub fn select_focused(&mut self) {
        self.select(self.focused());
    }

    /// Whether the Continue action is enabled.
    pub fn can_continue(&self) -> bool {
        self.selected.is_some()
    }

    /// The Continue action: yields the selected language, or `None`
    /// while the action is disabled.
    pub fn confirm(&self) -> Option<Language> {
        self.selected
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a logical icon key to a terminal glyph. Stands in for the
/// asset provider; unknown keys get a neutral marker.
fn icon_glyph(icon_key: &str) -> &'static str {
    match icon_key {
        "flag_sri_lanka" => "🇱🇰",
        "flag_india" => "🇮🇳",
        "flag_uk" => "🇬🇧",
        _ => "⚑",
    }
}

pub fn render_language_select(f: &mut Frame, state: &SelectionState, with_accent_color: bool) {
    let accent = if with_accent_color {
        Color::LightBlue
    } else {
        Color::Reset
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Min(5),    // language cards
            Constraint::Length(3), // continue action
            Constraint::Length(2), // key hints
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Choose Your Language",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "ඔබේ භාෂාව තෝරන්න",
            Style::default().fg(accent),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    // One card per language, side by side.
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);

    for (index, language) in Language::ALL.iter().enumerate() {
        let is_selected = state.selected() == Some(*language);
        let is_focused = state.focused() == *language;

        let border_style = if is_selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else if is_focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let border_type = if is_selected {
            BorderType::Thick
        } else {
            BorderType::Plain
        };

        // The check mark marks the one selected card, never more.
        let title = if is_selected {
            format!(" {} ✓ ", language.display_name())
        } else {
            format!(" {} ", language.display_name())
        };

        let body = vec![
            Line::from(Span::raw(icon_glyph(language.icon_key()))),
            Line::from(Span::styled(
                language.local_name(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("[{}]", index + 1),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let card = Paragraph::new(body).alignment(Alignment::Center).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
        f.render_widget(card, card_areas[index]);
    }

    // Continue action: dimmed until a selection exists.
    let continue_style = if state.can_continue() {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let continue_button = Paragraph::new("Continue")
        .alignment(Alignment::Center)
        .style(continue_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(continue_style),
        );
    f.render_widget(continue_button, chunks[2]);

    let hints = Paragraph::new("[1-3] Select | [↑/↓] Focus | [Space] Select | [Enter] Continue | [Q] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(hints, chunks[3]);
}
