//! Placeholder home screen.

use crate::events::AppEvent;
use crate::language::Language;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use std::collections::VecDeque;

/// State of the home screen.
#[derive(Debug)]
pub struct HomeState {
    /// The confirmed language. `None` only if the screen were ever
    /// remounted without a confirmation, which the flow does not do.
    pub language: Option<Language>,
}

impl HomeState {
    pub fn new(language: Option<Language>) -> Self {
        Self { language }
    }
}

pub fn render_home(
    f: &mut Frame,
    state: &HomeState,
    activity_logs: &VecDeque<AppEvent>,
    with_accent_color: bool,
) {
    let accent = if with_accent_color {
        Color::LightBlue
    } else {
        Color::Reset
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // placeholder banner
            Constraint::Min(3),    // activity
            Constraint::Length(2), // footer
        ])
        .split(f.area());

    let header = Paragraph::new("ආයු — Home")
        .alignment(Alignment::Center)
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(header, chunks[0]);

    let language_line = match state.language {
        Some(language) => format!("Language: {} ({})", language.local_name(), language),
        None => "Language: not selected".to_string(),
    };
    let banner = Paragraph::new(vec![
        Line::from("Home screen — coming soon"),
        Line::from(language_line),
    ])
    .alignment(Alignment::Center);
    f.render_widget(banner, chunks[1]);

    // Most recent activity at the bottom, like a log tail.
    let visible = chunks[2].height.saturating_sub(2) as usize;
    let lines: Vec<Line> = activity_logs
        .iter()
        .rev()
        .take(visible.max(1))
        .rev()
        .map(|event| Line::from(event.to_string()))
        .collect();
    let activity = Paragraph::new(lines).block(
        Block::default()
            .title(" Activity ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(activity, chunks[2]);

    let footer = Paragraph::new("[Q] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, chunks[3]);
}
