//! Help dialog component
//!
//! Lists the board's keyboard and mouse shortcuts.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j / ↓", "Next project"),
            ("k / ↑", "Previous project"),
            ("Tab / h / l", "Switch between Active and Finished"),
        ],
    ),
    (
        "Projects",
        &[
            ("Enter / f", "Finish or activate the selected project"),
            ("i", "Show more info"),
            ("Esc / x", "Close the topmost info popup"),
            ("mouse click", "Close the clicked info popup"),
        ],
    ),
    (
        "App",
        &[("?", "Show this help"), ("q", "Quit"), ("Ctrl+c", "Quit immediately")],
    ),
];

/// Help dialog showing all shortcuts
#[derive(Default)]
pub struct HelpDialog;

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let popup_area = centered_popup(area, 60, content.len() as u16 + 2);

        frame.render_widget(Clear, popup_area);
        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (section, shortcuts) in SHORTCUTS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", section),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:14}", key),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(description.to_string(), Style::default().fg(Color::White)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog;
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            assert_eq!(
                dialog.handle_key_event(KeyEvent::from(code)).unwrap(),
                Some(Action::CloseModal)
            );
        }
        assert_eq!(
            dialog.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap(),
            None
        );
    }

    #[test]
    fn test_every_shortcut_is_listed() {
        let expected: usize = SHORTCUTS.iter().map(|(_, s)| s.len() + 2).sum::<usize>() + 2;
        assert_eq!(build_help_content().len(), expected);
    }
}
