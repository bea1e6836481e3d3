//! Leave-the-board confirmation

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const PROMPT: &str = "Leave the project board?";
const NOTE: &str = "Moves between lists are kept only for this session.";

/// Keys that confirm, and keys that return to the board
const CONFIRM: [KeyCode; 3] = [KeyCode::Char('y'), KeyCode::Char('Y'), KeyCode::Char('q')];
const CANCEL: [KeyCode; 3] = [KeyCode::Char('n'), KeyCode::Char('N'), KeyCode::Esc];

#[derive(Default)]
pub struct QuitDialog;

fn hint(key: &'static str, label: &'static str, color: Color) -> [Span<'static>; 2] {
    [
        Span::styled(
            format!("[{}]", key),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}   ", label)),
    ]
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if CONFIRM.contains(&key.code) {
            return Ok(Some(Action::ForceQuit));
        }
        if CANCEL.contains(&key.code) {
            return Ok(Some(Action::CloseModal));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 46, 8);
        frame.render_widget(Clear, popup);

        let mut keys: Vec<Span> = hint("y", "leave", Color::Green).into();
        keys.extend(hint("n", "keep working", Color::Cyan));

        let text = Text::from(vec![
            Line::styled(PROMPT, Style::default().add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::styled(NOTE, Style::default().fg(Color::DarkGray)),
            Line::default(),
            Line::from(keys),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(Line::from(" Exit ").alignment(Alignment::Center));

        frame.render_widget(
            Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            popup,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Action> {
        QuitDialog.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    #[test]
    fn test_confirm_keys_quit() {
        for code in CONFIRM {
            assert_eq!(press(code), Some(Action::ForceQuit));
        }
    }

    #[test]
    fn test_cancel_keys_close() {
        for code in CANCEL {
            assert_eq!(press(code), Some(Action::CloseModal));
        }
    }

    #[test]
    fn test_other_keys_are_swallowed() {
        assert_eq!(press(KeyCode::Enter), None);
        assert_eq!(press(KeyCode::Char('j')), None);
    }
}
