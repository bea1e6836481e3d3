//! Project tooltips drawn on top of the board
//!
//! Each live overlay on the surface becomes a small popup. Clicking a popup,
//! or pressing Esc for the topmost one, clicks the overlay control.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::surface::{BoardSurface, Control, OverlayHandle, OverlayView};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 7;
const CASCADE_STEP: u16 = 2;

/// Renders tooltips and remembers where they were drawn for mouse hits
#[derive(Default)]
pub struct OverlayLayer {
    overlays: Vec<OverlayView>,
    placed: Vec<(OverlayHandle, Rect)>,
}

impl OverlayLayer {
    pub fn sync(&mut self, surface: &BoardSurface) {
        self.overlays = surface.overlays();
        let live: Vec<OverlayHandle> = self.overlays.iter().map(|o| o.handle).collect();
        self.placed.retain(|(handle, _)| live.contains(handle));
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Topmost overlay drawn at the given cell
    fn hit(&self, column: u16, row: u16) -> Option<OverlayHandle> {
        self.placed
            .iter()
            .rev()
            .find(|(_, r)| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .map(|(handle, _)| *handle)
    }
}

impl Component for OverlayLayer {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('x') => self
                .overlays
                .last()
                .map(|top| Action::Click(Control::Overlay(top.handle))),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        Ok(self
            .hit(mouse.column, mouse.row)
            .map(|handle| Action::Click(Control::Overlay(handle))))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.placed.clear();
        let base = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);

        for (i, overlay) in self.overlays.iter().enumerate() {
            let offset = (i as u16).saturating_mul(CASCADE_STEP);
            let popup = Rect::new(
                (base.x + offset).min(area.right().saturating_sub(base.width)),
                (base.y + offset / 2).min(area.bottom().saturating_sub(base.height)),
                base.width,
                base.height,
            );

            frame.render_widget(Clear, popup);
            let content = vec![
                Line::from(Span::raw(overlay.text.clone())),
                Line::from(""),
                Line::from(Span::styled(
                    "click or Esc to close",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let paragraph = Paragraph::new(content)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan))
                        .title(format!(" {} ", overlay.title))
                        .title_style(
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                );
            frame.render_widget(paragraph, popup);
            self.placed.push((overlay.handle, popup));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_seeds, ProjectId};
    use crate::surface::{ContainerId, ViewSurface};
    use crossterm::event::KeyModifiers;

    fn layer_with_overlays(count: usize) -> (OverlayLayer, Vec<OverlayHandle>) {
        let mut surface = BoardSurface::from_seeds(sample_seeds()).unwrap();
        let handles = ["p1", "p2", "p3"]
            .iter()
            .take(count)
            .map(|id| {
                surface
                    .attach_overlay(ContainerId::Root, &ProjectId::new(*id))
                    .unwrap()
            })
            .collect();
        let mut layer = OverlayLayer::default();
        layer.sync(&surface);
        (layer, handles)
    }

    #[test]
    fn test_esc_clicks_topmost_overlay() {
        let (mut layer, handles) = layer_with_overlays(2);
        let action = layer.handle_key_event(KeyEvent::from(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::Click(Control::Overlay(handles[1]))));
    }

    #[test]
    fn test_esc_without_overlays_does_nothing() {
        let (mut layer, _) = layer_with_overlays(0);
        assert!(layer.is_empty());
        assert_eq!(layer.handle_key_event(KeyEvent::from(KeyCode::Esc)).unwrap(), None);
    }

    #[test]
    fn test_mouse_hits_topmost_placed_overlay() {
        let (mut layer, handles) = layer_with_overlays(2);
        layer.placed = vec![
            (handles[0], Rect::new(10, 5, 20, 5)),
            (handles[1], Rect::new(12, 6, 20, 5)),
        ];

        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        assert_eq!(
            layer.handle_mouse_event(click(15, 7)).unwrap(),
            Some(Action::Click(Control::Overlay(handles[1])))
        );
        assert_eq!(
            layer.handle_mouse_event(click(10, 5)).unwrap(),
            Some(Action::Click(Control::Overlay(handles[0])))
        );
        assert_eq!(layer.handle_mouse_event(click(0, 0)).unwrap(), None);
    }
}
