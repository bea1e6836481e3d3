//! Component trait - Interface for UI components
//!
//! Components own their presentation state, turn terminal events into
//! Actions and render themselves. Board state is never mutated here; it
//! changes only when the app dispatches an Action.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` / `handle_mouse_event` map input to an Action
/// 2. `update` reacts to an Action, optionally returning a follow-up
/// 3. `draw` renders into the given area
pub trait Component {
    /// Called once before the first frame
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render the component. No state changes beyond layout caching.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
