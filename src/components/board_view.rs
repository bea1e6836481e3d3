//! Board view - the two project lists side by side
//!
//! Owns focus and selection. Key presses on a project become clicks on the
//! project's controls; the surface decides what those clicks do.

use crate::action::Action;
use crate::component::Component;
use crate::components::split_lists;
use crate::model::{Category, ProjectId};
use crate::surface::{BoardSurface, Control, RowView};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Presentation state for the two lists
pub struct BoardView {
    /// List receiving navigation and clicks
    pub focus: Category,
    active_state: ListState,
    finished_state: ListState,
    active_rows: Vec<RowView>,
    finished_rows: Vec<RowView>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            focus: Category::Active,
            active_state: ListState::default(),
            finished_state: ListState::default(),
            active_rows: Vec::new(),
            finished_rows: Vec::new(),
        }
    }

    /// Refresh cached rows from the surface and keep selections in range
    pub fn sync(&mut self, surface: &BoardSurface) {
        self.active_rows = surface.rows(Category::Active);
        self.finished_rows = surface.rows(Category::Finished);
        for category in Category::all() {
            let len = self.rows(category).len();
            clamp_selection(self.state_mut(category), len);
        }
    }

    pub fn rows(&self, category: Category) -> &[RowView] {
        match category {
            Category::Active => &self.active_rows,
            Category::Finished => &self.finished_rows,
        }
    }

    fn state(&self, category: Category) -> &ListState {
        match category {
            Category::Active => &self.active_state,
            Category::Finished => &self.finished_state,
        }
    }

    fn state_mut(&mut self, category: Category) -> &mut ListState {
        match category {
            Category::Active => &mut self.active_state,
            Category::Finished => &mut self.finished_state,
        }
    }

    /// Project under the cursor in the focused list
    pub fn selected_id(&self) -> Option<&ProjectId> {
        let index = self.state(self.focus).selected()?;
        self.rows(self.focus).get(index).map(|row| &row.id)
    }

    fn select_next(&mut self) {
        let len = self.rows(self.focus).len();
        if len == 0 {
            return;
        }
        let state = self.state_mut(self.focus);
        let next = state.selected().map_or(0, |i| (i + 1).min(len - 1));
        state.select(Some(next));
    }

    fn select_prev(&mut self) {
        let state = self.state_mut(self.focus);
        if let Some(i) = state.selected() {
            state.select(Some(i.saturating_sub(1)));
        }
    }

    fn click_selected(&self, control: fn(ProjectId) -> Control) -> Option<Action> {
        self.selected_id()
            .map(|id| Action::Click(control(id.clone())))
    }
}

impl Component for BoardView {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('h')
            | KeyCode::Char('l')
            | KeyCode::Left
            | KeyCode::Right => Some(Action::SwitchList),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('f') => {
                self.click_selected(Control::ActionButton)
            }
            KeyCode::Char('i') => self.click_selected(Control::InfoButton),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextItem => self.select_next(),
            Action::PrevItem => self.select_prev(),
            Action::SwitchList => {
                self.focus = self.focus.other();
                let len = self.rows(self.focus).len();
                clamp_selection(self.state_mut(self.focus), len);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (active_area, finished_area) = split_lists(area);
        for (category, list_area) in [
            (Category::Active, active_area),
            (Category::Finished, finished_area),
        ] {
            let focused = self.focus == category;
            let width = list_area.width.saturating_sub(4) as usize;
            let items: Vec<ListItem> = self
                .rows(category)
                .iter()
                .map(|row| render_row(row, width))
                .collect();

            let border = if focused { Color::Yellow } else { Color::DarkGray };
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border))
                        .title(format!(" {} ({}) ", category.title(), self.rows(category).len()))
                        .title_style(Style::default().fg(border).add_modifier(Modifier::BOLD)),
                )
                .highlight_style(if focused {
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                })
                .highlight_symbol("▶ ");

            frame.render_stateful_widget(list, list_area, self.state_mut(category));
        }
        Ok(())
    }
}

fn clamp_selection(state: &mut ListState, len: usize) {
    match (state.selected(), len) {
        (_, 0) => state.select(None),
        (None, _) => state.select(Some(0)),
        (Some(i), len) if i >= len => state.select(Some(len - 1)),
        _ => {}
    }
}

/// One project row: title on the left, its two buttons on the right
fn render_row(row: &RowView, width: usize) -> ListItem<'static> {
    let info = format!("[{}]", row.info_label);
    let action = format!("[{}]", row.action_label);
    let buttons = info.width() + action.width() + 2;
    let title = fit(&row.title, width.saturating_sub(buttons + 2));
    let gap = width.saturating_sub(title.width() + buttons).max(1);

    ListItem::new(Line::from(vec![
        Span::styled(title, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(gap)),
        Span::styled(info, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(
            action,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
}

/// Truncate `text` to `width` display columns, marking the cut with an ellipsis
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_seeds;

    fn view() -> BoardView {
        let surface = BoardSurface::from_seeds(sample_seeds()).unwrap();
        let mut view = BoardView::new();
        view.sync(&surface);
        view
    }

    #[test]
    fn test_sync_selects_first_row() {
        let view = view();
        assert_eq!(view.selected_id(), Some(&ProjectId::new("p1")));
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut view = view();
        for _ in 0..5 {
            view.update(Action::NextItem).unwrap();
        }
        assert_eq!(view.selected_id(), Some(&ProjectId::new("p2")));
        for _ in 0..5 {
            view.update(Action::PrevItem).unwrap();
        }
        assert_eq!(view.selected_id(), Some(&ProjectId::new("p1")));
    }

    #[test]
    fn test_switch_list_changes_focus() {
        let mut view = view();
        view.update(Action::SwitchList).unwrap();
        assert_eq!(view.focus, Category::Finished);
        assert_eq!(view.selected_id(), Some(&ProjectId::new("p3")));
    }

    #[test]
    fn test_enter_clicks_action_button_of_selection() {
        let mut view = view();
        let action = view
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert_eq!(
            action,
            Some(Action::Click(Control::ActionButton(ProjectId::new("p1"))))
        );

        let action = view
            .handle_key_event(KeyEvent::from(KeyCode::Char('i')))
            .unwrap();
        assert_eq!(
            action,
            Some(Action::Click(Control::InfoButton(ProjectId::new("p1"))))
        );
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let surface = BoardSurface::from_seeds(Vec::new()).unwrap();
        let mut view = BoardView::new();
        view.sync(&surface);
        assert_eq!(view.selected_id(), None);
        assert_eq!(
            view.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap(),
            None
        );
    }

    #[test]
    fn test_fit_truncates_wide_text() {
        assert_eq!(fit("short", 10), "short");
        assert_eq!(fit("abcdefghij", 5), "abcd…");
        assert_eq!(fit("日本語テキスト", 6), "日本…");
    }
}
