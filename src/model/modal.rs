//! Modal stack for app-level dialogs
//!
//! Project tooltips live on the board surface. This stack only holds the
//! dialogs the app itself opens (quit confirmation and help).

/// A dialog displayed on top of the board
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of dialogs
///
/// Only the top dialog receives input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a dialog, ignoring it if the same one is already on top
    pub fn push(&mut self, modal: Modal) {
        if self.top() != Some(&modal) {
            self.stack.push(modal);
        }
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Help);

        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_same_modal_is_not_stacked_twice() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help);
        stack.push(Modal::Help);

        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.is_empty());
    }
}
