//! UI Components
//!
//! Each component encapsulates its own presentation state, event handling
//! and rendering. Components communicate through Actions.

pub mod board_view;
pub mod help_dialog;
pub mod layout;
pub mod overlay_layer;
pub mod quit_dialog;

pub use board_view::BoardView;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup, split_lists};
pub use overlay_layer::OverlayLayer;
pub use quit_dialog::QuitDialog;
