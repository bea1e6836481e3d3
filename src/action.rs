//! Action enum - All possible application actions
//!
//! Components emit Actions in response to terminal events. Click handlers
//! bound on the board surface are Actions too: firing a handler means
//! dispatching its Action through `App::update`.

use crate::model::{Category, ProjectId};
use crate::surface::Control;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move selection to the next project in the focused list
    NextItem,
    /// Move selection to the previous project in the focused list
    PrevItem,
    /// Move focus to the other list
    SwitchList,

    // ─────────────────────────────────────────────────────────────────────────
    // Surface
    // ─────────────────────────────────────────────────────────────────────────
    /// User clicked a control on the board surface
    Click(Control),
    /// Hand a project from the `from` list to the other one
    AdvanceProject { from: Category, id: ProjectId },
    /// Open the tooltip of a project
    RequestOverlay(ProjectId),
    /// Close the tooltip of a project
    DismissOverlay(ProjectId),
    /// A project's tooltip has been removed from the surface
    OverlayDismissed(ProjectId),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::SwitchList => write!(f, "SwitchList"),
            Action::Click(control) => write!(f, "Click({:?})", control),
            Action::AdvanceProject { from, id } => write!(f, "AdvanceProject({}, {})", from, id),
            Action::RequestOverlay(id) => write!(f, "RequestOverlay({})", id),
            Action::DismissOverlay(id) => write!(f, "DismissOverlay({})", id),
            Action::OverlayDismissed(id) => write!(f, "OverlayDismissed({})", id),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
