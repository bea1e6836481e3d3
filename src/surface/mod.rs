//! View surface - the boundary between board state and rendering
//!
//! The board core never draws anything itself. It asks a [`ViewSurface`] to
//! move elements, attach overlays and bind click handlers. A click handler is
//! an [`Action`] that the surface hands back when the control is clicked.

pub mod board;
#[cfg(test)]
pub mod failing;

pub use board::{BoardSurface, OverlayView, RowView};

use crate::action::Action;
use crate::error::SurfaceError;
use crate::model::{Category, ProjectId};
use std::fmt;

/// A place elements can be shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    /// Top-level area overlays are attached to
    Root,
    /// The list container for one category
    List(Category),
}

/// Handle to an attached overlay element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayHandle(pub u64);

impl fmt::Display for OverlayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A clickable control on the surface
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Control {
    /// The Finish/Activate button of a project
    ActionButton(ProjectId),
    /// The "More Info" button of a project
    InfoButton(ProjectId),
    /// The body of an overlay
    Overlay(OverlayHandle),
}

/// One registered click handler
///
/// Subscriptions are move-only so each can be revoked at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a subscription leaves its handler attached with no way to revoke it"]
pub struct Subscription {
    id: u64,
}

impl Subscription {
    pub(crate) fn new(id: u64) -> Self {
        Self { id }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}

/// Primitive operations the board core needs from a rendering layer
pub trait ViewSurface {
    /// Container holding the entries of `category`
    fn find_container(&self, category: Category) -> ContainerId;

    /// Projects currently shown in the container of `category`, in display order
    fn find_entries(&self, category: Category) -> Vec<ProjectId>;

    /// Remove every handler bound to `control`, returning the now bare control
    fn detach_all_handlers(&mut self, control: &Control) -> Result<Control, SurfaceError>;

    /// Move a project's element to the end of `destination`
    ///
    /// Returns the position the element held in its previous container.
    fn relocate(&mut self, id: &ProjectId, destination: ContainerId) -> Result<usize, SurfaceError>;

    /// Move a project's element to `position` within `destination`
    ///
    /// Positions past the end append.
    fn relocate_at(
        &mut self,
        id: &ProjectId,
        destination: ContainerId,
        position: usize,
    ) -> Result<(), SurfaceError>;

    /// Attach an overlay for `owner` under `parent`
    fn attach_overlay(
        &mut self,
        parent: ContainerId,
        owner: &ProjectId,
    ) -> Result<OverlayHandle, SurfaceError>;

    /// Remove an overlay and every handler bound to it
    fn detach_overlay(&mut self, handle: OverlayHandle) -> Result<(), SurfaceError>;

    /// Bind `handler` to clicks on `control`
    fn on_click(&mut self, control: &Control, handler: Action) -> Result<Subscription, SurfaceError>;

    /// Unbind one handler. Returns false if it was already gone.
    fn revoke(&mut self, subscription: Subscription) -> bool;

    /// Change the text shown on a control
    fn set_label(&mut self, control: &Control, label: &str) -> Result<(), SurfaceError>;
}
