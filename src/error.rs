//! Error types for the board core
//!
//! Wiring errors signal a construction bug and are reported loudly; a
//! missing entry signals a stale handler and leaves state untouched.

use crate::model::{Category, ProjectId};
use crate::surface::OverlayHandle;
use thiserror::Error;

/// Failures raised by a view surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("no element for project `{0}` on the surface")]
    UnknownElement(ProjectId),
    #[error("overlay {0} is not attached")]
    UnknownOverlay(OverlayHandle),
    #[error("project `{0}` is already present on the surface")]
    DuplicateElement(ProjectId),
}

/// Failures raised by the list hand-off protocol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{category} list has no peer acceptor configured")]
    Unwired { category: Category },
    #[error("peer of the {category} list has been dropped")]
    PeerGone { category: Category },
    #[error("{category} list is already handling a hand-off")]
    PeerBusy { category: Category },
    #[error("project `{id}` is not in the {category} list")]
    NotFound { category: Category, id: ProjectId },
    #[error("project `{id}` is not on the board")]
    UnknownProject { id: ProjectId },
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl BoardError {
    /// Whether this error points at broken list wiring rather than a stale handler
    pub fn is_wiring(&self) -> bool {
        matches!(
            self,
            BoardError::Unwired { .. } | BoardError::PeerGone { .. } | BoardError::PeerBusy { .. }
        )
    }
}
