//! Surface wrapper that fails selected operations on demand
//!
//! Each counter makes that many upcoming calls fail before the wrapper goes
//! back to delegating to the inner [`BoardSurface`].

use super::{BoardSurface, ContainerId, Control, OverlayHandle, Subscription, ViewSurface};
use crate::action::Action;
use crate::error::SurfaceError;
use crate::model::{Category, ProjectId};

pub struct FailingSurface {
    pub inner: BoardSurface,
    pub fail_action_binds: usize,
    pub fail_relocations: usize,
    pub fail_overlay_detach: usize,
}

impl FailingSurface {
    pub fn new(inner: BoardSurface) -> Self {
        Self {
            inner,
            fail_action_binds: 0,
            fail_relocations: 0,
            fail_overlay_detach: 0,
        }
    }
}

fn trip(counter: &mut usize) -> bool {
    if *counter == 0 {
        return false;
    }
    *counter -= 1;
    true
}

impl ViewSurface for FailingSurface {
    fn find_container(&self, category: Category) -> ContainerId {
        self.inner.find_container(category)
    }

    fn find_entries(&self, category: Category) -> Vec<ProjectId> {
        self.inner.find_entries(category)
    }

    fn detach_all_handlers(&mut self, control: &Control) -> Result<Control, SurfaceError> {
        self.inner.detach_all_handlers(control)
    }

    fn relocate(&mut self, id: &ProjectId, destination: ContainerId) -> Result<usize, SurfaceError> {
        if trip(&mut self.fail_relocations) {
            return Err(SurfaceError::UnknownElement(id.clone()));
        }
        self.inner.relocate(id, destination)
    }

    fn relocate_at(
        &mut self,
        id: &ProjectId,
        destination: ContainerId,
        position: usize,
    ) -> Result<(), SurfaceError> {
        self.inner.relocate_at(id, destination, position)
    }

    fn attach_overlay(
        &mut self,
        parent: ContainerId,
        owner: &ProjectId,
    ) -> Result<OverlayHandle, SurfaceError> {
        self.inner.attach_overlay(parent, owner)
    }

    fn detach_overlay(&mut self, handle: OverlayHandle) -> Result<(), SurfaceError> {
        if trip(&mut self.fail_overlay_detach) {
            return Err(SurfaceError::UnknownOverlay(handle));
        }
        self.inner.detach_overlay(handle)
    }

    fn on_click(&mut self, control: &Control, handler: Action) -> Result<Subscription, SurfaceError> {
        if let Control::ActionButton(id) = control {
            if trip(&mut self.fail_action_binds) {
                return Err(SurfaceError::UnknownElement(id.clone()));
            }
        }
        self.inner.on_click(control, handler)
    }

    fn revoke(&mut self, subscription: Subscription) -> bool {
        self.inner.revoke(subscription)
    }

    fn set_label(&mut self, control: &Control, label: &str) -> Result<(), SurfaceError> {
        self.inner.set_label(control, label)
    }
}
