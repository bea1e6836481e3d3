//! Transient informational overlay tied to one project

use crate::action::Action;
use crate::error::SurfaceError;
use crate::model::ProjectId;
use crate::surface::{ContainerId, Control, OverlayHandle, Subscription, ViewSurface};
use log::{error, info};

/// A live tooltip attached to the surface
///
/// The overlay owns its dismissal trigger: clicking it fires
/// `Action::DismissOverlay(owner)`, which ends up in [`OverlayItem::dismiss`].
#[derive(Debug)]
pub struct OverlayItem {
    owner: ProjectId,
    handle: OverlayHandle,
    trigger: Option<Subscription>,
    on_dismiss: Action,
    dismissed: bool,
}

impl OverlayItem {
    /// Attach an overlay for `owner` under `parent` and arm its dismissal trigger
    pub fn open(
        surface: &mut dyn ViewSurface,
        parent: ContainerId,
        owner: &ProjectId,
        on_dismiss: Action,
    ) -> Result<Self, SurfaceError> {
        let handle = surface.attach_overlay(parent, owner)?;
        let trigger = match surface.on_click(
            &Control::Overlay(handle),
            Action::DismissOverlay(owner.clone()),
        ) {
            Ok(trigger) => trigger,
            Err(err) => {
                if let Err(detach) = surface.detach_overlay(handle) {
                    error!(
                        "event=overlay_open status=orphaned owner={} overlay={} error={}",
                        owner, handle, detach
                    );
                }
                return Err(err);
            }
        };
        info!("event=overlay_open owner={} overlay={}", owner, handle);

        Ok(Self {
            owner: owner.clone(),
            handle,
            trigger: Some(trigger),
            on_dismiss,
            dismissed: false,
        })
    }

    /// Detach the overlay, returning the dismissal notification the first time only
    pub fn dismiss(&mut self, surface: &mut dyn ViewSurface) -> Result<Option<Action>, SurfaceError> {
        if self.dismissed {
            return Ok(None);
        }
        surface.detach_overlay(self.handle)?;
        if let Some(trigger) = self.trigger.take() {
            surface.revoke(trigger);
        }
        self.dismissed = true;
        info!("event=overlay_dismiss owner={} overlay={}", self.owner, self.handle);
        Ok(Some(self.on_dismiss.clone()))
    }

    #[cfg(test)]
    pub fn handle(&self) -> OverlayHandle {
        self.handle
    }

    #[cfg(test)]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_seeds;
    use crate::surface::failing::FailingSurface;
    use crate::surface::BoardSurface;

    fn open(surface: &mut dyn ViewSurface) -> OverlayItem {
        OverlayItem::open(
            surface,
            ContainerId::Root,
            &ProjectId::new("p1"),
            Action::OverlayDismissed(ProjectId::new("p1")),
        )
        .unwrap()
    }

    #[test]
    fn test_open_attaches_and_arms_trigger() {
        let mut surface = BoardSurface::from_seeds(sample_seeds()).unwrap();
        let overlay = open(&mut surface);

        assert_eq!(surface.overlay_count(), 1);
        assert_eq!(
            surface.click(&Control::Overlay(overlay.handle())),
            vec![Action::DismissOverlay(ProjectId::new("p1"))]
        );
    }

    #[test]
    fn test_dismiss_notifies_exactly_once() {
        let mut surface = BoardSurface::from_seeds(sample_seeds()).unwrap();
        let mut overlay = open(&mut surface);

        let first = overlay.dismiss(&mut surface).unwrap();
        assert_eq!(first, Some(Action::OverlayDismissed(ProjectId::new("p1"))));
        assert!(overlay.is_dismissed());
        assert_eq!(surface.overlay_count(), 0);

        let second = overlay.dismiss(&mut surface).unwrap();
        assert_eq!(second, None);
        assert!(surface.click(&Control::Overlay(overlay.handle())).is_empty());
    }

    #[test]
    fn test_open_for_unknown_owner_fails() {
        let mut surface = BoardSurface::from_seeds(sample_seeds()).unwrap();
        let result = OverlayItem::open(
            &mut surface,
            ContainerId::Root,
            &ProjectId::new("ghost"),
            Action::Tick,
        );
        assert!(result.is_err());
        assert_eq!(surface.overlay_count(), 0);
    }

    #[test]
    fn test_failed_detach_keeps_overlay_dismissable() {
        let mut surface = FailingSurface::new(BoardSurface::from_seeds(sample_seeds()).unwrap());
        let mut overlay = open(&mut surface);
        let control = Control::Overlay(overlay.handle());
        surface.fail_overlay_detach = 1;

        assert!(overlay.dismiss(&mut surface).is_err());
        assert!(!overlay.is_dismissed());
        assert_eq!(surface.inner.overlay_count(), 1);
        assert_eq!(
            surface.inner.click(&control),
            vec![Action::DismissOverlay(ProjectId::new("p1"))]
        );

        let notice = overlay.dismiss(&mut surface).unwrap();
        assert_eq!(notice, Some(Action::OverlayDismissed(ProjectId::new("p1"))));
        assert_eq!(surface.inner.overlay_count(), 0);
        assert!(surface.inner.click(&control).is_empty());
    }
}
