//! One project's membership in a category list

use super::overlay::OverlayItem;
use crate::action::Action;
use crate::error::SurfaceError;
use crate::model::{Category, ProjectId};
use crate::surface::{ContainerId, Control, Subscription, ViewSurface};
use log::debug;

/// A project entry owned by exactly one [`CategoryList`](super::CategoryList)
///
/// The entry keeps the single subscription for its action button so a move
/// can replace the handler instead of stacking a second one on top.
#[derive(Debug)]
pub struct ListEntry {
    id: ProjectId,
    category: Category,
    has_open_overlay: bool,
    overlay: Option<OverlayItem>,
    advance: Option<Subscription>,
    _info: Subscription,
}

impl ListEntry {
    /// Wrap a project element already present on the surface
    pub fn new(
        surface: &mut dyn ViewSurface,
        id: ProjectId,
        category: Category,
        on_advance: Action,
    ) -> Result<Self, SurfaceError> {
        let action_button = surface.detach_all_handlers(&Control::ActionButton(id.clone()))?;
        let info_button = surface.detach_all_handlers(&Control::InfoButton(id.clone()))?;

        surface.set_label(&action_button, category.button_label())?;
        let advance = surface.on_click(&action_button, on_advance)?;
        let info = surface.on_click(&info_button, Action::RequestOverlay(id.clone()))?;

        Ok(Self {
            id,
            category,
            has_open_overlay: false,
            overlay: None,
            advance: Some(advance),
            _info: info,
        })
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    #[cfg(test)]
    pub fn has_open_overlay(&self) -> bool {
        self.has_open_overlay
    }

    /// Show this entry's tooltip unless one is already open
    ///
    /// Returns whether a new overlay was created.
    pub fn request_overlay(
        &mut self,
        surface: &mut dyn ViewSurface,
        parent: ContainerId,
    ) -> Result<bool, SurfaceError> {
        if self.has_open_overlay {
            return Ok(false);
        }
        let overlay = OverlayItem::open(
            surface,
            parent,
            &self.id,
            Action::OverlayDismissed(self.id.clone()),
        )?;
        self.overlay = Some(overlay);
        self.has_open_overlay = true;
        Ok(true)
    }

    /// Dismiss the live overlay, if any, returning its dismissal notification
    pub fn dismiss_overlay(
        &mut self,
        surface: &mut dyn ViewSurface,
    ) -> Result<Option<Action>, SurfaceError> {
        match self.overlay.as_mut() {
            Some(overlay) => overlay.dismiss(surface),
            None => Ok(None),
        }
    }

    /// Dismissal handler: the overlay is gone and a new one may be requested
    pub fn overlay_closed(&mut self) {
        self.overlay = None;
        self.has_open_overlay = false;
    }

    /// Point the action button at a new list
    ///
    /// The replacement handler is bound before the old one is revoked. On
    /// failure the entry keeps its previous handler and label.
    pub fn rebind(
        &mut self,
        surface: &mut dyn ViewSurface,
        category: Category,
        on_advance: Action,
    ) -> Result<(), SurfaceError> {
        let control = Control::ActionButton(self.id.clone());
        let replacement = surface.on_click(&control, on_advance)?;
        if let Err(err) = surface.set_label(&control, category.button_label()) {
            surface.revoke(replacement);
            return Err(err);
        }
        if let Some(previous) = self.advance.replace(replacement) {
            surface.revoke(previous);
        }
        debug!(
            "event=rebind id={} from={} to={}",
            self.id, self.category, category
        );
        self.category = category;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_seeds;
    use crate::surface::failing::FailingSurface;
    use crate::surface::BoardSurface;

    fn pid(id: &str) -> ProjectId {
        ProjectId::new(id)
    }

    fn advance(from: Category, id: &str) -> Action {
        Action::AdvanceProject {
            from,
            id: pid(id),
        }
    }

    fn setup() -> (BoardSurface, ListEntry) {
        let mut surface = BoardSurface::from_seeds(sample_seeds()).unwrap();
        let entry = ListEntry::new(
            &mut surface,
            pid("p1"),
            Category::Active,
            advance(Category::Active, "p1"),
        )
        .unwrap();
        (surface, entry)
    }

    #[test]
    fn test_new_binds_both_buttons() {
        let (surface, entry) = setup();
        assert_eq!(entry.category(), Category::Active);
        assert_eq!(surface.action_label(&pid("p1")), Some("Finish"));
        assert_eq!(
            surface.click(&Control::ActionButton(pid("p1"))),
            vec![advance(Category::Active, "p1")]
        );
        assert_eq!(
            surface.click(&Control::InfoButton(pid("p1"))),
            vec![Action::RequestOverlay(pid("p1"))]
        );
    }

    #[test]
    fn test_new_strips_stale_handlers() {
        let mut surface = BoardSurface::from_seeds(sample_seeds()).unwrap();
        let _stale = surface
            .on_click(&Control::ActionButton(pid("p1")), Action::Tick)
            .unwrap();

        let _entry = ListEntry::new(
            &mut surface,
            pid("p1"),
            Category::Active,
            advance(Category::Active, "p1"),
        )
        .unwrap();

        assert_eq!(surface.handler_count(&Control::ActionButton(pid("p1"))), 1);
    }

    #[test]
    fn test_second_overlay_request_is_a_no_op() {
        let (mut surface, mut entry) = setup();

        assert!(entry.request_overlay(&mut surface, ContainerId::Root).unwrap());
        assert!(entry.has_open_overlay());
        assert!(!entry.request_overlay(&mut surface, ContainerId::Root).unwrap());
        assert_eq!(surface.overlay_count(), 1);
    }

    #[test]
    fn test_overlay_cycle_returns_to_idle() {
        let (mut surface, mut entry) = setup();
        entry.request_overlay(&mut surface, ContainerId::Root).unwrap();

        let notice = entry.dismiss_overlay(&mut surface).unwrap();
        assert_eq!(notice, Some(Action::OverlayDismissed(pid("p1"))));
        assert_eq!(entry.dismiss_overlay(&mut surface).unwrap(), None);

        entry.overlay_closed();
        assert!(!entry.has_open_overlay());
        assert!(entry.request_overlay(&mut surface, ContainerId::Root).unwrap());
        assert_eq!(surface.overlay_count(), 1);
    }

    #[test]
    fn test_rebind_keeps_exactly_one_handler() {
        let (mut surface, mut entry) = setup();
        let control = Control::ActionButton(pid("p1"));

        for round in 0..4 {
            let category = if round % 2 == 0 {
                Category::Finished
            } else {
                Category::Active
            };
            entry
                .rebind(&mut surface, category, advance(category, "p1"))
                .unwrap();
            assert_eq!(surface.handler_count(&control), 1);
            assert_eq!(surface.click(&control), vec![advance(category, "p1")]);
            assert_eq!(surface.action_label(&pid("p1")), Some(category.button_label()));
            assert_eq!(entry.category(), category);
        }
    }

    #[test]
    fn test_rebind_does_not_touch_overlay_state() {
        let (mut surface, mut entry) = setup();
        entry.request_overlay(&mut surface, ContainerId::Root).unwrap();
        entry
            .rebind(
                &mut surface,
                Category::Finished,
                advance(Category::Finished, "p1"),
            )
            .unwrap();
        assert!(entry.has_open_overlay());
        assert_eq!(surface.overlay_count(), 1);
    }

    #[test]
    fn test_failed_rebind_leaves_entry_untouched() {
        let (surface, mut entry) = setup();
        let mut surface = FailingSurface::new(surface);
        let control = Control::ActionButton(pid("p1"));
        surface.fail_action_binds = 1;

        let err = entry
            .rebind(
                &mut surface,
                Category::Finished,
                advance(Category::Finished, "p1"),
            )
            .unwrap_err();

        assert_eq!(err, SurfaceError::UnknownElement(pid("p1")));
        assert_eq!(entry.category(), Category::Active);
        assert_eq!(surface.inner.handler_count(&control), 1);
        assert_eq!(surface.inner.click(&control), vec![advance(Category::Active, "p1")]);
        assert_eq!(surface.inner.action_label(&pid("p1")), Some("Finish"));
    }
}
