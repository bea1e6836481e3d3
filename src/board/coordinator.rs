//! Wiring between the Active and Finished lists

use super::entry::ListEntry;
use super::list::{Acceptor, CategoryList, Rejected};
use crate::action::Action;
use crate::error::{BoardError, SurfaceError};
use crate::model::{Category, ProjectId};
use crate::surface::{ContainerId, ViewSurface};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Owns both category lists and routes hand-offs between them
///
/// Each list holds only a weak reference to its peer, so the two lists never
/// keep each other alive.
#[derive(Debug)]
pub struct Coordinator {
    active: Rc<RefCell<CategoryList>>,
    finished: Rc<RefCell<CategoryList>>,
    overlay_parent: ContainerId,
}

impl Coordinator {
    /// Build both lists from the surface's current content and wire them together
    pub fn init(surface: &mut dyn ViewSurface) -> Result<Self, SurfaceError> {
        let active = Rc::new(RefCell::new(CategoryList::new(surface, Category::Active)?));
        let finished = Rc::new(RefCell::new(CategoryList::new(surface, Category::Finished)?));

        active.borrow_mut().set_peer_acceptor(acceptor_for(&finished));
        finished.borrow_mut().set_peer_acceptor(acceptor_for(&active));
        info!(
            "event=board_init active={} finished={}",
            active.borrow().len(),
            finished.borrow().len()
        );

        Ok(Self {
            active,
            finished,
            overlay_parent: ContainerId::Root,
        })
    }

    fn list(&self, category: Category) -> &Rc<RefCell<CategoryList>> {
        match category {
            Category::Active => &self.active,
            Category::Finished => &self.finished,
        }
    }

    /// Move `id` out of the `from` list into its peer
    pub fn move_out(
        &self,
        from: Category,
        id: &ProjectId,
        surface: &mut dyn ViewSurface,
    ) -> Result<(), BoardError> {
        let mut list = self
            .list(from)
            .try_borrow_mut()
            .map_err(|_| BoardError::PeerBusy { category: from })?;
        list.move_out(id, surface)
    }

    /// Open the tooltip of `id`. Returns false when one is already open.
    pub fn request_overlay(
        &self,
        id: &ProjectId,
        surface: &mut dyn ViewSurface,
    ) -> Result<bool, BoardError> {
        let parent = self.overlay_parent;
        Ok(self.with_entry(id, |entry| entry.request_overlay(surface, parent))??)
    }

    /// Dismiss the tooltip of `id`, returning the dismissal notification
    pub fn dismiss_overlay(
        &self,
        id: &ProjectId,
        surface: &mut dyn ViewSurface,
    ) -> Result<Option<Action>, BoardError> {
        Ok(self.with_entry(id, |entry| entry.dismiss_overlay(surface))??)
    }

    /// Record that the tooltip of `id` is gone
    pub fn overlay_closed(&self, id: &ProjectId) -> Result<(), BoardError> {
        self.with_entry(id, ListEntry::overlay_closed)
    }

    fn with_entry<T>(
        &self,
        id: &ProjectId,
        f: impl FnOnce(&mut ListEntry) -> T,
    ) -> Result<T, BoardError> {
        for category in Category::all() {
            let mut list = self
                .list(category)
                .try_borrow_mut()
                .map_err(|_| BoardError::PeerBusy { category })?;
            if let Some(entry) = list.entry_mut(id) {
                return Ok(f(entry));
            }
        }
        Err(BoardError::UnknownProject { id: id.clone() })
    }
}

#[cfg(test)]
impl Coordinator {
    /// Project identifiers of one list in display order
    pub fn ids(&self, category: Category) -> Vec<ProjectId> {
        self.list(category).borrow().ids()
    }

    /// Which list currently owns `id`
    pub fn category_of(&self, id: &ProjectId) -> Option<Category> {
        Category::all()
            .into_iter()
            .find(|c| self.list(*c).borrow().entry(id).is_some())
    }

    pub fn has_open_overlay(&self, id: &ProjectId) -> bool {
        self.with_entry(id, |entry| entry.has_open_overlay())
            .unwrap_or(false)
    }

    pub fn total_entries(&self) -> usize {
        self.active.borrow().len() + self.finished.borrow().len()
    }
}

/// Hand-off function that appends entries to `target`
fn acceptor_for(target: &Rc<RefCell<CategoryList>>) -> Acceptor {
    let category = target.borrow().category();
    let target = Rc::downgrade(target);

    Box::new(
        move |entry: ListEntry, surface: &mut dyn ViewSurface| -> Result<(), Rejected> {
            let Some(list) = target.upgrade() else {
                return Err(Rejected {
                    entry,
                    reason: BoardError::PeerGone { category },
                });
            };
            let mut list = match list.try_borrow_mut() {
                Ok(list) => list,
                Err(_) => {
                    return Err(Rejected {
                        entry,
                        reason: BoardError::PeerBusy { category },
                    })
                }
            };
            list.accept_incoming(entry, surface)
        },
    )
}
