//! Ordered list of project entries for one category, and the hand-off protocol

use super::entry::ListEntry;
use crate::action::Action;
use crate::error::{BoardError, SurfaceError};
use crate::model::{Category, ProjectId};
use crate::surface::{ContainerId, ViewSurface};
use log::{error, info, warn};
use std::fmt;

/// An entry the peer list refused, handed back with the reason
pub struct Rejected {
    pub entry: ListEntry,
    pub reason: BoardError,
}

impl fmt::Debug for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("id", self.entry.id())
            .field("reason", &self.reason)
            .finish()
    }
}

/// Hand-off function taking ownership of an entry leaving a list
pub type Acceptor = Box<dyn FnMut(ListEntry, &mut dyn ViewSurface) -> Result<(), Rejected>>;

/// Entries of one category in display order
pub struct CategoryList {
    category: Category,
    container: ContainerId,
    entries: Vec<ListEntry>,
    peer: Option<Acceptor>,
}

impl fmt::Debug for CategoryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryList")
            .field("category", &self.category)
            .field("entries", &self.ids())
            .field("wired", &self.peer.is_some())
            .finish()
    }
}

impl CategoryList {
    /// Wrap every project the surface currently shows for `category`
    pub fn new(surface: &mut dyn ViewSurface, category: Category) -> Result<Self, SurfaceError> {
        let container = surface.find_container(category);
        let entries = surface
            .find_entries(category)
            .into_iter()
            .map(|id| {
                let on_advance = advance_action(category, &id);
                ListEntry::new(surface, id, category, on_advance)
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            "event=list_init category={} entries={}",
            category,
            entries.len()
        );

        Ok(Self {
            category,
            container,
            entries,
            peer: None,
        })
    }

    /// Record where entries leaving this list are handed to
    pub fn set_peer_acceptor(&mut self, acceptor: Acceptor) {
        self.peer = Some(acceptor);
    }

    /// Hand the entry `id` to the peer list
    ///
    /// The entry only leaves this list once the peer has accepted it. A
    /// rejected entry is put back at its original position.
    pub fn move_out(&mut self, id: &ProjectId, surface: &mut dyn ViewSurface) -> Result<(), BoardError> {
        let Some(acceptor) = self.peer.as_mut() else {
            error!("event=hand_off status=unwired category={} id={}", self.category, id);
            return Err(BoardError::Unwired {
                category: self.category,
            });
        };

        let Some(index) = self.entries.iter().position(|e| e.id() == id) else {
            warn!("event=hand_off status=not_found category={} id={}", self.category, id);
            return Err(BoardError::NotFound {
                category: self.category,
                id: id.clone(),
            });
        };

        let entry = self.entries.remove(index);
        match acceptor(entry, surface) {
            Ok(()) => {
                info!(
                    "event=hand_off status=ok id={} from={} to={}",
                    id,
                    self.category,
                    self.category.other()
                );
                Ok(())
            }
            Err(Rejected { entry, reason }) => {
                error!(
                    "event=hand_off status=rejected id={} from={} reason={}",
                    id, self.category, reason
                );
                self.entries.insert(index, entry);
                Err(reason)
            }
        }
    }

    /// Take ownership of an entry handed off by the peer list
    ///
    /// On failure the element is moved back to the position it came from and
    /// the entry is returned to the caller untouched.
    pub fn accept_incoming(
        &mut self,
        mut entry: ListEntry,
        surface: &mut dyn ViewSurface,
    ) -> Result<(), Rejected> {
        let id = entry.id().clone();
        let origin = surface.find_container(entry.category());

        let position = match surface.relocate(&id, self.container) {
            Ok(position) => position,
            Err(err) => {
                return Err(Rejected {
                    entry,
                    reason: err.into(),
                })
            }
        };

        if let Err(err) = entry.rebind(surface, self.category, advance_action(self.category, &id)) {
            if let Err(restore) = surface.relocate_at(&id, origin, position) {
                error!(
                    "event=hand_off_rollback status=failed id={} to={} error={}",
                    id, self.category, restore
                );
            }
            return Err(Rejected {
                entry,
                reason: err.into(),
            });
        }

        self.entries.push(entry);
        Ok(())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entry identifiers in display order
    pub fn ids(&self) -> Vec<ProjectId> {
        self.entries.iter().map(|e| e.id().clone()).collect()
    }

    #[cfg(test)]
    pub fn entry(&self, id: &ProjectId) -> Option<&ListEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn entry_mut(&mut self, id: &ProjectId) -> Option<&mut ListEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }
}

/// Action fired by an entry's button while it sits in the `category` list
fn advance_action(category: Category, id: &ProjectId) -> Action {
    Action::AdvanceProject {
        from: category,
        id: id.clone(),
    }
}
