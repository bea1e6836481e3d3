//! In-memory retained element tree backing the terminal board
//!
//! `BoardSurface` keeps every project element, its container, the live
//! overlays and the click bindings. Components read it to render, and the
//! app turns key presses into [`BoardSurface::click`] calls.

use super::{ContainerId, Control, OverlayHandle, Subscription, ViewSurface};
use crate::action::Action;
use crate::error::SurfaceError;
use crate::model::{Category, ProjectId, ProjectSeed};
use log::debug;
use std::collections::HashMap;

const DEFAULT_INFO_LABEL: &str = "More Info";
const EMPTY_INFO_TEXT: &str = "No further information.";

/// A project element on the surface
#[derive(Debug, Clone)]
struct Element {
    title: String,
    info: String,
    action_label: String,
    info_label: String,
    container: ContainerId,
}

/// An overlay element attached to a container
#[derive(Debug, Clone)]
struct OverlayElement {
    handle: OverlayHandle,
    owner: ProjectId,
    parent: ContainerId,
    text: String,
}

#[derive(Debug, Clone)]
struct Binding {
    id: u64,
    control: Control,
    handler: Action,
}

/// Rendering view of one project row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: ProjectId,
    pub title: String,
    pub action_label: String,
    pub info_label: String,
}

/// Rendering view of one live overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub handle: OverlayHandle,
    pub owner: ProjectId,
    pub parent: ContainerId,
    pub title: String,
    pub text: String,
}

/// Retained element tree for the two project lists
#[derive(Debug, Default)]
pub struct BoardSurface {
    elements: HashMap<ProjectId, Element>,
    containers: HashMap<ContainerId, Vec<ProjectId>>,
    overlays: Vec<OverlayElement>,
    bindings: Vec<Binding>,
    next_id: u64,
}

impl BoardSurface {
    /// Build the surface from its initial content
    pub fn from_seeds(seeds: Vec<ProjectSeed>) -> Result<Self, SurfaceError> {
        let mut surface = Self::default();
        for seed in seeds {
            if surface.elements.contains_key(&seed.id) {
                return Err(SurfaceError::DuplicateElement(seed.id));
            }
            let container = ContainerId::List(seed.category);
            surface
                .containers
                .entry(container)
                .or_default()
                .push(seed.id.clone());
            surface.elements.insert(
                seed.id,
                Element {
                    title: seed.title,
                    info: seed.info,
                    action_label: seed.category.button_label().to_string(),
                    info_label: DEFAULT_INFO_LABEL.to_string(),
                    container,
                },
            );
        }
        Ok(surface)
    }

    /// Fire a click on `control`, returning its handlers in registration order
    ///
    /// Clicking a control that is no longer on the surface fires nothing.
    pub fn click(&self, control: &Control) -> Vec<Action> {
        if !self.contains(control) {
            return Vec::new();
        }
        self.bindings
            .iter()
            .filter(|b| &b.control == control)
            .map(|b| b.handler.clone())
            .collect()
    }

    /// Rows shown in the list for `category`
    pub fn rows(&self, category: Category) -> Vec<RowView> {
        self.ids_in(ContainerId::List(category))
            .iter()
            .filter_map(|id| {
                self.elements.get(id).map(|el| RowView {
                    id: id.clone(),
                    title: el.title.clone(),
                    action_label: el.action_label.clone(),
                    info_label: el.info_label.clone(),
                })
            })
            .collect()
    }

    /// Live overlays, oldest first
    pub fn overlays(&self) -> Vec<OverlayView> {
        self.overlays
            .iter()
            .map(|o| OverlayView {
                handle: o.handle,
                owner: o.owner.clone(),
                parent: o.parent,
                title: self
                    .elements
                    .get(&o.owner)
                    .map(|el| el.title.clone())
                    .unwrap_or_default(),
                text: o.text.clone(),
            })
            .collect()
    }

    fn ids_in(&self, container: ContainerId) -> &[ProjectId] {
        self.containers
            .get(&container)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn contains(&self, control: &Control) -> bool {
        match control {
            Control::ActionButton(id) | Control::InfoButton(id) => self.elements.contains_key(id),
            Control::Overlay(handle) => self.overlays.iter().any(|o| o.handle == *handle),
        }
    }

    fn ensure(&self, control: &Control) -> Result<(), SurfaceError> {
        if self.contains(control) {
            return Ok(());
        }
        Err(match control {
            Control::ActionButton(id) | Control::InfoButton(id) => {
                SurfaceError::UnknownElement(id.clone())
            }
            Control::Overlay(handle) => SurfaceError::UnknownOverlay(*handle),
        })
    }

    /// Shared body of the relocate operations. Returns the previous position.
    fn move_element(
        &mut self,
        id: &ProjectId,
        destination: ContainerId,
        position: Option<usize>,
    ) -> Result<usize, SurfaceError> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| SurfaceError::UnknownElement(id.clone()))?;
        let source = element.container;
        element.container = destination;

        let mut previous = 0;
        if let Some(ids) = self.containers.get_mut(&source) {
            if let Some(index) = ids.iter().position(|other| other == id) {
                ids.remove(index);
                previous = index;
            }
        }

        let ids = self.containers.entry(destination).or_default();
        let at = position.map_or(ids.len(), |p| p.min(ids.len()));
        ids.insert(at, id.clone());
        debug!(
            "event=relocate id={} from={:?} to={:?} position={}",
            id, source, destination, at
        );
        Ok(previous)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[cfg(test)]
impl BoardSurface {
    /// Number of handlers currently bound to `control`
    pub fn handler_count(&self, control: &Control) -> usize {
        self.bindings.iter().filter(|b| &b.control == control).count()
    }

    /// The most recently attached overlay
    pub fn top_overlay(&self) -> Option<OverlayHandle> {
        self.overlays.last().map(|o| o.handle)
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Container a project element currently sits in
    pub fn container_of(&self, id: &ProjectId) -> Option<ContainerId> {
        self.elements.get(id).map(|el| el.container)
    }

    /// Text on a project's action button
    pub fn action_label(&self, id: &ProjectId) -> Option<&str> {
        self.elements.get(id).map(|el| el.action_label.as_str())
    }
}

impl ViewSurface for BoardSurface {
    fn find_container(&self, category: Category) -> ContainerId {
        ContainerId::List(category)
    }

    fn find_entries(&self, category: Category) -> Vec<ProjectId> {
        self.ids_in(self.find_container(category)).to_vec()
    }

    fn detach_all_handlers(&mut self, control: &Control) -> Result<Control, SurfaceError> {
        self.ensure(control)?;
        let before = self.bindings.len();
        self.bindings.retain(|b| &b.control != control);
        debug!(
            "event=detach_all control={:?} removed={}",
            control,
            before - self.bindings.len()
        );
        Ok(control.clone())
    }

    fn relocate(&mut self, id: &ProjectId, destination: ContainerId) -> Result<usize, SurfaceError> {
        self.move_element(id, destination, None)
    }

    fn relocate_at(
        &mut self,
        id: &ProjectId,
        destination: ContainerId,
        position: usize,
    ) -> Result<(), SurfaceError> {
        self.move_element(id, destination, Some(position))?;
        Ok(())
    }

    fn attach_overlay(
        &mut self,
        parent: ContainerId,
        owner: &ProjectId,
    ) -> Result<OverlayHandle, SurfaceError> {
        let element = self
            .elements
            .get(owner)
            .ok_or_else(|| SurfaceError::UnknownElement(owner.clone()))?;
        let text = if element.info.trim().is_empty() {
            EMPTY_INFO_TEXT.to_string()
        } else {
            element.info.clone()
        };

        let handle = OverlayHandle(self.next_id());
        self.overlays.push(OverlayElement {
            handle,
            owner: owner.clone(),
            parent,
            text,
        });
        debug!(
            "event=overlay_attached overlay={} owner={} parent={:?}",
            handle, owner, parent
        );
        Ok(handle)
    }

    fn detach_overlay(&mut self, handle: OverlayHandle) -> Result<(), SurfaceError> {
        let index = self
            .overlays
            .iter()
            .position(|o| o.handle == handle)
            .ok_or(SurfaceError::UnknownOverlay(handle))?;
        self.overlays.remove(index);
        let control = Control::Overlay(handle);
        self.bindings.retain(|b| b.control != control);
        debug!("event=overlay_detached overlay={}", handle);
        Ok(())
    }

    fn on_click(&mut self, control: &Control, handler: Action) -> Result<Subscription, SurfaceError> {
        self.ensure(control)?;
        let id = self.next_id();
        debug!("event=bind control={:?} handler={} sub={}", control, handler, id);
        self.bindings.push(Binding {
            id,
            control: control.clone(),
            handler,
        });
        Ok(Subscription::new(id))
    }

    fn revoke(&mut self, subscription: Subscription) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != subscription.id());
        before != self.bindings.len()
    }

    fn set_label(&mut self, control: &Control, label: &str) -> Result<(), SurfaceError> {
        self.ensure(control)?;
        match control {
            Control::ActionButton(id) | Control::InfoButton(id) => {
                if let Some(element) = self.elements.get_mut(id) {
                    if matches!(control, Control::ActionButton(_)) {
                        element.action_label = label.to_string();
                    } else {
                        element.info_label = label.to_string();
                    }
                }
            }
            Control::Overlay(handle) => {
                if let Some(overlay) = self.overlays.iter_mut().find(|o| o.handle == *handle) {
                    overlay.text = label.to_string();
                }
            }
        }
        Ok(())
    }
}
