//! Event dispatch between the host and mounted components.

use std::sync::Arc;

use indexmap::IndexMap;
use panelgrip_core::geometry::Size;
use panelgrip_core::math::Vec2;
use panelgrip_core::profiling::profile_function;
use panelgrip_core::{Clock, SystemClock};

use crate::document::{Document, DocumentResult};
use crate::element::ElementId;
use crate::event::UiEvent;
use crate::listener::{ListenerKind, ListenerTarget};
use crate::resize_handle::ResizeHandle;

/// Owns the document and the resize handles mounted in it, and routes host
/// events to them.
///
/// Element-level events (hover, press) go to the handle under the pointer.
/// Document- and window-level events go to whichever handles hold a listener
/// for them in the document's registry.
pub struct UiCore {
    document: Document,
    handles: IndexMap<ElementId, ResizeHandle>,
    hovered: Option<ElementId>,
    pointer: Vec2,
    clock: Arc<dyn Clock>,
}

impl UiCore {
    /// Create a core driven by the system clock.
    pub fn new(viewport: Size<f32>) -> DocumentResult<Self> {
        Self::with_clock(viewport, Arc::new(SystemClock::new()))
    }

    /// Create a core whose throttled handlers read time from `clock`.
    pub fn with_clock(viewport: Size<f32>, clock: Arc<dyn Clock>) -> DocumentResult<Self> {
        Ok(Self {
            document: Document::new(viewport)?,
            handles: IndexMap::new(),
            hovered: None,
            pointer: Vec2::ZERO,
            clock,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Mount a resize handle on `element`. Mounting twice is a no-op.
    pub fn mount_resize_handle(&mut self, element: ElementId) -> DocumentResult<()> {
        if self.handles.contains_key(&element) {
            tracing::debug!("Resize handle {:?} already mounted", element);
            return Ok(());
        }
        let handle = ResizeHandle::mount(&mut self.document, element)?;
        self.handles.insert(element, handle);
        Ok(())
    }

    /// Unmount the handle on `element`. Returns `false` if none was mounted.
    pub fn unmount_resize_handle(&mut self, element: ElementId) -> bool {
        match self.handles.shift_remove(&element) {
            Some(mut handle) => {
                handle.unmount(&mut self.document);
                if self.hovered == Some(element) {
                    self.hovered = None;
                }
                true
            }
            None => false,
        }
    }

    pub fn handle(&self, element: ElementId) -> Option<&ResizeHandle> {
        self.handles.get(&element)
    }

    pub fn handles(&self) -> impl Iterator<Item = &ResizeHandle> {
        self.handles.values()
    }

    /// Element currently under the pointer, among mounted handles.
    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    pub fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    /// Set an attribute and let a handle mounted on the element reconfigure.
    pub fn set_attribute(
        &mut self,
        element: ElementId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> DocumentResult<()> {
        self.document.set_attribute(element, name, value)?;
        self.notify_attributes_changed(element);
        Ok(())
    }

    pub fn remove_attribute(&mut self, element: ElementId, name: &str) -> DocumentResult<()> {
        if self.document.remove_attribute(element, name)?.is_some() {
            self.notify_attributes_changed(element);
        }
        Ok(())
    }

    fn notify_attributes_changed(&mut self, element: ElementId) {
        if let Some(handle) = self.handles.get_mut(&element) {
            handle.attributes_changed(&mut self.document);
        }
    }

    /// Remove an element subtree, unmounting any handles inside it.
    pub fn remove_element(&mut self, element: ElementId) -> DocumentResult<()> {
        self.document.remove(element)?;
        let orphaned: Vec<ElementId> = self
            .handles
            .keys()
            .copied()
            .filter(|id| !self.document.contains(*id))
            .collect();
        for id in orphaned {
            self.unmount_resize_handle(id);
        }
        Ok(())
    }

    /// Unmount every handle.
    pub fn shutdown(&mut self) {
        let mounted: Vec<ElementId> = self.handles.keys().copied().collect();
        for id in mounted {
            self.unmount_resize_handle(id);
        }
    }

    /// Process one host event to completion.
    pub fn dispatch(&mut self, event: UiEvent) {
        profile_function!();
        match event {
            UiEvent::PointerMoved { position } => {
                self.pointer = position;
                self.update_hover(Some(position));
                for owner in self.owners(ListenerTarget::Document, ListenerKind::PointerMove) {
                    if let Some(handle) = self.handles.get_mut(&owner) {
                        handle.on_pointer_move(&mut self.document, position);
                    }
                }
            }
            UiEvent::PointerDown { position, button } => {
                self.pointer = position;
                self.update_hover(Some(position));
                if let Some(handle) = self.hovered.and_then(|id| self.handles.get_mut(&id)) {
                    handle.on_pointer_down(&mut self.document, position, button);
                }
            }
            UiEvent::PointerUp { position, .. } => {
                self.pointer = position;
                for owner in self.owners(ListenerTarget::Document, ListenerKind::PointerUp) {
                    if let Some(handle) = self.handles.get_mut(&owner) {
                        handle.on_pointer_up(&mut self.document);
                    }
                }
                self.update_hover(Some(position));
            }
            UiEvent::PointerLeftWindow => {
                self.update_hover(None);
            }
            UiEvent::WindowResized { size } => {
                if let Err(err) = self.document.set_viewport(size) {
                    tracing::error!("Failed to resize viewport: {}", err);
                    return;
                }
                let now = self.clock.now();
                for owner in self.owners(ListenerTarget::Window, ListenerKind::Resize) {
                    if let Some(handle) = self.handles.get_mut(&owner) {
                        handle.on_window_resize(&mut self.document, now);
                    }
                }
            }
        }
    }

    fn owners(&self, target: ListenerTarget, kind: ListenerKind) -> Vec<ElementId> {
        self.document.listeners().owners(target, kind)
    }

    /// Topmost visible handle containing `position`.
    fn hit_test(&mut self, position: Vec2) -> Option<ElementId> {
        let candidates: Vec<ElementId> = self.handles.keys().copied().collect();
        candidates.into_iter().rev().find(|id| {
            !self.document.is_hidden(*id)
                && self
                    .document
                    .layout_rect(*id)
                    .is_ok_and(|rect| rect.width > 0.0 && rect.contains(position))
        })
    }

    fn update_hover(&mut self, position: Option<Vec2>) {
        let hit = position.and_then(|p| self.hit_test(p));
        if hit == self.hovered {
            return;
        }
        if let Some(handle) = self.hovered.and_then(|id| self.handles.get_mut(&id)) {
            handle.on_pointer_leave(&mut self.document);
        }
        self.hovered = hit;
        if let Some(handle) = hit.and_then(|id| self.handles.get_mut(&id)) {
            handle.on_pointer_enter(&mut self.document);
        }
    }
}

impl Drop for UiCore {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for UiCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiCore")
            .field("document", &self.document)
            .field("handles", &self.handles.len())
            .field("hovered", &self.hovered)
            .finish()
    }
}
