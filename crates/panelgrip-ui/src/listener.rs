//! Document- and window-level listener registry.
//!
//! A registration returns a [`ListenerId`]. Owners keep that id and hand the
//! same value back to [`ListenerRegistry::remove`]; removal of an unknown or
//! already-removed id is a no-op.

use indexmap::IndexMap;

use crate::element::ElementId;

/// Stable handle for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The whole document: sees pointer events regardless of which element
    /// is under the pointer.
    Document,
    /// The host window.
    Window,
}

/// Event kinds a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    Resize,
}

/// A registered listener. The owner is the element whose component receives
/// the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub target: ListenerTarget,
    pub kind: ListenerKind,
    pub owner: ElementId,
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: IndexMap<ListenerId, Listener>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return its id.
    pub fn add(&mut self, target: ListenerTarget, kind: ListenerKind, owner: ElementId) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Listener { target, kind, owner });
        tracing::trace!("Added {:?} {:?} listener {:?} for {:?}", target, kind, id, owner);
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.shift_remove(&id).is_some();
        if removed {
            tracing::trace!("Removed listener {:?}", id);
        }
        removed
    }

    pub fn get(&self, id: ListenerId) -> Option<&Listener> {
        self.listeners.get(&id)
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    /// Owners subscribed to `kind` on `target`, in registration order.
    ///
    /// Returns a snapshot so callbacks may add or remove listeners while the
    /// caller iterates.
    pub fn owners(&self, target: ListenerTarget, kind: ListenerKind) -> Vec<ElementId> {
        self.listeners
            .values()
            .filter(|l| l.target == target && l.kind == kind)
            .map(|l| l.owner)
            .collect()
    }

    /// Number of listeners attached to `target`.
    pub fn count(&self, target: ListenerTarget) -> usize {
        self.listeners.values().filter(|l| l.target == target).count()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
