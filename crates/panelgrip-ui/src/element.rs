//! Elements of the document tree.

use crate::style::Style;
use indexmap::IndexMap;
use panelgrip_core::math::Vec2;

/// Element identifier in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Absolute layout box of an element, computed by Taffy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Declarative string attributes of an element, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: IndexMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Set an attribute, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

/// A node in the document tree.
#[derive(Debug)]
pub struct Element {
    pub tag: String,
    pub attributes: Attributes,
    pub style: Style,
    /// Set while the element is hidden (`display: none`), independent of
    /// the display mode in `style`, so that showing it restores the original.
    pub hidden: bool,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    pub(crate) taffy_node: taffy::NodeId,
    pub(crate) layout: LayoutRect,
}

impl Element {
    /// Layout box from the last layout pass.
    pub fn layout(&self) -> LayoutRect {
        self.layout
    }

    /// The Taffy style this element lays out with.
    pub(crate) fn effective_layout_style(&self) -> taffy::Style {
        let mut style = self.style.layout.clone();
        if self.hidden {
            style.display = taffy::Display::None;
        }
        style
    }
}
