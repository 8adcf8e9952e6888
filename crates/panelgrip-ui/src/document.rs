//! Document: the element tree with Taffy layout, cursor, viewport, theme and
//! listener registry.
//!
//! Sibling order in the tree is the only association between a component
//! and the elements it acts on, so every query here re-reads the tree
//! instead of caching relationships.

use indexmap::IndexMap;
use panelgrip_core::geometry::Size;
use panelgrip_core::profiling::profile_function;
use taffy::{AvailableSpace, Dimension, Display, FlexDirection, TaffyTree};

use crate::color::Color;
use crate::element::{Attributes, Element, ElementId, LayoutRect};
use crate::listener::ListenerRegistry;
use crate::style::Style;
use crate::theme::Theme;

/// Errors from document operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Element not found in the document.
    ElementNotFound(ElementId),
    /// The root element cannot be removed or re-parented.
    RootElement,
    /// Appending would make an element its own ancestor.
    HierarchyCycle { parent: ElementId, child: ElementId },
    /// The layout engine rejected an operation.
    Layout(String),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::ElementNotFound(id) => write!(f, "Element {:?} not found", id),
            DocumentError::RootElement => write!(f, "Operation not allowed on the root element"),
            DocumentError::HierarchyCycle { parent, child } => write!(
                f,
                "Cannot append {:?} to {:?}: it is an ancestor of the parent",
                child, parent
            ),
            DocumentError::Layout(msg) => write!(f, "Layout error: {}", msg),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<taffy::TaffyError> for DocumentError {
    fn from(err: taffy::TaffyError) -> Self {
        DocumentError::Layout(err.to_string())
    }
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Document-wide cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    /// Horizontal resize indicator.
    ColResize,
}

pub struct Document {
    taffy: TaffyTree<()>,
    elements: IndexMap<ElementId, Element>,
    root: ElementId,
    next_id: usize,
    viewport: Size<f32>,
    cursor: CursorIcon,
    listeners: ListenerRegistry,
    theme: Theme,
    layout_dirty: bool,
}

impl Document {
    /// Create a document whose root is a flex row filling the viewport.
    pub fn new(viewport: Size<f32>) -> DocumentResult<Self> {
        let mut doc = Self {
            taffy: TaffyTree::new(),
            elements: IndexMap::new(),
            root: ElementId(0),
            next_id: 0,
            viewport,
            cursor: CursorIcon::Default,
            listeners: ListenerRegistry::new(),
            theme: Theme::new(),
            layout_dirty: true,
        };
        let root_style = Style::new()
            .display(Display::Flex)
            .flex_direction(FlexDirection::Row)
            .width(viewport.width)
            .height(viewport.height);
        doc.root = doc.create_element("body", Attributes::new(), root_style)?;
        Ok(doc)
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Create a detached element.
    pub fn create_element(
        &mut self,
        tag: impl Into<String>,
        attributes: Attributes,
        style: Style,
    ) -> DocumentResult<ElementId> {
        let id = ElementId(self.next_id);
        self.next_id += 1;

        let taffy_node = self.taffy.new_leaf(style.layout.clone())?;
        self.elements.insert(
            id,
            Element {
                tag: tag.into(),
                attributes,
                style,
                hidden: false,
                parent: None,
                children: Vec::new(),
                taffy_node,
                layout: LayoutRect::default(),
            },
        );
        Ok(id)
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> DocumentResult<()> {
        let index = self.element(parent)?.children.len();
        self.insert_child(parent, index, child)
    }

    /// Insert `child` at `index` among `parent`'s children (clamped to the end).
    pub fn insert_child(
        &mut self,
        parent: ElementId,
        index: usize,
        child: ElementId,
    ) -> DocumentResult<()> {
        if child == self.root {
            return Err(DocumentError::RootElement);
        }
        self.element(child)?;
        if self.is_ancestor_or_self(child, parent)? {
            return Err(DocumentError::HierarchyCycle { parent, child });
        }
        self.detach(child)?;

        let parent_node = self.element(parent)?.taffy_node;
        let child_node = self.element(child)?.taffy_node;
        let parent_el = self.element_mut(parent)?;
        let index = index.min(parent_el.children.len());
        parent_el.children.insert(index, child);
        self.taffy.insert_child_at_index(parent_node, index, child_node)?;
        self.element_mut(child)?.parent = Some(parent);
        self.layout_dirty = true;
        Ok(())
    }

    /// Remove an element and its whole subtree from the document.
    pub fn remove(&mut self, id: ElementId) -> DocumentResult<()> {
        if id == self.root {
            return Err(DocumentError::RootElement);
        }
        self.detach(id)?;

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(element) = self.elements.shift_remove(&current) {
                stack.extend(element.children.iter().copied());
                self.taffy.remove(element.taffy_node)?;
            }
        }
        self.layout_dirty = true;
        tracing::trace!("Removed element {:?}", id);
        Ok(())
    }

    fn detach(&mut self, id: ElementId) -> DocumentResult<()> {
        let Some(parent) = self.element(id)?.parent else {
            return Ok(());
        };
        let parent_node = self.element(parent)?.taffy_node;
        let child_node = self.element(id)?.taffy_node;
        self.element_mut(parent)?.children.retain(|c| *c != id);
        self.taffy.remove_child(parent_node, child_node)?;
        self.element_mut(id)?.parent = None;
        self.layout_dirty = true;
        Ok(())
    }

    fn is_ancestor_or_self(&self, ancestor: ElementId, mut id: ElementId) -> DocumentResult<bool> {
        loop {
            if id == ancestor {
                return Ok(true);
            }
            match self.element(id)?.parent {
                Some(parent) => id = parent,
                None => return Ok(false),
            }
        }
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    fn element(&self, id: ElementId) -> DocumentResult<&Element> {
        self.elements.get(&id).ok_or(DocumentError::ElementNotFound(id))
    }

    fn element_mut(&mut self, id: ElementId) -> DocumentResult<&mut Element> {
        self.elements.get_mut(&id).ok_or(DocumentError::ElementNotFound(id))
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id)?.parent
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    fn sibling_offset(&self, id: ElementId, offset: isize) -> Option<ElementId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|c| *c == id)?;
        let target = index.checked_add_signed(offset)?;
        siblings.get(target).copied()
    }

    /// The element immediately before `id` among its siblings.
    pub fn previous_sibling(&self, id: ElementId) -> Option<ElementId> {
        self.sibling_offset(id, -1)
    }

    /// The element immediately after `id` among its siblings.
    pub fn next_sibling(&self, id: ElementId) -> Option<ElementId> {
        self.sibling_offset(id, 1)
    }

    pub fn attributes(&self, id: ElementId) -> Option<&Attributes> {
        self.get(id).map(|e| &e.attributes)
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.attributes(id)?.get(name)
    }

    pub fn set_attribute(
        &mut self,
        id: ElementId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> DocumentResult<()> {
        self.element_mut(id)?.attributes.set(name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> DocumentResult<Option<String>> {
        Ok(self.element_mut(id)?.attributes.remove(name))
    }

    pub fn style(&self, id: ElementId) -> Option<&Style> {
        self.get(id).map(|e| &e.style)
    }

    /// Replace an element's inline style.
    pub fn set_style(&mut self, id: ElementId, style: Style) -> DocumentResult<()> {
        self.element_mut(id)?.style = style;
        self.sync_layout_style(id)
    }

    /// Edit an element's inline style in place.
    pub fn update_style(
        &mut self,
        id: ElementId,
        edit: impl FnOnce(&mut Style),
    ) -> DocumentResult<()> {
        edit(&mut self.element_mut(id)?.style);
        self.sync_layout_style(id)
    }

    /// Set the element's main-axis width by writing its flex basis.
    pub fn set_flex_width(&mut self, id: ElementId, width: f32) -> DocumentResult<()> {
        self.update_style(id, |style| {
            style.layout.flex_basis = Dimension::Length(width);
        })
    }

    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) -> DocumentResult<()> {
        let element = self.element_mut(id)?;
        if element.hidden == hidden {
            return Ok(());
        }
        element.hidden = hidden;
        self.sync_layout_style(id)
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.get(id).is_some_and(|e| e.hidden)
    }

    /// Set the background color. Paint only; layout is not invalidated.
    pub fn set_background(&mut self, id: ElementId, color: Option<Color>) -> DocumentResult<()> {
        self.element_mut(id)?.style.background_color = color;
        Ok(())
    }

    pub fn background(&self, id: ElementId) -> Option<Color> {
        self.get(id)?.style.background_color
    }

    fn sync_layout_style(&mut self, id: ElementId) -> DocumentResult<()> {
        let element = self.element(id)?;
        let node = element.taffy_node;
        let style = element.effective_layout_style();
        self.taffy.set_style(node, style)?;
        self.layout_dirty = true;
        Ok(())
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }

    pub fn viewport(&self) -> Size<f32> {
        self.viewport
    }

    /// Resize the viewport; the root element follows it.
    pub fn set_viewport(&mut self, viewport: Size<f32>) -> DocumentResult<()> {
        self.viewport = viewport;
        let root = self.root;
        self.update_style(root, |style| {
            style.layout.size.width = Dimension::Length(viewport.width);
            style.layout.size.height = Dimension::Length(viewport.height);
        })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut ListenerRegistry {
        &mut self.listeners
    }

    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    /// Run the layout pass if anything changed since the last one.
    pub fn compute_layout(&mut self) -> DocumentResult<()> {
        if !self.layout_dirty {
            return Ok(());
        }
        profile_function!();

        let root_node = self.element(self.root)?.taffy_node;
        self.taffy.compute_layout(
            root_node,
            taffy::Size {
                width: AvailableSpace::Definite(self.viewport.width),
                height: AvailableSpace::Definite(self.viewport.height),
            },
        )?;

        let mut stack = vec![(self.root, 0.0f32, 0.0f32)];
        while let Some((id, parent_x, parent_y)) = stack.pop() {
            let node = self.element(id)?.taffy_node;
            let layout = self.taffy.layout(node)?;
            let rect = LayoutRect {
                x: parent_x + layout.location.x,
                y: parent_y + layout.location.y,
                width: layout.size.width,
                height: layout.size.height,
            };
            let element = self.element_mut(id)?;
            element.layout = rect;
            stack.extend(element.children.iter().map(|c| (*c, rect.x, rect.y)));
        }

        self.layout_dirty = false;
        Ok(())
    }

    /// Absolute layout box of an element, laying out first if needed.
    pub fn layout_rect(&mut self, id: ElementId) -> DocumentResult<LayoutRect> {
        self.element(id)?;
        self.compute_layout()?;
        Ok(self.element(id)?.layout)
    }

    /// Rendered box width, as opposed to the width written in the style.
    pub fn rendered_width(&mut self, id: ElementId) -> DocumentResult<f32> {
        Ok(self.layout_rect(id)?.width)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("elements", &self.elements.len())
            .field("viewport", &self.viewport)
            .field("cursor", &self.cursor)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
