//! Panelgrip UI - element tree, event dispatch and resize handles
//!
//! This crate provides:
//! - A [`Document`] of elements with attributes and inline style, laid out
//!   as flexbox by Taffy
//! - Document- and window-level listener registration with stable ids
//! - [`ResizeHandle`], a draggable divider that resizes the panel beside it
//! - [`UiCore`], which routes host input events to mounted handles
//!
//! ## Quick Start
//!
//! ```
//! use panelgrip_core::geometry::Size;
//! use panelgrip_core::math::Vec2;
//! use panelgrip_ui::{Attributes, PointerButton, Style, UiCore, UiEvent};
//!
//! let mut ui = UiCore::new(Size::new(1200.0, 800.0)).unwrap();
//! let doc = ui.document_mut();
//! let root = doc.root();
//! let sidebar = doc.create_element("aside", Attributes::new(), Style::new()).unwrap();
//! let divider = doc
//!     .create_element("div", Attributes::new().with("resize", "left"), Style::new())
//!     .unwrap();
//! let content = doc.create_element("main", Attributes::new(), Style::new().flex_grow(1.0)).unwrap();
//! for id in [sidebar, divider, content] {
//!     doc.append_child(root, id).unwrap();
//! }
//! ui.mount_resize_handle(divider).unwrap();
//!
//! // Sidebar starts at min-width (150); the divider sits right after it.
//! ui.dispatch(UiEvent::PointerDown { position: Vec2::new(151.0, 10.0), button: PointerButton::Primary });
//! ui.dispatch(UiEvent::PointerMoved { position: Vec2::new(251.0, 10.0) });
//! ui.dispatch(UiEvent::PointerUp { position: Vec2::new(251.0, 10.0), button: PointerButton::Primary });
//!
//! assert_eq!(ui.document_mut().rendered_width(sidebar).unwrap(), 250.0);
//! ```

pub mod color;
pub mod document;
pub mod element;
pub mod event;
pub mod listener;
pub mod resize_handle;
pub mod style;
pub mod theme;
pub mod throttle;
pub mod ui_core;

pub use color::Color;
pub use document::{CursorIcon, Document, DocumentError, DocumentResult};
pub use element::{Attributes, Element, ElementId, LayoutRect};
pub use event::{PointerButton, UiEvent};
pub use listener::{Listener, ListenerId, ListenerKind, ListenerRegistry, ListenerTarget};
pub use resize_handle::{
    ConfigError, Direction, HandleConfig, HOVER_COLOR_VAR, HANDLE_WIDTH, ResizeHandle,
    default_hover_color,
};
pub use style::Style;
pub use theme::Theme;
pub use throttle::{DEFAULT_THROTTLE_INTERVAL, Throttle};
pub use ui_core::UiCore;
