//! Panelgrip - draggable resize handles for panel layouts
//!
//! A resize handle is a thin divider placed beside a panel. Dragging it
//! changes the panel's width within configured bounds, can collapse the panel
//! entirely, and keeps it within a fraction of the viewport as the window
//! shrinks.
//!
//! # Quick Start
//!
//! ```
//! use panelgrip::prelude::*;
//!
//! let mut ui = UiCore::new(Size::new(1000.0, 600.0)).unwrap();
//! let doc = ui.document_mut();
//! let root = doc.root();
//! let nav = doc.create_element("nav", Attributes::new(), Style::new()).unwrap();
//! let divider = doc
//!     .create_element(
//!         "div",
//!         Attributes::new().with("resize", "left").with("collapsible", ""),
//!         Style::new(),
//!     )
//!     .unwrap();
//! doc.append_child(root, nav).unwrap();
//! doc.append_child(root, divider).unwrap();
//! ui.mount_resize_handle(divider).unwrap();
//!
//! // Drag the divider all the way left: the panel collapses.
//! ui.dispatch(UiEvent::PointerDown { position: Vec2::new(152.0, 20.0), button: PointerButton::Primary });
//! ui.dispatch(UiEvent::PointerMoved { position: Vec2::new(10.0, 20.0) });
//! ui.dispatch(UiEvent::PointerUp { position: Vec2::new(10.0, 20.0), button: PointerButton::Primary });
//! assert!(ui.document().is_hidden(nav));
//! ```
//!
//! # Crates
//!
//! - [`core`]: logging, profiling, clocks and geometry
//! - [`ui`]: the document model, event dispatch and [`ResizeHandle`](ui::ResizeHandle)

pub use panelgrip_core as core;
pub use panelgrip_core::math;

#[cfg(feature = "ui")]
pub use panelgrip_ui as ui;

#[cfg(feature = "ui")]
pub use panelgrip_ui::{Document, ResizeHandle, UiCore, UiEvent};

/// Prelude module for convenient imports
pub mod prelude {
    pub use panelgrip_core::geometry::Size;
    pub use panelgrip_core::math::Vec2;
    pub use panelgrip_core::{Clock, SystemClock};

    #[cfg(feature = "ui")]
    pub use panelgrip_ui::{
        Attributes, Color, CursorIcon, Direction, Document, DocumentError, ElementId,
        HandleConfig, PointerButton, ResizeHandle, Style, UiCore, UiEvent,
    };
}
