//! Document fixtures.

use std::sync::Arc;

use panelgrip_core::Clock;
use panelgrip_core::geometry::Size;
use panelgrip_core::math::Vec2;
use panelgrip_ui::{Attributes, ElementId, PointerButton, Style, UiCore, UiEvent};

use crate::clock::ManualClock;

/// A root row holding `left | handle | right`, with the handle mounted.
///
/// Both panels have a fixed flex basis and do not shrink, so their rendered
/// widths equal whatever the handle last wrote.
pub struct SplitRow {
    pub ui: UiCore,
    pub left: ElementId,
    pub handle: ElementId,
    pub right: ElementId,
}

impl SplitRow {
    pub fn builder() -> SplitRowBuilder {
        SplitRowBuilder::default()
    }

    pub fn width(&mut self, id: ElementId) -> f32 {
        self.ui.document_mut().rendered_width(id).unwrap_or(0.0)
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.ui.document().is_hidden(id)
    }

    /// Center of the handle's layout box.
    pub fn handle_center(&mut self) -> Vec2 {
        let handle = self.handle;
        match self.ui.document_mut().layout_rect(handle) {
            Ok(rect) => Vec2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0),
            Err(_) => Vec2::ZERO,
        }
    }

    pub fn press(&mut self, position: Vec2) {
        self.ui.dispatch(UiEvent::PointerDown {
            position,
            button: PointerButton::Primary,
        });
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.ui.dispatch(UiEvent::PointerMoved { position });
    }

    pub fn release(&mut self, position: Vec2) {
        self.ui.dispatch(UiEvent::PointerUp {
            position,
            button: PointerButton::Primary,
        });
    }

    /// Press on the handle center, then move horizontally by each offset in
    /// turn (offsets are relative to the press point). Does not release.
    pub fn drag_by(&mut self, offsets: &[f32]) -> Vec2 {
        let start = self.handle_center();
        self.press(start);
        let mut last = start;
        for dx in offsets {
            last = Vec2::new(start.x + dx, start.y);
            self.move_to(last);
        }
        last
    }

    pub fn resize_window(&mut self, width: f32, height: f32) {
        self.ui.dispatch(UiEvent::WindowResized {
            size: Size::new(width, height),
        });
    }
}

#[derive(Debug, Clone)]
pub struct SplitRowBuilder {
    viewport: Size<f32>,
    left_width: f32,
    right_width: f32,
    handle_attrs: Attributes,
    mount: bool,
}

impl Default for SplitRowBuilder {
    fn default() -> Self {
        Self {
            viewport: Size::new(1000.0, 600.0),
            left_width: 300.0,
            right_width: 300.0,
            handle_attrs: Attributes::new(),
            mount: true,
        }
    }
}

impl SplitRowBuilder {
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    pub fn left_width(mut self, width: f32) -> Self {
        self.left_width = width;
        self
    }

    pub fn right_width(mut self, width: f32) -> Self {
        self.right_width = width;
        self
    }

    pub fn handle_attr(mut self, name: &str, value: &str) -> Self {
        self.handle_attrs.set(name, value);
        self
    }

    /// Leave the handle unmounted.
    pub fn unmounted(mut self) -> Self {
        self.mount = false;
        self
    }

    /// Build with a fresh [`ManualClock`] that nothing else can advance.
    pub fn build(self) -> SplitRow {
        self.build_with_clock(ManualClock::new().shared())
    }

    pub fn build_with_clock(self, clock: Arc<dyn Clock>) -> SplitRow {
        let mut ui = UiCore::with_clock(self.viewport, clock).expect("create ui");
        let doc = ui.document_mut();
        let root = doc.root();
        let panel = |width: f32| Style::new().flex_basis(width).flex_shrink(0.0);

        let left = doc
            .create_element("div", Attributes::new(), panel(self.left_width))
            .expect("create left panel");
        let handle = doc
            .create_element("div", self.handle_attrs, Style::new())
            .expect("create handle");
        let right = doc
            .create_element("div", Attributes::new(), panel(self.right_width))
            .expect("create right panel");
        for id in [left, handle, right] {
            doc.append_child(root, id).expect("append to root");
        }

        if self.mount {
            ui.mount_resize_handle(handle).expect("mount handle");
        }
        SplitRow {
            ui,
            left,
            handle,
            right,
        }
    }
}
