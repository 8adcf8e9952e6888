//! Resize handle: a draggable divider that resizes the panel next to it.
//!
//! The handle is an element placed directly beside the panel it controls.
//! Its `resize` attribute says which side that panel is on, and the panel is
//! looked up by sibling order every time it is needed, so reordering or
//! removing elements never leaves the handle pointing at a stale target.
//!
//! # Attributes
//!
//! | Attribute | Meaning | Default |
//! |-----------|---------|---------|
//! | `resize` | `left` (previous sibling) or `right` (next sibling) | none (inert) |
//! | `min-width` | lower width bound and collapse threshold, px | 150 |
//! | `initial-width` | width written to the panel on mount, px | `min-width` |
//! | `max-width-percent` | upper bound as % of viewport width | 30 |
//! | `collapsible` / `collapsable` | hide the panel when dragged to `min-width` or below | off |
//!
//! # Example
//!
//! ```
//! use panelgrip_core::geometry::Size;
//! use panelgrip_core::math::Vec2;
//! use panelgrip_ui::{Attributes, Document, ResizeHandle, Style, PointerButton};
//!
//! let mut doc = Document::new(Size::new(1000.0, 600.0)).unwrap();
//! let root = doc.root();
//! let sidebar = doc.create_element("aside", Attributes::new(), Style::new()).unwrap();
//! let attrs = Attributes::new().with("resize", "left").with("initial-width", "200");
//! let divider = doc.create_element("div", attrs, Style::new()).unwrap();
//! doc.append_child(root, sidebar).unwrap();
//! doc.append_child(root, divider).unwrap();
//!
//! let mut handle = ResizeHandle::mount(&mut doc, divider).unwrap();
//! assert_eq!(doc.rendered_width(sidebar).unwrap(), 200.0);
//!
//! handle.on_pointer_down(&mut doc, Vec2::new(202.0, 10.0), PointerButton::Primary);
//! handle.on_pointer_move(&mut doc, Vec2::new(262.0, 10.0));
//! handle.on_pointer_up(&mut doc);
//! assert_eq!(doc.rendered_width(sidebar).unwrap(), 260.0);
//! ```

pub mod config;
pub mod drag;
pub mod policy;

use std::time::Duration;

use panelgrip_core::math::Vec2;
use panelgrip_core::profiling::profile_function;

use crate::color::Color;
use crate::document::{CursorIcon, Document, DocumentError, DocumentResult};
use crate::element::ElementId;
use crate::event::PointerButton;
use crate::listener::{ListenerId, ListenerKind, ListenerTarget};
use crate::throttle::Throttle;

pub use config::{ConfigError, Direction, HandleConfig};
pub use drag::{DragController, DragSession};
pub use policy::{CollapseTransition, REEXPAND_THRESHOLD};

/// Width of the divider itself.
pub const HANDLE_WIDTH: f32 = 4.0;

/// Theme variable holding the hover highlight color.
pub const HOVER_COLOR_VAR: &str = "--resize-handle-hover-color";

/// Highlight used when [`HOVER_COLOR_VAR`] is unset.
pub fn default_hover_color() -> Color {
    Color::from_rgb_u8(80, 100, 140)
}

/// A mounted resize handle.
///
/// Handlers take the document by reference and never fail: anything that
/// cannot be resolved (missing target, removed element) turns the call into
/// a no-op.
#[derive(Debug)]
pub struct ResizeHandle {
    element: ElementId,
    config: HandleConfig,
    diagnostic: Option<ConfigError>,
    drag: DragController,
    /// Panel this handle hid by collapsing it, if any.
    collapsed: Option<ElementId>,
    hovered: bool,
    /// Window resize listener, kept for removal on unmount.
    resize_listener: Option<ListenerId>,
    throttle: Throttle,
}

impl ResizeHandle {
    /// Mount a handle on `element`.
    ///
    /// Resolves configuration from the element's attributes, styles the
    /// element as a divider, registers the window resize listener and writes
    /// the initial width to the target if one resolves.
    pub fn mount(doc: &mut Document, element: ElementId) -> DocumentResult<Self> {
        let attributes = doc
            .attributes(element)
            .ok_or(DocumentError::ElementNotFound(element))?;
        let (config, diagnostic) = HandleConfig::resolve(attributes);
        if let Some(err) = &diagnostic {
            tracing::warn!("Resize handle {:?}: {}", element, err);
        }

        doc.update_style(element, |style| {
            style.layout.size.width = taffy::Dimension::Length(HANDLE_WIDTH);
            style.layout.flex_basis = taffy::Dimension::Length(HANDLE_WIDTH);
            style.layout.flex_shrink = 0.0;
            style.background_color = Some(Color::TRANSPARENT);
        })?;

        let resize_listener =
            doc.listeners_mut()
                .add(ListenerTarget::Window, ListenerKind::Resize, element);

        let handle = Self {
            element,
            config,
            diagnostic,
            drag: DragController::new(),
            collapsed: None,
            hovered: false,
            resize_listener: Some(resize_listener),
            throttle: Throttle::default(),
        };

        if let Some(target) = handle.target(doc) {
            let max_width = handle.config.max_width(doc.viewport().width);
            let width = policy::clamp_width(handle.config.initial_width, handle.config.min_width, max_width);
            doc.set_flex_width(target, width)?;
        }

        tracing::debug!(
            "Mounted resize handle {:?} ({:?})",
            element,
            handle.config.direction.map(|d| d.as_str())
        );
        Ok(handle)
    }

    /// Tear down: end any drag and remove the window listener.
    ///
    /// Safe to call more than once.
    pub fn unmount(&mut self, doc: &mut Document) {
        self.on_pointer_up(doc);
        if let Some(id) = self.resize_listener.take() {
            doc.listeners_mut().remove(id);
            tracing::debug!("Unmounted resize handle {:?}", self.element);
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    /// Problem found in the attributes during the last resolution, if any.
    pub fn diagnostic(&self) -> Option<&ConfigError> {
        self.diagnostic.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.resize_listener.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed.is_some()
    }

    pub fn collapsed_target(&self) -> Option<ElementId> {
        self.collapsed
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn resize_listener(&self) -> Option<ListenerId> {
        self.resize_listener
    }

    /// Re-resolve configuration after the element's attributes changed.
    ///
    /// An in-flight drag keeps its origin and base width but uses the new
    /// bounds from its next move. A panel collapsed under the old config is
    /// shown again if the direction changes or collapsing is turned off.
    pub fn attributes_changed(&mut self, doc: &mut Document) {
        let Some(attributes) = doc.attributes(self.element) else {
            return;
        };
        let (config, diagnostic) = HandleConfig::resolve(attributes);
        if let Some(err) = &diagnostic {
            tracing::warn!("Resize handle {:?}: {}", self.element, err);
        }
        if config != self.config {
            tracing::debug!("Resize handle {:?} reconfigured: {:?}", self.element, config);
        }
        let release = config.direction != self.config.direction || !config.collapsible;
        self.config = config;
        self.diagnostic = diagnostic;
        if release {
            self.release_collapsed(doc);
        }
    }

    /// The panel this handle currently controls.
    pub fn target(&self, doc: &Document) -> Option<ElementId> {
        match self.config.direction? {
            Direction::Left => doc.previous_sibling(self.element),
            Direction::Right => doc.next_sibling(self.element),
        }
    }

    pub fn on_pointer_enter(&mut self, doc: &mut Document) {
        self.hovered = true;
        let color = doc.theme().color_or(HOVER_COLOR_VAR, default_hover_color());
        log_failure(doc.set_background(self.element, Some(color)));
        doc.set_cursor(CursorIcon::ColResize);
    }

    /// Clears the highlight unless a drag is active; pointer-up clears it then.
    pub fn on_pointer_leave(&mut self, doc: &mut Document) {
        self.hovered = false;
        if self.drag.is_dragging() {
            return;
        }
        self.reset_visuals(doc);
    }

    /// Start a drag. Returns `true` if a session began.
    pub fn on_pointer_down(
        &mut self,
        doc: &mut Document,
        position: Vec2,
        button: PointerButton,
    ) -> bool {
        if !button.is_primary() {
            return false;
        }
        if self.drag.is_dragging() {
            tracing::debug!("Resize handle {:?}: press ignored, already dragging", self.element);
            return false;
        }
        let Some(target) = self.target(doc) else {
            return false;
        };
        let base_width = match doc.rendered_width(target) {
            Ok(width) => width,
            Err(err) => {
                tracing::debug!("Resize handle {:?}: {}", self.element, err);
                return false;
            }
        };

        let listeners = doc.listeners_mut();
        let move_listener = listeners.add(ListenerTarget::Document, ListenerKind::PointerMove, self.element);
        let up_listener = listeners.add(ListenerTarget::Document, ListenerKind::PointerUp, self.element);
        self.drag.start(DragSession {
            origin_x: position.x,
            base_width,
            move_listener,
            up_listener,
        });

        tracing::debug!(
            "Resize handle {:?}: drag started at x={} on {:?} (width {})",
            self.element,
            position.x,
            target,
            base_width
        );
        true
    }

    /// Apply the collapse and clamp policies for the current pointer position.
    pub fn on_pointer_move(&mut self, doc: &mut Document, position: Vec2) {
        profile_function!();
        let Some(session) = self.drag.session().copied() else {
            return;
        };
        let Some(direction) = self.config.direction else {
            return;
        };
        let Some(target) = self.target(doc) else {
            tracing::trace!("Resize handle {:?}: no target, move ignored", self.element);
            return;
        };

        let candidate = policy::candidate_width(direction, session.base_width, session.delta(position.x));

        // The sibling order changed under a collapsed panel.
        if self.collapsed.is_some_and(|hidden| hidden != target) {
            self.release_collapsed(doc);
        }

        if self.config.collapsible {
            let collapsed = self.collapsed == Some(target);
            match policy::collapse_transition(collapsed, candidate, self.config.min_width) {
                CollapseTransition::Collapse => {
                    if !collapsed && doc.set_hidden(target, true).is_ok() {
                        self.collapsed = Some(target);
                        tracing::debug!("Resize handle {:?}: collapsed {:?}", self.element, target);
                    }
                }
                CollapseTransition::Expand => {
                    if doc.set_hidden(target, false).is_ok() {
                        self.collapsed = None;
                        tracing::debug!("Resize handle {:?}: expanded {:?}", self.element, target);
                    }
                }
                CollapseTransition::None => {}
            }
        }

        let max_width = self.config.max_width(doc.viewport().width);
        let width = policy::clamp_width(candidate, self.config.min_width, max_width);
        tracing::trace!("Resize handle {:?}: candidate {} -> {}", self.element, candidate, width);
        log_failure(doc.set_flex_width(target, width));
    }

    /// End the drag. Returns `false` if there was none.
    pub fn on_pointer_up(&mut self, doc: &mut Document) -> bool {
        let Some(session) = self.drag.end() else {
            return false;
        };
        let listeners = doc.listeners_mut();
        listeners.remove(session.move_listener);
        listeners.remove(session.up_listener);
        self.reset_visuals(doc);
        tracing::debug!("Resize handle {:?}: drag ended", self.element);
        true
    }

    /// Shrink the target to the viewport-relative maximum if it exceeds it.
    ///
    /// Throttled: calls within [`Throttle::interval`] of the last call that
    /// ran are dropped. Returns `true` if the target width was written.
    pub fn on_window_resize(&mut self, doc: &mut Document, now: Duration) -> bool {
        profile_function!();
        if !self.throttle.try_fire(now) {
            tracing::trace!(
                "Resize handle {:?}: viewport update dropped ({} so far)",
                self.element,
                self.throttle.dropped()
            );
            return false;
        }
        let Some(target) = self.target(doc) else {
            return false;
        };
        let max_width = self.config.max_width(doc.viewport().width);
        if max_width <= self.config.min_width {
            return false;
        }
        match doc.rendered_width(target) {
            Ok(width) if width > max_width => {
                tracing::debug!(
                    "Resize handle {:?}: shrinking {:?} from {} to {}",
                    self.element,
                    target,
                    width,
                    max_width
                );
                doc.set_flex_width(target, max_width).is_ok()
            }
            Ok(_) => false,
            Err(err) => {
                tracing::debug!("Resize handle {:?}: {}", self.element, err);
                false
            }
        }
    }

    /// Show the panel hidden by a collapse and forget it.
    fn release_collapsed(&mut self, doc: &mut Document) {
        let Some(hidden) = self.collapsed.take() else {
            return;
        };
        if doc.contains(hidden) {
            log_failure(doc.set_hidden(hidden, false));
            tracing::debug!("Resize handle {:?}: released collapsed {:?}", self.element, hidden);
        }
    }

    fn reset_visuals(&self, doc: &mut Document) {
        log_failure(doc.set_background(self.element, Some(Color::TRANSPARENT)));
        doc.set_cursor(CursorIcon::Default);
    }
}

fn log_failure(result: DocumentResult<()>) {
    if let Err(err) = result {
        tracing::debug!("Resize handle update skipped: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Attributes;
    use crate::style::Style;
    use panelgrip_core::geometry::Size;

    struct Row {
        doc: Document,
        left: ElementId,
        handle: ElementId,
        right: ElementId,
    }

    fn row(attrs: &[(&str, &str)]) -> Row {
        let mut doc = Document::new(Size::new(1000.0, 600.0)).unwrap();
        let root = doc.root();
        let left = doc
            .create_element("div", Attributes::new(), Style::new().flex_basis(300.0).flex_shrink(0.0))
            .unwrap();
        let handle = doc
            .create_element("div", attrs.iter().copied().collect(), Style::new())
            .unwrap();
        let right = doc
            .create_element("div", Attributes::new(), Style::new().flex_basis(300.0).flex_shrink(0.0))
            .unwrap();
        for id in [left, handle, right] {
            doc.append_child(root, id).unwrap();
        }
        Row { doc, left, handle, right }
    }

    fn at(x: f32) -> Vec2 {
        Vec2::new(x, 100.0)
    }

    #[test]
    fn test_target_follows_direction() {
        let mut r = row(&[("resize", "left")]);
        let h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        assert_eq!(h.target(&r.doc), Some(r.left));

        let mut r = row(&[("resize", "right")]);
        let h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        assert_eq!(h.target(&r.doc), Some(r.right));

        let mut r = row(&[]);
        let h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        assert_eq!(h.target(&r.doc), None);
    }

    #[test]
    fn test_mount_writes_initial_width_and_registers_listener() {
        let mut r = row(&[("resize", "left"), ("initial-width", "220"), ("min-width", "100")]);
        let h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();

        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 220.0);
        assert_eq!(r.doc.rendered_width(r.handle).unwrap(), HANDLE_WIDTH);
        assert!(h.is_mounted());
        assert_eq!(r.doc.listeners().count(ListenerTarget::Window), 1);
    }

    #[test]
    fn test_mount_clamps_initial_width() {
        let mut r = row(&[("resize", "left"), ("initial-width", "900")]);
        ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        // 30% of 1000
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 300.0);
    }

    #[test]
    fn test_mount_missing_element_fails() {
        let mut r = row(&[]);
        r.doc.remove(r.handle).unwrap();
        assert_eq!(
            ResizeHandle::mount(&mut r.doc, r.handle).unwrap_err(),
            DocumentError::ElementNotFound(r.handle)
        );
    }

    #[test]
    fn test_invalid_direction_mounts_inert() {
        let mut r = row(&[("resize", "sideways")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        assert!(matches!(h.diagnostic(), Some(ConfigError::InvalidDirection(v)) if v == "sideways"));
        assert!(!h.on_pointer_down(&mut r.doc, at(300.0), PointerButton::Primary));
        assert!(!h.is_dragging());
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 300.0);
    }

    #[test]
    fn test_drag_left_direction() {
        let mut r = row(&[("resize", "left"), ("min-width", "100"), ("initial-width", "250"), ("max-width-percent", "50")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();

        assert!(h.on_pointer_down(&mut r.doc, at(252.0), PointerButton::Primary));
        assert_eq!(h.drag_session().unwrap().base_width, 250.0);
        assert_eq!(r.doc.listeners().count(ListenerTarget::Document), 2);

        h.on_pointer_move(&mut r.doc, at(202.0));
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 200.0);
        h.on_pointer_move(&mut r.doc, at(352.0));
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 350.0);

        assert!(h.on_pointer_up(&mut r.doc));
        assert_eq!(r.doc.listeners().count(ListenerTarget::Document), 0);
    }

    #[test]
    fn test_drag_right_direction_grows_when_moving_left() {
        let mut r = row(&[("resize", "right"), ("initial-width", "300"), ("max-width-percent", "60"), ("min-width", "100")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();

        assert!(h.on_pointer_down(&mut r.doc, at(301.0), PointerButton::Primary));
        h.on_pointer_move(&mut r.doc, at(251.0));
        assert_eq!(r.doc.rendered_width(r.right).unwrap(), 350.0);
        h.on_pointer_move(&mut r.doc, at(351.0));
        assert_eq!(r.doc.rendered_width(r.right).unwrap(), 250.0);
    }

    #[test]
    fn test_clamped_to_bounds() {
        let mut r = row(&[("resize", "left"), ("min-width", "150"), ("initial-width", "200")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        h.on_pointer_down(&mut r.doc, at(200.0), PointerButton::Primary);

        h.on_pointer_move(&mut r.doc, at(0.0));
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 150.0);
        h.on_pointer_move(&mut r.doc, at(900.0));
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 300.0);
    }

    #[test]
    fn test_non_primary_button_does_not_drag() {
        let mut r = row(&[("resize", "left")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        assert!(!h.on_pointer_down(&mut r.doc, at(150.0), PointerButton::Secondary));
        assert!(!h.is_dragging());
        assert_eq!(r.doc.listeners().count(ListenerTarget::Document), 0);
    }

    #[test]
    fn test_second_press_does_not_replace_session() {
        let mut r = row(&[("resize", "left"), ("min-width", "100"), ("initial-width", "200")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        assert!(h.on_pointer_down(&mut r.doc, at(200.0), PointerButton::Primary));
        assert!(!h.on_pointer_down(&mut r.doc, at(50.0), PointerButton::Primary));
        assert_eq!(h.drag_session().unwrap().origin_x, 200.0);
        assert_eq!(r.doc.listeners().count(ListenerTarget::Document), 2);
    }

    #[test]
    fn test_pointer_up_without_drag_is_noop() {
        let mut r = row(&[("resize", "left")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        let listeners_before = r.doc.listeners().len();
        assert!(!h.on_pointer_up(&mut r.doc));
        assert!(!h.is_dragging());
        assert_eq!(r.doc.listeners().len(), listeners_before);
    }

    #[test]
    fn test_hover_highlight_survives_leave_while_dragging() {
        let mut r = row(&[("resize", "left")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();

        h.on_pointer_enter(&mut r.doc);
        assert_eq!(r.doc.background(r.handle), Some(default_hover_color()));
        assert_eq!(r.doc.cursor(), CursorIcon::ColResize);

        h.on_pointer_down(&mut r.doc, at(150.0), PointerButton::Primary);
        h.on_pointer_leave(&mut r.doc);
        assert_eq!(r.doc.background(r.handle), Some(default_hover_color()));
        assert_eq!(r.doc.cursor(), CursorIcon::ColResize);

        h.on_pointer_up(&mut r.doc);
        assert_eq!(r.doc.background(r.handle), Some(Color::TRANSPARENT));
        assert_eq!(r.doc.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_hover_uses_theme_variable() {
        let mut r = row(&[("resize", "left")]);
        r.doc.theme_mut().set_variable(HOVER_COLOR_VAR, Color::WHITE);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        h.on_pointer_enter(&mut r.doc);
        assert_eq!(r.doc.background(r.handle), Some(Color::WHITE));
        h.on_pointer_leave(&mut r.doc);
        assert_eq!(r.doc.background(r.handle), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_unmount_is_idempotent_and_ends_drag() {
        let mut r = row(&[("resize", "left")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        h.on_pointer_down(&mut r.doc, at(150.0), PointerButton::Primary);

        h.unmount(&mut r.doc);
        h.unmount(&mut r.doc);
        assert!(!h.is_mounted());
        assert!(!h.is_dragging());
        assert!(r.doc.listeners().is_empty());
    }

    #[test]
    fn test_attributes_changed_reconfigures() {
        let mut r = row(&[("resize", "left")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();

        r.doc.set_attribute(r.handle, "resize", "right").unwrap();
        r.doc.set_attribute(r.handle, "collapsible", "").unwrap();
        h.attributes_changed(&mut r.doc);
        assert_eq!(h.config().direction, Some(Direction::Right));
        assert!(h.config().collapsible);
        assert_eq!(h.target(&r.doc), Some(r.right));

        r.doc.set_attribute(r.handle, "resize", "middle").unwrap();
        h.attributes_changed(&mut r.doc);
        assert_eq!(h.target(&r.doc), None);
        assert!(h.diagnostic().is_some());
    }

    #[test]
    fn test_window_resize_shrinks_oversized_target() {
        let mut r = row(&[("resize", "left"), ("min-width", "100"), ("initial-width", "300")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();

        r.doc.set_viewport(Size::new(800.0, 600.0)).unwrap();
        assert!(h.on_window_resize(&mut r.doc, Duration::from_millis(0)));
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 240.0);

        // Within the window: dropped even though the target is oversized again.
        r.doc.set_viewport(Size::new(600.0, 600.0)).unwrap();
        assert!(!h.on_window_resize(&mut r.doc, Duration::from_millis(40)));
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 240.0);

        assert!(h.on_window_resize(&mut r.doc, Duration::from_millis(140)));
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 180.0);
    }

    #[test]
    fn test_window_resize_skips_degenerate_range() {
        let mut r = row(&[("resize", "left"), ("min-width", "200"), ("initial-width", "300")]);
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 300.0);

        // 30% of 500 = 150 < min-width 200: leave the panel alone.
        r.doc.set_viewport(Size::new(500.0, 600.0)).unwrap();
        assert!(!h.on_window_resize(&mut r.doc, Duration::ZERO));
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 300.0);
    }

    fn collapse_left(r: &mut Row) -> ResizeHandle {
        let mut h = ResizeHandle::mount(&mut r.doc, r.handle).unwrap();
        h.on_pointer_down(&mut r.doc, at(202.0), PointerButton::Primary);
        h.on_pointer_move(&mut r.doc, at(52.0));
        assert!(r.doc.is_hidden(r.left));
        assert_eq!(h.collapsed_target(), Some(r.left));
        h
    }

    fn collapsible_row() -> Row {
        row(&[
            ("resize", "left"),
            ("collapsible", ""),
            ("min-width", "100"),
            ("initial-width", "200"),
            ("max-width-percent", "50"),
        ])
    }

    #[test]
    fn test_direction_change_releases_collapsed_panel() {
        let mut r = collapsible_row();
        let mut h = collapse_left(&mut r);
        h.on_pointer_up(&mut r.doc);

        r.doc.set_attribute(r.handle, "resize", "right").unwrap();
        h.attributes_changed(&mut r.doc);
        assert!(!r.doc.is_hidden(r.left));
        assert!(!h.is_collapsed());

        // The new target collapses like any other.
        assert!(h.on_pointer_down(&mut r.doc, at(102.0), PointerButton::Primary));
        h.on_pointer_move(&mut r.doc, at(352.0));
        assert!(r.doc.is_hidden(r.right));
        assert_eq!(h.collapsed_target(), Some(r.right));
        assert!(!r.doc.is_hidden(r.left));
    }

    #[test]
    fn test_disabling_collapse_releases_collapsed_panel() {
        let mut r = collapsible_row();
        let mut h = collapse_left(&mut r);

        r.doc.set_attribute(r.handle, "collapsible", "false").unwrap();
        h.attributes_changed(&mut r.doc);
        assert!(!r.doc.is_hidden(r.left));
        assert!(!h.is_collapsed());

        h.on_pointer_move(&mut r.doc, at(402.0));
        assert_eq!(r.doc.rendered_width(r.left).unwrap(), 400.0);
    }

    #[test]
    fn test_new_neighbour_releases_collapsed_panel() {
        let mut r = collapsible_row();
        let mut h = collapse_left(&mut r);

        let mid = r
            .doc
            .create_element("div", Attributes::new(), Style::new().flex_basis(150.0).flex_shrink(0.0))
            .unwrap();
        let root = r.doc.root();
        r.doc.insert_child(root, 1, mid).unwrap();

        // Candidate 200 + (62 - 202) = 60 now applies to `mid`.
        h.on_pointer_move(&mut r.doc, at(62.0));
        assert!(!r.doc.is_hidden(r.left));
        assert!(r.doc.is_hidden(mid));
        assert_eq!(h.collapsed_target(), Some(mid));
    }
}
