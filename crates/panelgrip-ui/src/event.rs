//! Input events delivered by the host.

use panelgrip_core::geometry::Size;
use panelgrip_core::math::Vec2;

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button / primary contact.
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    pub fn is_primary(&self) -> bool {
        matches!(self, PointerButton::Primary)
    }
}

/// Events a host feeds into [`UiCore::dispatch`](crate::UiCore::dispatch).
///
/// Positions are in document coordinates. Hover enter/leave is derived from
/// pointer movement by hit testing, so hosts only report raw motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    PointerMoved { position: Vec2 },
    PointerDown { position: Vec2, button: PointerButton },
    PointerUp { position: Vec2, button: PointerButton },
    /// The pointer left the window entirely.
    PointerLeftWindow,
    WindowResized { size: Size<f32> },
}
