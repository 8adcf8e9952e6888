//! Drag session tracking for the resize handle.

use crate::listener::ListenerId;

/// State captured at pointer-down, alive until pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer X at press.
    pub origin_x: f32,
    /// Target's rendered width at press.
    pub base_width: f32,
    /// Document-level listeners attached for this session.
    pub move_listener: ListenerId,
    pub up_listener: ListenerId,
}

impl DragSession {
    /// Horizontal pointer travel since the press.
    pub fn delta(&self, pointer_x: f32) -> f32 {
        pointer_x - self.origin_x
    }
}

/// `Idle` when no session is held, `Dragging` otherwise.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Enter `Dragging`. Refused (returns `false`) while a session exists.
    pub fn start(&mut self, session: DragSession) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(session);
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Leave `Dragging`, handing back the finished session.
    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(origin_x: f32) -> DragSession {
        DragSession {
            origin_x,
            base_width: 300.0,
            move_listener: ListenerId(1),
            up_listener: ListenerId(2),
        }
    }

    #[test]
    fn test_start_and_end() {
        let mut drag = DragController::new();
        assert!(!drag.is_dragging());

        assert!(drag.start(session(400.0)));
        assert!(drag.is_dragging());
        assert_eq!(drag.session().map(|s| s.delta(350.0)), Some(-50.0));

        let finished = drag.end().unwrap();
        assert_eq!(finished.origin_x, 400.0);
        assert!(!drag.is_dragging());
        assert!(drag.end().is_none());
    }

    #[test]
    fn test_second_start_keeps_first_session() {
        let mut drag = DragController::new();
        assert!(drag.start(session(10.0)));
        assert!(!drag.start(session(99.0)));
        assert_eq!(drag.session().unwrap().origin_x, 10.0);
    }
}
