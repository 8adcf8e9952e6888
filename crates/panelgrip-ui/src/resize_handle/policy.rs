//! Width arithmetic: drag deltas, clamping and collapse.

use super::config::Direction;

/// Candidate width above which a collapsed panel is shown again,
/// independent of the configured minimum.
pub const REEXPAND_THRESHOLD: f32 = 50.0;

/// Width the drag asks for, before clamping.
///
/// The handle sits on the right edge of a left-controlled panel and on the
/// left edge of a right-controlled one, so moving right grows the former and
/// shrinks the latter.
pub fn candidate_width(direction: Direction, base_width: f32, delta_x: f32) -> f32 {
    match direction {
        Direction::Left => base_width + delta_x,
        Direction::Right => base_width - delta_x,
    }
}

/// `max(min_width, min(candidate, max_width))`.
///
/// When `max_width < min_width` the minimum wins.
pub fn clamp_width(candidate: f32, min_width: f32, max_width: f32) -> f32 {
    candidate.min(max_width).max(min_width)
}

/// Visibility change requested by a drag move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseTransition {
    /// Nothing to change.
    None,
    /// Hide the target and mark the handle collapsed.
    Collapse,
    /// Show the target and clear the collapsed mark.
    Expand,
}

/// Decide whether a move collapses or re-expands the target.
///
/// At or below `min_width` the panel collapses. Above it, a collapsed panel
/// only comes back once the candidate also exceeds [`REEXPAND_THRESHOLD`].
pub fn collapse_transition(collapsed: bool, candidate: f32, min_width: f32) -> CollapseTransition {
    if candidate <= min_width {
        CollapseTransition::Collapse
    } else if collapsed && candidate > REEXPAND_THRESHOLD {
        CollapseTransition::Expand
    } else {
        CollapseTransition::None
    }
}
