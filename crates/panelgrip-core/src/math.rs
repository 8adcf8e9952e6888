/// SIMD-accelerated vector types from [`glam`].
///
/// Pointer positions travel through the event system as [`Vec2`]; only the
/// horizontal component matters for width dragging, but hit testing uses both.
///
/// ```
/// use panelgrip_core::math::Vec2;
///
/// let origin = Vec2::new(300.0, 12.0);
/// let pointer = Vec2::new(250.0, 40.0);
/// assert_eq!((pointer - origin).x, -50.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
