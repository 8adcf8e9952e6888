//! Panelgrip Core
//!
//! Shared building blocks for the Panelgrip crates: logging setup, profiling
//! hooks, the clock abstraction used by rate-limited handlers, and the math
//! and collection types the UI crates build on.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
pub mod time;

pub use time::{Clock, SystemClock};
