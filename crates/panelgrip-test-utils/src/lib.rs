//! Test utilities for Panelgrip.
//!
//! - [`ManualClock`] - a [`Clock`](panelgrip_core::Clock) that only moves
//!   when told to, for exercising throttled handlers deterministically
//! - [`SplitRow`] - a `panel | handle | panel` document fixture
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use panelgrip_test_utils::{ManualClock, SplitRow};
//!
//! let clock = ManualClock::new();
//! let row = SplitRow::builder()
//!     .handle_attr("resize", "left")
//!     .build_with_clock(clock.shared());
//!
//! clock.advance(Duration::from_millis(150));
//! assert!(row.ui.handle(row.handle).is_some());
//! ```

pub mod clock;
pub mod fixtures;

pub use clock::ManualClock;
pub use fixtures::{SplitRow, SplitRowBuilder};
