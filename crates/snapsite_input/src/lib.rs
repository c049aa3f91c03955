//! Pointer gestures and the circular photo carousel.
//!
//! The carousel shows a three-slot window (previous, current, next) over a
//! fixed photo list and moves one photo at a time. Pointer input is resolved
//! into at most one step per gesture:
//!
//! - a predominantly horizontal drag past a minimum distance commits a step
//!   (drag left moves forward)
//! - a press and release with no committed drag is a tap and moves forward
//!
//! # Architecture
//!
//! ```text
//! pointerdown ─┐
//! pointermove ─┼──► GestureTracker ──► Direction ──► CarouselEngine::step
//! pointerup   ─┤                                           │
//! pointercancel┘                                           ▼
//!                                            Frame (slots + indicators)
//!                                                          │
//!                                                          ▼
//!                                                  IndexStore (session)
//! ```

mod carousel;
mod config;
mod error;
mod gesture;
mod store;

pub use carousel::{CarouselEngine, Frame, Slot};
pub use config::CarouselConfig;
pub use error::{CarouselError, StoreError};
pub use gesture::{Direction, GestureConfig, GestureEnd, GestureState, GestureTracker, Point};
pub use store::{IndexStore, MemoryStore};

/// Horizontal motion must exceed this multiple of vertical motion.
pub const DEFAULT_AXIS_RATIO: f64 = 0.6;

/// Minimum horizontal travel before a drag commits.
pub const DEFAULT_MIN_DRAG_DISTANCE: f64 = 40.0;

/// Fewest items the three-slot window can show without repeating itself.
pub const MIN_ITEMS: usize = 3;

/// Session-storage key holding the carousel position.
pub const DEFAULT_STORAGE_KEY: &str = "photoIndex";
