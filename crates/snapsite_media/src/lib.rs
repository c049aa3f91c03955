//! Viewport-gated playback for full-screen snap sections.
//!
//! Each tracked section owns exactly one video. As the user scrolls, a
//! visibility source reports how much of each section is inside the scroll
//! container; the coordinator turns those reports into play/pause/seek
//! commands so that:
//!
//! 1. **At most one video plays** - entering a section pauses every other one
//! 2. **Restarts need a real re-entry** - a video is rewound only after its
//!    section dropped below the reset threshold since it last started
//! 3. **Playback failures are harmless** - rejected play requests and stale
//!    handles are logged and swallowed
//!
//! # Architecture
//!
//! ```text
//! IntersectionObserver ─► VisibilitySample ─► PlaybackCoordinator::plan
//!                                                     │
//!                                                     ▼
//!                                  PlaybackPlan (MediaCommand list, EffectSet)
//!                                                     │
//!                                                     ▼
//!                          PlaybackCoordinator::execute ─► MediaHandle
//! ```
//!
//! # Example
//!
//! ```ignore
//! use snapsite_media::{LayoutClass, PlaybackConfig, PlaybackCoordinator, VisibilitySample};
//!
//! let mut coordinator =
//!     PlaybackCoordinator::new(&PlaybackConfig::default(), LayoutClass::Compact, sections)?;
//!
//! let report = coordinator.on_visibility_change(&id, VisibilitySample::new(0.8, true));
//! ```

mod config;
mod coordinator;
mod effect;
mod fault;
mod media;
mod section;

pub use config::{LayoutClass, PlaybackConfig, Thresholds};
pub use coordinator::{
    MediaCommand, PlaybackCoordinator, PlaybackPlan, PlaybackReport, PlaybackState,
};
pub use effect::EffectSet;
pub use fault::{MediaError, PlaybackFault};
pub use media::{MediaHandle, PlayOutcome};
pub use section::{SectionId, TrackedSection, VisibilitySample};

/// Visibility ratio at which a section's video may start.
pub const DEFAULT_PLAY_THRESHOLD: f64 = 0.65;

/// Visibility ratio below which a section counts as fully out of view.
pub const DEFAULT_RESET_THRESHOLD: f64 = 0.1;

/// Media query selecting the layout on which the coordinator is active.
pub const DEFAULT_COMPACT_QUERY: &str = "(max-width: 768px)";
