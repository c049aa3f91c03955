//! Tracked sections and the visibility samples reported for them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a full-viewport section.
///
/// In the browser this is the section's element id, or a positional
/// fallback for sections without one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Create a section id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One visibility report for one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilitySample {
    /// Fraction of the section inside the scroll container, in `[0, 1]`.
    pub ratio: f64,
    /// Whether the section intersects the scroll container at all.
    pub is_intersecting: bool,
}

impl VisibilitySample {
    /// Create a sample. The ratio is clamped to `[0, 1]`; NaN becomes 0.
    pub fn new(ratio: f64, is_intersecting: bool) -> Self {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        Self {
            ratio,
            is_intersecting,
        }
    }

    /// A section entirely outside the viewport.
    pub fn hidden() -> Self {
        Self::new(0.0, false)
    }
}

/// A section that owns a video, plus its reset eligibility.
///
/// `reset_eligible` starts true, drops to false when the section enters the
/// play range and goes back to true only once the section falls below the
/// reset threshold.
#[derive(Debug)]
pub struct TrackedSection<M> {
    id: SectionId,
    media: M,
    reset_eligible: bool,
}

impl<M> TrackedSection<M> {
    /// Track a section and its video.
    pub fn new(id: impl Into<SectionId>, media: M) -> Self {
        Self {
            id: id.into(),
            media,
            reset_eligible: true,
        }
    }

    /// Section id.
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// The section's media handle.
    pub fn media(&self) -> &M {
        &self.media
    }

    pub(crate) fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Whether the next qualifying entry rewinds the video.
    pub fn is_reset_eligible(&self) -> bool {
        self.reset_eligible
    }

    pub(crate) fn set_reset_eligible(&mut self, eligible: bool) {
        self.reset_eligible = eligible;
    }
}
