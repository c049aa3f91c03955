//! Playback thresholds and layout gating.

use crate::fault::PlaybackFault;
use crate::section::VisibilitySample;
use crate::{DEFAULT_COMPACT_QUERY, DEFAULT_PLAY_THRESHOLD, DEFAULT_RESET_THRESHOLD};
use serde::{Deserialize, Serialize};

/// The two visibility thresholds the coordinator works with.
///
/// `play` decides when a video may start; `reset` decides when a section has
/// been far enough away that its next entry rewinds the video. Keeping them
/// apart stops the video from restarting while the user hovers near the
/// play boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Ratio at or above which a section's video plays.
    pub play: f64,
    /// Ratio below which a section becomes reset-eligible.
    pub reset: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            play: DEFAULT_PLAY_THRESHOLD,
            reset: DEFAULT_RESET_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Create validated thresholds.
    pub fn new(play: f64, reset: f64) -> Result<Self, PlaybackFault> {
        let thresholds = Self { play, reset };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check `0 <= reset < play <= 1`.
    pub fn validate(&self) -> Result<(), PlaybackFault> {
        let ordered = 0.0 <= self.reset && self.reset < self.play && self.play <= 1.0;
        if ordered {
            Ok(())
        } else {
            Err(PlaybackFault::InvalidThresholds {
                play: self.play,
                reset: self.reset,
            })
        }
    }

    /// Check if a sample puts its section in the play range.
    pub fn admits_play(&self, sample: VisibilitySample) -> bool {
        sample.is_intersecting && sample.ratio >= self.play
    }

    /// Check if a ratio counts as fully out of view.
    pub fn is_fully_out(&self, ratio: f64) -> bool {
        ratio < self.reset
    }

    /// Threshold list to register with the visibility source, ascending.
    ///
    /// Both values are needed: without `reset` the source would never report
    /// the drop that re-arms a section.
    pub fn observer_thresholds(&self) -> [f64; 2] {
        [self.reset, self.play]
    }
}

/// Screen size class, evaluated once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutClass {
    /// Small screens with snap sections; the coordinator is active.
    Compact,
    /// Everything else; the coordinator is inert.
    Wide,
}

impl LayoutClass {
    /// Classify from the result of the compact media query.
    pub fn from_compact_match(matches: bool) -> Self {
        if matches {
            LayoutClass::Compact
        } else {
            LayoutClass::Wide
        }
    }

    /// Whether the coordinator should observe sections on this layout.
    pub fn is_compact(&self) -> bool {
        matches!(self, LayoutClass::Compact)
    }
}

/// Playback configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Play and reset thresholds.
    pub thresholds: Thresholds,
    /// Media query that selects the compact layout.
    pub compact_query: String,
    /// CSS selector for snap sections that may contain a video.
    pub section_selector: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            compact_query: DEFAULT_COMPACT_QUERY.to_string(),
            section_selector: "section.snap".to_string(),
        }
    }
}
