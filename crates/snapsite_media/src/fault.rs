//! Error types for media handles and coordinator setup.
//!
//! Nothing here is fatal at runtime: `MediaError`s are swallowed by the
//! coordinator, `PlaybackFault`s can only happen while building it.

use crate::section::SectionId;
use thiserror::Error;

/// Failure reported by a single media handle operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    /// The handle is no longer backed by a live element.
    #[error("media element is detached")]
    Detached,

    /// The host platform refused the operation.
    #[error("platform refused media operation: {0}")]
    Platform(String),
}

impl MediaError {
    /// Check if the handle should be treated as inert from now on.
    pub fn is_stale(&self) -> bool {
        matches!(self, MediaError::Detached)
    }
}

/// Fault raised while constructing a coordinator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackFault {
    /// Two tracked sections share an id.
    #[error("section {0} is tracked twice")]
    DuplicateSection(SectionId),

    /// Thresholds must satisfy `0 <= reset < play <= 1`.
    #[error("invalid thresholds: play {play}, reset {reset}")]
    InvalidThresholds { play: f64, reset: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_only_for_detached() {
        assert!(MediaError::Detached.is_stale());
        assert!(!MediaError::Platform("NotAllowedError".into()).is_stale());
    }

    #[test]
    fn fault_display() {
        let fault = PlaybackFault::DuplicateSection(SectionId::new("video-2"));
        assert!(fault.to_string().contains("video-2"));

        let fault = PlaybackFault::InvalidThresholds {
            play: 0.1,
            reset: 0.5,
        };
        assert!(fault.to_string().contains("0.5"));
    }
}
