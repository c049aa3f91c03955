//! The media handle seam.
//!
//! The coordinator never talks to a video element directly. In the browser
//! the handle wraps an `HtmlVideoElement`; tests use an in-memory recorder.

use crate::fault::MediaError;
use serde::{Deserialize, Serialize};

/// Result of a play request.
///
/// Play requests are not errors when they fail: host autoplay policy can
/// reject them at any time and the next qualifying visibility event retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// Playback started synchronously.
    Started,
    /// The host accepted the request and will settle it later.
    Deferred,
    /// The host refused the request.
    Rejected(String),
}

impl PlayOutcome {
    /// Check if the request was refused.
    pub fn is_rejected(&self) -> bool {
        matches!(self, PlayOutcome::Rejected(_))
    }
}

/// Operations the coordinator performs on the one video a section owns.
pub trait MediaHandle {
    /// Force muted, inline, and no-native-controls playback.
    ///
    /// Unattended playback is only allowed by host platforms when audio is
    /// muted and inline rendering is explicit.
    fn prepare_inline_autoplay(&mut self) -> Result<(), MediaError>;

    /// Move the playback position, in seconds.
    fn seek(&mut self, position_secs: f64) -> Result<(), MediaError>;

    /// Request playback.
    fn play(&mut self) -> PlayOutcome;

    /// Pause playback.
    fn pause(&mut self) -> Result<(), MediaError>;
}

impl<M: MediaHandle + ?Sized> MediaHandle for Box<M> {
    fn prepare_inline_autoplay(&mut self) -> Result<(), MediaError> {
        (**self).prepare_inline_autoplay()
    }

    fn seek(&mut self, position_secs: f64) -> Result<(), MediaError> {
        (**self).seek(position_secs)
    }

    fn play(&mut self) -> PlayOutcome {
        (**self).play()
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        (**self).pause()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_outcome() {
        assert!(PlayOutcome::Rejected("NotAllowedError".into()).is_rejected());
        assert!(!PlayOutcome::Started.is_rejected());
        assert!(!PlayOutcome::Deferred.is_rejected());
    }
}
