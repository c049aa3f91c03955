//! Effect flags - the summary of what a visibility event did.
//!
//! Every plan carries an EffectSet next to its command list. Callers use it
//! for logging and tests; the commands themselves are the source of truth.

use bitflags::bitflags;

bitflags! {
    /// Set of effects produced by one visibility event.
    ///
    /// # Example
    ///
    /// ```
    /// use snapsite_media::EffectSet;
    ///
    /// let effects = EffectSet::PAUSED_OTHERS | EffectSet::PLAY_REQUESTED;
    ///
    /// assert!(effects.entered());
    /// assert!(!effects.contains(EffectSet::RESTARTED));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EffectSet: u8 {
        /// No effects.
        const NONE = 0;

        // =====================================================================
        // ENTERING
        // =====================================================================

        /// Other tracked videos were told to pause.
        const PAUSED_OTHERS = 1 << 0;

        /// The entering video was forced muted/inline/no-controls.
        const PREPARED = 1 << 1;

        /// The entering video was rewound to its start.
        const RESTARTED = 1 << 2;

        /// A play request was issued.
        const PLAY_REQUESTED = 1 << 3;

        // =====================================================================
        // LEAVING
        // =====================================================================

        /// The leaving video was paused.
        const PAUSED = 1 << 4;

        /// The section became reset-eligible on this event.
        const RESET_ARMED = 1 << 5;
    }
}

impl Default for EffectSet {
    fn default() -> Self {
        EffectSet::NONE
    }
}

impl EffectSet {
    /// Check if the event was treated as an entry into the play range.
    pub fn entered(&self) -> bool {
        self.contains(EffectSet::PLAY_REQUESTED)
    }

    /// Check if the event was treated as leaving the play range.
    pub fn left(&self) -> bool {
        self.contains(EffectSet::PAUSED)
    }
}
