//! The playback coordinator.
//!
//! Handling a visibility event is split in two steps:
//!
//! - [`PlaybackCoordinator::plan`] is the state transition. It updates reset
//!   eligibility and the active section, and returns the ordered commands
//!   the event calls for. No media handle is touched.
//! - [`PlaybackCoordinator::execute`] runs those commands against the
//!   handles, swallowing every failure.
//!
//! [`PlaybackCoordinator::on_visibility_change`] does both.

use crate::config::{LayoutClass, PlaybackConfig, Thresholds};
use crate::effect::EffectSet;
use crate::fault::PlaybackFault;
use crate::media::{MediaHandle, PlayOutcome};
use crate::section::{SectionId, TrackedSection, VisibilitySample};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One operation on one section's media handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaCommand {
    /// Pause the section's video.
    Pause(SectionId),
    /// Force muted/inline/no-controls.
    Prepare(SectionId),
    /// Seek the section's video.
    Seek { section: SectionId, position: f64 },
    /// Request playback.
    Play(SectionId),
}

impl MediaCommand {
    /// The section this command targets.
    pub fn section(&self) -> &SectionId {
        match self {
            MediaCommand::Pause(id) | MediaCommand::Prepare(id) | MediaCommand::Play(id) => id,
            MediaCommand::Seek { section, .. } => section,
        }
    }
}

/// Output of [`PlaybackCoordinator::plan`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackPlan {
    /// Commands in execution order.
    pub commands: Vec<MediaCommand>,
    /// Summary of what the event did.
    pub effects: EffectSet,
}

impl PlaybackPlan {
    /// A plan that does nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the plan has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn push(&mut self, command: MediaCommand, effect: EffectSet) {
        self.commands.push(command);
        self.effects |= effect;
    }
}

/// What happened when a plan was executed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackReport {
    /// Effects of the executed plan.
    pub effects: EffectSet,
    /// Outcome of the play request, if the plan issued one.
    pub play: Option<PlayOutcome>,
    /// Number of handle operations that failed and were ignored.
    pub failures: usize,
}

/// Process-wide playback state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    active: Option<SectionId>,
}

impl PlaybackState {
    /// The section currently permitted to play.
    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }
}

/// Decides which single video plays as sections scroll in and out of view.
#[derive(Debug)]
pub struct PlaybackCoordinator<M> {
    thresholds: Thresholds,
    layout: LayoutClass,
    sections: Vec<TrackedSection<M>>,
    index: HashMap<SectionId, usize>,
    state: PlaybackState,
}

impl<M: MediaHandle> PlaybackCoordinator<M> {
    /// Build a coordinator from the static section list.
    ///
    /// On a [`LayoutClass::Wide`] layout the coordinator is inert: every event
    /// yields an empty plan.
    pub fn new(
        config: &PlaybackConfig,
        layout: LayoutClass,
        sections: Vec<TrackedSection<M>>,
    ) -> Result<Self, PlaybackFault> {
        config.thresholds.validate()?;

        let mut index = HashMap::with_capacity(sections.len());
        for (i, section) in sections.iter().enumerate() {
            if index.insert(section.id().clone(), i).is_some() {
                return Err(PlaybackFault::DuplicateSection(section.id().clone()));
            }
        }

        tracing::debug!(
            sections = sections.len(),
            ?layout,
            play = config.thresholds.play,
            reset = config.thresholds.reset,
            "playback coordinator ready"
        );

        Ok(Self {
            thresholds: config.thresholds,
            layout,
            sections,
            index,
            state: PlaybackState::default(),
        })
    }

    /// Whether this coordinator ignores every event.
    pub fn is_inert(&self) -> bool {
        !self.layout.is_compact()
    }

    /// Thresholds in use.
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The section currently permitted to play.
    pub fn active(&self) -> Option<&SectionId> {
        self.state.active()
    }

    /// Number of tracked sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no section is tracked.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Tracked section ids, in document order.
    pub fn section_ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|s| s.id())
    }

    /// Reset eligibility of a section, or `None` if it is not tracked.
    pub fn is_reset_eligible(&self, id: &SectionId) -> Option<bool> {
        self.section(id).map(|s| s.is_reset_eligible())
    }

    /// Media handle of a section.
    pub fn handle(&self, id: &SectionId) -> Option<&M> {
        self.section(id).map(|s| s.media())
    }

    fn section(&self, id: &SectionId) -> Option<&TrackedSection<M>> {
        self.index.get(id).map(|&i| &self.sections[i])
    }

    /// Compute the transition for one visibility event.
    pub fn plan(&mut self, id: &SectionId, sample: VisibilitySample) -> PlaybackPlan {
        if self.is_inert() {
            return PlaybackPlan::empty();
        }
        let Some(&idx) = self.index.get(id) else {
            tracing::trace!(section = %id, "visibility event for untracked section");
            return PlaybackPlan::empty();
        };

        let mut plan = PlaybackPlan::empty();

        if self.thresholds.admits_play(sample) {
            for other in self.sections.iter().filter(|s| s.id() != id) {
                plan.push(
                    MediaCommand::Pause(other.id().clone()),
                    EffectSet::PAUSED_OTHERS,
                );
            }

            plan.push(MediaCommand::Prepare(id.clone()), EffectSet::PREPARED);

            let section = &mut self.sections[idx];
            if section.is_reset_eligible() {
                plan.push(
                    MediaCommand::Seek {
                        section: id.clone(),
                        position: 0.0,
                    },
                    EffectSet::RESTARTED,
                );
                section.set_reset_eligible(false);
            }

            plan.push(MediaCommand::Play(id.clone()), EffectSet::PLAY_REQUESTED);
            self.state.active = Some(id.clone());

            tracing::debug!(
                section = %id,
                ratio = sample.ratio,
                restarted = plan.effects.contains(EffectSet::RESTARTED),
                "section entered play range"
            );
        } else {
            plan.push(MediaCommand::Pause(id.clone()), EffectSet::PAUSED);

            let section = &mut self.sections[idx];
            if self.thresholds.is_fully_out(sample.ratio) {
                if !section.is_reset_eligible() {
                    plan.effects |= EffectSet::RESET_ARMED;
                }
                section.set_reset_eligible(true);
            }

            if self.state.active.as_ref() == Some(id) {
                self.state.active = None;
            }

            tracing::debug!(
                section = %id,
                ratio = sample.ratio,
                armed = plan.effects.contains(EffectSet::RESET_ARMED),
                "section left play range"
            );
        }

        plan
    }

    /// Run a plan against the media handles.
    ///
    /// Handle failures are logged and counted, never returned. A rejected
    /// play request clears the active section.
    pub fn execute(&mut self, plan: PlaybackPlan) -> PlaybackReport {
        let mut report = PlaybackReport {
            effects: plan.effects,
            ..PlaybackReport::default()
        };

        for command in plan.commands {
            let Some(&idx) = self.index.get(command.section()) else {
                continue;
            };
            let media = self.sections[idx].media_mut();

            let result = match &command {
                MediaCommand::Pause(_) => media.pause(),
                MediaCommand::Prepare(_) => media.prepare_inline_autoplay(),
                MediaCommand::Seek { position, .. } => media.seek(*position),
                MediaCommand::Play(id) => {
                    let outcome = media.play();
                    if let PlayOutcome::Rejected(reason) = &outcome {
                        tracing::debug!(section = %id, %reason, "play request rejected");
                        if self.state.active.as_ref() == Some(id) {
                            self.state.active = None;
                        }
                    }
                    report.play = Some(outcome);
                    Ok(())
                }
            };

            if let Err(err) = result {
                tracing::debug!(?command, error = %err, "media operation failed; ignoring");
                report.failures += 1;
            }
        }

        report
    }

    /// Handle one visibility event: plan, then execute.
    pub fn on_visibility_change(
        &mut self,
        id: &SectionId,
        sample: VisibilitySample,
    ) -> PlaybackReport {
        let plan = self.plan(id, sample);
        self.execute(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::MediaError;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct NullMedia;

    impl MediaHandle for NullMedia {
        fn prepare_inline_autoplay(&mut self) -> Result<(), MediaError> {
            Ok(())
        }
        fn seek(&mut self, _position_secs: f64) -> Result<(), MediaError> {
            Ok(())
        }
        fn play(&mut self) -> PlayOutcome {
            PlayOutcome::Started
        }
        fn pause(&mut self) -> Result<(), MediaError> {
            Ok(())
        }
    }

    fn coordinator(layout: LayoutClass, ids: &[&str]) -> PlaybackCoordinator<NullMedia> {
        let sections = ids
            .iter()
            .map(|id| TrackedSection::new(*id, NullMedia))
            .collect();
        PlaybackCoordinator::new(&PlaybackConfig::default(), layout, sections).unwrap()
    }

    fn id(s: &str) -> SectionId {
        SectionId::new(s)
    }

    #[test]
    fn first_entry_pauses_others_and_restarts() {
        let mut c = coordinator(LayoutClass::Compact, &["a", "b", "c"]);
        let plan = c.plan(&id("b"), VisibilitySample::new(0.8, true));

        assert_eq!(
            plan.commands,
            vec![
                MediaCommand::Pause(id("a")),
                MediaCommand::Pause(id("c")),
                MediaCommand::Prepare(id("b")),
                MediaCommand::Seek {
                    section: id("b"),
                    position: 0.0
                },
                MediaCommand::Play(id("b")),
            ]
        );
        assert!(plan.effects.contains(EffectSet::RESTARTED));
        assert_eq!(c.active(), Some(&id("b")));
        assert_eq!(c.is_reset_eligible(&id("b")), Some(false));
    }

    #[test]
    fn partial_exit_keeps_position() {
        let mut c = coordinator(LayoutClass::Compact, &["a"]);
        c.plan(&id("a"), VisibilitySample::new(0.9, true));

        let exit = c.plan(&id("a"), VisibilitySample::new(0.4, true));
        assert_eq!(exit.commands, vec![MediaCommand::Pause(id("a"))]);
        assert!(!exit.effects.contains(EffectSet::RESET_ARMED));
        assert_eq!(c.active(), None);

        let again = c.plan(&id("a"), VisibilitySample::new(0.7, true));
        assert!(!again.effects.contains(EffectSet::RESTARTED));
    }

    #[test]
    fn crossing_just_below_play_threshold_pauses() {
        let mut c = coordinator(LayoutClass::Compact, &["a"]);
        c.plan(&id("a"), VisibilitySample::new(0.9, true));

        let exit = c.plan(&id("a"), VisibilitySample::new(0.6495, true));
        assert_eq!(exit.commands, vec![MediaCommand::Pause(id("a"))]);
        assert_eq!(exit.effects, EffectSet::PAUSED);
        assert_eq!(c.active(), None);
    }

    #[test]
    fn full_exit_arms_reset() {
        let mut c = coordinator(LayoutClass::Compact, &["a"]);
        c.plan(&id("a"), VisibilitySample::new(0.9, true));

        let exit = c.plan(&id("a"), VisibilitySample::new(0.05, true));
        assert!(exit.effects.contains(EffectSet::RESET_ARMED));
        assert_eq!(c.is_reset_eligible(&id("a")), Some(true));

        let again = c.plan(&id("a"), VisibilitySample::new(0.7, true));
        assert!(again.effects.contains(EffectSet::RESTARTED));
    }

    #[test]
    fn wide_layout_is_inert() {
        let mut c = coordinator(LayoutClass::Wide, &["a", "b"]);
        assert!(c.is_inert());
        assert!(c.plan(&id("a"), VisibilitySample::new(1.0, true)).is_empty());
        assert_eq!(c.active(), None);
        assert_eq!(c.is_reset_eligible(&id("a")), Some(true));
    }

    #[test]
    fn untracked_section_is_ignored() {
        let mut c = coordinator(LayoutClass::Compact, &["a"]);
        assert!(c.plan(&id("zzz"), VisibilitySample::new(1.0, true)).is_empty());
    }

    #[test]
    fn duplicate_sections_are_rejected() {
        let sections = vec![
            TrackedSection::new("a", NullMedia),
            TrackedSection::new("a", NullMedia),
        ];
        let err =
            PlaybackCoordinator::new(&PlaybackConfig::default(), LayoutClass::Compact, sections)
                .unwrap_err();
        assert_eq!(err, PlaybackFault::DuplicateSection(id("a")));
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        let config = PlaybackConfig {
            thresholds: Thresholds {
                play: 0.1,
                reset: 0.2,
            },
            ..PlaybackConfig::default()
        };
        let result =
            PlaybackCoordinator::<NullMedia>::new(&config, LayoutClass::Compact, Vec::new());
        assert!(matches!(result, Err(PlaybackFault::InvalidThresholds { .. })));
    }
}
