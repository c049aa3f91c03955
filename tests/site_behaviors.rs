//! Native walk-throughs of the site behaviors, driven through `SiteConfig`.

use pretty_assertions::assert_eq;
use snapsite::chrome::menu_after_scroll;
use snapsite::{MenuState, ScrollMetrics, SectionBounds, SiteConfig};
use snapsite_input::{CarouselEngine, MemoryStore};
use snapsite_media::{
    LayoutClass, MediaError, MediaHandle, PlayOutcome, PlaybackCoordinator, SectionId,
    TrackedSection, VisibilitySample,
};

#[derive(Debug, Default)]
struct Clip {
    playing: bool,
    position: f64,
}

impl MediaHandle for Clip {
    fn prepare_inline_autoplay(&mut self) -> Result<(), MediaError> {
        Ok(())
    }

    fn seek(&mut self, position_secs: f64) -> Result<(), MediaError> {
        self.position = position_secs;
        Ok(())
    }

    fn play(&mut self) -> PlayOutcome {
        self.playing = true;
        PlayOutcome::Started
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.playing = false;
        Ok(())
    }
}

fn playing(coordinator: &PlaybackCoordinator<Clip>) -> Vec<String> {
    coordinator
        .section_ids()
        .filter(|id| coordinator.handle(id).is_some_and(|clip| clip.playing))
        .map(|id| id.to_string())
        .collect()
}

#[test]
fn overridden_play_threshold_gates_playback() {
    let config =
        SiteConfig::from_json(r#"{ "playback": { "thresholds": { "play": 0.8 } } }"#).unwrap();
    let sections = ["video", "reviews"]
        .into_iter()
        .map(|id| TrackedSection::new(id, Clip::default()))
        .collect();
    let mut coordinator =
        PlaybackCoordinator::new(&config.playback, LayoutClass::Compact, sections).unwrap();

    let video = SectionId::new("video");
    coordinator.on_visibility_change(&video, VisibilitySample::new(0.7, true));
    assert!(playing(&coordinator).is_empty());

    coordinator.on_visibility_change(&video, VisibilitySample::new(0.85, true));
    assert_eq!(playing(&coordinator), vec!["video".to_string()]);

    let reviews = SectionId::new("reviews");
    coordinator.on_visibility_change(&reviews, VisibilitySample::new(0.9, true));
    assert_eq!(playing(&coordinator), vec!["reviews".to_string()]);
}

#[test]
fn carousel_uses_configured_storage_key() {
    let config = SiteConfig::from_json(
        r#"{ "carousel": { "photos": ["a.jpg", "b.jpg", "c.jpg", "d.jpg"], "storage_key": "slide" } }"#,
    )
    .unwrap();
    let store = MemoryStore::with_entry("slide", "3");
    let mut engine = CarouselEngine::new(config.carousel, store).unwrap();

    let frame = engine.render();
    assert_eq!(frame.index, 3);
    assert_eq!(frame.item_indices(), [2, 3, 0]);

    engine.on_pointer_down(10.0, 10.0);
    let frame = engine.on_pointer_up().expect("tap advances");
    assert_eq!(frame.index, 0);
    assert_eq!(engine.store().get("slide"), Some("0"));
}

#[test]
fn menu_follows_a_scroll_through_the_page() {
    let config = SiteConfig::default();
    let intro_top = 800.0;
    let light = [
        SectionBounds {
            top: 2400.0,
            height: 800.0,
            rendered: true,
        },
        SectionBounds {
            top: 0.0,
            height: 5000.0,
            rendered: false,
        },
    ];

    let opened = MenuState::default().toggled();
    assert!(opened.open);

    let trajectory = [0.0, 795.0, 2100.0, 3000.0];
    let mut seen = Vec::new();
    for scroll_top in trajectory {
        let metrics = ScrollMetrics {
            scroll_top,
            client_height: 800.0,
        };
        let menu = menu_after_scroll(&config.chrome, metrics, intro_top, &light);
        seen.push((menu.open, menu.visible, menu.inverted));
    }

    assert_eq!(
        seen,
        vec![
            (false, false, false),
            (false, true, false),
            (false, true, true),
            (false, true, false),
        ]
    );
}
