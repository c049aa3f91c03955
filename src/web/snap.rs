//! Snap-section video playback on the compact layout.

use super::dom;
use super::media::VideoHandle;
use crate::config::SiteConfig;
use snapsite_media::{LayoutClass, PlaybackCoordinator, SectionId, TrackedSection, VisibilitySample};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlVideoElement;

/// Attribute carrying the coordinator's id for an observed section.
const SECTION_ID_ATTR: &str = "data-snap-id";

pub fn install(config: &SiteConfig) -> Result<(), JsValue> {
    let window = dom::window()?;
    let layout =
        LayoutClass::from_compact_match(dom::matches_media(&window, &config.playback.compact_query));
    if !layout.is_compact() {
        tracing::debug!("wide layout; snap videos left alone");
        return Ok(());
    }

    let document = dom::document()?;
    let Some(scroll) = document.get_element_by_id(&config.dom.scroll_container) else {
        return Ok(());
    };

    let mut sections = Vec::new();
    let mut targets = Vec::new();
    for (i, section) in dom::query_all(&document, &config.playback.section_selector)?
        .into_iter()
        .enumerate()
    {
        let Some(video) = section
            .query_selector("video")?
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
        else {
            continue;
        };
        let id = match section.id() {
            id if id.is_empty() => format!("snap-{i}"),
            id => id,
        };
        section.set_attribute(SECTION_ID_ATTR, &id)?;
        sections.push(TrackedSection::new(id.clone(), VideoHandle::new(id, video)));
        targets.push(section);
    }

    let coordinator = PlaybackCoordinator::new(&config.playback, layout, sections)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let thresholds = coordinator.thresholds().observer_thresholds();
    let coordinator = Rc::new(RefCell::new(coordinator));

    dom::observe(&scroll, &thresholds, &targets, move |entry| {
        let Some(id) = entry.target().get_attribute(SECTION_ID_ATTR) else {
            return;
        };
        let section = SectionId::new(id);
        let sample = VisibilitySample::new(entry.intersection_ratio(), entry.is_intersecting());
        let report = coordinator
            .borrow_mut()
            .on_visibility_change(&section, sample);
        tracing::trace!(%section, ratio = sample.ratio, effects = ?report.effects, "visibility");
        if report.failures > 0 {
            tracing::debug!(failures = report.failures, effects = ?report.effects, "media ops failed");
        }
    })?;

    tracing::info!(sections = targets.len(), "snap video playback active");
    Ok(())
}
