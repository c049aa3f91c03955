//! DOM glue, compiled on wasm32 only.
//!
//! Each behavior installs independently: a missing element disables the
//! behavior that needs it and nothing else.

mod carousel;
mod chrome;
mod dom;
mod media;
mod snap;
mod storage;

use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};

/// Read the page's config overrides, if any.
pub fn load_config() -> SiteConfig {
    let json = dom::document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    SiteConfig::from_optional_json(json.as_deref())
}

/// Attach every behavior to the page.
pub fn install(config: &SiteConfig) {
    if let Err(err) = chrome::install(config) {
        tracing::warn!(error = ?err, "menu and footer behaviors not installed");
    }
    if let Err(err) = carousel::install(config) {
        tracing::warn!(error = ?err, "photo carousel not installed");
    }
    if let Err(err) = snap::install(config) {
        tracing::warn!(error = ?err, "snap video playback not installed");
    }
}
