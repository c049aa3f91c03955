//! snapsite - client-side behavior for the snap-scrolling site
//!
//! The decision logic lives in two host-independent crates:
//!
//! - [`snapsite_media`]: which snap-section video plays, and when it rewinds
//! - [`snapsite_input`]: the photo carousel and its pointer gestures
//!
//! This crate adds the configuration, logging, and chrome (menu, anchors,
//! footer), and on wasm32 wires all of it to the page.

pub mod chrome;
pub mod config;
pub mod logging;

#[cfg(target_arch = "wasm32")]
mod web;

pub use chrome::{ChromeConfig, MenuState, ScrollMetrics, SectionBounds};
pub use config::{ConfigError, DomConfig, SiteConfig};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    logging::init();

    let config = web::load_config();
    web::install(&config);

    tracing::info!("snapsite behaviors installed");
}
