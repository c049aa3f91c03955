//! Site configuration.
//!
//! Defaults reproduce the shipped site. A page can override any part by
//! embedding a JSON document:
//!
//! ```html
//! <script type="application/json" id="snapsite-config">
//!   { "playback": { "thresholds": { "play": 0.7 } } }
//! </script>
//! ```

use crate::chrome::ChromeConfig;
use serde::{Deserialize, Serialize};
use snapsite_input::{CarouselConfig, CarouselError};
use snapsite_media::{PlaybackConfig, PlaybackFault};
use thiserror::Error;

/// Id of the element holding the JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "snapsite-config";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid playback config: {0}")]
    Playback(#[from] PlaybackFault),

    #[error("invalid carousel config: {0}")]
    Carousel(#[from] CarouselError),

    #[error("invalid chrome config: {0}")]
    Chrome(String),
}

/// Ids and selectors of the page elements the behaviors attach to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    pub menu: String,
    pub menu_toggle: String,
    pub scroll_container: String,
    pub intro: String,
    pub footer: String,
    pub contact: String,
    pub photo_section: String,
    pub photo_layers: String,
    pub photo_dots: String,
    pub light_sections: String,
    pub anchors: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            menu: "menu".into(),
            menu_toggle: "menuToggle".into(),
            scroll_container: "scroll".into(),
            intro: "intro".into(),
            footer: "footer".into(),
            contact: "contact".into(),
            photo_section: "photo".into(),
            photo_layers: ".photo-layer".into(),
            photo_dots: ".photo-dots".into(),
            light_sections: ".reviews-mobile-text, .contact-section".into(),
            anchors: "nav a[href^=\"#\"]".into(),
        }
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub playback: PlaybackConfig,
    pub carousel: CarouselConfig,
    pub chrome: ChromeConfig,
    pub dom: DomConfig,
}

impl SiteConfig {
    /// Parse and validate a JSON override document. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an optional override document, falling back to defaults.
    pub fn from_optional_json(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring site config overrides");
                Self::default()
            }
        }
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.playback.thresholds.validate()?;
        self.carousel.validate()?;
        self.chrome.validate().map_err(ConfigError::Chrome)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.playback.thresholds.play, 0.65);
        assert_eq!(config.playback.thresholds.reset, 0.1);
        assert_eq!(config.chrome.footer_threshold, 0.6);
        assert_eq!(config.dom.menu_toggle, "menuToggle");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "playback": { "thresholds": { "play": 0.8 } }, "carousel": { "storage_key": "idx" } }"#,
        )
        .unwrap();

        assert_eq!(config.playback.thresholds.play, 0.8);
        assert_eq!(config.playback.thresholds.reset, 0.1);
        assert_eq!(config.playback.compact_query, "(max-width: 768px)");
        assert_eq!(config.carousel.storage_key, "idx");
        assert_eq!(config.carousel.photos.len(), 12);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "playback": { "thresholds": { "reset": 0.9 } } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Playback(_)));

        let err = SiteConfig::from_json(r#"{ "carousel": { "photos": ["a.jpg"] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Carousel(_)));

        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn optional_json_falls_back_to_defaults() {
        assert_eq!(SiteConfig::from_optional_json(None), SiteConfig::default());
        assert_eq!(
            SiteConfig::from_optional_json(Some("   ")),
            SiteConfig::default()
        );
        assert_eq!(
            SiteConfig::from_optional_json(Some("[1, 2")),
            SiteConfig::default()
        );
    }
}
