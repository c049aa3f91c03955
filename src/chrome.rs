//! Menu, anchor routing, and footer decisions.
//!
//! These are plain functions of scroll geometry and layout; the DOM glue in
//! `web::chrome` reads the geometry and applies the resulting classes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chrome tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// The menu shows once the container scrolls to `intro_top - offset`.
    pub menu_reveal_offset: f64,
    /// Visibility ratio of the contact section that reveals the footer.
    pub footer_threshold: f64,
    /// Media query selecting the wide layout.
    pub wide_query: String,
    /// Anchor targets that only exist under another id on the wide layout.
    pub wide_aliases: BTreeMap<String, String>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            menu_reveal_offset: 10.0,
            footer_threshold: 0.6,
            wide_query: "(min-width: 769px)".to_string(),
            wide_aliases: BTreeMap::from([("video".to_string(), "video1".to_string())]),
        }
    }
}

impl ChromeConfig {
    /// Check tuning ranges.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.footer_threshold) {
            return Err(format!(
                "footer_threshold must be in [0, 1], got {}",
                self.footer_threshold
            ));
        }
        if !self.menu_reveal_offset.is_finite() {
            return Err("menu_reveal_offset must be finite".to_string());
        }
        Ok(())
    }

    /// Resolve an anchor `href` to the id of the element to scroll to.
    ///
    /// Returns `None` for anything that is not a non-empty fragment link.
    pub fn route_anchor(&self, href: &str, wide: bool) -> Option<String> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        if wide {
            if let Some(alias) = self.wide_aliases.get(id) {
                return Some(alias.clone());
            }
        }
        Some(id.to_string())
    }
}

/// Classes written by the chrome behaviors.
pub const OPEN_CLASS: &str = "open";
pub const VISIBLE_CLASS: &str = "visible";
pub const INVERT_CLASS: &str = "invert";

/// Classes carried by the menu element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuState {
    /// Slide-in panel open.
    pub open: bool,
    /// Menu button shown (past the intro).
    pub visible: bool,
    /// Dark-on-light colors over light sections.
    pub inverted: bool,
}

impl MenuState {
    /// Flip the open flag.
    pub fn toggled(self) -> Self {
        Self {
            open: !self.open,
            ..self
        }
    }

    /// Closed, keeping the other flags.
    pub fn closed(self) -> Self {
        Self {
            open: false,
            ..self
        }
    }

    /// Read the state back from an element's classes.
    pub fn from_classes(has_class: impl Fn(&str) -> bool) -> Self {
        Self {
            open: has_class(OPEN_CLASS),
            visible: has_class(VISIBLE_CLASS),
            inverted: has_class(INVERT_CLASS),
        }
    }

    /// Every menu class with whether it should be set.
    pub fn classes(&self) -> [(&'static str, bool); 3] {
        [
            (OPEN_CLASS, self.open),
            (VISIBLE_CLASS, self.visible),
            (INVERT_CLASS, self.inverted),
        ]
    }
}

/// Scroll position of the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Vertical center of the visible area, in content coordinates.
    pub fn center_y(&self) -> f64 {
        self.scroll_top + self.client_height / 2.0
    }
}

/// Vertical extent of a section inside the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
    /// False when the section is not rendered (`display: none`).
    pub rendered: bool,
}

impl SectionBounds {
    /// Whether `y` lies within the section, edges included.
    pub fn contains(&self, y: f64) -> bool {
        self.rendered && y >= self.top && y <= self.top + self.height
    }
}

/// Menu classes after a scroll of the container.
///
/// Scrolling always closes the panel.
pub fn menu_after_scroll(
    config: &ChromeConfig,
    metrics: ScrollMetrics,
    intro_top: f64,
    light_sections: &[SectionBounds],
) -> MenuState {
    let center = metrics.center_y();
    MenuState {
        open: false,
        visible: metrics.scroll_top >= intro_top - config.menu_reveal_offset,
        inverted: light_sections.iter().any(|s| s.contains(center)),
    }
}

/// Keys that toggle the menu from its button.
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
