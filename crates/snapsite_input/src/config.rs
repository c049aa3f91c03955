//! Carousel configuration.

use crate::error::CarouselError;
use crate::gesture::GestureConfig;
use crate::{DEFAULT_STORAGE_KEY, MIN_ITEMS};
use serde::{Deserialize, Serialize};

/// Number of photos shipped with the site.
const DEFAULT_PHOTO_COUNT: usize = 12;

/// Complete carousel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Photo sources, in display order.
    pub photos: Vec<String>,
    /// Session-storage key for the current index.
    pub storage_key: String,
    /// Drag tuning.
    pub gesture: GestureConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            photos: (1..=DEFAULT_PHOTO_COUNT)
                .map(|i| format!("photos/photo{i}.jpg"))
                .collect(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            gesture: GestureConfig::default(),
        }
    }
}

impl CarouselConfig {
    /// Create a config for the given photos with default tuning.
    pub fn with_photos<I, S>(photos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            photos: photos.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Check the photo list and gesture tuning.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.photos.len() < MIN_ITEMS {
            return Err(CarouselError::TooFewItems {
                found: self.photos.len(),
                min: MIN_ITEMS,
            });
        }
        self.gesture.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_lists_twelve_photos() {
        let config = CarouselConfig::default();
        assert_eq!(config.photos.len(), 12);
        assert_eq!(config.photos[0], "photos/photo1.jpg");
        assert_eq!(config.photos[11], "photos/photo12.jpg");
        assert_eq!(config.storage_key, "photoIndex");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn two_photos_are_too_few() {
        let config = CarouselConfig::with_photos(["a.jpg", "b.jpg"]);
        assert_eq!(
            config.validate(),
            Err(CarouselError::TooFewItems { found: 2, min: 3 })
        );
    }
}
