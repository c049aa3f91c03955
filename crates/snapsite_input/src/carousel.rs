//! Circular photo carousel with a three-slot window.

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::gesture::{Direction, GestureEnd, GestureTracker, Point};
use crate::store::IndexStore;
use serde::{Deserialize, Serialize};

/// One rendered slot of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Offset from the current index: -1, 0 or +1.
    pub offset: isize,
    /// Index of the item shown.
    pub item_index: usize,
    /// Source of the item shown.
    pub source: String,
}

/// Output of a render: what the three layers and the indicator row show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Current index.
    pub index: usize,
    /// Previous, current and next slot.
    pub slots: [Slot; 3],
    /// One flag per item; only the current one is set.
    pub indicators: Vec<bool>,
}

impl Frame {
    /// Item indices shown, in slot order.
    pub fn item_indices(&self) -> [usize; 3] {
        [
            self.slots[0].item_index,
            self.slots[1].item_index,
            self.slots[2].item_index,
        ]
    }

    /// Index of the active indicator.
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|&active| active)
    }
}

/// Carousel state machine: circular index, persistence, and gesture handling.
#[derive(Debug)]
pub struct CarouselEngine<S> {
    items: Vec<String>,
    index: usize,
    storage_key: String,
    store: S,
    gesture: GestureTracker,
}

impl<S: IndexStore> CarouselEngine<S> {
    /// Build a carousel and restore its position from the store.
    pub fn new(config: CarouselConfig, store: S) -> Result<Self, CarouselError> {
        config.validate()?;

        let index = restore_index(&store, &config.storage_key, config.photos.len());
        tracing::debug!(items = config.photos.len(), index, "carousel restored");

        Ok(Self {
            items: config.photos,
            index,
            storage_key: config.storage_key,
            store,
            gesture: GestureTracker::with_config(config.gesture),
        })
    }

    /// Current index, always in `[0, len)`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction requires at least three items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item sources.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to rebuild the carousel from it.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The gesture tracker.
    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Re-read the persisted index, discarding any in-flight gesture.
    pub fn restore(&mut self) -> usize {
        self.index = restore_index(&self.store, &self.storage_key, self.items.len());
        self.gesture.pointer_cancel();
        self.index
    }

    /// Render the window for the current index and persist the index.
    pub fn render(&mut self) -> Frame {
        let slots = [-1, 0, 1].map(|offset| {
            let item_index = self.wrap(offset);
            Slot {
                offset,
                item_index,
                source: self.items[item_index].clone(),
            }
        });
        let indicators = (0..self.items.len()).map(|i| i == self.index).collect();

        if let Err(err) = self
            .store
            .save(&self.storage_key, &self.index.to_string())
        {
            tracing::debug!(error = %err, "could not persist carousel index");
        }

        Frame {
            index: self.index,
            slots,
            indicators,
        }
    }

    /// Move one item in `direction` and re-render.
    pub fn step(&mut self, direction: Direction) -> Frame {
        self.index = self.wrap(direction.delta());
        tracing::trace!(index = self.index, ?direction, "carousel step");
        self.render()
    }

    /// Pointer pressed on the carousel.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.gesture.pointer_down(Point::new(x, y));
    }

    /// Pointer moved. Steps at most once per gesture.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<Frame> {
        let direction = self.gesture.pointer_move(Point::new(x, y))?;
        Some(self.step(direction))
    }

    /// Pointer released. A tap advances; a committed drag does not step again.
    pub fn on_pointer_up(&mut self) -> Option<Frame> {
        match self.gesture.pointer_up() {
            GestureEnd::Tap => Some(self.step(Direction::Forward)),
            GestureEnd::Dragged | GestureEnd::Stray => None,
        }
    }

    /// Pointer cancelled by the platform.
    pub fn on_pointer_cancel(&mut self) {
        self.gesture.pointer_cancel();
    }

    fn wrap(&self, offset: isize) -> usize {
        let len = self.items.len() as isize;
        (self.index as isize + offset).rem_euclid(len) as usize
    }
}

/// Read the persisted index. Absent, unreadable or non-integer values give 0;
/// out-of-range integers wrap into `[0, len)`.
fn restore_index<S: IndexStore>(store: &S, key: &str, len: usize) -> usize {
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return 0,
        Err(err) => {
            tracing::debug!(error = %err, "carousel index unreadable; starting at 0");
            return 0;
        }
    };

    match raw.trim().parse::<i64>() {
        Ok(value) => value.rem_euclid(len as i64) as usize,
        Err(_) => {
            tracing::debug!(%raw, "carousel index is not an integer; starting at 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn carousel(store: MemoryStore) -> CarouselEngine<MemoryStore> {
        CarouselEngine::new(CarouselConfig::default(), store).unwrap()
    }

    #[test]
    fn render_shows_neighbours_with_wraparound() {
        let mut c = carousel(MemoryStore::new());
        let frame = c.render();

        assert_eq!(frame.item_indices(), [11, 0, 1]);
        assert_eq!(frame.slots[0].source, "photos/photo12.jpg");
        assert_eq!(frame.slots[1].offset, 0);
        assert_eq!(frame.active_indicator(), Some(0));
        assert_eq!(frame.indicators.iter().filter(|&&a| a).count(), 1);
    }

    #[test]
    fn render_persists_index() {
        let mut c = carousel(MemoryStore::new());
        c.step(Direction::Forward);
        c.step(Direction::Forward);
        assert_eq!(c.store().get("photoIndex"), Some("2"));
    }

    #[test]
    fn backward_from_zero_wraps() {
        let mut c = carousel(MemoryStore::new());
        let frame = c.step(Direction::Backward);
        assert_eq!(frame.index, 11);
        assert_eq!(frame.item_indices(), [10, 11, 0]);
    }

    #[test]
    fn restore_handles_bad_values() {
        for raw in ["", "abc", "2.5", "NaN"] {
            let c = carousel(MemoryStore::with_entry("photoIndex", raw));
            assert_eq!(c.index(), 0, "raw value {raw:?}");
        }
        let c = carousel(MemoryStore::with_entry("photoIndex", " 7 "));
        assert_eq!(c.index(), 7);
        let c = carousel(MemoryStore::with_entry("photoIndex", "15"));
        assert_eq!(c.index(), 3);
        let c = carousel(MemoryStore::with_entry("photoIndex", "-1"));
        assert_eq!(c.index(), 11);
    }

    #[test]
    fn restore_rereads_store() {
        let mut c = carousel(MemoryStore::new());
        c.step(Direction::Forward);
        c.step(Direction::Forward);
        c.on_pointer_down(0.0, 0.0);

        assert_eq!(c.restore(), 2);
        assert_eq!(c.on_pointer_up(), None);
    }

    #[derive(Debug, Default)]
    struct BrokenStore;

    impl IndexStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }
        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("QuotaExceededError".into()))
        }
    }

    #[test]
    fn broken_store_degrades_to_default() {
        let mut c = CarouselEngine::new(CarouselConfig::default(), BrokenStore).unwrap();
        assert_eq!(c.index(), 0);
        let frame = c.step(Direction::Forward);
        assert_eq!(frame.index, 1);
    }

    #[test]
    fn tap_advances_and_drag_release_does_not() {
        let mut c = carousel(MemoryStore::new());

        c.on_pointer_down(100.0, 100.0);
        let frame = c.on_pointer_up().expect("tap steps");
        assert_eq!(frame.index, 1);

        c.on_pointer_down(100.0, 100.0);
        assert!(c.on_pointer_move(50.0, 105.0).is_some());
        assert_eq!(c.on_pointer_up(), None);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn cancel_is_not_a_tap() {
        let mut c = carousel(MemoryStore::new());
        c.on_pointer_down(0.0, 0.0);
        c.on_pointer_cancel();
        assert_eq!(c.on_pointer_up(), None);
        assert_eq!(c.index(), 0);
    }
}
