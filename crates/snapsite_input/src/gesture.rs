//! Gesture resolution for single-pointer carousel input.

use crate::error::CarouselError;
use crate::{DEFAULT_AXIS_RATIO, DEFAULT_MIN_DRAG_DISTANCE};
use serde::{Deserialize, Serialize};

/// Pointer position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Carousel step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Next photo (+1).
    Forward,
    /// Previous photo (-1).
    Backward,
}

impl Direction {
    /// Signed index delta.
    pub fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Direction of a committed horizontal drag: dragging left moves forward.
    pub fn from_drag(dx: f64) -> Self {
        if dx < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// State of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GestureState {
    /// No pointer is down.
    #[default]
    Idle,
    /// Pointer down, no step committed yet.
    Tracking,
    /// This gesture already stepped; further motion is ignored.
    Committed,
}

/// How a gesture ended on pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureEnd {
    /// Press and release without a committed drag.
    Tap,
    /// The gesture already committed a step while dragging.
    Dragged,
    /// Release with no press in progress.
    Stray,
}

/// Drag tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// `|dx|` must exceed `axis_ratio * |dy|`.
    pub axis_ratio: f64,
    /// `|dx|` must exceed this distance.
    pub min_distance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            axis_ratio: DEFAULT_AXIS_RATIO,
            min_distance: DEFAULT_MIN_DRAG_DISTANCE,
        }
    }
}

impl GestureConfig {
    /// Check the tuning is usable.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if !(self.axis_ratio.is_finite() && self.axis_ratio > 0.0) {
            return Err(CarouselError::InvalidGesture(format!(
                "axis_ratio must be positive, got {}",
                self.axis_ratio
            )));
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(CarouselError::InvalidGesture(format!(
                "min_distance must be positive, got {}",
                self.min_distance
            )));
        }
        Ok(())
    }

    /// Check if a displacement is a deliberate horizontal swipe.
    pub fn is_swipe(&self, dx: f64, dy: f64) -> bool {
        dx.abs() > dy.abs() * self.axis_ratio && dx.abs() > self.min_distance
    }
}

/// Tracks one pointer gesture at a time and commits at most one step.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    origin: Point,
    dragging: bool,
    committed: bool,
}

impl GestureTracker {
    /// Create a tracker with default tuning.
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Create with custom tuning.
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            origin: Point::ZERO,
            dragging: false,
            committed: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> GestureState {
        match (self.dragging, self.committed) {
            (false, _) => GestureState::Idle,
            (true, false) => GestureState::Tracking,
            (true, true) => GestureState::Committed,
        }
    }

    /// Where the current gesture started.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Handle pointer down.
    pub fn pointer_down(&mut self, pos: Point) {
        self.origin = pos;
        self.dragging = true;
        self.committed = false;
    }

    /// Handle pointer move. Returns the step to take, at most once per gesture.
    pub fn pointer_move(&mut self, pos: Point) -> Option<Direction> {
        if !self.dragging || self.committed {
            return None;
        }

        let dx = pos.x - self.origin.x;
        let dy = pos.y - self.origin.y;
        if !self.config.is_swipe(dx, dy) {
            return None;
        }

        self.committed = true;
        let direction = Direction::from_drag(dx);
        tracing::trace!(dx, dy, ?direction, "drag committed");
        Some(direction)
    }

    /// Handle pointer up.
    pub fn pointer_up(&mut self) -> GestureEnd {
        let end = match self.state() {
            GestureState::Idle => GestureEnd::Stray,
            GestureState::Tracking => GestureEnd::Tap,
            GestureState::Committed => GestureEnd::Dragged,
        };
        self.dragging = false;
        self.committed = false;
        end
    }

    /// Handle pointer cancel. A cancelled gesture is never a tap.
    pub fn pointer_cancel(&mut self) {
        self.dragging = false;
        self.committed = false;
    }
}
