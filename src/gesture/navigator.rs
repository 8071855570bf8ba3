use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::config::GestureConfig;
use crate::nav::NavigationItem;

use super::sink::NavigationSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right; shows the previous item.
    Right,
    /// Finger moved left; shows the next item.
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Touch-end arrived without a recorded touch-start.
    NoGesture,
    /// Distance or speed stayed under the thresholds.
    BelowThreshold,
    /// A qualifying swipe with no adjacent item in that direction, or the
    /// active route is not one of the items.
    Blocked(SwipeDirection),
    Navigated {
        direction: SwipeDirection,
        index: usize,
        path: String,
    },
}

#[derive(Debug, Clone, Copy)]
struct TouchStart {
    x: f64,
    at: Instant,
}

/// Turns touch-start/touch-end pairs into "previous/next item" navigation.
///
/// Only one gesture is tracked at a time: a new touch-start replaces any
/// start that was never ended. `current_index` mirrors the externally owned
/// active route and must be refreshed through [`sync_active_index`] after
/// every route change.
///
/// [`sync_active_index`]: GestureNavigator::sync_active_index
#[derive(Debug, Clone)]
pub struct GestureNavigator {
    items: Arc<[NavigationItem]>,
    distance_threshold: f64,
    velocity_threshold: f64,
    start: Option<TouchStart>,
    current_index: Option<usize>,
}

impl GestureNavigator {
    pub fn new(items: Arc<[NavigationItem]>, config: &GestureConfig) -> Self {
        Self {
            items,
            distance_threshold: config.distance_threshold,
            velocity_threshold: config.velocity_threshold,
            start: None,
            current_index: None,
        }
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn has_pending_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn sync_active_index(&mut self, path: &str) {
        self.current_index = self.items.iter().position(|item| item.path == path);
        if self.current_index.is_none() {
            debug!(path, "active route not in navigation list; swipes disabled");
        }
    }

    pub fn on_touch_start(&mut self, x: f64, at: Instant) {
        self.start = Some(TouchStart { x, at });
    }

    /// Drops an unfinished gesture, e.g. when the pointer leaves the surface.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn on_touch_end(
        &mut self,
        x: f64,
        at: Instant,
        sink: &mut impl NavigationSink,
    ) -> SwipeOutcome {
        let Some(start) = self.start.take() else {
            return SwipeOutcome::NoGesture;
        };

        let delta_x = x - start.x;
        // A clock that went backwards reads as zero elapsed time.
        let delta_ms = at.saturating_duration_since(start.at).as_nanos() as f64 / 1_000_000.0;
        if !self.qualifies(delta_x, delta_ms) {
            debug!(delta_x, delta_ms, "gesture below swipe thresholds");
            return SwipeOutcome::BelowThreshold;
        }

        let direction = if delta_x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        };
        let Some(index) = self.target_index(direction) else {
            debug!(?direction, current = ?self.current_index, "swipe has no target");
            return SwipeOutcome::Blocked(direction);
        };

        let path = self.items[index].path.clone();
        debug!(?direction, index, path = %path, "swipe navigation");
        sink.navigate_to(&path);
        SwipeOutcome::Navigated {
            direction,
            index,
            path,
        }
    }

    fn qualifies(&self, delta_x: f64, delta_ms: f64) -> bool {
        let distance = delta_x.abs();
        if distance <= self.distance_threshold {
            return false;
        }
        if delta_ms <= 0.0 {
            return true;
        }
        distance / delta_ms > self.velocity_threshold
    }

    fn target_index(&self, direction: SwipeDirection) -> Option<usize> {
        let current = self.current_index?;
        let target = match direction {
            SwipeDirection::Right => current.checked_sub(1)?,
            SwipeDirection::Left => current + 1,
        };
        (target < self.items.len()).then_some(target)
    }
}
