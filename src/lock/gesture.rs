//! Swipe-to-unlock gesture controller.
//!
//! Converts a stream of vertical drag updates plus a single drag-end into lock
//! layer position/opacity updates and a final locked/unlocked decision.
//!
//! ```text
//! Locked --(update, delta < 0)--> Unlocking --(update, delta < 0)--> Unlocking
//! Unlocking --(end, offset < -threshold)--> Unlocked   (terminal)
//! Unlocking --(end, otherwise)-----------> Locked
//! ```
//!
//! The controller never fails: calls that make no sense in the current state
//! (an end without a drag, any input after unlocking) are no-ops.

use tracing::debug;

/// Opacity floor while the layer is being dragged.
pub const MIN_DRAG_OPACITY: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    /// A drag is in progress.
    Unlocking,
    /// Terminal for the session.
    Unlocked,
}

impl LockState {
    pub fn label(self) -> &'static str {
        match self {
            LockState::Locked => "LOCKED",
            LockState::Unlocking => "UNLOCKING",
            LockState::Unlocked => "UNLOCKED",
        }
    }
}

/// Position and opacity of the lock layer at one point of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Vertical offset in pixels. Zero is the resting position, negative is up.
    pub offset: f64,
    pub opacity: f64,
}

impl DragSample {
    pub const RESTING: DragSample = DragSample {
        offset: 0.0,
        opacity: 1.0,
    };

    /// Sample for a mid-drag offset: the layer fades as it travels up, but
    /// never below [`MIN_DRAG_OPACITY`].
    pub fn at(offset: f64, screen_height: f64) -> Self {
        let opacity = (1.0 - offset.abs() / screen_height).max(MIN_DRAG_OPACITY);
        Self { offset, opacity }
    }

    /// Fully swiped away.
    pub fn dismissed(screen_height: f64) -> Self {
        Self {
            offset: -screen_height,
            opacity: 0.0,
        }
    }
}

/// Observable state of the lock layer, handed to the presentation layer after
/// every accepted call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockLayer {
    pub sample: DragSample,
    pub state: LockState,
}

impl LockLayer {
    pub fn offset(&self) -> f64 {
        self.sample.offset
    }

    pub fn opacity(&self) -> f64 {
        self.sample.opacity
    }
}

impl Default for LockLayer {
    fn default() -> Self {
        Self {
            sample: DragSample::RESTING,
            state: LockState::Locked,
        }
    }
}

/// Screen geometry the controller works against, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureGeometry {
    pub screen_height: f64,
    /// Upward distance the drag must exceed to commit an unlock.
    pub swipe_threshold: f64,
    /// Keep the offset within `[-screen_height, 0]` while dragging.
    pub clamp_drag: bool,
}

#[derive(Debug, Clone)]
pub struct GestureController {
    geometry: GestureGeometry,
    layer: LockLayer,
}

impl GestureController {
    pub fn new(geometry: GestureGeometry) -> Self {
        Self {
            geometry,
            layer: LockLayer::default(),
        }
    }

    pub fn layer(&self) -> LockLayer {
        self.layer
    }

    /// The gesture source should be detached once this returns true.
    pub fn is_unlocked(&self) -> bool {
        self.layer.state == LockState::Unlocked
    }

    /// Apply an incremental vertical movement. Only upward (negative) movement
    /// is applied; everything else is ignored and returns `None`.
    pub fn on_drag_update(&mut self, delta_y: f64) -> Option<LockLayer> {
        if self.is_unlocked() || delta_y.is_nan() || delta_y >= 0.0 {
            return None;
        }

        let mut offset = self.layer.sample.offset + delta_y;
        if self.geometry.clamp_drag {
            offset = offset.max(-self.geometry.screen_height);
        }

        self.layer = LockLayer {
            sample: DragSample::at(offset, self.geometry.screen_height),
            state: LockState::Unlocking,
        };
        Some(self.layer)
    }

    /// Finish the drag: commit the unlock if the threshold was exceeded,
    /// otherwise snap back to the resting position.
    pub fn on_drag_end(&mut self) -> Option<LockLayer> {
        if self.layer.state != LockState::Unlocking {
            return None;
        }

        let offset = self.layer.sample.offset;
        self.layer = if offset < -self.geometry.swipe_threshold {
            debug!(offset, "swipe exceeded threshold, unlocking");
            LockLayer {
                sample: DragSample::dismissed(self.geometry.screen_height),
                state: LockState::Unlocked,
            }
        } else {
            debug!(offset, "swipe below threshold, snapping back");
            LockLayer::default()
        };
        Some(self.layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GestureGeometry {
        GestureGeometry {
            screen_height: 1280.0,
            swipe_threshold: 200.0,
            clamp_drag: false,
        }
    }

    fn controller() -> GestureController {
        GestureController::new(geometry())
    }

    #[test]
    fn test_upward_updates_accumulate() {
        let mut gc = controller();
        for delta in [-10.0, -25.5, -64.5] {
            assert!(gc.on_drag_update(delta).is_some());
        }
        let layer = gc.layer();
        assert_eq!(layer.offset(), -100.0);
        assert_eq!(layer.opacity(), 1.0 - 100.0 / 1280.0);
        assert_eq!(layer.state, LockState::Unlocking);
    }

    #[test]
    fn test_opacity_floor() {
        let mut gc = controller();
        gc.on_drag_update(-1200.0);
        assert_eq!(gc.layer().opacity(), MIN_DRAG_OPACITY);
    }

    #[test]
    fn test_non_negative_deltas_ignored() {
        let mut gc = controller();
        gc.on_drag_update(-40.0);
        let before = gc.layer();
        assert_eq!(gc.on_drag_update(0.0), None);
        assert_eq!(gc.on_drag_update(35.0), None);
        assert_eq!(gc.on_drag_update(f64::NAN), None);
        assert_eq!(gc.layer(), before);
    }

    #[test]
    fn test_unlock_scenario() {
        let mut gc = controller();
        gc.on_drag_update(-50.0);
        gc.on_drag_update(-60.0);
        gc.on_drag_update(-100.0);
        let layer = gc.on_drag_end().unwrap();
        assert_eq!(layer.offset(), -1280.0);
        assert_eq!(layer.opacity(), 0.0);
        assert_eq!(layer.state, LockState::Unlocked);
        assert!(gc.is_unlocked());
    }

    #[test]
    fn test_snap_back_scenario() {
        let mut gc = controller();
        gc.on_drag_update(-100.0);
        gc.on_drag_update(-50.0);
        let layer = gc.on_drag_end().unwrap();
        assert_eq!(layer, LockLayer::default());
        assert_eq!(layer.state, LockState::Locked);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut gc = controller();
        gc.on_drag_update(-200.0);
        assert_eq!(gc.on_drag_end().unwrap().state, LockState::Locked);

        gc.on_drag_update(-200.5);
        assert_eq!(gc.on_drag_end().unwrap().state, LockState::Unlocked);
    }

    #[test]
    fn test_end_without_drag_is_noop() {
        let mut gc = controller();
        assert_eq!(gc.on_drag_end(), None);
        gc.on_drag_update(10.0);
        assert_eq!(gc.on_drag_end(), None);
        assert_eq!(gc.layer(), LockLayer::default());
    }

    #[test]
    fn test_unlocked_is_terminal() {
        let mut gc = controller();
        gc.on_drag_update(-500.0);
        gc.on_drag_end();
        let unlocked = gc.layer();

        assert_eq!(gc.on_drag_update(-20.0), None);
        assert_eq!(gc.on_drag_end(), None);
        assert_eq!(gc.layer(), unlocked);
        assert_eq!(gc.layer().state, LockState::Unlocked);
    }

    #[test]
    fn test_offset_unclamped_by_default() {
        let mut gc = controller();
        gc.on_drag_update(-2000.0);
        assert_eq!(gc.layer().offset(), -2000.0);
        assert_eq!(gc.layer().opacity(), MIN_DRAG_OPACITY);
    }

    #[test]
    fn test_clamped_drag() {
        let mut gc = GestureController::new(GestureGeometry {
            clamp_drag: true,
            ..geometry()
        });
        gc.on_drag_update(-2000.0);
        assert_eq!(gc.layer().offset(), -1280.0);
        assert_eq!(gc.layer().state, LockState::Unlocking);
    }
}
