use crate::config::AppConfig;
use crate::lock::clock::ClockFace;
use crate::lock::gesture::{LockLayer, LockState};
use crate::ui::layout;
use ratatui::layout::Rect;

/// Everything the UI draws from. The lock layer and clock are only ever
/// replaced by commits coming back from the screen session.
pub struct AppState {
    pub config: AppConfig,
    pub layer: LockLayer,
    pub clock: ClockFace,
    /// Full terminal area.
    pub screen: Rect,
    /// Row of the last mouse position while a mouse drag is in progress.
    pub drag_row: Option<u16>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, screen: Rect) -> Self {
        Self {
            config,
            layer: LockLayer::default(),
            clock: ClockFace::default(),
            screen,
            drag_row: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn phone_area(&self) -> Rect {
        layout::compute_layout(self.screen).phone
    }

    /// Simulated pixels covered by one terminal row of the phone viewport.
    pub fn px_per_row(&self) -> f64 {
        self.config.screen.height_px / f64::from(self.phone_area().height.max(1))
    }

    /// How many rows the lock layer is currently pushed up.
    pub fn offset_rows(&self) -> u16 {
        let height = self.phone_area().height;
        let rows = (-self.layer.offset() / self.px_per_row()).round();
        rows.clamp(0.0, f64::from(height)) as u16
    }

    pub fn gesture_attached(&self) -> bool {
        self.layer.state != LockState::Unlocked
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        self.drag_row = None;
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        match self.layer.state {
            LockState::Locked => "Swipe up to unlock (drag, or Up + Enter)".to_string(),
            LockState::Unlocking => format!(
                "Release to {}",
                if -self.layer.offset() > self.config.screen.swipe_threshold_px {
                    "unlock"
                } else {
                    "cancel"
                }
            ),
            LockState::Unlocked => "Unlocked".to_string(),
        }
    }
}
