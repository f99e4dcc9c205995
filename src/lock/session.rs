//! One displayed screen: the gesture controller, the refreshers feeding it,
//! and the render target everything commits into.

use crate::config::AppConfig;
use crate::lock::clock::ClockFace;
use crate::lock::gesture::{GestureController, LockLayer};
use crate::lock::refresher::{PeriodicRefresher, RefreshError};
use crate::lock::render::{RenderTarget, RenderUpdate};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ScreenSession<T: RenderTarget> {
    config: AppConfig,
    gesture: GestureController,
    target: Arc<T>,
    clock: Option<PeriodicRefresher>,
    debug_poll: Option<PeriodicRefresher>,
}

impl<T: RenderTarget> ScreenSession<T> {
    pub fn new(config: AppConfig, target: T) -> Self {
        let gesture = GestureController::new(config.screen.geometry());
        Self {
            config,
            gesture,
            target: Arc::new(target),
            clock: None,
            debug_poll: None,
        }
    }

    pub fn layer(&self) -> LockLayer {
        self.gesture.layer()
    }

    /// False once the screen is unlocked; drag input should no longer be routed
    /// here.
    pub fn gesture_attached(&self) -> bool {
        !self.gesture.is_unlocked()
    }

    /// Show the current time right away, then keep it fresh on the configured
    /// interval. The tick stops itself once the screen can no longer be drawn.
    pub fn start_clock(&mut self) -> Result<(), RefreshError> {
        let clock_cfg = self.config.clock.clone();
        if let Err(e) = self.target.commit(RenderUpdate::Clock(ClockFace::now(&clock_cfg))) {
            warn!(error = %e, "initial clock render failed");
        }

        let target = self.target.clone();
        let refresher = PeriodicRefresher::start(
            "clock",
            self.config.clock.refresh_interval(),
            move |handle| {
                let face = ClockFace::now(&clock_cfg);
                if let Err(e) = target.commit(RenderUpdate::Clock(face)) {
                    info!(reason = %e.reason, "screen closed, stopping clock");
                    handle.stop();
                }
                Ok(())
            },
        )?;
        self.replace_refresher(Slot::Clock, refresher);
        Ok(())
    }

    /// Start the debug poller if one is configured. Returns whether it runs.
    pub fn start_debug_poll(&mut self) -> Result<bool, RefreshError> {
        let Some(interval) = self.config.debug.poll_interval() else {
            return Ok(false);
        };

        let target = self.target.clone();
        let refresher = PeriodicRefresher::start("debug-poll", interval, move |handle| {
            if let Err(e) = target.commit(RenderUpdate::DebugPoll) {
                debug!(reason = %e.reason, "screen closed, stopping debug poll");
                handle.stop();
            }
            Ok(())
        })?;
        self.replace_refresher(Slot::DebugPoll, refresher);
        Ok(true)
    }

    /// Returns whether the update was applied.
    pub fn drag_update(&mut self, delta_y: f64) -> bool {
        match self.gesture.on_drag_update(delta_y) {
            Some(layer) => {
                self.commit_layer(layer);
                true
            }
            None => false,
        }
    }

    /// Returns whether a drag was in progress.
    pub fn drag_end(&mut self) -> bool {
        match self.gesture.on_drag_end() {
            Some(layer) => {
                if !self.gesture_attached() {
                    info!("screen unlocked, detaching gesture input");
                }
                self.commit_layer(layer);
                true
            }
            None => false,
        }
    }

    /// Stop every refresher and wait for their tasks to exit.
    pub async fn shutdown(mut self) {
        if let Some(clock) = self.clock.take() {
            clock.shutdown().await;
        }
        if let Some(poll) = self.debug_poll.take() {
            poll.shutdown().await;
        }
        debug!("screen session closed");
    }

    fn commit_layer(&self, layer: LockLayer) {
        if let Err(e) = self.target.commit(RenderUpdate::Layer(layer)) {
            warn!(error = %e, "lock layer render dropped");
        }
    }

    fn replace_refresher(&mut self, slot: Slot, refresher: PeriodicRefresher) {
        let previous = match slot {
            Slot::Clock => self.clock.replace(refresher),
            Slot::DebugPoll => self.debug_poll.replace(refresher),
        };
        if let Some(previous) = previous {
            previous.stop();
        }
    }
}

enum Slot {
    Clock,
    DebugPoll,
}
