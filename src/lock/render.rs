//! Render-commit seam between the session and the presentation layer.

use crate::lock::clock::ClockFace;
use crate::lock::gesture::LockLayer;
use thiserror::Error;

/// Something the presentation layer should apply to the visible screen.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderUpdate {
    Layer(LockLayer),
    Clock(ClockFace),
    /// Periodic debug poll; the presentation layer logs its current snapshot.
    DebugPoll,
}

/// The screen a commit was aimed at is gone.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("render target unavailable: {reason}")]
pub struct RenderUnavailable {
    pub reason: String,
}

impl RenderUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

pub trait RenderTarget: Send + Sync + 'static {
    fn commit(&self, update: RenderUpdate) -> Result<(), RenderUnavailable>;
}
