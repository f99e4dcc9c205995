use crate::lock::render::{RenderTarget, RenderUnavailable, RenderUpdate};
use crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Screen change committed by the session or one of its refreshers
    Render(RenderUpdate),
}

/// Render target feeding commits back into the UI event loop. Once the loop
/// has exited, commits report [`RenderUnavailable`].
#[derive(Debug, Clone)]
pub struct EventTarget {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventTarget {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl RenderTarget for EventTarget {
    fn commit(&self, update: RenderUpdate) -> Result<(), RenderUnavailable> {
        self.tx
            .send(AppEvent::Render(update))
            .map_err(|_| RenderUnavailable::new("event loop has exited"))
    }
}
