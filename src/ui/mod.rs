mod home;
pub mod layout;
mod lock_layer;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

/// Draw order matters: the lock layer covers the home screen until it has been
/// swiped away.
pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    home::render(frame, app_layout.phone, state);
    lock_layer::render(frame, app_layout.phone, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
