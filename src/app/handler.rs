use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::lock::render::RenderUpdate;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use tracing::{debug, trace};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Render(update) => {
            handle_render(state, update);
            vec![]
        }
    }
}

fn handle_render(state: &mut AppState, update: RenderUpdate) {
    match update {
        RenderUpdate::Layer(layer) => {
            state.layer = layer;
            state.dirty = true;
        }
        RenderUpdate::Clock(face) => {
            trace!(time = %face.time, "clock refreshed");
            state.clock = face;
            state.dirty = true;
        }
        RenderUpdate::DebugPoll => {
            debug!(
                state = state.layer.state.label(),
                offset = state.layer.offset(),
                opacity = state.layer.opacity(),
                clock = %state.clock.time,
                width = state.screen.width,
                height = state.screen.height,
                "debug poll"
            );
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.resize(width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Up | KeyCode::Char('k') if state.gesture_attached() => {
            vec![Action::DragUpdate {
                delta_y: -state.config.input.keyboard_step_px,
            }]
        }
        KeyCode::Enter | KeyCode::Char(' ') if state.gesture_attached() => vec![Action::DragEnd],
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if !state.gesture_attached() {
        state.drag_row = None;
        return vec![];
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let pos = Position::new(mouse.column, mouse.row);
            if state.phone_area().contains(pos) {
                state.drag_row = Some(mouse.row);
            }
            vec![]
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(prev) = state.drag_row else {
                return vec![];
            };
            state.drag_row = Some(mouse.row);
            let rows = i32::from(mouse.row) - i32::from(prev);
            if rows == 0 {
                return vec![];
            }
            vec![Action::DragUpdate {
                delta_y: f64::from(rows) * state.px_per_row(),
            }]
        }
        MouseEventKind::Up(MouseButton::Left) => match state.drag_row.take() {
            Some(_) => vec![Action::DragEnd],
            None => vec![],
        },
        _ => vec![],
    }
}
