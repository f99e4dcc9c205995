/// Work the event loop performs on the screen session after handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    DragUpdate { delta_y: f64 },
    DragEnd,
    Quit,
}
