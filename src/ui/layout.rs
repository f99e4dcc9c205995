use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub phone: Rect,
    pub status_bar: Rect,
}

/// Terminal cells are roughly twice as tall as they are wide, so a 2:3
/// portrait screen needs about four columns for every three rows.
const PHONE_COLS_PER_ROW: f64 = 4.0 / 3.0;

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: phone | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Phone viewport
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let phone_width = (f64::from(content.height) * PHONE_COLS_PER_ROW).round() as u16;
    let phone = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Length(phone_width.min(content.width))])
        .split(content)[0];

    AppLayout { phone, status_bar }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_is_centered_portrait() {
        let layout = compute_layout(Rect::new(0, 0, 80, 25));
        assert_eq!(layout.phone, Rect::new(24, 0, 32, 24));
        assert_eq!(layout.status_bar, Rect::new(0, 24, 80, 1));
    }

    #[test]
    fn test_narrow_terminal_caps_width() {
        let layout = compute_layout(Rect::new(0, 0, 20, 31));
        assert_eq!(layout.phone.width, 20);
        assert_eq!(layout.phone.height, 30);
    }
}
