use crate::app::state::AppState;
use crate::lock::gesture::LockState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(spans(area.width, state));
    frame.render_widget(Paragraph::new(line), area);
}

fn spans(width: u16, state: &AppState) -> Vec<Span<'static>> {
    let lock_state = state.layer.state;
    let state_style = match lock_state {
        LockState::Locked => Theme::state_locked(),
        LockState::Unlocking => Theme::state_unlocking(),
        LockState::Unlocked => Theme::state_unlocked(),
    };

    let mut parts: Vec<Span<'static>> = vec![
        Span::styled(format!(" [{}] ", lock_state.label()), state_style),
        Span::styled(format!(" {} ", state.status_line()), Theme::status_bar()),
    ];

    // Clock on the right; pad to fill remaining space
    let clock = format!(" {} ", state.clock.time);
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = usize::from(width).saturating_sub(used + clock.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(clock, Theme::status_bar()));
    parts
}
