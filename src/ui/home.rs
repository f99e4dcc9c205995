use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Home screen sitting underneath the lock layer.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" {} ", state.config.ui.home_title))
        .title_style(Theme::title())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .style(Theme::home());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(state.clock.time.clone(), Theme::title())),
        Line::from(""),
        Line::from(Span::styled("Press q to quit", Theme::hint())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
