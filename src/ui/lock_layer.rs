//! The lock layer: wallpaper, clock and pill, pushed up and faded by the
//! current drag.

use crate::app::state::AppState;
use crate::lock::gesture::LockState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

const PILL: &str = "━━━━━━━━━━";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.layer.state == LockState::Unlocked {
        return;
    }

    let shift = state.offset_rows();
    let visible = area.height.saturating_sub(shift);
    if visible == 0 {
        return;
    }

    let opacity = state.layer.opacity();
    let height = usize::from(area.height);
    let top_padding = height / 10;
    let pill_row = height.saturating_sub(2);

    let lines: Vec<Line> = (0..height)
        .map(|row| {
            let fraction = row as f64 / height.max(1) as f64;
            let bg = Theme::wallpaper(fraction, opacity);
            let line = if row == top_padding {
                Line::styled(state.clock.time.clone(), Theme::clock(opacity))
            } else if row == top_padding + 1 {
                Line::styled(state.clock.date.clone(), Theme::lock_text(opacity))
            } else if row == pill_row && state.config.ui.show_pill {
                Line::styled(PILL, Theme::pill(opacity))
            } else {
                Line::raw("")
            };
            line.style(Style::default().bg(bg))
        })
        .collect();

    let layer = Rect {
        height: visible,
        ..area
    };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .scroll((shift, 0));

    frame.render_widget(Clear, layer);
    frame.render_widget(paragraph, layer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::lock::clock::ClockFace;
    use crate::lock::gesture::{DragSample, LockLayer};
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> Vec<String> {
        let area = state.phone_area();
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();
        terminal
            .draw(|f| render(f, Rect::new(0, 0, area.width, area.height), state))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default(), Rect::new(0, 0, 80, 25));
        state.clock = ClockFace {
            time: "10:42".into(),
            date: "FRIDAY, MAY 17".into(),
        };
        state
    }

    #[test]
    fn test_resting_layer_shows_clock_and_pill() {
        let rows = draw(&state());
        assert!(rows[2].contains("10:42"));
        assert!(rows[3].contains("FRIDAY, MAY 17"));
        assert!(rows[22].contains('━'));
    }

    #[test]
    fn test_drag_moves_layer_up() {
        let mut state = state();
        state.layer = LockLayer {
            sample: DragSample::at(-40.0, 480.0),
            state: LockState::Unlocking,
        };
        let rows = draw(&state);
        assert!(rows[0].contains("10:42"));
        assert!(rows[20].contains('━'));
        assert!(rows[22].trim().is_empty());
    }
}
