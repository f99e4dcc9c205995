use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    const WALLPAPER_TOP: (u8, u8, u8) = (28, 42, 84);
    const WALLPAPER_BOTTOM: (u8, u8, u8) = (0, 0, 0);
    const HOME_BG: (u8, u8, u8) = (16, 56, 48);

    /// Lock layer background for a row `fraction` of the way down (0.0 top,
    /// 1.0 bottom), darkening toward the bottom edge.
    pub fn wallpaper(fraction: f64, opacity: f64) -> Color {
        let fade = ((fraction - 0.6) / 0.4).clamp(0.0, 1.0);
        let base = mix(Self::WALLPAPER_TOP, Self::WALLPAPER_BOTTOM, fade);
        rgb(mix(Self::HOME_BG, base, opacity))
    }

    /// White text blended toward the home screen as the layer fades out.
    pub fn lock_text(opacity: f64) -> Style {
        Style::default().fg(rgb(mix(Self::HOME_BG, (255, 255, 255), opacity)))
    }

    pub fn clock(opacity: f64) -> Style {
        Self::lock_text(opacity).add_modifier(Modifier::BOLD)
    }

    /// The pill sits at 60% opacity on top of the layer's own.
    pub fn pill(opacity: f64) -> Style {
        Self::lock_text(opacity * 0.6)
    }

    pub fn home() -> Style {
        Style::default().fg(Color::White).bg(rgb(Self::HOME_BG))
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn state_locked() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }

    pub fn state_unlocking() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }

    pub fn state_unlocked() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }
}

fn mix(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    (lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_fades_into_home() {
        assert_eq!(Theme::lock_text(1.0).fg, Some(Color::Rgb(255, 255, 255)));
        assert_eq!(Theme::lock_text(0.0).fg, Some(Color::Rgb(16, 56, 48)));
    }

    #[test]
    fn test_wallpaper_darkens_at_bottom() {
        assert_eq!(Theme::wallpaper(0.0, 1.0), Color::Rgb(28, 42, 84));
        assert_eq!(Theme::wallpaper(1.0, 1.0), Color::Rgb(0, 0, 0));
    }
}
