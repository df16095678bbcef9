//! Default palette for the gauge
//! Fixed defaults plus dark/light aware helpers for themed hosts

use iced::{Color, Theme, color};

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

/// Public function to check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    is_dark(theme)
}

// Default sweep gradient stops (iOS system palette)
pub const GRADIENT_RED: Color = color!(0xff3b30);
pub const GRADIENT_ORANGE: Color = color!(0xff9500);
pub const GRADIENT_YELLOW: Color = color!(0xffcc00);
pub const GRADIENT_GREEN: Color = color!(0x34c759);

/// Default track color (neutral light gray)
pub const TRACK: Color = color!(0xf2f2f7);

/// Default label color (percentage text and icons)
pub const LABEL: Color = Color::BLACK;

/// Get track color based on theme
pub fn track_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0x1c1c1e)
    } else {
        TRACK
    }
}

/// Get label color based on theme
pub fn label_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_and_light_tracks_differ() {
        assert_ne!(track_color(&Theme::Dark), track_color(&Theme::Light));
        assert_eq!(track_color(&Theme::Light), TRACK);
    }

    #[test]
    fn label_follows_theme() {
        assert_eq!(label_color(&Theme::Light), Color::BLACK);
        assert_eq!(label_color(&Theme::Dark), Color::WHITE);
    }
}
