//! Embedded center glyphs, resolved by name
//!
//! Icons are plain SVG sources tinted at render time through
//! `svg::Style`, so a single set works for any label color.

/// Pencil tip (edit)
pub const PENCIL_TIP: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M3 17.25V21h3.75L17.81 9.94l-3.75-3.75L3 17.25zM20.71 7.04a1 1 0 0 0 0-1.41l-2.34-2.34a1 1 0 0 0-1.41 0l-1.83 1.83 3.75 3.75 1.83-1.83z"/></svg>"#;

/// Check mark
pub const CHECK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M9 16.17 4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"/></svg>"#;

/// Close cross
pub const CLOSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M19 6.41 17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/></svg>"#;

/// Play triangle
pub const PLAY: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M8 5v14l11-7z"/></svg>"#;

/// Pause bars
pub const PAUSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M6 19h4V5H6v14zm8-14v14h4V5h-4z"/></svg>"#;

/// Download arrow
pub const DOWNLOAD: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z"/></svg>"#;

/// Heart
pub const HEART: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z"/></svg>"#;

/// Warning triangle
pub const WARNING: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z"/></svg>"#;

/// Resolve a glyph by its kebab-case name
pub fn resolve(name: &str) -> Option<&'static str> {
    match name {
        "pencil-tip" | "pencil" => Some(PENCIL_TIP),
        "check" => Some(CHECK),
        "close" | "cross" => Some(CLOSE),
        "play" => Some(PLAY),
        "pause" => Some(PAUSE),
        "download" => Some(DOWNLOAD),
        "heart" => Some(HEART),
        "warning" => Some(WARNING),
        _ => None,
    }
}

/// The recognized glyph names
pub fn names() -> &'static [&'static str] {
    &[
        "check", "close", "download", "heart", "pause", "pencil-tip", "play", "warning",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(resolve("pencil-tip"), Some(PENCIL_TIP));
        assert_eq!(resolve("check"), Some(CHECK));
        assert_eq!(resolve("heart"), Some(HEART));
    }

    #[test]
    fn unknown_names_do_not() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("sparkles"), None);
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in names() {
            assert!(resolve(name).is_some(), "{name} missing from registry");
        }
    }
}
