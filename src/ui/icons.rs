// src/ui/icons.rs
//! Glyph mappings for the to-do rows.

/// Get the checkbox glyph for an item's completion state.
pub fn checkbox_icon(is_finished: bool) -> &'static str {
    if is_finished {
        "\u{f046}" // checked box
    } else {
        "\u{f096}" // empty box
    }
}

/// Pomodoro timer placeholder shown at the end of every row.
pub const TIMER_ICON: &str = "\u{f017}";

/// Detail-screen placeholder shown at the end of every row.
pub const SHOW_MORE_ICON: &str = "\u{f054}";
