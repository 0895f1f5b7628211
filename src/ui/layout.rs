// src/ui/layout.rs
//! Layout computation for the screen and the add-item dialog.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed areas for the single screen.
pub struct ScreenLayout {
    /// Header bar across the top
    pub header: Rect,
    /// To-do list below it
    pub list: Rect,
}

/// Split the frame into the header bar and the list area.
pub fn compute_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        list: chunks[1],
    }
}

/// Centered rect taking the given percentages of `r`, used for the dialog.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
