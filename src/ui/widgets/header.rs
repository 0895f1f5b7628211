// src/ui/widgets/header.rs
//! Header bar widget: title plus key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::config::Theme;

/// Render the header bar.
pub fn render_header(f: &mut Frame<'_>, area: Rect, open_count: usize, theme: &Theme) {
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
        area,
    );

    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            " To-Do ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(if open_count > 0 {
            format!("{} open", open_count)
        } else {
            String::new()
        }),
    ]);
    f.render_widget(Paragraph::new(title), inner[0]);

    let hints = Line::from(Span::styled(
        "a: add  space: toggle  q: quit",
        Style::default().add_modifier(Modifier::DIM),
    ));
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Right), inner[1]);
}
