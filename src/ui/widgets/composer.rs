// src/ui/widgets/composer.rs
//! Add-item dialog widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::config::Theme;
use crate::ui::layout::centered_rect;

/// Render the add-item dialog over the screen, with the terminal cursor
/// placed at the end of the draft.
pub fn render_composer(f: &mut Frame<'_>, area: Rect, pending_text: &str, theme: &Theme) {
    let popup = centered_rect(60, 30, area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .title(" Add To-Do "),
        popup,
    );

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(popup);

    f.render_widget(Paragraph::new("Title"), inner[0]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let input_area = inner[1];
    if pending_text.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "What needs doing?",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .block(input_block),
            input_area,
        );
    } else {
        f.render_widget(Paragraph::new(pending_text).block(input_block), input_area);
    }

    // Cursor at the end of the draft, clamped inside the input box
    let cursor_x = (input_area.x + 1 + pending_text.chars().count() as u16)
        .min(input_area.right().saturating_sub(2));
    f.set_cursor_position((cursor_x, input_area.y + 1));

    f.render_widget(
        Paragraph::new(Span::styled(
            "enter: add    esc: cancel",
            Style::default().add_modifier(Modifier::DIM),
        )),
        inner[3],
    );
}
