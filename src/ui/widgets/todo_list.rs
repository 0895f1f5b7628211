// src/ui/widgets/todo_list.rs
//! Checkbox list widget for the to-do items.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

use crate::config::Theme;
use crate::todo::ToDoItem;
use crate::ui::icons::{SHOW_MORE_ICON, TIMER_ICON, checkbox_icon};

/// Render the to-do list.
pub fn render_todo_list(
    f: &mut Frame<'_>,
    area: Rect,
    items: &[ToDoItem],
    state: &mut ListState,
    theme: &Theme,
) {
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let text_style = if item.is_finished {
                Style::default()
                    .fg(theme.done)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(checkbox_icon(item.is_finished), Style::default().fg(theme.accent)),
                Span::raw(" "),
                Span::styled(item.text.clone(), text_style),
                Span::raw("  "),
                Span::styled(TIMER_ICON, Style::default().add_modifier(Modifier::DIM)),
                Span::raw(" "),
                Span::styled(SHOW_MORE_ICON, Style::default().add_modifier(Modifier::DIM)),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::REVERSED),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
