//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a single-line field, borders included
const SINGLE_LINE_HEIGHT: u16 = 3;
/// Rows taken by a multi-line field, borders included
const MULTI_LINE_HEIGHT: u16 = 6;

const CURSOR: &str = "▌";

/// Height a field needs in the form
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        MULTI_LINE_HEIGHT
    } else {
        SINGLE_LINE_HEIGHT
    }
}

/// Draw a form field with its label, required marker and value
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let accent = if is_active { Color::Cyan } else { Color::DarkGray };
    let cursor = Span::styled(
        if is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let mut lines: Vec<Line> = if field.is_enumerated() {
        let hint = if is_active { "  ←/→" } else { "" };
        vec![Line::from(vec![
            Span::styled(field.display_value(), Style::default().fg(value_color(is_active))),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ])]
    } else if field.value().is_empty() {
        let placeholder = field.spec.placeholder.unwrap_or("");
        vec![Line::from(vec![
            cursor.clone(),
            Span::styled(
                placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])]
    } else {
        // split rather than lines() so a trailing newline shows an empty row
        field
            .value()
            .split('\n')
            .map(|l| {
                Line::from(Span::styled(
                    l.to_string(),
                    Style::default().fg(value_color(is_active)),
                ))
            })
            .collect()
    };

    if !field.is_enumerated() && !field.value().is_empty() {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let mut title = vec![Span::raw(format!(" {}", field.label()))];
    if field.spec.required {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    title.push(Span::raw(" "));

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    // Keep the end of long multi-line input in view
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible.max(1)) as u16;

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn value_color(is_active: bool) -> Color {
    if is_active {
        Color::White
    } else {
        Color::Gray
    }
}
