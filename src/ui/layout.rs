//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, GENERATE_SHORTCUT};
use crate::state::{NoticeKind, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const APP_TITLE: &str = "Comet Browser Mastery";
const APP_SUBTITLE: &str = "Interactive AI Prompt Generator for Real Estate Professionals";

/// Split the screen into header and content, reserving the bottom line
/// for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header: app title on the catalog, the use case in the generator
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let (title, subtitle) = match app.state.session.as_ref() {
        Some(session) if app.state.current_view == View::Generator => (
            format!("{} {}", session.use_case.icon, session.use_case.title),
            session.use_case.description,
        ),
        _ => (APP_TITLE.to_string(), APP_SUBTITLE),
    };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(&app.state.current_view)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(notice) = &app.state.notice {
        let color = match notice.kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Info => Color::Yellow,
        };
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            notice.message.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Catalog => "j/k:nav  Enter:open  q:quit".to_string(),
        View::Generator => format!(
            "Tab:next  ←/→:choose  {GENERATE_SHORTCUT}:generate  {COPY_SHORTCUT}:copy  PgUp/PgDn:scroll  Esc:back"
        ),
    }
}
