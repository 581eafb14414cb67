//! Use-case catalog view

use super::widgets::render_scrollable_list;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const WELCOME_TITLE: &str = "Welcome to Your AI Assistant Customizer";
const WELCOME: &str = "This interactive tool helps you generate perfectly customized AI prompts \
for your specific real estate situations. Simply select a use case below, fill in your details, \
and get a ready-to-use prompt that you can copy directly into any agentic browser \
(Comet, ChatGPT, Claude).";
const PRO_TIP: &str = "These prompts work best when you provide specific details. \
The more context you add, the better your AI assistant can help you.";
const SECURITY_NOTICE: &str = "Never input sensitive client information (SSNs, financial \
details, legal documents) into AI tools. Use this generator for templates and frameworks, \
then add client-specific details in your secure systems.";

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if !app.config.show_tips() {
        draw_list(frame, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Welcome + pro tip
            Constraint::Min(6),    // Use cases
            Constraint::Length(4), // Security notice
        ])
        .split(area);

    draw_intro(frame, chunks[0]);
    draw_list(frame, chunks[1], app);
    draw_security_notice(frame, chunks[2]);
}

fn draw_intro(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(WELCOME),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "💡 Pro Tip: ",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(PRO_TIP, Style::default().fg(Color::Blue)),
        ]),
    ];

    let intro = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {WELCOME_TITLE} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(intro, area);
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .catalog
        .all()
        .iter()
        .map(|use_case| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{} ", use_case.icon)),
                    Span::styled(use_case.title, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(
                    format!("   {}", use_case.description),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Choose Your Use Case ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    render_scrollable_list(frame, area, list, app.state.selected_index);
}

fn draw_security_notice(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new(Line::from(vec![
        Span::styled(
            "🔒 Security Notice: ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(SECURITY_NOTICE, Style::default().fg(Color::Gray)),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(notice, area);
}
