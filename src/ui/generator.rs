//! Generator view: form, actions and the generated prompt

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::forms::{draw_field, field_height};
use crate::app::App;
use crate::state::{FormButton, GeneratorSession, PromptForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const NEXT_STEPS: &str = "Copy this prompt and paste it into your agentic browser \
(Comet, ChatGPT, Claude) to get instant, customized assistance for your situation.";

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.state.session.as_ref() else {
        return;
    };

    let (content_area, action_area) = split_main(area);
    if session.output.is_some() {
        let (form_area, output_area) = split_content(content_area);
        draw_form(frame, form_area, &session.form);
        draw_output(frame, output_area, session, app.config.show_tips());
    } else {
        draw_form(frame, content_area, &session.form);
    }

    draw_action_panel(frame, action_area, app, session);
}

/// Split into form + output (left) and action panel (right)
fn split_main(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form + output
            Constraint::Length(24), // Action panel
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split the left side into form (top) and output (bottom)
fn split_content(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split the output area into the prompt panel and the tip below it
fn split_output(area: Rect, show_tips: bool) -> (Rect, Rect) {
    let tip_height = if show_tips { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(tip_height)])
        .split(area);
    (chunks[0], chunks[1])
}

fn prompt_block() -> Block<'static> {
    Block::default()
        .title(" Your Customized Prompt ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
}

fn prompt_paragraph(output: &str) -> Paragraph<'_> {
    Paragraph::new(output).wrap(Wrap { trim: false })
}

/// Text area of the prompt panel when the generator fills `area`
pub fn output_viewport(area: Rect, show_tips: bool) -> Rect {
    let (content_area, _) = split_main(area);
    let (_, output_area) = split_content(content_area);
    let (prompt_area, _) = split_output(output_area, show_tips);
    prompt_block().inner(prompt_area)
}

/// Largest scroll offset that still fills `viewport` with `output`
pub fn max_output_scroll(output: &str, viewport: Rect) -> u16 {
    let rows = prompt_paragraph(output).line_count(viewport.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(viewport.height)
}

/// Draw the form fields, scrolled so the active field is visible
fn draw_form(frame: &mut Frame, area: Rect, form: &PromptForm) {
    let form_focused = !form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Your Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heights: Vec<u16> = form.fields.iter().map(field_height).collect();
    let first = first_visible_field(&heights, form.active_field_index, inner.height);

    let mut y = inner.y;
    for (index, field) in form.fields.iter().enumerate().skip(first) {
        let height = heights[index];
        if y + height > inner.y + inner.height {
            break;
        }
        let field_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        draw_field(frame, field_area, field, index == form.active_field_index);
        y += height;
    }
}

/// Index of the first field to draw so that `active` fits in `available` rows
fn first_visible_field(heights: &[u16], active: usize, available: u16) -> usize {
    if active >= heights.len() {
        return 0;
    }
    let mut first = 0;
    let mut used: u16 = heights[..=active].iter().sum();
    while used > available && first < active {
        used -= heights[first];
        first += 1;
    }
    first
}

fn draw_output(frame: &mut Frame, area: Rect, session: &GeneratorSession, show_tips: bool) {
    let (prompt_area, tip_area) = split_output(area, show_tips);

    let output = session.output.as_deref().unwrap_or("");
    let block = prompt_block();
    // The terminal may have shrunk since the offset was set
    let scroll = session
        .output_scroll
        .min(max_output_scroll(output, block.inner(prompt_area)));
    let prompt = prompt_paragraph(output).scroll((scroll, 0)).block(block);
    frame.render_widget(prompt, prompt_area);

    if show_tips {
        let tip = Paragraph::new(Line::from(vec![
            Span::styled(
                "💡 Next Steps: ",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(NEXT_STEPS, Style::default().fg(Color::Blue)),
        ]))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(tip, tip_area);
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App, session: &GeneratorSession) {
    let is_focused = session.form.is_buttons_row_active();
    let selected = session.form.selected_button;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Generate (primary)
            Constraint::Length(BUTTON_HEIGHT), // Copy
            Constraint::Length(BUTTON_HEIGHT), // Back
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (index, button) in FormButton::ALL.into_iter().enumerate() {
        let (label, enabled, accent) = match button {
            FormButton::Generate => (button.label(), true, Some(Color::Green)),
            FormButton::Copy if app.copy_acknowledged() => ("✓ Copied!", true, Some(Color::Green)),
            FormButton::Copy => (button.label(), session.output.is_some(), Some(Color::Green)),
            FormButton::Back => (button.label(), true, None),
        };
        render_action_button(
            frame,
            button_chunks[index],
            label,
            is_focused && selected == button,
            enabled,
            accent,
        );
    }
}
