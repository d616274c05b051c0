use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{domain::MapDocument, form::StyleEditor};

use super::components::{render_controls, render_footer, render_shapes};

pub struct ViewContext<'a> {
    pub title: Option<&'a str>,
    pub document: &'a MapDocument,
    pub selected: usize,
    pub editor: &'a StyleEditor,
    pub form_title: &'a str,
    pub status_message: &'a str,
    pub dirty: bool,
    pub changes: usize,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: ViewContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(7),
            Constraint::Length(4),
        ])
        .split(frame.area());

    render_title(frame, chunks[0], &ctx);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(30)])
        .split(chunks[1]);
    render_shapes(frame, body[0], &ctx);
    render_controls(frame, body[1], &ctx);

    render_footer(frame, chunks[2], &ctx);
}

fn render_title(frame: &mut Frame<'_>, area: Rect, ctx: &ViewContext<'_>) {
    let mut spans = vec![Span::styled(
        ctx.title.unwrap_or("styleforms").to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if ctx.dirty {
        spans.push(Span::styled(
            format!("  {} unsaved edit(s)", ctx.changes),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
