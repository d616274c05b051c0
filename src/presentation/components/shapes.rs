use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::super::view::ViewContext;

/// Left pane: every shape in the document, selection highlighted.
pub fn render_shapes(frame: &mut Frame<'_>, area: Rect, ctx: &ViewContext<'_>) {
    let items = ctx
        .document
        .shapes()
        .iter()
        .map(|shape| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", shape.kind.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(shape.display_label()),
            ]))
        })
        .collect::<Vec<_>>();

    let mut state = ListState::default();
    if !ctx.document.is_empty() {
        state.select(Some(ctx.selected.min(ctx.document.len() - 1)));
    }

    let list = List::new(items)
        .block(Block::default().title("Shapes").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}
