use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{hex_to_rgb, normalize_color},
    form::{ControlState, ControlWidget, NumberInput, SelectInput, SizePicker, StrokePicker},
};

use super::super::view::ViewContext;

const SWATCHES_PER_ROW: usize = 10;

/// Right pane: the current form, one multi-line list item per control.
pub fn render_controls(frame: &mut Frame<'_>, area: Rect, ctx: &ViewContext<'_>) {
    let panel = ctx.editor.panel();
    if panel.is_empty() {
        let placeholder = Paragraph::new("No editable controls for this selection").block(
            Block::default()
                .title(ctx.form_title.to_string())
                .borders(Borders::ALL),
        );
        frame.render_widget(placeholder, area);
        return;
    }

    let content_width = area.width.saturating_sub(6);
    let focus = panel.focus();
    let items = panel
        .controls()
        .iter()
        .enumerate()
        .map(|(index, control)| ListItem::new(control_lines(control, index == focus, content_width)))
        .collect::<Vec<_>>();

    let mut state = ListState::default();
    state.select(Some(focus));

    let list = List::new(items)
        .block(
            Block::default()
                .title(ctx.form_title.to_string())
                .borders(Borders::ALL),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}

pub(crate) fn control_lines(
    control: &ControlState,
    is_selected: bool,
    max_width: u16,
) -> Vec<Line<'static>> {
    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(Span::styled(control.label.clone(), label_style))];
    match &control.widget {
        ControlWidget::Color(picker) => {
            lines.extend(swatch_lines(picker.swatches(), picker.cursor(), is_selected));
        }
        ControlWidget::Number(field) => lines.push(number_line(field, is_selected)),
        ControlWidget::Bool(field) => lines.push(bool_line(field.is_checked())),
        ControlWidget::Text(field) => {
            lines.extend(text_lines(field.value(), is_selected, max_width));
        }
        ControlWidget::Select(field) => lines.push(select_line(field, is_selected)),
        ControlWidget::Size(picker) => lines.push(size_line(picker, is_selected)),
        ControlWidget::Stroke(picker) => lines.push(stroke_line(picker, is_selected)),
    }
    lines.push(Line::from(" "));
    lines
}

fn swatch_lines(swatches: &[String], cursor: usize, is_selected: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (row_index, row) in swatches.chunks(SWATCHES_PER_ROW).enumerate() {
        let mut spans = vec![Span::raw("  ")];
        for (col_index, color) in row.iter().enumerate() {
            let index = row_index * SWATCHES_PER_ROW + col_index;
            let style = match hex_to_rgb(&normalize_color(color)) {
                Some((r, g, b)) => Style::default().fg(Color::Rgb(r, g, b)),
                None => Style::default().fg(Color::Gray),
            };
            let glyph = if is_selected && index == cursor {
                "▣"
            } else {
                "■"
            };
            spans.push(Span::styled(glyph, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn number_line(field: &NumberInput, is_selected: bool) -> Line<'static> {
    let value_style = if is_selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ {} ]", field.value()), value_style),
        Span::styled(
            format!("  ({} to {}, step {})", field.min(), field.max(), field.step()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn bool_line(checked: bool) -> Line<'static> {
    let (mark, text) = if checked { ("[x]", "true") } else { ("[ ]", "false") };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(mark, Style::default().fg(Color::White)),
        Span::raw(" "),
        Span::styled(text.to_string(), Style::default().fg(Color::Gray)),
    ])
}

/// Text buffers wrap to the pane width; the caret bar sits after the last
/// wrapped segment of the focused input.
fn text_lines(value: &str, is_selected: bool, max_width: u16) -> Vec<Line<'static>> {
    let clamp = (max_width.max(8) as usize).saturating_sub(2);
    let mut segments: Vec<String> = if UnicodeWidthStr::width(value) <= clamp {
        vec![value.to_string()]
    } else {
        wrap(value, clamp)
            .into_iter()
            .map(|segment| segment.into_owned())
            .collect()
    };
    if segments.is_empty() {
        segments.push(String::new());
    }

    let last = segments.len() - 1;
    segments
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            let mut spans = vec![
                Span::raw("  "),
                Span::styled(segment, Style::default().fg(Color::White)),
            ];
            if is_selected && index == last {
                spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
            }
            Line::from(spans)
        })
        .collect()
}

fn select_line(field: &SelectInput, is_selected: bool) -> Line<'static> {
    let label = field
        .selected_choice()
        .map(|choice| choice.label().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    let position = match field.selected() {
        Some(index) => format!("{}/{}", index + 1, field.options().len()),
        None => format!("-/{}", field.options().len()),
    };
    let label_style = if is_selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
        Span::styled(label, label_style),
        Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("  {position}"), Style::default().fg(Color::DarkGray)),
    ])
}

fn size_line(picker: &SizePicker, is_selected: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (index, size) in picker.sizes().iter().enumerate() {
        let style = if is_selected && index == picker.cursor() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[{}]", size.label()), style));
        spans.push(Span::raw(" "));
    }
    let (width, height) = picker.sizes()[picker.cursor()].icon_dimensions();
    spans.push(Span::styled(
        format!(" {width}x{height} px"),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn stroke_line(picker: &StrokePicker, is_selected: bool) -> Line<'static> {
    let glyphs = ["────────", "── ── ──", "─── · ──"];
    let mut spans = vec![Span::raw("  ")];
    for (index, glyph) in glyphs.iter().enumerate() {
        let style = if is_selected && index == picker.cursor() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled((*glyph).to_string(), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}
