use ratatui::style::{Color, Modifier};

use crate::domain::SelectChoice;
use crate::form::{
    BoolInput, ColorPicker, ControlAction, ControlState, ControlWidget, NumberInput, SelectInput,
    SizePicker, TextInput,
};
use crate::presentation::components::controls::control_lines;

fn row(label: &str, widget: ControlWidget) -> ControlState {
    ControlState {
        label: label.into(),
        widget,
        action: ControlAction::Text,
    }
}

#[test]
fn focused_labels_are_yellow() {
    let control = row("Opacity:", ControlWidget::Number(NumberInput::new("1", 0.0, 1.0, 0.1)));
    let lines = control_lines(&control, true, 40);
    let label = lines
        .first()
        .and_then(|line| line.spans.first())
        .expect("label span");
    assert_eq!(label.style.fg, Some(Color::Yellow));
    assert!(label.style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn blurred_labels_are_cyan() {
    let control = row("Opacity:", ControlWidget::Number(NumberInput::new("1", 0.0, 1.0, 0.1)));
    let lines = control_lines(&control, false, 40);
    let label = lines
        .first()
        .and_then(|line| line.spans.first())
        .expect("label span");
    assert_eq!(label.style.fg, Some(Color::Cyan));
    assert!(label.style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn number_rows_show_the_buffer_and_range() {
    let control = row(
        "Opacity:",
        ControlWidget::Number(NumberInput::new("0.5", 0.0, 1.0, 0.1)),
    );
    let lines = control_lines(&control, false, 40);
    assert_eq!(lines[1].spans[1].content, "[ 0.5 ]");
    assert_eq!(lines[1].spans[2].content, "  (0 to 1, step 0.1)");
}

#[test]
fn checkbox_rows_mirror_the_state() {
    let mut checkbox = BoolInput::new(None);
    checkbox.toggle();
    let control = row("Open:", ControlWidget::Bool(checkbox));
    let lines = control_lines(&control, false, 40);
    assert_eq!(lines[1].spans[1].content, "[x]");
    assert_eq!(lines[1].spans[3].content, "true");

    let control = row("Open:", ControlWidget::Bool(BoolInput::new(None)));
    let lines = control_lines(&control, false, 40);
    assert_eq!(lines[1].spans[1].content, "[ ]");
    assert_eq!(lines[1].spans[3].content, "false");
}

#[test]
fn swatch_cursor_only_shows_when_focused() {
    let palette = vec!["#1abc9c".to_string(), "#e74c3c".to_string()];
    let control = row("Color:", ControlWidget::Color(ColorPicker::new(&palette)));

    let lines = control_lines(&control, true, 40);
    assert_eq!(lines[1].spans[1].content, "▣", "cursor swatch is hollow");
    assert_eq!(lines[1].spans[1].style.fg, Some(Color::Rgb(0x1a, 0xbc, 0x9c)));
    assert_eq!(lines[1].spans[3].content, "■");

    let lines = control_lines(&control, false, 40);
    assert_eq!(lines[1].spans[1].content, "■", "no cursor when blurred");
}

#[test]
fn long_text_wraps_with_a_caret_on_the_last_segment() {
    let control = row(
        "Text:",
        ControlWidget::Text(TextInput::new("a note long enough to wrap over rows")),
    );
    let lines = control_lines(&control, true, 16);
    assert!(lines.len() >= 4, "label, several segments, spacer");

    let caret = lines[lines.len() - 2].spans.last().expect("caret span");
    assert_eq!(caret.content, "▏");
    assert_eq!(caret.style.fg, Some(Color::Yellow));
}

#[test]
fn empty_drop_downs_show_a_placeholder() {
    let options = vec![SelectChoice::plain("north"), SelectChoice::plain("south")];
    let control = row("Zone:", ControlWidget::Select(SelectInput::new(options, None)));
    let lines = control_lines(&control, false, 40);
    assert_eq!(lines[1].spans[2].content, "(none)");
    assert_eq!(lines[1].spans[4].content, "  -/2");
}

#[test]
fn size_rows_append_the_icon_dimensions() {
    let control = row("Size:", ControlWidget::Size(SizePicker::new()));
    let lines = control_lines(&control, false, 40);
    let suffix = lines[1].spans.last().expect("dimension span");
    assert_eq!(suffix.content, " 30x70 px", "medium pin dimensions");
}
