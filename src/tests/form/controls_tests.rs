use serde_json::{Value, json};

use crate::domain::{MarkerSize, SelectChoice};
use crate::form::{
    BoolInput, ColorPicker, ControlInput, ControlWidget, NumberInput, Reported, SelectInput,
    SizePicker, StrokePicker, TextInput,
};

#[test]
fn number_reports_once_per_edit() {
    let mut field = NumberInput::new("3", 0.0, 20.0, 1.0);
    field.edit("3.5");
    assert_eq!(field.key_up().as_deref(), Some("3.5"));
    assert_eq!(field.key_up(), None, "same value never reports twice");
    assert_eq!(field.commit(), None);
}

#[test]
fn number_commit_reports_a_pending_edit() {
    let mut field = NumberInput::new("1", 0.0, 10.0, 1.0);
    field.edit("7");
    assert_eq!(field.commit().as_deref(), Some("7"));
}

#[test]
fn untouched_number_stays_quiet() {
    let mut field = NumberInput::new("0.5", 0.0, 1.0, 0.1);
    assert_eq!(field.key_up(), None);
}

#[test]
fn number_step_clamps_to_range() {
    let mut field = NumberInput::new("19.5", 0.0, 20.0, 1.0);
    assert_eq!(field.step_by(1).as_deref(), Some("20"));
    assert_eq!(field.step_by(1), None, "already at the cap");

    let mut field = NumberInput::new("0.3", 0.0, 1.0, 0.1);
    assert_eq!(field.step_by(-1).as_deref(), Some("0.2"));
}

#[test]
fn number_step_from_garbage_starts_at_min() {
    let mut field = NumberInput::new("", 5.0, 50.0, 5.0);
    assert_eq!(field.step_by(1).as_deref(), Some("10"));
}

#[test]
fn number_set_value_is_silent() {
    let mut field = NumberInput::new("10", 0.0, 100.0, 1.0);
    field.set_value("42");
    assert_eq!(field.value(), "42");
    assert_eq!(field.key_up(), None, "refresh must not echo a report");
}

#[test]
fn text_reports_every_key_up() {
    let mut widget = ControlWidget::Text(TextInput::new("gate"));
    assert_eq!(widget.handle(ControlInput::Edit("gates".into())), None);
    assert_eq!(
        widget.handle(ControlInput::KeyUp),
        Some(Reported::Text("gates".into()))
    );
    assert_eq!(
        widget.handle(ControlInput::KeyUp),
        Some(Reported::Text("gates".into())),
        "text inputs do not de-duplicate"
    );
}

#[test]
fn checkbox_seeds_from_boolean_or_true_string() {
    assert!(BoolInput::new(Some(&Value::Bool(true))).is_checked());
    assert!(BoolInput::new(Some(&json!("true"))).is_checked());
    assert!(!BoolInput::new(Some(&json!("yes"))).is_checked());
    assert!(!BoolInput::new(Some(&json!(1))).is_checked());
    assert!(!BoolInput::new(None).is_checked());
}

#[test]
fn checkbox_toggle_reports_the_new_state() {
    let mut widget = ControlWidget::Bool(BoolInput::new(None));
    assert_eq!(
        widget.handle(ControlInput::Toggle),
        Some(Reported::Flag(true))
    );
    assert_eq!(
        widget.handle(ControlInput::Toggle),
        Some(Reported::Flag(false))
    );
}

#[test]
fn select_preselects_case_insensitively() {
    let options = vec![
        SelectChoice::labeled("Rectangle", "Rectangle"),
        SelectChoice::labeled("Ellipse", "Ellipse"),
    ];
    let field = SelectInput::new(options.clone(), Some("ellipse"));
    assert_eq!(field.selected(), Some(1));

    let field = SelectInput::new(options, Some("star"));
    assert_eq!(field.selected(), None, "unknown value leaves no selection");
}

#[test]
fn select_move_wraps_and_reports() {
    let options = vec![
        SelectChoice::plain("a"),
        SelectChoice::plain("b"),
        SelectChoice::plain("c"),
    ];
    let mut field = SelectInput::new(options, Some("a"));
    assert_eq!(field.move_selection(-1).as_deref(), Some("c"));
    assert_eq!(field.move_selection(1).as_deref(), Some("a"));
}

#[test]
fn first_move_on_unselected_drop_down_lands_on_an_end() {
    let options = vec![SelectChoice::plain("a"), SelectChoice::plain("b")];

    let mut field = SelectInput::new(options.clone(), None);
    assert_eq!(field.move_selection(1).as_deref(), Some("a"));

    let mut field = SelectInput::new(options, None);
    assert_eq!(field.move_selection(-1).as_deref(), Some("b"));
}

#[test]
fn swatch_click_reports_the_palette_color() {
    let palette = vec!["#111111".to_string(), "#222222".to_string()];
    let mut picker = ColorPicker::new(&palette);
    assert_eq!(picker.click(1).as_deref(), Some("#222222"));
    assert_eq!(picker.cursor(), 1);
    assert_eq!(picker.click(9), None, "out-of-range click is ignored");
}

#[test]
fn swatch_cursor_wraps_at_both_ends() {
    let palette = vec!["#111111".to_string(), "#222222".to_string()];
    let mut picker = ColorPicker::new(&palette);
    picker.move_cursor(-1);
    assert_eq!(picker.cursor(), 1);
    picker.move_cursor(1);
    assert_eq!(picker.cursor(), 0);
}

#[test]
fn size_picker_starts_on_medium() {
    let mut picker = SizePicker::new();
    assert_eq!(picker.cursor(), 1);
    assert_eq!(picker.click(2), Some(MarkerSize::L));
    assert_eq!(picker.click(5), None);
}

#[test]
fn stroke_click_reports_the_dash_pattern() {
    let mut picker = StrokePicker::new();
    assert_eq!(picker.patterns()[0], "1");
    assert_eq!(picker.click(1).as_deref(), Some("10,10"));
    assert_eq!(picker.click(2).as_deref(), Some("15, 10, 1, 10"));
}

#[test]
fn refresh_only_touches_number_inputs() {
    let mut number = ControlWidget::Number(NumberInput::new("1", 0.0, 10.0, 1.0));
    assert!(number.supports_refresh());
    number.refresh(Some(&json!(7)));
    let ControlWidget::Number(field) = &number else {
        panic!("widget changed variant");
    };
    assert_eq!(field.value(), "7");

    let mut text = ControlWidget::Text(TextInput::new("kept"));
    assert!(!text.supports_refresh());
    text.refresh(Some(&json!("dropped")));
    let ControlWidget::Text(field) = &text else {
        panic!("widget changed variant");
    };
    assert_eq!(field.value(), "kept");
}
