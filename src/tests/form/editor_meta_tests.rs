use std::{cell::RefCell, rc::Rc, sync::Arc};

use serde_json::{Value, json};

use crate::domain::{MapDocument, MetaKind, MetaProperty, MetaSchema, SelectChoice, Shape, ShapeKind};
use crate::form::{ControlInput, ControlWidget, FormOptions, StyleEditor};

fn editor() -> StyleEditor {
    StyleEditor::new(Arc::new(FormOptions::default()))
}

fn labels(editor: &StyleEditor) -> Vec<String> {
    editor
        .panel()
        .controls()
        .iter()
        .map(|control| control.label.clone())
        .collect()
}

fn meta_shape() -> Shape {
    Shape::new(ShapeKind::Polygon)
        .with_name("plot")
        .with_meta(
            MetaSchema::new()
                .with(MetaProperty::new("label", "Label:", MetaKind::text()))
                .with(MetaProperty::new(
                    "capacity",
                    "Capacity:",
                    MetaKind::number(0.0, 500.0, 10.0),
                ))
                .with(MetaProperty::new("open", "Open:", MetaKind::Boolean))
                .with(MetaProperty::new(
                    "zone",
                    "Zone:",
                    MetaKind::choices(vec![
                        SelectChoice::plain("north"),
                        SelectChoice::plain("south"),
                    ]),
                ))
                .with(MetaProperty::new("shade", "Shade:", MetaKind::Color))
                .with(MetaProperty::hidden("internal", MetaKind::text())),
        )
        .with_property("capacity", 120)
        .with_property("zone", "south")
}

#[test]
fn missing_metadata_leaves_the_panel_untouched() {
    let mut document = MapDocument::new();
    let with_meta = document.insert(meta_shape());
    let without = document.insert(Shape::new(ShapeKind::Circle).with_name("pond"));

    let mut editor = editor();
    editor
        .build_meta_form(document.shape(with_meta).expect("inserted"))
        .expect("shape has metadata");
    let before = labels(&editor);

    let err = editor
        .build_meta_form(document.shape(without).expect("inserted"))
        .unwrap_err();
    assert_eq!(err.to_string(), "no metadata defined for shape 'pond'");
    assert_eq!(labels(&editor), before, "failed build leaves the form alone");
    assert_eq!(editor.current(), Some(with_meta));
}

#[test]
fn builds_controls_in_schema_order_skipping_unnamed() {
    let mut editor = editor();
    editor.build_meta_form(&meta_shape()).expect("has metadata");
    assert_eq!(
        labels(&editor),
        ["Label:", "Capacity:", "Open:", "Zone:", "Shade:"]
    );
}

#[test]
fn controls_seed_from_current_properties() {
    let mut editor = editor();
    editor.build_meta_form(&meta_shape()).expect("has metadata");
    let controls = editor.panel().controls();

    let ControlWidget::Text(label) = &controls[0].widget else {
        panic!("expected a text input");
    };
    assert_eq!(label.value(), "", "absent property seeds empty");

    let ControlWidget::Number(capacity) = &controls[1].widget else {
        panic!("expected a number input");
    };
    assert_eq!(capacity.value(), "120");
    assert_eq!(capacity.max(), 500.0);
    assert_eq!(capacity.step(), 10.0);

    let ControlWidget::Select(zone) = &controls[3].widget else {
        panic!("expected a drop-down");
    };
    assert_eq!(zone.selected(), Some(1));
}

#[test]
fn number_edits_store_json_numbers() {
    let mut editor = editor();
    let mut shape = meta_shape();
    editor.build_meta_form(&shape).expect("has metadata");

    editor.apply_input(&mut shape, 1, ControlInput::Edit("250".into()));
    editor.apply_input(&mut shape, 1, ControlInput::KeyUp);
    assert_eq!(shape.property("capacity"), Some(&json!(250.0)));
    assert_eq!(editor.take_events().len(), 1);
}

#[test]
fn unparseable_number_edits_are_dropped() {
    let mut editor = editor();
    let mut shape = meta_shape();
    editor.build_meta_form(&shape).expect("has metadata");

    editor.apply_input(&mut shape, 1, ControlInput::Edit("many".into()));
    editor.apply_input(&mut shape, 1, ControlInput::KeyUp);
    assert_eq!(shape.property("capacity"), Some(&json!(120)));
    assert!(editor.take_events().is_empty(), "dropped edits fire no event");
}

#[test]
fn checkbox_writes_booleans() {
    let mut editor = editor();
    let mut shape = meta_shape();
    editor.build_meta_form(&shape).expect("has metadata");

    editor.apply_input(&mut shape, 2, ControlInput::Toggle);
    assert_eq!(shape.property("open"), Some(&Value::Bool(true)));
    editor.apply_input(&mut shape, 2, ControlInput::Toggle);
    assert_eq!(shape.property("open"), Some(&Value::Bool(false)));
    assert_eq!(editor.take_events().len(), 2);
}

#[test]
fn drop_down_writes_the_choice_value() {
    let mut editor = editor();
    let mut shape = meta_shape();
    editor.build_meta_form(&shape).expect("has metadata");

    editor.apply_input(&mut shape, 3, ControlInput::Move(-1));
    assert_eq!(shape.property("zone"), Some(&json!("north")));
}

#[test]
fn color_swatch_writes_normalized_hex() {
    let mut editor = editor();
    let mut shape = meta_shape();
    editor.build_meta_form(&shape).expect("has metadata");

    editor.apply_input(&mut shape, 4, ControlInput::Click(0));
    assert_eq!(shape.property("shade"), Some(&json!("#1abc9c")));
}

#[test]
fn text_edits_write_on_every_key_up() {
    let mut editor = editor();
    let mut shape = meta_shape();
    editor.build_meta_form(&shape).expect("has metadata");

    editor.apply_input(&mut shape, 0, ControlInput::Edit("plot 7".into()));
    editor.apply_input(&mut shape, 0, ControlInput::KeyUp);
    assert_eq!(shape.property("label"), Some(&json!("plot 7")));
}

#[test]
fn hook_sees_previous_and_new_values() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);

    let mut editor = editor();
    editor.set_meta_changed_hook(move |_shape, property, previous, new| {
        sink.borrow_mut()
            .push((property.name.clone(), previous, new.clone()));
    });

    let mut shape = meta_shape();
    editor.build_meta_form(&shape).expect("has metadata");
    editor.apply_input(&mut shape, 1, ControlInput::Edit("250".into()));
    editor.apply_input(&mut shape, 1, ControlInput::KeyUp);

    let entries = log.borrow();
    assert_eq!(entries.len(), 1);
    let (name, previous, new) = &entries[0];
    assert_eq!(name, "capacity");
    assert_eq!(previous.as_ref(), Some(&json!(120)));
    assert_eq!(new, &json!(250.0));
}

#[test]
fn hook_edits_flow_back_into_number_inputs() {
    let mut editor = editor();
    editor.set_meta_changed_hook(|shape, property, _previous, _new| {
        // Cap whatever was typed at 75.
        if property.name == "capacity" {
            shape.properties.insert("capacity".to_string(), json!(75));
        }
    });

    let mut shape = meta_shape();
    editor.build_meta_form(&shape).expect("has metadata");
    editor.apply_input(&mut shape, 1, ControlInput::Edit("9000".into()));
    editor.apply_input(&mut shape, 1, ControlInput::KeyUp);

    assert_eq!(shape.property("capacity"), Some(&json!(75)));
    let ControlWidget::Number(capacity) = &editor.panel().controls()[1].widget else {
        panic!("expected a number input");
    };
    assert_eq!(capacity.value(), "75", "the form shows the hook's value");
    assert_eq!(editor.take_events().len(), 1, "one event per edit, hook included");
}

#[test]
fn one_edit_refreshes_every_registered_control() {
    let mut editor = editor();
    editor.set_meta_changed_hook(|shape, _property, _previous, _new| {
        // Keep the plot twice as wide as it is tall, capping width at 250.
        let width = shape.numeric_property("width").unwrap_or(0.0).min(250.0) as u32;
        shape.properties.insert("width".to_string(), json!(width));
        shape.properties.insert("height".to_string(), json!(width / 2));
    });

    let mut shape = Shape::new(ShapeKind::Polygon)
        .with_name("plot")
        .with_meta(
            MetaSchema::new()
                .with(MetaProperty::new(
                    "width",
                    "Width:",
                    MetaKind::number(0.0, 400.0, 10.0),
                ))
                .with(MetaProperty::new(
                    "height",
                    "Height:",
                    MetaKind::number(0.0, 400.0, 10.0),
                )),
        )
        .with_property("width", 200)
        .with_property("height", 100);
    editor.build_meta_form(&shape).expect("has metadata");

    editor.apply_input(&mut shape, 0, ControlInput::Edit("300".into()));
    editor.apply_input(&mut shape, 0, ControlInput::KeyUp);

    assert_eq!(shape.property("width"), Some(&json!(250)));
    assert_eq!(shape.property("height"), Some(&json!(125)));
    let ControlWidget::Number(width) = &editor.panel().controls()[0].widget else {
        panic!("expected a number input");
    };
    assert_eq!(width.value(), "250", "the edited control shows the clamp");
    let ControlWidget::Number(height) = &editor.panel().controls()[1].widget else {
        panic!("expected a number input");
    };
    assert_eq!(height.value(), "125", "the untouched control follows the hook");
    assert_eq!(editor.take_events().len(), 1);
}
