mod boolean;
mod color;
mod number;
mod select;
mod size;
mod stroke;
mod text;

pub use boolean::BoolInput;
pub use color::ColorPicker;
pub use number::NumberInput;
pub use select::SelectInput;
pub use size::SizePicker;
pub use stroke::{DASH_PATTERNS, StrokePicker};
pub use text::TextInput;

use serde_json::Value;

use crate::domain::MarkerSize;

use super::convert::value_to_string;

/// One user interaction delivered to a control.
///
/// These mirror the events the editing surface reacts to: activating a
/// swatch or segment, replacing an input buffer, the key-up after an edit,
/// committing a buffer, toggling a checkbox, choosing a drop-down option and
/// moving a cursor or selection by an offset.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlInput {
    Click(usize),
    Edit(String),
    KeyUp,
    Commit,
    Toggle,
    Select(usize),
    Move(i32),
}

/// Value reported by a control once an interaction actually changed it.
/// Numbers are reported as raw buffer text; parsing and range gating are the
/// dispatcher's business.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Reported {
    Color(String),
    Number(String),
    Text(String),
    Flag(bool),
    Choice(String),
    Size(MarkerSize),
    Dash(String),
}

/// The concrete control behind one form row.
#[derive(Debug, Clone)]
pub enum ControlWidget {
    Color(ColorPicker),
    Number(NumberInput),
    Bool(BoolInput),
    Text(TextInput),
    Select(SelectInput),
    Size(SizePicker),
    Stroke(StrokePicker),
}

impl ControlWidget {
    /// Feeds an interaction to the control. `Some` means the control fired
    /// its change report; `None` means the interaction was absorbed (buffer
    /// edit, cursor move) or does not apply to this control.
    pub(crate) fn handle(&mut self, input: ControlInput) -> Option<Reported> {
        match (self, input) {
            (ControlWidget::Color(picker), ControlInput::Click(index)) => {
                picker.click(index).map(Reported::Color)
            }
            (ControlWidget::Color(picker), ControlInput::Move(delta)) => {
                picker.move_cursor(delta);
                None
            }
            (ControlWidget::Number(field), ControlInput::Edit(text)) => {
                field.edit(text);
                None
            }
            (ControlWidget::Number(field), ControlInput::KeyUp) => {
                field.key_up().map(Reported::Number)
            }
            (ControlWidget::Number(field), ControlInput::Commit) => {
                field.commit().map(Reported::Number)
            }
            (ControlWidget::Number(field), ControlInput::Move(delta)) => {
                field.step_by(delta).map(Reported::Number)
            }
            (ControlWidget::Bool(field), ControlInput::Toggle) => {
                Some(Reported::Flag(field.toggle()))
            }
            (ControlWidget::Text(field), ControlInput::Edit(text)) => {
                field.edit(text);
                None
            }
            (ControlWidget::Text(field), ControlInput::KeyUp | ControlInput::Commit) => {
                Some(Reported::Text(field.value().to_string()))
            }
            (ControlWidget::Select(field), ControlInput::Select(index)) => {
                field.select(index).map(Reported::Choice)
            }
            (ControlWidget::Select(field), ControlInput::Move(delta)) => {
                field.move_selection(delta).map(Reported::Choice)
            }
            (ControlWidget::Size(picker), ControlInput::Click(index)) => {
                picker.click(index).map(Reported::Size)
            }
            (ControlWidget::Size(picker), ControlInput::Move(delta)) => {
                picker.move_cursor(delta);
                None
            }
            (ControlWidget::Stroke(picker), ControlInput::Click(index)) => {
                picker.click(index).map(Reported::Dash)
            }
            (ControlWidget::Stroke(picker), ControlInput::Move(delta)) => {
                picker.move_cursor(delta);
                None
            }
            _ => None,
        }
    }

    /// Only numeric inputs can be refreshed from the model after the fact.
    pub fn supports_refresh(&self) -> bool {
        matches!(self, ControlWidget::Number(_))
    }

    /// Overwrites the displayed value from the model without firing a
    /// report. No-op for controls that do not support refreshing.
    pub(crate) fn refresh(&mut self, value: Option<&Value>) {
        if let ControlWidget::Number(field) = self {
            let text = value.map(value_to_string).unwrap_or_default();
            field.set_value(text);
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            ControlWidget::Color(_) => "color",
            ControlWidget::Number(_) => "number",
            ControlWidget::Bool(_) => "checkbox",
            ControlWidget::Text(_) => "text",
            ControlWidget::Select(_) => "select",
            ControlWidget::Size(_) => "size",
            ControlWidget::Stroke(_) => "stroke",
        }
    }
}
