use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::{ControlInput, ControlWidget};

/// Session-level commands. Keys that are not commands fall through to the
/// focused control (and after that to the form-switching keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyCommand {
    Save,
    Quit,
    NextShape,
    PrevShape,
    NextControl,
    PrevControl,
    Dismiss,
}

pub(crate) fn classify(key: &KeyEvent) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyCommand::Save),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c') | KeyCode::Char('C') => {
                Some(KeyCommand::Quit)
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::PageUp => Some(KeyCommand::PrevShape),
        KeyCode::PageDown => Some(KeyCommand::NextShape),
        KeyCode::Tab | KeyCode::Down => Some(KeyCommand::NextControl),
        KeyCode::BackTab | KeyCode::Up => Some(KeyCommand::PrevControl),
        KeyCode::Esc => Some(KeyCommand::Dismiss),
        _ => None,
    }
}

/// Translates a key press into interactions for the focused control. A
/// typing key produces a buffer edit followed by a key-up, mirroring how a
/// keystroke lands on an input element.
pub(crate) fn control_inputs(widget: &ControlWidget, key: &KeyEvent) -> Vec<ControlInput> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Vec::new();
    }

    match widget {
        ControlWidget::Color(picker) => match key.code {
            KeyCode::Left => vec![ControlInput::Move(-1)],
            KeyCode::Right => vec![ControlInput::Move(1)],
            KeyCode::Enter | KeyCode::Char(' ') => vec![ControlInput::Click(picker.cursor())],
            _ => Vec::new(),
        },
        ControlWidget::Number(field) => match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                let mut buffer = field.value().to_string();
                buffer.push(c);
                vec![ControlInput::Edit(buffer), ControlInput::KeyUp]
            }
            KeyCode::Backspace => {
                let mut buffer = field.value().to_string();
                buffer.pop();
                vec![ControlInput::Edit(buffer), ControlInput::KeyUp]
            }
            KeyCode::Left => vec![ControlInput::Move(-1)],
            KeyCode::Right => vec![ControlInput::Move(1)],
            KeyCode::Enter => vec![ControlInput::Commit],
            _ => Vec::new(),
        },
        ControlWidget::Bool(_) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => vec![ControlInput::Toggle],
            _ => Vec::new(),
        },
        ControlWidget::Text(field) => match key.code {
            KeyCode::Char(c) => {
                let mut buffer = field.value().to_string();
                buffer.push(c);
                vec![ControlInput::Edit(buffer), ControlInput::KeyUp]
            }
            KeyCode::Backspace => {
                let mut buffer = field.value().to_string();
                buffer.pop();
                vec![ControlInput::Edit(buffer), ControlInput::KeyUp]
            }
            KeyCode::Enter => vec![ControlInput::Commit],
            _ => Vec::new(),
        },
        ControlWidget::Select(_) => match key.code {
            KeyCode::Left => vec![ControlInput::Move(-1)],
            KeyCode::Right => vec![ControlInput::Move(1)],
            _ => Vec::new(),
        },
        ControlWidget::Size(picker) => match key.code {
            KeyCode::Left => vec![ControlInput::Move(-1)],
            KeyCode::Right => vec![ControlInput::Move(1)],
            KeyCode::Enter | KeyCode::Char(' ') => vec![ControlInput::Click(picker.cursor())],
            _ => Vec::new(),
        },
        ControlWidget::Stroke(picker) => match key.code {
            KeyCode::Left => vec![ControlInput::Move(-1)],
            KeyCode::Right => vec![ControlInput::Move(1)],
            KeyCode::Enter | KeyCode::Char(' ') => vec![ControlInput::Click(picker.cursor())],
            _ => Vec::new(),
        },
    }
}
