use serde_json::Value;

/// Checkbox control. Starts checked only when the seed value is boolean
/// `true` or the string `"true"`; every other value, including absence,
/// starts unchecked.
#[derive(Debug, Clone)]
pub struct BoolInput {
    checked: bool,
}

impl BoolInput {
    pub fn new(seed: Option<&Value>) -> Self {
        let checked = matches!(seed, Some(Value::Bool(true)))
            || matches!(seed, Some(Value::String(text)) if text == "true");
        Self { checked }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Flips the checkbox and reports the new state.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}
