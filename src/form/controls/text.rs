/// Free-text input. Unlike [`super::NumberInput`] there is no
/// de-duplication; every key-up reports the full buffer.
#[derive(Debug, Clone)]
pub struct TextInput {
    buffer: String,
}

impl TextInput {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            buffer: seed.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }
}
