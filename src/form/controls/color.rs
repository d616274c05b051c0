/// Color swatch picker: one clickable swatch per palette entry, in palette
/// order. Clicking reports the swatch color verbatim; normalizing it for
/// storage is the dispatcher's job.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    swatches: Vec<String>,
    cursor: usize,
}

impl ColorPicker {
    pub fn new(palette: &[String]) -> Self {
        Self {
            swatches: palette.to_vec(),
            cursor: 0,
        }
    }

    pub fn swatches(&self) -> &[String] {
        &self.swatches
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: i32) {
        if self.swatches.is_empty() {
            return;
        }
        let len = self.swatches.len() as i32;
        self.cursor = (self.cursor as i32 + delta).rem_euclid(len) as usize;
    }

    /// Activates a swatch and reports its color. Out-of-range indices are
    /// ignored.
    pub fn click(&mut self, index: usize) -> Option<String> {
        let color = self.swatches.get(index)?.clone();
        self.cursor = index;
        Some(color)
    }
}
