use crate::domain::MarkerSize;

/// Marker size picker: three fixed segments for small, medium and large.
#[derive(Debug, Clone)]
pub struct SizePicker {
    cursor: usize,
}

impl SizePicker {
    pub fn new() -> Self {
        // Cursor starts on medium, the default marker size.
        Self { cursor: 1 }
    }

    pub fn sizes(&self) -> [MarkerSize; 3] {
        MarkerSize::ALL
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let len = MarkerSize::ALL.len() as i32;
        self.cursor = (self.cursor as i32 + delta).rem_euclid(len) as usize;
    }

    pub fn click(&mut self, index: usize) -> Option<MarkerSize> {
        let size = MarkerSize::ALL.get(index).copied()?;
        self.cursor = index;
        Some(size)
    }
}

impl Default for SizePicker {
    fn default() -> Self {
        Self::new()
    }
}
