/// Dash patterns offered by the stroke picker: solid, dashed, dash-dot.
/// The strings are stored in the style's `dashArray` key verbatim.
pub const DASH_PATTERNS: [&str; 3] = ["1", "10,10", "15, 10, 1, 10"];

/// Stroke pattern picker: one segment per entry in [`DASH_PATTERNS`].
#[derive(Debug, Clone)]
pub struct StrokePicker {
    cursor: usize,
}

impl StrokePicker {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn patterns(&self) -> [&'static str; 3] {
        DASH_PATTERNS
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let len = DASH_PATTERNS.len() as i32;
        self.cursor = (self.cursor as i32 + delta).rem_euclid(len) as usize;
    }

    pub fn click(&mut self, index: usize) -> Option<String> {
        let pattern = DASH_PATTERNS.get(index)?;
        self.cursor = index;
        Some((*pattern).to_string())
    }
}

impl Default for StrokePicker {
    fn default() -> Self {
        Self::new()
    }
}
