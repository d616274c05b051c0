/// Numeric input with de-duplicated reporting: a report only fires when the
/// buffer differs from the last reported value, so key-up and commit for the
/// same edit produce one report, not two.
#[derive(Debug, Clone)]
pub struct NumberInput {
    buffer: String,
    last_reported: String,
    min: f64,
    max: f64,
    step: f64,
}

impl NumberInput {
    pub fn new(seed: impl Into<String>, min: f64, max: f64, step: f64) -> Self {
        let buffer = seed.into();
        Self {
            last_reported: buffer.clone(),
            buffer,
            min,
            max,
            step,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Replaces the buffer without reporting. The report fires on the
    /// following key-up or commit.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn key_up(&mut self) -> Option<String> {
        self.report()
    }

    pub fn commit(&mut self) -> Option<String> {
        self.report()
    }

    /// Steps the value by `direction * step`, clamped to the input range,
    /// and reports the result.
    pub fn step_by(&mut self, direction: i32) -> Option<String> {
        let current = self.buffer.trim().parse::<f64>().unwrap_or(self.min);
        let mut stepped = current + self.step * f64::from(direction);
        if self.min <= self.max {
            stepped = stepped.clamp(self.min, self.max);
        }
        self.buffer = format_number(stepped);
        self.report()
    }

    /// Overwrites the displayed value from the model without re-triggering
    /// the report.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.buffer != value {
            self.buffer = value.clone();
        }
        self.last_reported = value;
    }

    fn report(&mut self) -> Option<String> {
        if self.buffer == self.last_reported {
            return None;
        }
        self.last_reported = self.buffer.clone();
        Some(self.buffer.clone())
    }
}

/// Display form for stepped values: shortest representation after rounding
/// away float noise from repeated step addition.
fn format_number(value: f64) -> String {
    ((value * 1e6).round() / 1e6).to_string()
}
