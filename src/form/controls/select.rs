use crate::domain::SelectChoice;

/// Drop-down over a fixed option list. The option whose value matches the
/// current value case-insensitively starts selected; an unknown or absent
/// current value leaves nothing pre-selected.
#[derive(Debug, Clone)]
pub struct SelectInput {
    options: Vec<SelectChoice>,
    selected: Option<usize>,
}

impl SelectInput {
    pub fn new(options: Vec<SelectChoice>, current: Option<&str>) -> Self {
        let selected = current.and_then(|value| {
            options
                .iter()
                .position(|option| option.value().eq_ignore_ascii_case(value))
        });
        Self { options, selected }
    }

    pub fn options(&self) -> &[SelectChoice] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_choice(&self) -> Option<&SelectChoice> {
        self.selected.and_then(|index| self.options.get(index))
    }

    /// Selects an option by index and reports its value. A drop-down fires
    /// its report as soon as the selection changes, not on commit.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let choice = self.options.get(index)?;
        self.selected = Some(index);
        Some(choice.value().to_string())
    }

    /// Moves the selection by an offset, wrapping at both ends, and reports
    /// the newly selected value.
    pub fn move_selection(&mut self, delta: i32) -> Option<String> {
        if self.options.is_empty() {
            return None;
        }
        let len = self.options.len() as i32;
        let next = match self.selected {
            Some(current) => (current as i32 + delta).rem_euclid(len),
            // No pre-selection: the first move lands on an end of the list.
            None => {
                if delta >= 0 {
                    0
                } else {
                    len - 1
                }
            }
        };
        self.select(next as usize)
    }
}
