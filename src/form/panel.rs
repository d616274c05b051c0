use super::{actions::ControlAction, controls::ControlWidget};

/// One row of the form: a label, the control behind it, and the action its
/// reports feed.
#[derive(Debug, Clone)]
pub struct ControlState {
    pub label: String,
    pub widget: ControlWidget,
    pub(crate) action: ControlAction,
}

/// The materialized form: an ordered list of controls plus the focus
/// position. At most one form exists at a time; building a new one clears
/// the panel first.
#[derive(Debug, Clone, Default)]
pub struct FormPanel {
    controls: Vec<ControlState>,
    focus: usize,
}

impl FormPanel {
    pub fn clear(&mut self) {
        self.controls.clear();
        self.focus = 0;
    }

    /// Appends a control and returns its index.
    pub(crate) fn push(
        &mut self,
        label: impl Into<String>,
        widget: ControlWidget,
        action: ControlAction,
    ) -> usize {
        self.controls.push(ControlState {
            label: label.into(),
            widget,
            action,
        });
        self.controls.len() - 1
    }

    pub fn controls(&self) -> &[ControlState] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&ControlState> {
        self.controls.get(self.focus)
    }

    pub(crate) fn control_mut(&mut self, index: usize) -> Option<&mut ControlState> {
        self.controls.get_mut(index)
    }

    pub fn focus_next(&mut self) {
        if self.controls.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.controls.len();
    }

    pub fn focus_prev(&mut self) {
        if self.controls.is_empty() {
            return;
        }
        self.focus = self
            .focus
            .checked_sub(1)
            .unwrap_or(self.controls.len() - 1);
    }
}
