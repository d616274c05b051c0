use std::{sync::Arc, time::Duration};

use crate::form::FormOptions;

/// Behaviour of an interactive editing session. Form-level configuration
/// lives in the shared [`FormOptions`]; the passthrough builders below cover
/// the common adjustments without taking the options apart.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    pub tick_rate: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
    pub(crate) form_options: Arc<FormOptions>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            confirm_exit: true,
            show_help: true,
            form_options: Arc::new(FormOptions::default()),
        }
    }
}

impl EditorOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_form_options(mut self, options: FormOptions) -> Self {
        self.form_options = Arc::new(options);
        self
    }

    pub fn with_color_ramp(self, ramp: Vec<String>) -> Self {
        self.map_forms(|options| options.with_color_ramp(ramp))
    }

    pub fn with_marker_api(self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.map_forms(|options| options.with_marker_api(base))
    }

    pub fn with_marker_icons(self, icons: Vec<String>) -> Self {
        self.map_forms(|options| options.with_marker_icons(icons))
    }

    pub fn with_stroke_opacity(self, show: bool) -> Self {
        self.map_forms(|options| options.with_stroke_opacity(show))
    }

    pub fn with_line_width(self, show: bool) -> Self {
        self.map_forms(|options| options.with_line_width(show))
    }

    pub fn with_stroke(self, show: bool) -> Self {
        self.map_forms(|options| options.with_stroke(show))
    }

    pub fn with_fill_opacity(self, show: bool) -> Self {
        self.map_forms(|options| options.with_fill_opacity(show))
    }

    pub fn form_options(&self) -> Arc<FormOptions> {
        Arc::clone(&self.form_options)
    }

    fn map_forms(mut self, map: impl FnOnce(FormOptions) -> FormOptions) -> Self {
        let updated = map((*self.form_options).clone());
        self.form_options = Arc::new(updated);
        self
    }
}
