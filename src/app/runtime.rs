use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    domain::{MapDocument, ShapeId, ShapeKind},
    form::{MetaChangedHook, StyleEditor},
    presentation::{self, ViewContext},
};

use super::{
    input::{self, KeyCommand},
    options::EditorOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

const HELP_TEXT: &str = "Tab/↑↓ controls • ←→ adjust • Enter apply • PgUp/PgDn shapes • g style • m metadata • Ctrl+S save • Ctrl+Q quit";

pub(crate) struct App {
    document: MapDocument,
    editor: StyleEditor,
    options: EditorOptions,
    title: Option<String>,
    selected: usize,
    form_title: &'static str,
    status: StatusLine,
    changes: usize,
    exit_armed: bool,
    should_quit: bool,
    saved: bool,
}

impl App {
    pub fn new(
        document: MapDocument,
        options: EditorOptions,
        title: Option<String>,
        meta_hook: Option<MetaChangedHook>,
    ) -> Self {
        let mut editor = StyleEditor::new(options.form_options());
        if let Some(hook) = meta_hook {
            editor.install_meta_hook(hook);
        }
        let mut form_title = "Style";
        if let Some(shape) = document.shapes().first() {
            editor.select(shape);
            form_title = style_form_title(shape.kind);
        }
        Self {
            document,
            editor,
            options,
            title,
            selected: 0,
            form_title,
            status: StatusLine::new(),
            changes: 0,
            exit_armed: false,
            should_quit: false,
            saved: false,
        }
    }

    pub fn run(&mut self) -> Result<MapDocument> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) => {}
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }

        if self.saved {
            Ok(std::mem::take(&mut self.document))
        } else {
            Err(anyhow!("user exited without saving"))
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = if self.options.show_help {
            Some(HELP_TEXT)
        } else {
            None
        };

        presentation::draw(
            frame,
            ViewContext {
                title: self.title.as_deref(),
                document: &self.document,
                selected: self.selected,
                editor: &self.editor,
                form_title: self.form_title,
                status_message: self.status.message(),
                dirty: self.changes > 0,
                changes: self.changes,
                help,
            },
        );
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match input::classify(&key) {
            Some(KeyCommand::Save) => {
                self.exit_armed = false;
                self.on_save();
            }
            Some(KeyCommand::Quit) => self.on_exit(),
            Some(KeyCommand::NextShape) => self.switch_shape(1),
            Some(KeyCommand::PrevShape) => self.switch_shape(-1),
            Some(KeyCommand::NextControl) => {
                self.editor.focus_next();
                self.exit_armed = false;
            }
            Some(KeyCommand::PrevControl) => {
                self.editor.focus_prev();
                self.exit_armed = false;
            }
            Some(KeyCommand::Dismiss) => {
                self.exit_armed = false;
                self.status.ready();
            }
            None => self.forward_key(key),
        }
    }

    /// Keys that are not session commands go to the focused control first;
    /// what the control does not recognize falls through to the form
    /// switching keys. Text inputs therefore capture `g` and `m` while a
    /// picker row leaves them free.
    fn forward_key(&mut self, key: KeyEvent) {
        let Some(id) = self.selected_id() else {
            return;
        };

        let inputs = match self.editor.panel().focused() {
            Some(control) => input::control_inputs(&control.widget, &key),
            None => Vec::new(),
        };

        if !inputs.is_empty() {
            let label = self
                .editor
                .panel()
                .focused()
                .map(|control| control.label.clone())
                .unwrap_or_default();
            let Some(shape) = self.document.shape_mut(id) else {
                return;
            };
            let mut handled = false;
            for input in inputs {
                handled |= self.editor.handle_input(shape, input);
            }
            if handled {
                self.exit_armed = false;
                self.status.editing(label.trim_end_matches(':'));
                self.changes += self.editor.take_events().len();
            }
            return;
        }

        match key.code {
            KeyCode::Char('g') | KeyCode::Char('G') => self.show_style_form(),
            KeyCode::Char('m') | KeyCode::Char('M') => self.show_meta_form(),
            _ => {}
        }
    }

    fn switch_shape(&mut self, delta: i32) {
        if self.document.is_empty() {
            return;
        }
        let len = self.document.len() as i32;
        self.selected = (self.selected as i32 + delta).rem_euclid(len) as usize;
        let shape = &self.document.shapes()[self.selected];
        self.editor.select(shape);
        self.form_title = style_form_title(shape.kind);
        self.status.selected(&shape.display_label());
        self.exit_armed = false;
    }

    fn show_style_form(&mut self) {
        let Some(shape) = self.document.shapes().get(self.selected) else {
            return;
        };
        self.editor.select(shape);
        self.form_title = style_form_title(shape.kind);
        self.status.set_raw(format!("{} form", self.form_title));
    }

    fn show_meta_form(&mut self) {
        let Some(shape) = self.document.shapes().get(self.selected) else {
            return;
        };
        match self.editor.build_meta_form(shape) {
            Ok(()) => {
                self.form_title = "Metadata";
                self.status.set_raw("Metadata form");
            }
            Err(err) => self.status.set_raw(err.to_string()),
        }
    }

    fn on_save(&mut self) {
        self.saved = true;
        self.should_quit = true;
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.changes > 0 && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }

    fn selected_id(&self) -> Option<ShapeId> {
        self.document
            .shapes()
            .get(self.selected)
            .map(|shape| shape.id)
    }
}

#[cfg(test)]
impl App {
    pub(crate) fn editor(&self) -> &StyleEditor {
        &self.editor
    }

    pub(crate) fn status_message(&self) -> &str {
        self.status.message()
    }

    pub(crate) fn changes(&self) -> usize {
        self.changes
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn saved(&self) -> bool {
        self.saved
    }
}

fn style_form_title(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Marker => "Marker",
        _ => "Style",
    }
}
