use anyhow::Result;
use serde_json::Value;

use crate::{
    domain::{MapDocument, MetaProperty, Shape},
    form::MetaChangedHook,
};

use super::{options::EditorOptions, runtime::App};

/// Interactive editing session over a map document. Owns the document while
/// the terminal UI runs and hands the edited version back on save.
///
/// ```no_run
/// use styleforms::prelude::*;
///
/// # fn main() -> anyhow::Result<()> {
/// let mut document = MapDocument::new();
/// document.insert(Shape::new(ShapeKind::Polygon).with_name("meadow"));
///
/// let edited = StyleForms::new(document).with_title("demo map").run()?;
/// # let _ = edited;
/// # Ok(())
/// # }
/// ```
pub struct StyleForms {
    document: MapDocument,
    title: Option<String>,
    options: EditorOptions,
    meta_hook: Option<MetaChangedHook>,
}

impl StyleForms {
    pub fn new(document: MapDocument) -> Self {
        Self {
            document,
            title: None,
            options: EditorOptions::default(),
            meta_hook: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }

    /// Registers the hook run after every metadata write during the
    /// session. See [`crate::StyleEditor::set_meta_changed_hook`].
    pub fn with_meta_changed(
        mut self,
        hook: impl FnMut(&mut Shape, &MetaProperty, Option<Value>, &Value) + 'static,
    ) -> Self {
        self.meta_hook = Some(Box::new(hook));
        self
    }

    /// Runs the editor until the user saves with Ctrl+S. Quitting without
    /// saving is reported as an error; the document is dropped in that case.
    pub fn run(self) -> Result<MapDocument> {
        let StyleForms {
            document,
            title,
            options,
            meta_hook,
        } = self;
        let mut app = App::new(document, options, title, meta_hook);
        app.run()
    }
}
