pub(crate) mod input;
mod options;
pub(crate) mod runtime;
pub(crate) mod status;
mod style_forms;
mod terminal;

pub use options::EditorOptions;
pub use style_forms::StyleForms;
