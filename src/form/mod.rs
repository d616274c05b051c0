mod actions;
mod controls;
mod convert;
mod editor;
mod error;
mod options;
mod panel;

pub use controls::{
    BoolInput, ColorPicker, ControlInput, ControlWidget, NumberInput, SelectInput, SizePicker,
    StrokePicker, TextInput,
};
pub use editor::{MetaChangedHook, StyleChanged, StyleEditor};
pub use error::MissingMetadataError;
pub use options::FormOptions;
pub use panel::{ControlState, FormPanel};

pub(crate) use actions::ControlAction;
pub(crate) use controls::Reported;
