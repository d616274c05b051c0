#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod presentation;


pub use app::{EditorOptions, StyleForms};
pub use domain::{
    MapDocument, MarkerClass, MarkerIcon, MarkerSize, MarkerStyleState, MetaKind, MetaProperty,
    MetaSchema, PathStyle, SelectChoice, Shape, ShapeId, ShapeKind, StyleUpdate, normalize_color,
    rgb_to_hex,
};
pub use form::{
    ControlInput, ControlState, ControlWidget, FormOptions, FormPanel, MetaChangedHook,
    MissingMetadataError, StyleChanged, StyleEditor,
};

pub mod prelude {
    pub use super::{EditorOptions, FormOptions, MapDocument, Shape, ShapeKind, StyleForms};
}
