mod color;
mod marker;
mod meta;
mod shape;
mod style;

pub use color::{hex_to_rgb, normalize_color, rgb_to_hex};
pub use marker::{MarkerClass, MarkerIcon, MarkerSize, MarkerStyleState};
pub use meta::{MetaKind, MetaProperty, MetaSchema, SelectChoice};
pub use shape::{MapDocument, Shape, ShapeId, ShapeKind};
pub use style::{PathStyle, StyleUpdate};
