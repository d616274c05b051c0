pub(crate) mod components;
mod view;

pub use view::{ViewContext, draw};
