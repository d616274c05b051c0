pub(crate) mod controls;
mod footer;
mod shapes;

pub use controls::render_controls;
pub use footer::render_footer;
pub use shapes::render_shapes;
