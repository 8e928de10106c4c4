//! CPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and write pixels into a
//! [`Pixmap`](crate::pixmap::Pixmap). Each shape pass is responsible for its
//! own clipping and edge coverage.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down)
//! - one logical pixel maps to exactly one surface pixel

mod renderer;
mod shapes;

pub use renderer::Renderer;
