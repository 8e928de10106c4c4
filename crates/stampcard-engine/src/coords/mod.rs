//! Coordinate and geometry types shared by the scene and the rasterizer.
//!
//! Canonical space:
//! - Logical pixels, matching the raster surface 1:1 (no DPI scaling)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
