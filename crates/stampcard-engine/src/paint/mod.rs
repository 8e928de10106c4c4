//! Paint model shared between card composition and the rasterizer.
//!
//! Scope:
//! - color representation (straight-alpha RGBA bytes)
//! - hex color parsing for theme input
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ColorParseError};
