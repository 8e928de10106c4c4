//! Card face composition.
//!
//! Scope:
//! - input model (fields, theme, palette switching)
//! - the fixed layout table and point-grid arithmetic
//! - [`compose`]: turns inputs into a renderer-agnostic draw stream
//!
//! Pixels are produced in `raster`; this module only records commands.

mod compose;
mod fields;
pub mod layout;
mod theme;

pub use compose::compose;
pub use fields::{parse_point_count, CardFields};
pub use layout::PointGrid;
pub use theme::{Palette, Theme};
