//! Font loading and selection.
//!
//! Scope:
//! - [`FontSystem`]: owns parsed fonts, hands out [`FontId`] handles
//! - [`FontSet`]: the regular/bold pair a card is composed with
//!
//! Glyph rasterization lives in `raster`; this module never touches pixels.

pub mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};

/// The fonts card text is set in.
///
/// Headings ask for the bold face; when none was loaded they fall back to
/// the regular face rather than failing the render.
#[derive(Debug, Copy, Clone)]
pub struct FontSet {
    pub regular: FontId,
    pub bold:    Option<FontId>,
}

impl FontSet {
    #[inline]
    pub const fn regular_only(regular: FontId) -> Self {
        Self { regular, bold: None }
    }

    /// Bold face, falling back to regular.
    #[inline]
    pub fn bold(self) -> FontId {
        self.bold.unwrap_or(self.regular)
    }
}
