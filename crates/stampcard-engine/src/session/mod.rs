//! Render session state.
//!
//! A [`CardSession`] owns everything that outlives a single render pass:
//! the surface configuration, loaded fonts, the single background-photo
//! slot, the renderer's glyph cache, and the last rendered surface that
//! export re-encodes.

pub mod background;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::card::{compose, CardFields, Theme};
use crate::codec::{self, EncodeError};
use crate::pixmap::Pixmap;
use crate::raster::Renderer;
use crate::text::{FontId, FontLoadError, FontSet, FontSystem};

pub use background::BackgroundError;

/// Filename the exported card is saved under.
pub const EXPORT_FILENAME: &str = "point-card.png";

/// Pixel dimensions of the card surface.
///
/// Not user-controlled: every render and every export uses the same fixed
/// extent, so preview and download always match.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub width:  u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { width: 600, height: 520 }
    }
}

/// An encoded card ready to be written to disk.
#[derive(Debug, Clone)]
pub struct Export {
    pub filename: &'static str,
    pub bytes:    Vec<u8>,
}

/// Error returned by [`CardSession::export`].
#[derive(Debug, Clone)]
pub enum ExportError {
    /// `export` was called before the first render.
    NothingRendered,
    Encode(EncodeError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NothingRendered => write!(f, "no card has been rendered yet"),
            ExportError::Encode(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Long-lived renderer state for one card-editing session.
pub struct CardSession {
    config:      SurfaceConfig,
    fonts:       FontSystem,
    font_set:    FontSet,
    background:  Option<Arc<Pixmap>>,
    renderer:    Renderer,
    last_render: Option<Pixmap>,
}

impl CardSession {
    pub fn new(config: SurfaceConfig, fonts: FontSystem, font_set: FontSet) -> Self {
        Self {
            config,
            fonts,
            font_set,
            background: None,
            renderer: Renderer::new(),
            last_render: None,
        }
    }

    /// Builds a session from raw font bytes, the common construction path.
    pub fn with_fonts(
        config: SurfaceConfig,
        regular: &[u8],
        bold: Option<&[u8]>,
    ) -> Result<Self, FontLoadError> {
        let mut fonts = FontSystem::new();
        let regular = fonts.load_font(regular)?;
        let bold = match bold {
            Some(bytes) => Some(fonts.load_font(bytes)?),
            None => None,
        };
        Ok(Self::new(config, fonts, FontSet { regular, bold }))
    }

    #[inline]
    pub fn config(&self) -> SurfaceConfig {
        self.config
    }

    /// Renders a fresh card surface from the given fields and theme.
    ///
    /// The previous preview is replaced wholesale; the returned reference is
    /// also what a later [`export`](Self::export) will re-encode.
    pub fn render(&mut self, fields: &CardFields, theme: &Theme) -> &Pixmap {
        let mut surface = Pixmap::new(self.config.width, self.config.height);
        let list = compose(
            fields,
            theme,
            self.background.as_ref(),
            self.font_set,
            surface.extent(),
        );
        self.renderer.render(&mut surface, &list, &self.fonts);
        log::debug!(
            "rendered card: {} commands, background {}",
            list.len(),
            if self.background.is_some() { "photo" } else { "color" },
        );
        self.last_render.insert(surface)
    }

    /// Renders and immediately encodes a PNG preview.
    pub fn preview_png(
        &mut self,
        fields: &CardFields,
        theme: &Theme,
    ) -> Result<Vec<u8>, EncodeError> {
        let surface = self.render(fields, theme);
        codec::encode_png(surface)
    }

    /// Re-encodes the most recent render for download.
    ///
    /// No re-render happens here: export reflects whatever was last drawn,
    /// however stale that might be.
    pub fn export(&self) -> Result<Export, ExportError> {
        let surface = self.last_render.as_ref().ok_or(ExportError::NothingRendered)?;
        let bytes = codec::encode_png(surface).map_err(ExportError::Encode)?;
        Ok(Export { filename: EXPORT_FILENAME, bytes })
    }

    #[inline]
    pub fn last_render(&self) -> Option<&Pixmap> {
        self.last_render.as_ref()
    }

    // ── background slot ───────────────────────────────────────────────────

    /// Installs a decoded photo as the card background.
    pub fn set_background(&mut self, image: Pixmap) {
        self.background = Some(Arc::new(image));
    }

    /// Clears the background slot; later renders fall back to the theme color.
    pub fn clear_background(&mut self) {
        self.background = None;
    }

    #[inline]
    pub fn background(&self) -> Option<&Arc<Pixmap>> {
        self.background.as_ref()
    }

    /// Reads and decodes `path` into the background slot.
    ///
    /// Failures are deliberately quiet: a bad file leaves the previous
    /// background in place and only notes the reason at debug level. Returns
    /// whether the slot was updated, for callers that do want to react.
    pub fn load_background(&mut self, path: &Path) -> bool {
        match pollster::block_on(background::decode_file(path)) {
            Ok(image) => {
                self.set_background(image);
                true
            }
            Err(e) => {
                log::debug!("background image ignored ({}): {e}", path.display());
                false
            }
        }
    }

    // ── fonts ─────────────────────────────────────────────────────────────

    /// Parses and stores an additional font, for callers that manage their
    /// own [`FontSet`] via [`set_fonts`](Self::set_fonts).
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        self.fonts.load_font(bytes)
    }

    pub fn set_fonts(&mut self, font_set: FontSet) {
        self.font_set = font_set;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn session() -> CardSession {
        // No real font: text commands are skipped by the rasterizer, which
        // keeps these tests independent of any font file on disk.
        CardSession::new(
            SurfaceConfig::default(),
            FontSystem::new(),
            FontSet::regular_only(FontId(0)),
        )
    }

    fn white_photo() -> Pixmap {
        let mut pm = Pixmap::new(8, 8);
        pm.fill(Color::WHITE);
        pm
    }

    #[test]
    fn render_paints_theme_background() {
        let mut s = session();
        let theme = Theme::default();
        let surface = s.render(&CardFields::default(), &theme);
        assert_eq!(surface.width(), 600);
        assert_eq!(surface.height(), 520);
        assert_eq!(surface.pixel(0, 0).unwrap(), theme.background.to_array());
    }

    #[test]
    fn photo_background_is_darkened() {
        let mut s = session();
        s.set_background(white_photo());
        let surface = s.render(&CardFields::default(), &Theme::default());
        // White photo behind a 60% black overlay reads as 40% white.
        let [r, g, b, a] = surface.pixel(0, 0).unwrap();
        assert_eq!(a, 255);
        for c in [r, g, b] {
            assert!((100..=104).contains(&c), "expected darkened photo, got {c}");
        }
    }

    #[test]
    fn clearing_background_restores_theme_color() {
        let mut s = session();
        let theme = Theme::default();
        s.set_background(white_photo());
        s.render(&CardFields::default(), &theme);
        s.clear_background();
        let surface = s.render(&CardFields::default(), &theme);
        assert_eq!(surface.pixel(0, 0).unwrap(), theme.background.to_array());
    }

    #[test]
    fn export_before_render_fails() {
        let s = session();
        assert!(matches!(s.export(), Err(ExportError::NothingRendered)));
    }

    #[test]
    fn export_reflects_latest_render() {
        let mut s = session();
        let red = Theme { background: Color::rgb(255, 0, 0), ..Theme::default() };
        let blue = Theme { background: Color::rgb(0, 0, 255), ..Theme::default() };
        s.render(&CardFields::default(), &red);
        s.render(&CardFields::default(), &blue);

        let export = s.export().unwrap();
        assert_eq!(export.filename, EXPORT_FILENAME);
        let decoded = crate::codec::decode_image(&export.bytes).unwrap();
        assert_eq!(decoded.pixel(0, 0).unwrap(), [0, 0, 255, 255]);
    }

    #[test]
    fn stamps_are_painted_on_the_surface() {
        let mut s = session();
        let fields = CardFields { points: "5".into(), ..CardFields::default() };
        let theme = Theme::default();
        let surface = s.render(&fields, &theme);
        // First stamp centers at (140, 210); its fill is white.
        assert_eq!(surface.pixel(140, 210).unwrap(), [255, 255, 255, 255]);
        // The ring on the radius uses the accent color.
        assert_eq!(surface.pixel(140, 240).unwrap(), theme.accent.to_array());
    }

    #[test]
    fn missing_background_file_is_ignored() {
        let mut s = session();
        assert!(!s.load_background(Path::new("/definitely/not/here.png")));
        assert!(s.background().is_none());
    }

    #[test]
    fn preview_png_is_encoded() {
        let mut s = session();
        let bytes = s.preview_png(&CardFields::default(), &Theme::default()).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }
}
