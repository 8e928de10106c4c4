use std::collections::HashMap;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::pixmap::Pixmap;
use crate::scene::shapes::text::{TextAlign, TextBaseline, TextCmd};
use crate::text::FontSystem;

// ── cached glyph ──────────────────────────────────────────────────────────

struct CachedGlyph {
    width:    usize,
    height:   usize,
    coverage: Vec<u8>,
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `DrawCmd::Text`.
///
/// Glyphs are rasterized on first use via fontdue and cached for the
/// renderer's lifetime. The cache key is
/// `fontdue::layout::GlyphRasterConfig`, which encodes font identity plus
/// glyph index and pixel size, so the same glyph at the same size across
/// multiple text commands is rasterized only once.
pub(crate) struct TextRenderer {
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,

    // reusable fontdue layout
    layout: Layout<()>,
}

impl TextRenderer {
    pub(crate) fn new() -> Self {
        Self {
            glyph_cache: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }

    /// Renders one `DrawCmd::Text` into `target`.
    pub(crate) fn render(&mut self, target: &mut Pixmap, cmd: &TextCmd, fonts: &FontSystem) {
        if cmd.text.is_empty() || cmd.size <= 0.0 {
            return;
        }
        let Some(font) = fonts.get(cmd.font) else {
            log::warn!("TextRenderer: unknown FontId {:?}, skipping", cmd.font);
            return;
        };
        let Some(line) = font.horizontal_line_metrics(cmd.size) else {
            log::warn!("TextRenderer: font has no horizontal metrics, skipping");
            return;
        };

        // Lay out at the origin; the finished run is shifted into place so
        // alignment can use the measured advance width.
        self.layout.reset(&LayoutSettings::default());
        self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

        // Advance extent, not bitmap extent: trailing whitespace counts and
        // glyph bearings don't skew centering.
        let width = self
            .layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, cmd.size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);

        let dx = cmd.anchor.x
            - match cmd.align {
                TextAlign::Left   => 0.0,
                TextAlign::Center => width * 0.5,
                TextAlign::Right  => width,
            };
        // Layout y = 0 is the top of the line box, `ascent` above the baseline.
        let baseline_y = match cmd.baseline {
            TextBaseline::Alphabetic => cmd.anchor.y,
            TextBaseline::Middle     => cmd.anchor.y + (line.ascent + line.descent) * 0.5,
        };
        let dy = baseline_y - line.ascent;

        // Snapshot glyph positions into a plain Vec so that the borrow on
        // `self.layout` ends before the glyph cache is touched.
        let glyph_snap: Vec<(GlyphRasterConfig, f32, f32)> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y))
            .collect();

        for (key, gx, gy) in glyph_snap {
            // Rasterize on first encounter.
            if !self.glyph_cache.contains_key(&key) {
                let (metrics, coverage) = font.rasterize_config(key);
                if metrics.width == 0 || metrics.height == 0 {
                    continue;
                }
                self.glyph_cache.insert(
                    key,
                    CachedGlyph { width: metrics.width, height: metrics.height, coverage },
                );
            }
            let Some(glyph) = self.glyph_cache.get(&key) else { continue };

            let ox = (gx + dx).round() as i32;
            let oy = (gy + dy).round() as i32;
            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    let cov = glyph.coverage[row * glyph.width + col] as f32 / 255.0;
                    if cov > 0.0 {
                        target.blend_pixel(ox + col as i32, oy + row as i32, cmd.color, cov);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::text::FontId;

    fn cmd(text: &str) -> TextCmd {
        TextCmd {
            text: text.into(),
            font: FontId(0),
            size: 16.0,
            color: Color::BLACK,
            anchor: Vec2::new(10.0, 10.0),
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
        }
    }

    #[test]
    fn unknown_font_is_skipped() {
        let mut pm = Pixmap::new(32, 32);
        pm.fill(Color::WHITE);
        let before = pm.clone();
        TextRenderer::new().render(&mut pm, &cmd("hello"), &FontSystem::new());
        assert_eq!(pm, before);
    }

    #[test]
    fn empty_text_is_noop() {
        let mut pm = Pixmap::new(8, 8);
        let before = pm.clone();
        TextRenderer::new().render(&mut pm, &cmd(""), &FontSystem::new());
        assert_eq!(pm, before);
    }
}
