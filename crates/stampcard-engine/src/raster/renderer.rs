use crate::pixmap::Pixmap;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::shapes::{circle, image, rect, text::TextRenderer};

/// Draws a recorded scene into a pixel surface.
///
/// Stateless shape passes run as free functions; the text pass keeps a glyph
/// cache across renders, so the renderer itself is held by the session and
/// reused rather than rebuilt per render.
pub struct Renderer {
    text: TextRenderer,
}

impl Renderer {
    pub fn new() -> Self {
        Self { text: TextRenderer::new() }
    }

    /// Paints `draw_list` into `target`, back-to-front in recorded order.
    ///
    /// The target is not cleared first; the scene is expected to open with
    /// its own background command.
    pub fn render(&mut self, target: &mut Pixmap, draw_list: &DrawList, fonts: &FontSystem) {
        for cmd in draw_list.cmds() {
            match cmd {
                DrawCmd::Rect(c)   => rect::render(target, c),
                DrawCmd::Image(c)  => image::render(target, c),
                DrawCmd::Circle(c) => circle::render(target, c),
                DrawCmd::Text(c)   => self.text.render(target, c, fonts),
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
