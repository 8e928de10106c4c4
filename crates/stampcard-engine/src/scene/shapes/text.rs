use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontId;

/// Horizontal meaning of [`TextCmd::anchor`]`.x`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Anchor is the left edge of the text run.
    #[default]
    Left,
    /// Anchor is the horizontal center of the text run.
    Center,
    /// Anchor is the right edge of the text run.
    Right,
}

/// Vertical meaning of [`TextCmd::anchor`]`.y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// Anchor sits on the alphabetic baseline.
    #[default]
    Alphabetic,
    /// Anchor is the vertical midpoint between ascent and descent.
    Middle,
}

/// Text draw payload.
///
/// Single-line only. The composer positions each run explicitly, so there
/// is no wrapping width.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Anchor point; its meaning depends on `align` and `baseline`.
    pub anchor: Vec2,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        anchor: Vec2,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            anchor,
            align,
            baseline,
        }));
    }
}
