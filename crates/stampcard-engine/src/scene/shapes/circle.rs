use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Border;

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill:   Color,
    pub border: Option<Border>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Color, border: Option<Border>) -> Self {
        Self { center, radius, fill, border }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, fill: Color, border: Option<Border>) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, fill, border)));
    }
}
