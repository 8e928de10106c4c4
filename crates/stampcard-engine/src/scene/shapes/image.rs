use std::sync::Arc;

use crate::coords::Rect;
use crate::pixmap::Pixmap;
use crate::scene::{DrawCmd, DrawList};

/// Image draw payload.
///
/// The source pixmap is shared, not copied: the session keeps the decoded
/// background alive across renders and the scene just references it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: Arc<Pixmap>,
    /// Destination rect in logical pixels. The source is stretched to fill
    /// it, ignoring aspect ratio.
    pub dst: Rect,
}

impl ImageCmd {
    #[inline]
    pub fn new(image: Arc<Pixmap>, dst: Rect) -> Self {
        Self { image, dst }
    }
}

impl DrawList {
    /// Records an image draw command.
    #[inline]
    pub fn push_image(&mut self, image: Arc<Pixmap>, dst: Rect) {
        self.push(DrawCmd::Image(ImageCmd::new(image, dst)));
    }
}
