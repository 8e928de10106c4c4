use super::DrawCmd;

/// Recorded draw stream for one card render.
///
/// Commands paint strictly in insertion order (back-to-front), so the
/// composer controls layering by push order alone.
///
/// `push()` is O(1); `clear()` keeps allocated capacity for reuse across
/// renders.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Records a draw command at the top of the current stream.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }
}
