//! Fixed layout table for the card face.
//!
//! All positions are logical pixels from the top-left of the surface. The
//! card is not responsive: text rows sit at fixed heights and only the
//! point grid derives anything from the surface width (its centering).

use crate::coords::Vec2;

// ── text rows ─────────────────────────────────────────────────────────────

pub const SHOP_NAME_Y: f32 = 60.0;
pub const CARD_TITLE_Y: f32 = 120.0;
pub const BENEFIT_Y: f32 = 165.0;

pub const SHOP_NAME_SIZE: f32 = 36.0;
pub const CARD_TITLE_SIZE: f32 = 28.0;
pub const BENEFIT_SIZE: f32 = 22.0;

// ── credit line ───────────────────────────────────────────────────────────

pub const CREDIT_SIZE: f32 = 12.0;
/// Inset of the credit anchor from the right edge.
pub const CREDIT_MARGIN_X: f32 = 20.0;
/// Inset of the credit baseline from the bottom edge.
pub const CREDIT_MARGIN_Y: f32 = 15.0;

// ── point grid ────────────────────────────────────────────────────────────

pub const GRID_START_Y: f32 = 210.0;
pub const GRID_COLS: u32 = 5;
/// Center-to-center distance between stamps, both axes.
pub const STAMP_SPACING: f32 = 80.0;
pub const STAMP_RADIUS: f32 = 30.0;
pub const STAMP_RING_WIDTH: f32 = 3.0;
pub const STAMP_NUMBER_SIZE: f32 = 18.0;

/// Stamp-grid shape for one render pass.
///
/// Row count is tiered by the requested stamp count; columns are fixed.
/// The tier table accepts any count, so absurd requests still produce a
/// well-formed grid and the emission cap below bounds the actual draw work.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointGrid {
    pub rows:    u32,
    pub cols:    u32,
    /// Center x of the first column; the grid is centered on the surface.
    pub start_x: f32,
    /// Center y of the first row.
    pub start_y: f32,
}

impl PointGrid {
    /// Computes the grid for `count` stamps on a surface `surface_width` wide.
    pub fn layout(count: u32, surface_width: f32) -> Self {
        let rows = match count {
            0..=5   => 1,
            6..=10  => 2,
            11..=15 => 3,
            _       => 4,
        };
        let grid_width = (GRID_COLS - 1) as f32 * STAMP_SPACING;
        Self {
            rows,
            cols: GRID_COLS,
            start_x: (surface_width - grid_width) / 2.0,
            start_y: GRID_START_Y,
        }
    }

    /// Stamps the grid can hold; draw requests past this are dropped.
    #[inline]
    pub fn capacity(self) -> u32 {
        self.rows * self.cols
    }

    /// Center of cell `index` in row-major order. `index` must be below
    /// [`capacity`](Self::capacity).
    #[inline]
    pub fn cell_center(self, index: u32) -> Vec2 {
        let row = index / self.cols;
        let col = index % self.cols;
        Vec2::new(
            self.start_x + col as f32 * STAMP_SPACING,
            self.start_y + row as f32 * STAMP_SPACING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_tiers() {
        assert_eq!(PointGrid::layout(0, 600.0).rows, 1);
        assert_eq!(PointGrid::layout(5, 600.0).rows, 1);
        assert_eq!(PointGrid::layout(6, 600.0).rows, 2);
        assert_eq!(PointGrid::layout(10, 600.0).rows, 2);
        assert_eq!(PointGrid::layout(11, 600.0).rows, 3);
        assert_eq!(PointGrid::layout(15, 600.0).rows, 3);
        assert_eq!(PointGrid::layout(16, 600.0).rows, 4);
        assert_eq!(PointGrid::layout(u32::MAX, 600.0).rows, 4);
    }

    #[test]
    fn grid_is_centered_for_every_count() {
        for count in 0..40 {
            let g = PointGrid::layout(count, 600.0);
            let mid = g.start_x + (g.cols - 1) as f32 * STAMP_SPACING / 2.0;
            assert_eq!(mid, 300.0, "count {count}");
        }
    }

    #[test]
    fn cells_step_by_spacing_row_major() {
        let g = PointGrid::layout(12, 600.0);
        assert_eq!(g.cell_center(0), Vec2::new(140.0, 210.0));
        assert_eq!(g.cell_center(1), Vec2::new(220.0, 210.0));
        assert_eq!(g.cell_center(4), Vec2::new(460.0, 210.0));
        assert_eq!(g.cell_center(5), Vec2::new(140.0, 290.0));
        assert_eq!(g.cell_center(11), Vec2::new(220.0, 370.0));
    }

    #[test]
    fn capacity_matches_tier() {
        assert_eq!(PointGrid::layout(3, 600.0).capacity(), 5);
        assert_eq!(PointGrid::layout(16, 600.0).capacity(), 20);
    }
}
