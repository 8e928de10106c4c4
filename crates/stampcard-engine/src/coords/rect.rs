use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Constructed only from engine code, so width/height are assumed
/// non-negative; a zero-area rect is the empty rect.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rect covering a whole surface of the given extent.
    #[inline]
    pub const fn from_extent(extent: Vec2) -> Self {
        Self {
            origin: Vec2::zero(),
            size: extent,
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Intersection of two rects, or `None` when they share no area.
    ///
    /// The rasterizer uses this to clip draw extents to the surface.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.min().x.max(other.min().x);
        let y0 = self.min().y.max(other.min().y);
        let x1 = self.max().x.min(other.max().x);
        let y1 = self.max().y.min(other.max().y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn intersect_overlapping() {
        let i = r(0.0, 0.0, 10.0, 10.0).intersect(r(5.0, 5.0, 10.0, 10.0)).unwrap();
        assert_eq!(i, r(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersect_contained() {
        let outer = r(0.0, 0.0, 100.0, 100.0);
        let inner = r(10.0, 10.0, 20.0, 20.0);
        assert_eq!(outer.intersect(inner).unwrap(), inner);
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        // Shared edge — zero-width overlap is not an intersection.
        assert!(r(0.0, 0.0, 10.0, 10.0).intersect(r(10.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn intersect_disjoint_returns_none() {
        assert!(r(0.0, 0.0, 5.0, 5.0).intersect(r(20.0, 20.0, 5.0, 5.0)).is_none());
    }

    #[test]
    fn from_extent_spans_surface() {
        let rect = Rect::from_extent(Vec2::new(600.0, 520.0));
        assert_eq!(rect.min(), Vec2::zero());
        assert_eq!(rect.max(), Vec2::new(600.0, 520.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
