pub(crate) mod circle;
pub(crate) mod image;
pub(crate) mod rect;
pub(crate) mod text;

/// Coverage of the unit pixel `[p, p + 1)` by the 1-D span `[lo, hi)`.
#[inline]
pub(crate) fn span_coverage(lo: f32, hi: f32, p: i32) -> f32 {
    (hi.min((p + 1) as f32) - lo.max(p as f32)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::span_coverage;

    #[test]
    fn span_coverage_edges() {
        assert_eq!(span_coverage(0.0, 10.0, 3), 1.0);
        assert_eq!(span_coverage(3.5, 10.0, 3), 0.5);
        assert_eq!(span_coverage(0.0, 3.25, 3), 0.25);
        assert_eq!(span_coverage(0.0, 3.0, 3), 0.0);
        assert_eq!(span_coverage(5.0, 4.0, 4), 0.0);
    }
}
