//! CPU pixel surface.
//!
//! A [`Pixmap`] is a straight-alpha `RGBA8` buffer in row-major order. It is
//! both the render target the rasterizer draws into and the container a
//! decoded background photo is held in.

use crate::coords::Vec2;
use crate::paint::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width:  u32,
    height: u32,
    data:   Vec<u8>,
}

impl Pixmap {
    /// Allocates a transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wraps an existing `RGBA8` buffer.
    ///
    /// Returns `None` when `data` is not exactly `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self { width, height, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Surface size as logical pixels.
    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Raw `RGBA8` bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte offset of pixel `(x, y)`. Caller guarantees bounds.
    #[inline]
    pub(crate) fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Channel bytes of pixel `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.pixel_index(x, y);
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Flood-fills the whole surface with `color`, replacing existing pixels.
    ///
    /// Hot path: runs once per render across the full surface, so the bulk of
    /// the buffer is filled as aligned `u32` words rather than byte-by-byte.
    pub fn fill(&mut self, color: Color) {
        let pattern = color.to_array();
        let word = u32::from_ne_bytes(pattern);

        // The buffer length is a multiple of 4 but its start may not be
        // word-aligned; fall back to a byte fill in that case.
        let (prefix, words, suffix) = bytemuck::pod_align_to_mut::<u8, u32>(&mut self.data);
        if prefix.is_empty() && suffix.is_empty() {
            words.fill(word);
        } else {
            for (i, b) in self.data.iter_mut().enumerate() {
                *b = pattern[i % 4];
            }
        }
    }

    /// Writes `color` to `(x, y)` without blending. Out-of-bounds is a no-op.
    #[inline]
    pub(crate) fn set_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let i = self.pixel_index(x as u32, y as u32);
        self.data[i..i + 4].copy_from_slice(&color);
    }

    /// Source-over blends `color` into `(x, y)` at the given coverage.
    ///
    /// Coverage is the anti-aliasing weight in `[0, 1]`; it scales the source
    /// alpha. Out-of-bounds and zero-coverage writes are no-ops.
    pub(crate) fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let sa = (color.a as f32 / 255.0) * coverage;
        if sa <= 0.0 {
            return;
        }
        let i = self.pixel_index(x as u32, y as u32);
        if sa >= 1.0 {
            self.data[i..i + 4].copy_from_slice(&color.to_array());
            return;
        }

        let inv = 1.0 - sa;
        let da = self.data[i + 3] as f32 / 255.0;
        let out_a = sa + da * inv;
        if out_a <= 0.0 {
            return;
        }
        // Straight-alpha source-over: channels are weighted by their own
        // alpha, then divided back out of the premultiplied sum.
        let blend = |src: u8, dst: u8| -> u8 {
            let s = src as f32 * sa;
            let d = dst as f32 * da * inv;
            ((s + d) / out_a).round() as u8
        };
        self.data[i]     = blend(color.r, self.data[i]);
        self.data[i + 1] = blend(color.g, self.data[i + 1]);
        self.data[i + 2] = blend(color.b, self.data[i + 2]);
        self.data[i + 3] = (out_a * 255.0).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_sets_every_pixel() {
        let mut pm = Pixmap::new(7, 3);
        pm.fill(Color::rgb(10, 20, 30));
        for y in 0..3 {
            for x in 0..7 {
                assert_eq!(pm.pixel(x, y).unwrap(), [10, 20, 30, 255]);
            }
        }
    }

    #[test]
    fn blend_full_coverage_opaque_replaces() {
        let mut pm = Pixmap::new(2, 2);
        pm.fill(Color::WHITE);
        pm.blend_pixel(1, 1, Color::rgb(0, 0, 0), 1.0);
        assert_eq!(pm.pixel(1, 1).unwrap(), [0, 0, 0, 255]);
    }

    #[test]
    fn blend_half_coverage_mixes() {
        let mut pm = Pixmap::new(1, 1);
        pm.fill(Color::rgb(0, 0, 0));
        pm.blend_pixel(0, 0, Color::rgb(255, 255, 255), 0.5);
        let [r, g, b, a] = pm.pixel(0, 0).unwrap();
        assert_eq!(a, 255);
        for c in [r, g, b] {
            assert!((126..=129).contains(&c), "expected ~50% gray, got {c}");
        }
    }

    #[test]
    fn blend_translucent_color_over_opaque() {
        let mut pm = Pixmap::new(1, 1);
        pm.fill(Color::rgb(0, 0, 0));
        // 90% white over black, as the stamp circle fill uses over a photo.
        pm.blend_pixel(0, 0, Color::WHITE.with_opacity(0.9), 1.0);
        let [r, _, _, a] = pm.pixel(0, 0).unwrap();
        assert_eq!(a, 255);
        assert!(r > 220, "expected near-white, got {r}");
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut pm = Pixmap::new(2, 2);
        pm.blend_pixel(-1, 0, Color::WHITE, 1.0);
        pm.blend_pixel(0, 5, Color::WHITE, 1.0);
        pm.set_pixel(2, 0, [1, 2, 3, 4]);
        assert_eq!(pm.pixel(0, 0).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn from_rgba8_rejects_wrong_length() {
        assert!(Pixmap::from_rgba8(2, 2, vec![0; 15]).is_none());
        assert!(Pixmap::from_rgba8(2, 2, vec![0; 16]).is_some());
    }
}
