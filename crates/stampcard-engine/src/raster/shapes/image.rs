use crate::coords::Rect;
use crate::paint::Color;
use crate::pixmap::Pixmap;
use crate::scene::shapes::image::ImageCmd;

use super::span_coverage;

/// Renders a `DrawCmd::Image`.
///
/// The source pixmap is stretched to the destination rect with bilinear
/// sampling, matching what a browser canvas does for a scaled `drawImage`.
/// Aspect ratio is ignored on purpose.
pub(crate) fn render(target: &mut Pixmap, cmd: &ImageCmd) {
    let src = cmd.image.as_ref();
    if src.width() == 0 || src.height() == 0 || cmd.dst.is_empty() {
        return;
    }
    let Some(clip) = cmd.dst.intersect(Rect::from_extent(target.extent())) else {
        return;
    };

    let (x0, y0) = (clip.min().x, clip.min().y);
    let (x1, y1) = (clip.max().x, clip.max().y);

    let scale_x = src.width() as f32 / cmd.dst.width();
    let scale_y = src.height() as f32 / cmd.dst.height();

    for py in y0.floor() as i32..(y1.ceil() as i32) {
        let cov_y = span_coverage(y0, y1, py);
        if cov_y <= 0.0 {
            continue;
        }
        let v = (py as f32 + 0.5 - cmd.dst.min().y) * scale_y - 0.5;

        for px in x0.floor() as i32..(x1.ceil() as i32) {
            let cov = span_coverage(x0, x1, px) * cov_y;
            if cov <= 0.0 {
                continue;
            }
            let u = (px as f32 + 0.5 - cmd.dst.min().x) * scale_x - 0.5;
            let color = sample_bilinear(src, u, v);
            target.blend_pixel(px, py, color, cov);
        }
    }
}

/// Bilinear sample at `(u, v)` in source pixel space, clamped to edges.
fn sample_bilinear(src: &Pixmap, u: f32, v: f32) -> Color {
    let max_x = src.width() - 1;
    let max_y = src.height() - 1;

    let fx = u.floor();
    let fy = v.floor();
    let tx = u - fx;
    let ty = v - fy;

    let clamp_x = |x: f32| (x.max(0.0) as u32).min(max_x);
    let clamp_y = |y: f32| (y.max(0.0) as u32).min(max_y);

    let x0 = clamp_x(fx);
    let x1 = clamp_x(fx + 1.0);
    let y0 = clamp_y(fy);
    let y1 = clamp_y(fy + 1.0);

    // All four coordinates are clamped into bounds above.
    let p00 = src.pixel(x0, y0).unwrap_or_default();
    let p10 = src.pixel(x1, y0).unwrap_or_default();
    let p01 = src.pixel(x0, y1).unwrap_or_default();
    let p11 = src.pixel(x1, y1).unwrap_or_default();

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = p00[c] as f32 * (1.0 - tx) + p10[c] as f32 * tx;
        let bot = p01[c] as f32 * (1.0 - tx) + p11[c] as f32 * tx;
        out[c] = (top * (1.0 - ty) + bot * ty).round() as u8;
    }
    Color::rgba(out[0], out[1], out[2], out[3])
}
