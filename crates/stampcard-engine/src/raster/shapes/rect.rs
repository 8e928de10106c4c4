use crate::coords::Rect;
use crate::pixmap::Pixmap;
use crate::scene::shapes::rect::RectCmd;

use super::span_coverage;

/// Renders a `DrawCmd::Rect`.
///
/// Fractional edges get area coverage; interior rows of an opaque fill are
/// written as whole spans since the full-surface background rect dominates
/// the per-render pixel count.
pub(crate) fn render(target: &mut Pixmap, cmd: &RectCmd) {
    let Some(clip) = cmd.rect.intersect(Rect::from_extent(target.extent())) else {
        return;
    };

    let (x0, y0) = (clip.min().x, clip.min().y);
    let (x1, y1) = (clip.max().x, clip.max().y);

    let px0 = x0.floor() as i32;
    let px1 = x1.ceil() as i32;
    let py0 = y0.floor() as i32;
    let py1 = y1.ceil() as i32;

    // Interior columns have full horizontal coverage.
    let ix0 = x0.ceil() as i32;
    let ix1 = x1.floor() as i32;

    let pattern = cmd.color.to_array();

    for py in py0..py1 {
        let cov_y = span_coverage(y0, y1, py);
        if cov_y <= 0.0 {
            continue;
        }

        if cmd.color.is_opaque() && cov_y >= 1.0 && ix0 < ix1 {
            let i = target.pixel_index(ix0 as u32, py as u32);
            let span = &mut target.data_mut()[i..i + (ix1 - ix0) as usize * 4];
            for px in span.chunks_exact_mut(4) {
                px.copy_from_slice(&pattern);
            }
            for px in px0..ix0 {
                target.blend_pixel(px, py, cmd.color, span_coverage(x0, x1, px));
            }
            for px in ix1..px1 {
                target.blend_pixel(px, py, cmd.color, span_coverage(x0, x1, px));
            }
        } else {
            for px in px0..px1 {
                let cov = span_coverage(x0, x1, px) * cov_y;
                target.blend_pixel(px, py, cmd.color, cov);
            }
        }
    }
}
