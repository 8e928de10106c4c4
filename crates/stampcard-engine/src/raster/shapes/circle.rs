use crate::coords::Vec2;
use crate::pixmap::Pixmap;
use crate::scene::shapes::circle::CircleCmd;

/// Renders a `DrawCmd::Circle`.
///
/// Coverage is a signed-distance approximation sampled at pixel centers:
/// the fill fades out across the last pixel before the radius, and the
/// border is a band centered on the radius, painted over the fill edge.
pub(crate) fn render(target: &mut Pixmap, cmd: &CircleCmd) {
    if cmd.radius <= 0.0 {
        return;
    }
    let border_half = cmd.border.as_ref().map_or(0.0, |b| b.width * 0.5);
    let reach = cmd.radius + border_half + 1.0;

    let px0 = ((cmd.center.x - reach).floor() as i32).max(0);
    let py0 = ((cmd.center.y - reach).floor() as i32).max(0);
    let px1 = ((cmd.center.x + reach).ceil() as i32).min(target.width() as i32);
    let py1 = ((cmd.center.y + reach).ceil() as i32).min(target.height() as i32);

    for py in py0..py1 {
        for px in px0..px1 {
            let sample = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            let d = sample.distance_sq(cmd.center).sqrt();

            let fill_cov = (cmd.radius - d + 0.5).clamp(0.0, 1.0);
            if fill_cov > 0.0 {
                target.blend_pixel(px, py, cmd.fill, fill_cov);
            }

            if let Some(border) = &cmd.border {
                let band_cov = (border_half - (d - cmd.radius).abs() + 0.5).clamp(0.0, 1.0);
                if band_cov > 0.0 {
                    target.blend_pixel(px, py, border.color, band_cov);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::shapes::Border;

    #[test]
    fn fill_covers_center_and_misses_corner() {
        let mut pm = Pixmap::new(20, 20);
        pm.fill(Color::rgb(0, 0, 0));
        let cmd = CircleCmd::new(Vec2::new(10.0, 10.0), 6.0, Color::WHITE, None);
        render(&mut pm, &cmd);
        assert_eq!(pm.pixel(10, 10).unwrap(), [255, 255, 255, 255]);
        assert_eq!(pm.pixel(0, 0).unwrap(), [0, 0, 0, 255]);
        // Just inside the radius along the axis.
        assert_eq!(pm.pixel(14, 10).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn border_band_paints_on_radius() {
        let mut pm = Pixmap::new(30, 30);
        pm.fill(Color::rgb(0, 0, 0));
        let cmd = CircleCmd::new(
            Vec2::new(15.0, 15.0),
            10.0,
            Color::WHITE,
            Some(Border::new(3.0, Color::rgb(255, 0, 0))),
        );
        render(&mut pm, &cmd);
        // On the radius the band is fully red.
        assert_eq!(pm.pixel(25, 15).unwrap(), [255, 0, 0, 255]);
        // Center stays the fill color.
        assert_eq!(pm.pixel(15, 15).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn offscreen_circle_is_clipped_not_wrapped() {
        let mut pm = Pixmap::new(10, 10);
        pm.fill(Color::rgb(0, 0, 0));
        let cmd = CircleCmd::new(Vec2::new(-3.0, 5.0), 6.0, Color::WHITE, None);
        render(&mut pm, &cmd);
        assert_eq!(pm.pixel(0, 5).unwrap(), [255, 255, 255, 255]);
        assert_eq!(pm.pixel(9, 5).unwrap(), [0, 0, 0, 255]);
    }

    #[test]
    fn zero_radius_is_noop() {
        let mut pm = Pixmap::new(4, 4);
        let cmd = CircleCmd::new(Vec2::new(2.0, 2.0), 0.0, Color::WHITE, None);
        render(&mut pm, &cmd);
        assert_eq!(pm.pixel(2, 2).unwrap(), [0, 0, 0, 0]);
    }
}
