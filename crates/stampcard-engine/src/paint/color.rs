use std::fmt;

/// Error returned by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color parse error: {}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// Straight-alpha sRGB color, one byte per channel.
///
/// Invariant:
/// - `rgb` components are NOT multiplied by `a` (straight alpha).
///
/// The byte layout matches the raster surface (`RGBA8`), so a color can be
/// written into a pixel row without conversion. Blending premultiplies on
/// the fly inside the rasterizer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a `#rrggbb` or `#rrggbbaa` hex literal (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError(format!(
                "color literal must be #rrggbb or #rrggbbaa, got {} digits",
                hex.len()
            )));
        }
        if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError(format!("invalid hex digit {c:?} in {s:?}")));
        }
        // All characters were validated as ascii_hexdigit above, and 2 hex
        // digits fit in u8 (max 0xFF = 255), so these conversions never fail.
        let r = u8::from_str_radix(&hex[0..2], 16).expect("validated hex digits");
        let g = u8::from_str_radix(&hex[2..4], 16).expect("validated hex digits");
        let b = u8::from_str_radix(&hex[4..6], 16).expect("validated hex digits");
        let a = if hex.len() == 8 {
            u8::from_str_radix(&hex[6..8], 16).expect("validated hex digits")
        } else {
            255
        };
        Ok(Self { r, g, b, a })
    }

    /// Returns the same color with its alpha scaled by `opacity` in `[0, 1]`.
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Channel bytes in surface order.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_rgb() {
        assert_eq!(Color::from_hex("#d32f2f").unwrap(), Color::rgb(0xd3, 0x2f, 0x2f));
    }

    #[test]
    fn from_hex_without_hash() {
        assert_eq!(Color::from_hex("fff8e7").unwrap(), Color::rgb(0xff, 0xf8, 0xe7));
    }

    #[test]
    fn from_hex_rgba() {
        assert_eq!(
            Color::from_hex("#ffffffe6").unwrap(),
            Color::rgba(255, 255, 255, 0xe6)
        );
    }

    #[test]
    fn from_hex_rejects_short() {
        assert!(Color::from_hex("#666").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn with_opacity_scales_alpha() {
        assert_eq!(Color::WHITE.with_opacity(0.9).a, 230);
        assert_eq!(Color::WHITE.with_opacity(0.0).a, 0);
        assert_eq!(Color::WHITE.with_opacity(2.0).a, 255);
    }
}
