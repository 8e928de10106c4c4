use crate::paint::Color;

// ── photo palette ─────────────────────────────────────────────────────────
// Foreground colors used over a darkened background photo. Fixed rather
// than derived from the theme: the accent color cannot be trusted to
// contrast against an arbitrary picture.

const PHOTO_PRIMARY:   Color = Color::rgb(0xe8, 0xe8, 0xe8);
const PHOTO_SECONDARY: Color = Color::rgb(0xd0, 0xd0, 0xd0);
const PHOTO_TITLE:     Color = Color::rgb(0xf5, 0xf5, 0xf5);
const PHOTO_RING:      Color = Color::rgb(0xe0, 0xe0, 0xe0);
const PHOTO_NUMBER:    Color = Color::rgb(0x66, 0x66, 0x66);

// ── plain palette ─────────────────────────────────────────────────────────

const PLAIN_PRIMARY:   Color = Color::rgb(0x33, 0x33, 0x33);
const PLAIN_SECONDARY: Color = Color::rgb(0x66, 0x66, 0x66);

/// The color scheme a card is rendered with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Card background when no photo is set.
    pub background: Color,
    /// Highlight color for the title and stamp rings when no photo is set.
    pub accent:     Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xff, 0xf8, 0xe7),
            accent:     Color::rgb(0xd3, 0x2f, 0x2f),
        }
    }
}

/// Resolved foreground colors for one render pass.
///
/// Every conditional color choice on the card face goes through here, so
/// the photo/no-photo switch exists in exactly one place.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Shop name and benefit text.
    pub primary:      Color,
    /// Credit line.
    pub secondary:    Color,
    /// Card title.
    pub title:        Color,
    /// Stamp circle fill.
    pub stamp_fill:   Color,
    /// Stamp circle stroke.
    pub stamp_ring:   Color,
    /// Number inside a stamp circle.
    pub stamp_number: Color,
}

impl Palette {
    /// Picks the light palette over a photo, the theme-driven one otherwise.
    pub fn for_card(theme: &Theme, has_photo: bool) -> Self {
        if has_photo {
            Self {
                primary:      PHOTO_PRIMARY,
                secondary:    PHOTO_SECONDARY,
                title:        PHOTO_TITLE,
                // Slightly translucent so the photo still reads through the
                // stamps after the darkening overlay.
                stamp_fill:   Color::WHITE.with_opacity(0.9),
                stamp_ring:   PHOTO_RING,
                stamp_number: PHOTO_NUMBER,
            }
        } else {
            Self {
                primary:      PLAIN_PRIMARY,
                secondary:    PLAIN_SECONDARY,
                title:        theme.accent,
                stamp_fill:   Color::WHITE,
                stamp_ring:   theme.accent,
                stamp_number: theme.accent,
            }
        }
    }
}
