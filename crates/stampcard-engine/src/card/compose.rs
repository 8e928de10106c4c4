use std::sync::Arc;

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::pixmap::Pixmap;
use crate::scene::shapes::text::{TextAlign, TextBaseline};
use crate::scene::shapes::Border;
use crate::scene::DrawList;
use crate::text::FontSet;

use super::fields::{BENEFIT_PLACEHOLDER, SHOP_NAME_PLACEHOLDER, TITLE_PLACEHOLDER};
use super::layout::{
    PointGrid, BENEFIT_SIZE, BENEFIT_Y, CARD_TITLE_SIZE, CARD_TITLE_Y, CREDIT_MARGIN_X,
    CREDIT_MARGIN_Y, CREDIT_SIZE, SHOP_NAME_SIZE, SHOP_NAME_Y, STAMP_NUMBER_SIZE, STAMP_RADIUS,
    STAMP_RING_WIDTH,
};
use super::{parse_point_count, CardFields, Palette, Theme};

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Records the complete card face as a draw stream.
///
/// Pure except for reading the shared background pixmap: the same fields,
/// theme, background and surface extent always produce the same commands.
/// Layering is fixed by push order, background first, credit line last.
pub fn compose(
    fields: &CardFields,
    theme: &Theme,
    background: Option<&Arc<Pixmap>>,
    fonts: FontSet,
    extent: Vec2,
) -> DrawList {
    let mut list = DrawList::new();
    let surface = Rect::from_extent(extent);
    let mid_x = extent.x / 2.0;

    // ── background ────────────────────────────────────────────────────────
    match background {
        Some(image) => {
            list.push_image(Arc::clone(image), surface);
            // Darken the photo so the light text palette stays legible.
            list.push_solid_rect(surface, Color::BLACK.with_opacity(0.6));
        }
        None => list.push_solid_rect(surface, theme.background),
    }

    let palette = Palette::for_card(theme, background.is_some());

    // ── heading rows ──────────────────────────────────────────────────────
    list.push_text(
        or_placeholder(&fields.shop_name, SHOP_NAME_PLACEHOLDER),
        fonts.bold(),
        SHOP_NAME_SIZE,
        palette.primary,
        Vec2::new(mid_x, SHOP_NAME_Y),
        TextAlign::Center,
        TextBaseline::Alphabetic,
    );
    list.push_text(
        or_placeholder(&fields.title, TITLE_PLACEHOLDER),
        fonts.bold(),
        CARD_TITLE_SIZE,
        palette.title,
        Vec2::new(mid_x, CARD_TITLE_Y),
        TextAlign::Center,
        TextBaseline::Alphabetic,
    );
    list.push_text(
        or_placeholder(&fields.benefit, BENEFIT_PLACEHOLDER),
        fonts.bold(),
        BENEFIT_SIZE,
        palette.primary,
        Vec2::new(mid_x, BENEFIT_Y),
        TextAlign::Center,
        TextBaseline::Alphabetic,
    );

    // ── point grid ────────────────────────────────────────────────────────
    let count = parse_point_count(&fields.points);
    let grid = PointGrid::layout(count, extent.x);
    for index in 0..count.min(grid.capacity()) {
        let center = grid.cell_center(index);
        list.push_circle(
            center,
            STAMP_RADIUS,
            palette.stamp_fill,
            Some(Border::new(STAMP_RING_WIDTH, palette.stamp_ring)),
        );
        list.push_text(
            (index + 1).to_string(),
            fonts.bold(),
            STAMP_NUMBER_SIZE,
            palette.stamp_number,
            center,
            TextAlign::Center,
            TextBaseline::Middle,
        );
    }

    // ── credit line ───────────────────────────────────────────────────────
    if !fields.created_by.is_empty() {
        list.push_text(
            format!("Created by {}", fields.created_by),
            fonts.regular,
            CREDIT_SIZE,
            palette.secondary,
            Vec2::new(extent.x - CREDIT_MARGIN_X, extent.y - CREDIT_MARGIN_Y),
            TextAlign::Right,
            TextBaseline::Alphabetic,
        );
    }

    list
}
