/// Placeholder shown when the shop-name field is empty.
pub const SHOP_NAME_PLACEHOLDER: &str = "Shop Name";
/// Placeholder shown when the card-title field is empty.
pub const TITLE_PLACEHOLDER: &str = "Point Card";
/// Placeholder shown when the benefit field is empty.
pub const BENEFIT_PLACEHOLDER: &str = "Benefit";

/// User-supplied card content.
///
/// Fields are consumed as-is on every render. Nothing is validated here:
/// empty text falls back to placeholders and the point count goes through
/// [`parse_point_count`] at compose time, so a render can never be rejected
/// over field content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFields {
    pub shop_name:  String,
    pub title:      String,
    pub benefit:    String,
    /// Raw point-count text, kept unparsed so the coercion policy lives in
    /// one place.
    pub points:     String,
    /// Attribution line. Empty suppresses the credit entirely.
    pub created_by: String,
}

/// Parse-or-default contract for the point-count field.
///
/// The raw value is trimmed and parsed as a decimal integer. Negative
/// values clamp to zero; values above `u32::MAX` saturate; anything
/// unparseable (including numbers too large for `i64`) counts as zero.
/// The grid capacity cap is applied later, in layout.
pub fn parse_point_count(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n <= 0 => 0,
        Ok(n) => u32::try_from(n).unwrap_or(u32::MAX),
        Err(_) => 0,
    }
}
