//! Minimal 5×7 bitmap font, just enough for the legend labels.

pub const WIDTH: u32 = 5;
pub const HEIGHT: u32 = 7;

/// Horizontal distance between consecutive glyph origins.
pub const ADVANCE: u32 = WIDTH + 1;

/// Glyph rows from top to bottom, the most significant of the five bits is the leftmost pixel.
pub const fn glyph(character: char) -> Option<[u8; 7]> {
    let rows = match character {
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'c' => [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'g' => [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
        'y' => [0b00000, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        _ => return None,
    };
    Some(rows)
}

/// Rendered width of the text in pixels.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let length = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    (length.saturating_mul(ADVANCE).saturating_sub(1)).saturating_mul(scale)
}
