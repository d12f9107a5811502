//! Color tokens for shapes.

use peniko::Color;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a color token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("unknown color name: {0}")]
    UnknownName(String),
    #[error("malformed hex color: {0}")]
    MalformedHex(String),
}

/// Named colors accepted as tokens (CSS values).
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("pink", [255, 192, 203]),
    ("brown", [165, 42, 42]),
];

/// Exclusive upper bound for random colors (`0xFFFFFF` is never produced).
const RANDOM_COLOR_LIMIT: u32 = 0xFF_FFFF;

/// A shape color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn from_packed(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Parse a color token: a named color or `#rgb` / `#rrggbb`.
    pub fn parse(token: &str) -> Result<Self, ColorError> {
        let token = token.trim();
        if let Some(hex) = token.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::MalformedHex(token.to_string()));
        }
        let lower = token.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, [r, g, b])| Self::rgb(*r, *g, *b))
            .ok_or(ColorError::UnknownName(lower))
    }

    /// Format as `#rrggbb` (alpha is dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn parse_hex(hex: &str) -> Option<ShapeColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let value = u32::from_str_radix(hex, 16).ok()?;
            let expand = |nibble: u32| (nibble * 17) as u8;
            Some(ShapeColor::rgb(
                expand((value >> 8) & 0xF),
                expand((value >> 4) & 0xF),
                expand(value & 0xF),
            ))
        }
        6 => u32::from_str_radix(hex, 16).ok().map(ShapeColor::from_packed),
        _ => None,
    }
}

impl FromStr for ShapeColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Pick a random opaque color.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> ShapeColor {
    ShapeColor::from_packed(rng.gen_range(0..RANDOM_COLOR_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_named() {
        assert_eq!(ShapeColor::parse("blue").unwrap(), ShapeColor::BLUE);
        assert_eq!(ShapeColor::parse("Green").unwrap(), ShapeColor::GREEN);
        assert_eq!(ShapeColor::parse(" yellow ").unwrap(), ShapeColor::YELLOW);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(ShapeColor::parse("#ff0000").unwrap(), ShapeColor::RED);
        assert_eq!(ShapeColor::parse("#0f0").unwrap(), ShapeColor::rgb(0, 255, 0));
        assert_eq!(ShapeColor::parse("#00000a").unwrap(), ShapeColor::rgb(0, 0, 10));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert_eq!(
            ShapeColor::parse("chartreuse-ish"),
            Err(ColorError::UnknownName("chartreuse-ish".to_string()))
        );
        assert!(matches!(ShapeColor::parse("#12"), Err(ColorError::MalformedHex(_))));
        assert!(matches!(ShapeColor::parse("#gggggg"), Err(ColorError::MalformedHex(_))));
    }

    #[test]
    fn test_hex_format_pads() {
        assert_eq!(ShapeColor::from_packed(0x00_0a_0b).to_hex(), "#000a0b");
        assert_eq!(ShapeColor::BLUE.to_string(), "#0000ff");
    }

    #[test]
    fn test_peniko_conversion() {
        let color: Color = ShapeColor::RED.into();
        assert_eq!(ShapeColor::from(color), ShapeColor::RED);
    }

    #[test]
    fn test_random_color_is_opaque_and_never_white() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let color = random_color(&mut rng);
            assert_eq!(color.a, 255);
            assert_ne!(color, ShapeColor::WHITE);
        }
    }
}
