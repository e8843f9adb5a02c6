use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{DeckmorphError, DeckmorphResult};

pub use kurbo::{Line, Point, Size};

/// Scene-space position `(x, y, z)` in the center-origin, y-up coordinate system.
///
/// `z` is always `0.0` for slide content; it is kept so emitters targeting 3-D engines can
/// consume positions unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScenePos {
    /// Horizontal coordinate (right is positive).
    pub x: f64,
    /// Vertical coordinate (up is positive).
    pub y: f64,
    /// Depth coordinate.
    #[serde(default)]
    pub z: f64,
}

impl ScenePos {
    /// Create a planar position (`z = 0`).
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Drop `z` and return the planar point.
    pub fn xy(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for ScenePos {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Opaque 24-bit RGB color.
///
/// Serialized as `"#RRGGBB"` (uppercase hex), parsed case-insensitively with or without `#`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into `0xRRGGBB`.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Channels as an array, in `r, g, b` order.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse `RRGGBB` / `#RRGGBB`.
    pub fn parse_hex(s: &str) -> DeckmorphResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(DeckmorphError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> DeckmorphResult<u8> {
            u8::from_str_radix(pair, 16).map_err(|_| {
                DeckmorphError::validation(format!("invalid hex byte \"{pair}\""))
            })
        }

        Ok(Self::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        ))
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = DeckmorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
