use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGBA color. Serialized as `#RRGGBB` / `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Same color, but forced opaque.
    #[must_use]
    pub const fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn parse_hex(text: &str) -> anyhow::Result<Self> {
        let hex = text.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let well_formed = matches!(hex.len(), 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            anyhow::bail!("expected #RRGGBB or #RRGGBBAA, got '{text}'");
        }

        let channel = |i: usize| -> anyhow::Result<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .with_context(|| format!("invalid hex digits in color '{text}'"))
        };

        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_opaque_and_translucent() -> anyhow::Result<()> {
        assert_eq!(Color::parse_hex("#6750A4")?, Color::rgb(0x67, 0x50, 0xA4));
        assert_eq!(Color::parse_hex("ffff0080")?, Color::rgba(255, 255, 0, 128));
        assert_eq!(" #ffffff ".parse::<Color>()?, Color::WHITE);
        Ok(())
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::parse_hex("#12345").is_err());
        assert!(Color::parse_hex("#GG0000").is_err());
        assert!(Color::parse_hex("").is_err());
        assert!(Color::parse_hex("#ffé000").is_err());
        assert!(Color::parse_hex("#+F+F+F").is_err());
        assert!(Color::parse_hex("#+FFFFF").is_err());
        assert!(Color::parse_hex("#FFFFFF+F").is_err());
    }

    #[test]
    fn display_drops_alpha_when_opaque() {
        assert_eq!(Color::from_rgb_u32(0x6750A4).to_string(), "#6750A4");
        assert_eq!(Color::rgba(1, 2, 3, 0x1F).to_string(), "#0102031F");
    }

    #[test]
    fn json_uses_hex_strings() -> anyhow::Result<()> {
        let json = serde_json::to_string(&Color::rgba(0, 0, 0, 0))?;
        assert_eq!(json, "\"#00000000\"");

        let back: Color = serde_json::from_str("\"#B3261E\"")?;
        assert_eq!(back, Color::from_rgb_u32(0xB3261E));

        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
        assert!(serde_json::from_str::<Color>("\"#+F+F+F\"").is_err());
        Ok(())
    }
}
