//! Colour type and parsing for canvas backgrounds.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AssetsError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a colour string.
    ///
    /// Supports the named colours `transparent`, `black` and `white`,
    /// and hex formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s {
            "transparent" => return Ok(Self::TRANSPARENT),
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            _ => {}
        }
        Self::from_hex(s)
    }

    /// Parse a hex colour string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(hex.chars().nth(0).unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            4 => {
                // #RGBA -> #RRGGBBAA
                let r = parse_hex_digit(hex.chars().nth(0).unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                let a = parse_hex_digit(hex.chars().nth(3).unwrap())?;
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
            }
            6 => {
                // #RRGGBB
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                // #RRGGBBAA
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(AssetsError::Parse {
                message: format!("Invalid colour: {}", s),
                help: Some(
                    "Use transparent, black, white, or #RGB/#RGBA/#RRGGBB/#RRGGBBAA".to_string(),
                ),
            }),
        }
    }

    /// Convert to an RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl FromStr for Colour {
    type Err = AssetsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::TRANSPARENT {
            write!(f, "transparent")
        } else if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}

fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| AssetsError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| AssetsError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colours() {
        assert_eq!(Colour::parse("white").unwrap(), Colour::WHITE);
        assert_eq!(Colour::parse("black").unwrap(), Colour::BLACK);
        assert_eq!(Colour::parse("transparent").unwrap(), Colour::TRANSPARENT);
    }

    #[test]
    fn test_parse_hex_short() {
        assert_eq!(Colour::parse("#fff").unwrap(), Colour::WHITE);
        assert_eq!(Colour::parse("#000").unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_parse_hex_full() {
        assert_eq!(Colour::parse("#336699").unwrap(), Colour::rgb(0x33, 0x66, 0x99));
        assert_eq!(
            Colour::parse("#33669980").unwrap(),
            Colour::new(0x33, 0x66, 0x99, 0x80)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Colour::parse("banana").is_err());
        assert!(Colour::parse("#12345").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let c = Colour::rgb(0x33, 0x66, 0x99);
        assert_eq!(Colour::parse(&c.to_string()).unwrap(), c);
        assert_eq!(Colour::TRANSPARENT.to_string(), "transparent");
    }

    #[test]
    fn test_serde_string_form() {
        let c: Colour = serde_yaml::from_str("white").unwrap();
        assert_eq!(c, Colour::WHITE);
        let c: Colour = serde_yaml::from_str("\"#336699\"").unwrap();
        assert_eq!(c, Colour::rgb(0x33, 0x66, 0x99));
    }
}
