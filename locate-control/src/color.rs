//! RGBA colors of the drawn shapes.

use std::fmt;

/// Color in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// Default stroke color of the location circle and marker.
    pub const LOCATE_BLUE: Color = Color::rgba(0x13, 0x6A, 0xEC, 255);
    /// Default fill color of the location marker.
    pub const LOCATE_LIGHT_BLUE: Color = Color::rgba(0x2A, 0x93, 0xEE, 255);

    /// Creates a new color from the given components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Red component.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green component.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue component.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Alpha component.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Parses a `#RRGGBB` or `#RRGGBBAA` string. The leading `#` is optional.
    pub fn try_from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        let component = |index: usize| u8::from_str_radix(hex.get(index..index + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Self::rgba(component(0)?, component(2)?, component(4)?, 255)),
            8 => Some(Self::rgba(
                component(0)?,
                component(2)?,
                component(4)?,
                component(6)?,
            )),
            _ => None,
        }
    }

    /// Returns `#RRGGBB` for opaque colors and `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::try_from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {hex}")))
    }
}
