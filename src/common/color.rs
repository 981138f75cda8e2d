use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the
/// range 0-255. On the wire a color is a six-digit `RRGGBB` hex string,
/// matching the color attributes of OOXML style parts.
///
/// # Examples
///
/// ```rust
/// use longan::Color;
///
/// // Create a red color
/// let red = Color::new(255, 0, 0);
///
/// // Create from hex string
/// let blue = Color::from_hex("0000FF").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Black, the default text and border color.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White, the default fill background color.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts `"FF0000"` as well as `"#FF0000"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::Color;
    ///
    /// let red = Color::from_hex("FF0000").unwrap();
    /// let blue = Color::from_hex("#0000FF").unwrap();
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::Color;
    ///
    /// let color = Color::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "FF0000");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex)
            .ok_or_else(|| D::Error::custom(format!("'{hex}' is not an RRGGBB hex color")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("FF8000"), Some(Color::new(255, 128, 0)));
        assert_eq!(Color::from_hex("#FF8000"), Some(Color::new(255, 128, 0)));
        assert_eq!(Color::from_hex("FF80"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Color::new(68, 114, 196);
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"FF0000\"");

        let color: Color = serde_json::from_str("\"0000FF\"").unwrap();
        assert_eq!(color, Color::new(0, 0, 255));

        assert!(serde_json::from_str::<Color>("\"nonsense\"").is_err());
    }
}
