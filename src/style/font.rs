//! Font configuration.

use serde::{Deserialize, Serialize};

use crate::common::Color;
use crate::node::{config_node, validate};

/// Underline style for cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Underline {
    /// No underline.
    None,
    /// Single underline.
    Single,
    /// Double underline.
    Double,
    /// Single accounting underline.
    SingleAccounting,
    /// Double accounting underline.
    DoubleAccounting,
}

config_node! {
    /// Character formatting for cell and chart text.
    ///
    /// Defines the visual appearance of text including typeface, size,
    /// color, and text decoration. A freshly-constructed font is the
    /// workbook default (Calibri 11, black, no decoration).
    pub struct Font, options FontOptions, wire "font" {
        values {
            /// Font name/family (e.g., "Calibri", "Arial").
            name, set_name: String,
            wire "name",
            default Self::DEFAULT_NAME.to_string(),
            validate validate::non_empty;
            /// Font size in points.
            size, set_size: f64,
            wire "size",
            default Self::DEFAULT_SIZE,
            validate validate::font_size;
            /// Bold flag.
            bold, set_bold: bool,
            wire "bold",
            default false,
            validate validate::any;
            /// Italic flag.
            italic, set_italic: bool,
            wire "italic",
            default false,
            validate validate::any;
            /// Strike-through flag.
            strike, set_strike: bool,
            wire "strike",
            default false,
            validate validate::any;
            /// Underline style.
            underline, set_underline: Underline,
            wire "underline",
            default Underline::None,
            validate validate::any;
            /// Font color.
            color, set_color: Color,
            wire "color",
            default Color::BLACK,
            validate validate::any;
        }
        nodes {}
    }
}

impl Font {
    /// Default font family used by new workbooks.
    pub const DEFAULT_NAME: &'static str = "Calibri";
    /// Default font size in points.
    pub const DEFAULT_SIZE: f64 = 11.0;

    /// Check if the font has any text decoration.
    #[inline]
    pub fn has_decoration(&self) -> bool {
        self.bold || self.italic || self.strike || self.underline != Underline::None
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_font_is_default() {
        let font = Font::new();
        assert!(font.is_default());
        assert_eq!(font.name(), Font::DEFAULT_NAME);
        assert_eq!(*font.size(), Font::DEFAULT_SIZE);
        assert!(!font.has_decoration());
    }

    #[test]
    fn test_size_is_validated() {
        let mut font = Font::new();
        font.set_size(409.0).unwrap();
        assert!(font.set_size(409.5).is_err());
        assert!(font.set_size(0.0).is_err());
        assert_eq!(*font.size(), 409.0);
    }

    #[test]
    fn test_combine_keeps_explicit_values() {
        let mut reference = Font::new();
        reference.set_bold(true).unwrap();
        reference.set_size(14.0).unwrap();
        reference.set_color(Color::new(0xD0, 0x00, 0x00)).unwrap();

        let mut font = Font::new();
        font.set_size(9.0).unwrap();

        font.combine(&reference);
        assert_eq!(*font.size(), 9.0);
        assert!(*font.bold());
        assert_eq!(*font.color(), Color::new(0xD0, 0x00, 0x00));
    }

    #[test]
    fn test_options_overlay_is_sparse() {
        let mut font = Font::new();
        font.set_italic(true).unwrap();

        let options = FontOptions {
            underline: Some(Underline::Double),
            ..Default::default()
        };
        font.apply_options(&options).unwrap();

        assert_eq!(*font.underline(), Underline::Double);
        assert!(*font.italic());
        assert_eq!(*font.size(), Font::DEFAULT_SIZE);
    }

    #[test]
    fn test_json_wire_names() {
        let mut font = Font::new();
        font.set_bold(true).unwrap();
        font.set_color(Color::new(0x44, 0x72, 0xC4)).unwrap();

        let json = font.to_json().unwrap();
        assert_eq!(json, r#"{"bold":true,"color":"4472C4"}"#);
        assert_eq!(Font::from_json(&json).unwrap(), font);
    }

    #[test]
    fn test_xml_round_trip() {
        let mut font = Font::new();
        font.set_name("Arial".to_string()).unwrap();
        font.set_underline(Underline::Single).unwrap();

        let xml = font.to_xml().unwrap();
        assert!(xml.starts_with("<font>"));
        assert!(xml.contains("<underline>single</underline>"));
        assert_eq!(Font::from_xml(&xml).unwrap(), font);
    }

    fn arb_font() -> impl Strategy<Value = Font> {
        (
            prop_oneof![Just("Calibri".to_string()), Just("Arial".to_string())],
            1.0..=409.0f64,
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(name, size, bold, italic)| {
                let mut font = Font::new();
                font.set_name(name).unwrap();
                font.set_size(size).unwrap();
                font.set_bold(bold).unwrap();
                font.set_italic(italic).unwrap();
                font
            })
    }

    proptest! {
        #[test]
        fn prop_combine_never_overwrites_explicit(font in arb_font(), reference in arb_font()) {
            let before = font.clone();
            let mut combined = font.clone();
            combined.combine(&reference);

            // Directionality: non-default properties unchanged, default
            // properties taken from the reference.
            if *before.bold() { prop_assert!(*combined.bold()); }
            if *before.size() != Font::DEFAULT_SIZE {
                prop_assert_eq!(*combined.size(), *before.size());
            } else {
                prop_assert_eq!(*combined.size(), *reference.size());
            }

            // Idempotence: a second combine changes nothing.
            let mut twice = combined.clone();
            twice.combine(&reference);
            prop_assert_eq!(combined, twice);
        }

        #[test]
        fn prop_round_trip_preserves_explicit_values(font in arb_font()) {
            let back = Font::from_json(&font.to_json().unwrap()).unwrap();
            prop_assert_eq!(back.is_default(), font.is_default());
            prop_assert_eq!(back, font);
        }
    }
}
