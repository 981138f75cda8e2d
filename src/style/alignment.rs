//! Cell alignment configuration.

use serde::{Deserialize, Serialize};

use crate::node::{config_node, validate};

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlignment {
    /// Type-dependent default (text left, numbers right).
    General,
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
    /// Repeated to fill the cell.
    Fill,
    /// Justified.
    Justify,
    /// Centered across the selection.
    CenterContinuous,
    /// Distributed.
    Distributed,
}

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlignment {
    /// Top aligned.
    Top,
    /// Centered.
    Center,
    /// Bottom aligned.
    Bottom,
    /// Justified.
    Justify,
    /// Distributed.
    Distributed,
}

config_node! {
    /// Alignment and text-flow settings for a cell.
    pub struct Alignment, options AlignmentOptions, wire "alignment" {
        values {
            /// Horizontal alignment.
            horizontal, set_horizontal: HorizontalAlignment,
            wire "horizontal",
            default HorizontalAlignment::General,
            validate validate::any;
            /// Vertical alignment.
            vertical, set_vertical: VerticalAlignment,
            wire "vertical",
            default VerticalAlignment::Bottom,
            validate validate::any;
            /// Wrap long text onto multiple lines.
            wrap_text, set_wrap_text: bool,
            wire "wrap-text",
            default false,
            validate validate::any;
            /// Shrink text to fit the cell width.
            shrink_to_fit, set_shrink_to_fit: bool,
            wire "shrink-to-fit",
            default false,
            validate validate::any;
            /// Text rotation in degrees (0-180).
            text_rotation, set_text_rotation: u16,
            wire "text-rotation",
            default 0,
            validate validate::text_rotation;
            /// Indent level (0-250).
            indent, set_indent: u8,
            wire "indent",
            default 0,
            validate validate::indent;
        }
        nodes {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Error;

    #[test]
    fn test_new_alignment_is_default() {
        assert!(Alignment::new().is_default());
    }

    #[test]
    fn test_rotation_is_validated() {
        let mut alignment = Alignment::new();
        alignment.set_text_rotation(90).unwrap();

        let err = alignment.set_text_rotation(200).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation { property: "text-rotation", .. }
        ));
        assert_eq!(*alignment.text_rotation(), 90);
    }

    #[test]
    fn test_indent_is_validated() {
        let mut alignment = Alignment::new();
        alignment.set_indent(250).unwrap();
        assert!(alignment.set_indent(251).is_err());
    }

    #[test]
    fn test_json_wire_names() {
        let mut alignment = Alignment::new();
        alignment.set_wrap_text(true).unwrap();
        alignment
            .set_horizontal(HorizontalAlignment::CenterContinuous)
            .unwrap();

        let json = alignment.to_json().unwrap();
        assert_eq!(json, r#"{"horizontal":"centerContinuous","wrap-text":true}"#);
        assert_eq!(Alignment::from_json(&json).unwrap(), alignment);
    }
}
