//! Border configuration.

use serde::{Deserialize, Serialize};

use crate::common::Color;
use crate::node::{config_node, validate};

/// Border line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    /// No line.
    None,
    /// Thin line.
    Thin,
    /// Medium line.
    Medium,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Thick line.
    Thick,
    /// Double line.
    Double,
    /// Hairline.
    Hair,
    /// Medium dashed line.
    MediumDashed,
    /// Dash-dot line.
    DashDot,
    /// Medium dash-dot line.
    MediumDashDot,
    /// Dash-dot-dot line.
    DashDotDot,
    /// Medium dash-dot-dot line.
    MediumDashDotDot,
    /// Slanted dash-dot line.
    SlantDashDot,
}

/// Diagonal border direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagonalDirection {
    /// No diagonal border.
    None,
    /// Bottom-left to top-right.
    Up,
    /// Top-left to bottom-right.
    Down,
    /// Both diagonals.
    Both,
}

config_node! {
    /// One edge of a cell border.
    pub struct BorderEdge, options BorderEdgeOptions, wire "edge" {
        values {
            /// Line style of this edge.
            style, set_style: LineStyle,
            wire "style",
            default LineStyle::None,
            validate validate::any;
            /// Line color of this edge.
            color, set_color: Color,
            wire "color",
            default Color::BLACK,
            validate validate::any;
        }
        nodes {}
    }
}

config_node! {
    /// Borders on all four sides of a cell, plus the diagonals.
    pub struct Border, options BorderOptions, wire "border" {
        values {
            /// Which diagonal borders are drawn.
            diagonal_direction, set_diagonal_direction: DiagonalDirection,
            wire "diagonal-direction",
            default DiagonalDirection::None,
            validate validate::any;
        }
        nodes {
            /// Left edge.
            left, left_mut: BorderEdge > BorderEdgeOptions,
            wire "left";
            /// Right edge.
            right, right_mut: BorderEdge > BorderEdgeOptions,
            wire "right";
            /// Top edge.
            top, top_mut: BorderEdge > BorderEdgeOptions,
            wire "top";
            /// Bottom edge.
            bottom, bottom_mut: BorderEdge > BorderEdgeOptions,
            wire "bottom";
            /// Diagonal edge.
            diagonal, diagonal_mut: BorderEdge > BorderEdgeOptions,
            wire "diagonal";
        }
    }
}

impl Border {
    /// Check if any edge has a visible line.
    #[inline]
    pub fn has_borders(&self) -> bool {
        *self.left().style() != LineStyle::None
            || *self.right().style() != LineStyle::None
            || *self.top().style() != LineStyle::None
            || *self.bottom().style() != LineStyle::None
            || *self.diagonal().style() != LineStyle::None
    }

    /// Set every outline edge (left, right, top, bottom) to the same style.
    pub fn set_outline(&mut self, style: LineStyle) -> crate::Result<()> {
        self.left_mut().set_style(style)?;
        self.right_mut().set_style(style)?;
        self.top_mut().set_style(style)?;
        self.bottom_mut().set_style(style)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_border_is_default() {
        let border = Border::new();
        assert!(border.is_default());
        assert!(!border.has_borders());
    }

    #[test]
    fn test_combine_fills_per_edge_not_wholesale() {
        // A border that is non-default on the left edge must still pick up
        // the reference's right edge, and within the left edge the color
        // must still be filled in even though the style was set locally.
        let mut reference = Border::new();
        reference.left_mut().set_style(LineStyle::Double).unwrap();
        reference
            .left_mut()
            .set_color(Color::new(0xD0, 0x00, 0x00))
            .unwrap();
        reference.right_mut().set_style(LineStyle::Thin).unwrap();

        let mut border = Border::new();
        border.left_mut().set_style(LineStyle::Dashed).unwrap();

        border.combine(&reference);

        assert_eq!(*border.left().style(), LineStyle::Dashed);
        assert_eq!(*border.left().color(), Color::new(0xD0, 0x00, 0x00));
        assert_eq!(*border.right().style(), LineStyle::Thin);
    }

    #[test]
    fn test_outline_helper() {
        let mut border = Border::new();
        border.set_outline(LineStyle::Medium).unwrap();
        assert!(border.has_borders());
        assert_eq!(*border.bottom().style(), LineStyle::Medium);
        assert_eq!(*border.diagonal().style(), LineStyle::None);
    }

    #[test]
    fn test_serde_suppresses_default_edges() {
        let mut border = Border::new();
        border.top_mut().set_style(LineStyle::Thick).unwrap();

        let json = border.to_json().unwrap();
        assert_eq!(json, r#"{"top":{"style":"thick"}}"#);
        assert_eq!(Border::from_json(&json).unwrap(), border);
    }

    #[test]
    fn test_xml_round_trip() {
        let mut border = Border::new();
        border.set_diagonal_direction(DiagonalDirection::Up).unwrap();
        border.diagonal_mut().set_style(LineStyle::DashDot).unwrap();

        let xml = border.to_xml().unwrap();
        assert!(xml.contains("<diagonal-direction>up</diagonal-direction>"));
        assert!(xml.contains("<style>dashDot</style>"));
        assert_eq!(Border::from_xml(&xml).unwrap(), border);
    }
}
