//! Fill configuration.

use serde::{Deserialize, Serialize};

use crate::common::Color;
use crate::node::{config_node, validate};

/// Cell fill pattern types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternType {
    /// No fill.
    None,
    /// Solid fill.
    Solid,
    /// 12.5% gray pattern.
    Gray125,
    /// Dark gray pattern.
    DarkGray,
    /// Medium gray pattern.
    MediumGray,
    /// Light gray pattern.
    LightGray,
    /// 6.25% gray pattern.
    Gray0625,
    /// Dark horizontal stripes.
    DarkHorizontal,
    /// Dark vertical stripes.
    DarkVertical,
    /// Dark downward diagonal stripes.
    DarkDown,
    /// Dark upward diagonal stripes.
    DarkUp,
    /// Dark grid pattern.
    DarkGrid,
    /// Dark trellis pattern.
    DarkTrellis,
}

config_node! {
    /// Pattern fill for a cell.
    ///
    /// With the default `none` pattern the colors are ignored; a `solid`
    /// fill paints the foreground color.
    pub struct Fill, options FillOptions, wire "fill" {
        values {
            /// Fill pattern.
            pattern, set_pattern: PatternType,
            wire "pattern",
            default PatternType::None,
            validate validate::any;
            /// Foreground (pattern) color.
            foreground, set_foreground: Color,
            wire "foreground",
            default Color::BLACK,
            validate validate::any;
            /// Background color.
            background, set_background: Color,
            wire "background",
            default Color::WHITE,
            validate validate::any;
        }
        nodes {}
    }
}

impl Fill {
    /// Create a solid fill of the given color.
    pub fn solid(color: Color) -> Self {
        let mut fill = Self::new();
        fill.pattern = PatternType::Solid;
        fill.foreground = color;
        fill
    }

    /// Check if this fill paints anything.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.pattern != PatternType::None
    }
}
