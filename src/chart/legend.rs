//! Chart legend configuration.

use crate::chart::types::LegendPosition;
use crate::node::{config_node, validate};
use crate::style::{Font, FontOptions};

config_node! {
    /// The chart legend.
    pub struct Legend, options LegendOptions, wire "legend" {
        values {
            /// Whether the legend is shown.
            visible, set_visible: bool,
            wire "visible",
            default true,
            validate validate::any;
            /// Legend placement.
            position, set_position: LegendPosition,
            wire "position",
            default LegendPosition::Right,
            validate validate::any;
            /// Draw the legend over the plot area instead of beside it.
            overlay, set_overlay: bool,
            wire "overlay",
            default false,
            validate validate::any;
        }
        nodes {
            /// Legend entry font.
            font, font_mut: Font > FontOptions,
            wire "font";
        }
    }
}
