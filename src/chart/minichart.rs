//! Mini-chart (sparkline group) configuration.

use serde::{Deserialize, Serialize};

use crate::common::Color;
use crate::node::{config_node, validate};

/// Mini-chart rendering type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MiniChartKind {
    /// Line sparkline.
    Line,
    /// Column sparkline.
    Column,
    /// Win/loss sparkline.
    WinLoss,
}

/// How empty cells are plotted in a mini-chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyCellsAs {
    /// Leave a gap.
    Gap,
    /// Plot as zero.
    Zero,
    /// Span the gap with a line.
    Span,
}

/// How a mini-chart axis bound is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MiniChartAxisMode {
    /// Each sparkline scales to its own data.
    Individual,
    /// The whole group shares one scale.
    Group,
    /// A fixed custom bound.
    Custom,
}

config_node! {
    /// Highlight colors of a mini-chart group.
    ///
    /// Only the series color is set by default; the point highlights paint
    /// nothing until given a color by the caller.
    pub struct MiniChartColors, options MiniChartColorsOptions, wire "colors" {
        values {
            /// Series color.
            series, set_series: Option<Color>,
            wire "series",
            default Some(Color::BLACK),
            validate validate::any;
            /// Color for negative points.
            negative, set_negative: Option<Color>,
            wire "negative",
            default None,
            validate validate::any;
            /// Axis color.
            axis, set_axis: Option<Color>,
            wire "axis",
            default None,
            validate validate::any;
            /// Color for point markers (line sparklines).
            markers, set_markers: Option<Color>,
            wire "markers",
            default None,
            validate validate::any;
            /// Color for the first point.
            first, set_first: Option<Color>,
            wire "first",
            default None,
            validate validate::any;
            /// Color for the last point.
            last, set_last: Option<Color>,
            wire "last",
            default None,
            validate validate::any;
            /// Color for the highest point.
            high, set_high: Option<Color>,
            wire "high",
            default None,
            validate validate::any;
            /// Color for the lowest point.
            low, set_low: Option<Color>,
            wire "low",
            default None,
            validate validate::any;
        }
        nodes {}
    }
}

config_node! {
    /// One axis bound of a mini-chart group: how the bound is chosen, and
    /// the fixed value when the mode is `custom`.
    pub struct MiniChartAxis, options MiniChartAxisOptions, wire "axis" {
        values {
            /// Bound selection mode.
            axis_type, set_axis_type: MiniChartAxisMode,
            wire "axis-type",
            default MiniChartAxisMode::Individual,
            validate validate::any;
            /// Fixed bound used by the `custom` mode.
            custom_value, set_custom_value: Option<f64>,
            wire "custom-value",
            default None,
            validate validate::axis_bound;
        }
        nodes {}
    }
}

config_node! {
    /// A sparkline group: tiny in-cell charts sharing one configuration.
    pub struct MiniChart, options MiniChartOptions, wire "mini-chart" {
        values {
            /// Rendering type.
            kind, set_kind: MiniChartKind,
            wire "kind",
            default MiniChartKind::Line,
            validate validate::any;
            /// How empty cells are plotted.
            empty_cells_as, set_empty_cells_as: EmptyCellsAs,
            wire "empty-cells-as",
            default EmptyCellsAs::Gap,
            validate validate::any;
            /// Plot data from hidden cells.
            display_hidden, set_display_hidden: bool,
            wire "display-hidden",
            default false,
            validate validate::any;
            /// Draw the horizontal axis.
            display_x_axis, set_display_x_axis: bool,
            wire "display-x-axis",
            default false,
            validate validate::any;
            /// Highlight every point marker (line sparklines).
            show_markers, set_show_markers: bool,
            wire "markers",
            default false,
            validate validate::any;
            /// Highlight the highest point.
            show_high, set_show_high: bool,
            wire "high",
            default false,
            validate validate::any;
            /// Highlight the lowest point.
            show_low, set_show_low: bool,
            wire "low",
            default false,
            validate validate::any;
            /// Highlight the first point.
            show_first, set_show_first: bool,
            wire "first",
            default false,
            validate validate::any;
            /// Highlight the last point.
            show_last, set_show_last: bool,
            wire "last",
            default false,
            validate validate::any;
            /// Highlight negative points.
            show_negative, set_show_negative: bool,
            wire "negative",
            default false,
            validate validate::any;
            /// Plot right to left.
            right_to_left, set_right_to_left: bool,
            wire "right-to-left",
            default false,
            validate validate::any;
            /// Line weight in points (line sparklines, 0-3).
            line_weight, set_line_weight: f64,
            wire "line-weight",
            default 0.75,
            validate validate::line_weight;
        }
        nodes {
            /// Highlight colors.
            colors, colors_mut: MiniChartColors > MiniChartColorsOptions,
            wire "colors";
            /// Minimum bound.
            min_axis, min_axis_mut: MiniChartAxis > MiniChartAxisOptions,
            wire "min-axis";
            /// Maximum bound.
            max_axis, max_axis_mut: MiniChartAxis > MiniChartAxisOptions,
            wire "max-axis";
        }
    }
}
