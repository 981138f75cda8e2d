//! Worksheet presentation settings.

use crate::common::Color;
use crate::node::{config_node, validate};

config_node! {
    /// Display settings of one worksheet.
    ///
    /// Covers the view options Excel keeps per sheet: direction, gridline
    /// and header visibility, zoom, tab color, frozen panes and the default
    /// cell metrics.
    pub struct SheetSettings, options SheetSettingsOptions, wire "sheet-settings" {
        values {
            /// Display the sheet right to left.
            right_to_left, set_right_to_left: bool,
            wire "right-to-left",
            default false,
            validate validate::any;
            /// Show grid lines.
            show_gridlines, set_show_gridlines: bool,
            wire "show-gridlines",
            default true,
            validate validate::any;
            /// Show row and column headers.
            show_headers, set_show_headers: bool,
            wire "show-headers",
            default true,
            validate validate::any;
            /// Show zero values.
            show_zeros, set_show_zeros: bool,
            wire "show-zeros",
            default true,
            validate validate::any;
            /// Zoom scale in percent (10-400).
            zoom, set_zoom: u16,
            wire "zoom",
            default 100,
            validate validate::zoom;
            /// Sheet tab color; `None` keeps the theme color.
            tab_color, set_tab_color: Option<Color>,
            wire "tab-color",
            default None,
            validate validate::any;
            /// Rows frozen at the top.
            frozen_rows, set_frozen_rows: u32,
            wire "frozen-rows",
            default 0,
            validate validate::any;
            /// Columns frozen at the left.
            frozen_columns, set_frozen_columns: u32,
            wire "frozen-columns",
            default 0,
            validate validate::any;
            /// Default column width in characters (0-255).
            default_column_width, set_default_column_width: f64,
            wire "default-column-width",
            default 8.43,
            validate validate::column_width;
            /// Default row height in points (0-409).
            default_row_height, set_default_row_height: f64,
            wire "default-row-height",
            default 15.0,
            validate validate::row_height;
        }
        nodes {}
    }
}
