//! Chart axis configuration.
//!
//! Category and value axes are separate node types sharing the title and
//! gridline sub-nodes; the [`Axes`] pair groups one of each and is what a
//! chart exposes.

use crate::chart::types::{AxisPosition, CategoryAxisType, CrossBetween, TickMark};
use crate::common::Color;
use crate::node::{config_node, validate};
use crate::style::{Font, FontOptions, LineStyle};

config_node! {
    /// Title text shown next to an axis.
    pub struct AxisTitle, options AxisTitleOptions, wire "title" {
        values {
            /// Title text; empty means no title.
            text, set_text: String,
            wire "text",
            default String::new(),
            validate validate::any;
        }
        nodes {
            /// Title font.
            font, font_mut: Font > FontOptions,
            wire "font";
        }
    }
}

config_node! {
    /// Major and minor gridlines of an axis.
    pub struct Gridlines, options GridlinesOptions, wire "gridlines" {
        values {
            /// Draw major gridlines.
            show_major, set_show_major: bool,
            wire "show-major",
            default false,
            validate validate::any;
            /// Draw minor gridlines.
            show_minor, set_show_minor: bool,
            wire "show-minor",
            default false,
            validate validate::any;
            /// Gridline line style.
            style, set_style: LineStyle,
            wire "style",
            default LineStyle::Thin,
            validate validate::any;
            /// Gridline color.
            color, set_color: Color,
            wire "color",
            default Color::new(0xD9, 0xD9, 0xD9),
            validate validate::any;
        }
        nodes {}
    }
}

config_node! {
    /// Category (label) axis.
    pub struct CategoryAxis, options CategoryAxisOptions, wire "category-axis" {
        values {
            /// How labels are interpreted.
            axis_type, set_axis_type: CategoryAxisType,
            wire "axis-type",
            default CategoryAxisType::Automatic,
            validate validate::any;
            /// Side of the plot area.
            position, set_position: AxisPosition,
            wire "position",
            default AxisPosition::Bottom,
            validate validate::any;
            /// Whether the axis is drawn.
            visible, set_visible: bool,
            wire "visible",
            default true,
            validate validate::any;
            /// Plot categories in reverse order.
            reverse_order, set_reverse_order: bool,
            wire "reverse-order",
            default false,
            validate validate::any;
            /// Label distance from the axis, percent of default (0-1000).
            label_offset, set_label_offset: u16,
            wire "label-offset",
            default 100,
            validate validate::label_offset;
            /// Major tick mark style.
            major_tick_mark, set_major_tick_mark: TickMark,
            wire "major-tick-mark",
            default TickMark::Out,
            validate validate::any;
            /// Minor tick mark style.
            minor_tick_mark, set_minor_tick_mark: TickMark,
            wire "minor-tick-mark",
            default TickMark::None,
            validate validate::any;
        }
        nodes {
            /// Axis title.
            title, title_mut: AxisTitle > AxisTitleOptions,
            wire "title";
            /// Axis gridlines.
            gridlines, gridlines_mut: Gridlines > GridlinesOptions,
            wire "gridlines";
        }
    }
}

config_node! {
    /// Value (numeric) axis.
    pub struct ValueAxis, options ValueAxisOptions, wire "value-axis" {
        values {
            /// Side of the plot area.
            position, set_position: AxisPosition,
            wire "position",
            default AxisPosition::Left,
            validate validate::any;
            /// Whether the axis is drawn.
            visible, set_visible: bool,
            wire "visible",
            default true,
            validate validate::any;
            /// Plot values in reverse order.
            reverse_order, set_reverse_order: bool,
            wire "reverse-order",
            default false,
            validate validate::any;
            /// Fixed minimum; `None` lets the writer pick.
            min, set_min: Option<f64>,
            wire "min",
            default None,
            validate validate::axis_bound;
            /// Fixed maximum; `None` lets the writer pick.
            max, set_max: Option<f64>,
            wire "max",
            default None,
            validate validate::axis_bound;
            /// Distance between major ticks; must be positive.
            major_unit, set_major_unit: Option<f64>,
            wire "major-unit",
            default None,
            validate validate::axis_unit;
            /// Distance between minor ticks; must be positive.
            minor_unit, set_minor_unit: Option<f64>,
            wire "minor-unit",
            default None,
            validate validate::axis_unit;
            /// Logarithmic scale base (2-1000); `None` keeps a linear scale.
            log_base, set_log_base: Option<f64>,
            wire "log-base",
            default None,
            validate validate::log_base;
            /// Where the category axis crosses this axis.
            cross_between, set_cross_between: CrossBetween,
            wire "cross-between",
            default CrossBetween::Between,
            validate validate::any;
            /// Major tick mark style.
            major_tick_mark, set_major_tick_mark: TickMark,
            wire "major-tick-mark",
            default TickMark::Out,
            validate validate::any;
            /// Minor tick mark style.
            minor_tick_mark, set_minor_tick_mark: TickMark,
            wire "minor-tick-mark",
            default TickMark::None,
            validate validate::any;
        }
        nodes {
            /// Axis title.
            title, title_mut: AxisTitle > AxisTitleOptions,
            wire "title";
            /// Axis gridlines.
            gridlines, gridlines_mut: Gridlines > GridlinesOptions,
            wire "gridlines";
        }
    }
}

config_node! {
    /// The axis pair of a two-dimensional chart.
    pub struct Axes, options AxesOptions, wire "axes" {
        values {}
        nodes {
            /// Category axis.
            category, category_mut: CategoryAxis > CategoryAxisOptions,
            wire "category";
            /// Value axis.
            value, value_mut: ValueAxis > ValueAxisOptions,
            wire "value";
        }
    }
}

impl ValueAxis {
    /// Set a fixed value range.
    pub fn set_range(&mut self, min: f64, max: f64) -> crate::Result<()> {
        self.set_min(Some(min))?;
        self.set_max(Some(max))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Error;

    #[test]
    fn test_new_axes_are_default() {
        let axes = Axes::new();
        assert!(axes.is_default());
        assert_eq!(*axes.category().position(), AxisPosition::Bottom);
        assert_eq!(*axes.value().position(), AxisPosition::Left);
    }

    #[test]
    fn test_units_are_validated() {
        let mut axis = ValueAxis::new();
        axis.set_major_unit(Some(10.0)).unwrap();
        assert!(matches!(
            axis.set_minor_unit(Some(0.0)),
            Err(Error::Validation { property: "minor-unit", .. })
        ));
        assert!(axis.set_log_base(Some(1.0)).is_err());
        axis.set_log_base(Some(10.0)).unwrap();
    }

    #[test]
    fn test_set_range() {
        let mut axis = ValueAxis::new();
        axis.set_range(0.0, 120.0).unwrap();
        assert_eq!(*axis.min(), Some(0.0));
        assert_eq!(*axis.max(), Some(120.0));
        assert!(axis.set_min(Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_combine_fills_title_and_gridlines() {
        let mut reference = Axes::new();
        reference
            .value_mut()
            .title_mut()
            .set_text("Revenue".to_string())
            .unwrap();
        reference.value_mut().gridlines_mut().set_show_major(true).unwrap();

        let mut axes = Axes::new();
        axes.value_mut().set_range(0.0, 100.0).unwrap();

        axes.combine(&reference);
        assert_eq!(axes.value().title().text(), "Revenue");
        assert!(*axes.value().gridlines().show_major());
        assert_eq!(*axes.value().min(), Some(0.0));
    }

    #[test]
    fn test_json_wire_names() {
        let mut axis = CategoryAxis::new();
        axis.set_axis_type(CategoryAxisType::Date).unwrap();
        axis.set_reverse_order(true).unwrap();

        let json = axis.to_json().unwrap();
        assert_eq!(json, r#"{"axis-type":"date","reverse-order":true}"#);
        assert_eq!(CategoryAxis::from_json(&json).unwrap(), axis);
    }

    #[test]
    fn test_json_round_trip_with_bounds() {
        let mut axis = ValueAxis::new();
        axis.set_range(-5.0, 5.0).unwrap();
        axis.set_major_unit(Some(2.5)).unwrap();

        let back = ValueAxis::from_json(&axis.to_json().unwrap()).unwrap();
        assert_eq!(back, axis);
    }
}
