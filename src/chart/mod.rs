//! Chart presentation models.
//!
//! This module contains the chart-level configuration nodes: the chart
//! itself, its axis pair, the legend, and mini-charts (sparkline groups).
//!
//! # Example
//!
//! ```rust
//! use longan::chart::{Chart, ChartKind};
//!
//! let mut chart = Chart::new();
//! chart.set_chart_type(ChartKind::Line)?;
//! chart.set_title("Revenue by quarter".to_string())?;
//! chart.axes_mut().value_mut().set_range(0.0, 1_000_000.0)?;
//! # Ok::<(), longan::Error>(())
//! ```

mod axis;
#[allow(clippy::module_inception)]
mod chart;
mod legend;
mod minichart;
mod types;

pub use axis::{
    Axes, AxesOptions, AxisTitle, AxisTitleOptions, CategoryAxis, CategoryAxisOptions, Gridlines,
    GridlinesOptions, ValueAxis, ValueAxisOptions,
};
pub use chart::{Chart, ChartOptions};
pub use legend::{Legend, LegendOptions};
pub use minichart::{
    EmptyCellsAs, MiniChart, MiniChartAxis, MiniChartAxisMode, MiniChartAxisOptions,
    MiniChartColors, MiniChartColorsOptions, MiniChartKind, MiniChartOptions,
};
pub use types::{
    AxisPosition, CategoryAxisType, ChartKind, CrossBetween, LegendPosition, TickMark,
};
