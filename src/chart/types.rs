//! Shared chart enumerations.

use serde::{Deserialize, Serialize};

/// Chart types supported by the presentation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    /// Vertical bars.
    Column,
    /// Horizontal bars.
    Bar,
    /// Line chart.
    Line,
    /// Pie chart.
    Pie,
    /// Area chart.
    Area,
    /// Scatter (XY) chart.
    Scatter,
    /// Doughnut chart.
    Doughnut,
    /// Radar chart.
    Radar,
}

/// Side of the plot area an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisPosition {
    /// Below the plot area.
    Bottom,
    /// Left of the plot area.
    Left,
    /// Right of the plot area.
    Right,
    /// Above the plot area.
    Top,
}

/// Tick mark style for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TickMark {
    /// No tick marks.
    None,
    /// Inside the plot area.
    In,
    /// Outside the plot area.
    Out,
    /// Crossing the axis.
    Cross,
}

/// How a category axis interprets its labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryAxisType {
    /// Determine text or date automatically.
    #[serde(rename = "auto")]
    Automatic,
    /// Text categories.
    #[serde(rename = "text")]
    Text,
    /// Date categories.
    #[serde(rename = "date")]
    Date,
}

/// Where a value axis crosses between categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossBetween {
    /// Cross between categories.
    #[serde(rename = "between")]
    Between,
    /// Cross at mid-category.
    #[serde(rename = "midCat")]
    MidCategory,
}

/// Legend placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendPosition {
    /// Right of the plot area.
    Right,
    /// Left of the plot area.
    Left,
    /// Above the plot area.
    Top,
    /// Below the plot area.
    Bottom,
    /// Overlapping the top-right corner.
    TopRight,
}
