//! The chart configuration node.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::chart::axis::{Axes, AxesOptions};
use crate::chart::legend::{Legend, LegendOptions};
use crate::chart::types::ChartKind;
use crate::common::error::{Error, Result};
use crate::node::{validate, NodeId};
use crate::style::{ShapeEffects, ShapeEffectsOptions};

/// Presentation settings for an embedded chart.
///
/// A chart groups a legend, an axis pair and shape effects; construction
/// attaches each sub-node to the chart through its parent link, so
/// context-dependent lookups (an axis finding its sibling pair) have a path
/// back up the tree. Written out by hand rather than through the schema
/// table because of that wiring; the node contract is the same.
#[derive(Debug)]
pub struct Chart {
    chart_type: ChartKind,
    title: String,
    legend: Legend,
    axes: Axes,
    effects: ShapeEffects,
    id: NodeId,
    parent: Option<NodeId>,
}

/// Sparse overlay for [`Chart`]: every field optional, unset fields change
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Chart type.
    #[serde(rename = "chart-type", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartKind>,
    /// Chart title.
    #[serde(rename = "title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Legend overrides.
    #[serde(rename = "legend", skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOptions>,
    /// Axes overrides.
    #[serde(rename = "axes", skip_serializing_if = "Option::is_none")]
    pub axes: Option<AxesOptions>,
    /// Shape effect overrides.
    #[serde(rename = "effects", skip_serializing_if = "Option::is_none")]
    pub effects: Option<ShapeEffectsOptions>,
}

impl ChartOptions {
    /// True when no field is set.
    pub fn is_default(&self) -> bool {
        self.chart_type.is_none()
            && self.title.is_none()
            && self.legend.as_ref().is_none_or(|o| o.is_default())
            && self.axes.as_ref().is_none_or(|o| o.is_default())
            && self.effects.as_ref().is_none_or(|o| o.is_default())
    }
}

impl Chart {
    /// Create a chart with every property at its default, with the legend,
    /// axes and effects attached to the chart node.
    pub fn new() -> Self {
        let mut chart = Self {
            chart_type: ChartKind::Column,
            title: String::new(),
            legend: Legend::new(),
            axes: Axes::new(),
            effects: ShapeEffects::new(),
            id: NodeId::fresh(),
            parent: None,
        };
        chart.attach_children();
        chart
    }

    fn attach_children(&mut self) {
        let id = self.id;
        self.legend.set_parent(id);
        self.axes.set_parent(id);
        self.effects.set_parent(id);
        let axes_id = self.axes.id();
        self.axes.category_mut().set_parent(axes_id);
        self.axes.value_mut().set_parent(axes_id);
    }

    /// Chart type.
    #[inline]
    pub fn chart_type(&self) -> ChartKind {
        self.chart_type
    }

    /// Set the chart type.
    pub fn set_chart_type(&mut self, chart_type: ChartKind) -> Result<()> {
        validate::any(&chart_type).map_err(|reason| Error::Validation {
            property: "chart-type",
            reason,
        })?;
        self.chart_type = chart_type;
        Ok(())
    }

    /// Chart title; empty means no title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the chart title.
    pub fn set_title(&mut self, title: String) -> Result<()> {
        validate::any(&title).map_err(|reason| Error::Validation {
            property: "title",
            reason,
        })?;
        self.title = title;
        Ok(())
    }

    /// The chart legend.
    #[inline]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Mutable access to the legend.
    #[inline]
    pub fn legend_mut(&mut self) -> &mut Legend {
        &mut self.legend
    }

    /// The axis pair.
    #[inline]
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// Mutable access to the axis pair.
    #[inline]
    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    /// Shape effects applied to the chart area.
    #[inline]
    pub fn effects(&self) -> &ShapeEffects {
        &self.effects
    }

    /// Mutable access to the shape effects.
    #[inline]
    pub fn effects_mut(&mut self) -> &mut ShapeEffects {
        &mut self.effects
    }

    /// Identity of this node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Structural parent, if attached.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    /// True iff every property is at its default and every sub-node is
    /// default.
    pub fn is_default(&self) -> bool {
        self.chart_type == ChartKind::Column
            && self.title.is_empty()
            && self.legend.is_default()
            && self.axes.is_default()
            && self.effects.is_default()
    }

    /// Fill still-default properties from `reference`; explicit values win.
    pub fn combine(&mut self, reference: &Self) {
        if self.chart_type == ChartKind::Column {
            self.chart_type = reference.chart_type;
        }
        if self.title.is_empty() {
            self.title = reference.title.clone();
        }
        self.legend.combine(&reference.legend);
        self.axes.combine(&reference.axes);
        self.effects.combine(&reference.effects);
    }

    /// Overlay the explicitly-set options fields through the validating
    /// setters.
    pub fn apply_options(&mut self, options: &ChartOptions) -> Result<()> {
        if options.is_default() {
            return Ok(());
        }
        if let Some(chart_type) = options.chart_type {
            self.set_chart_type(chart_type)?;
        }
        if let Some(title) = &options.title {
            self.set_title(title.clone())?;
        }
        if let Some(legend) = &options.legend {
            self.legend.apply_options(legend)?;
        }
        if let Some(axes) = &options.axes {
            self.axes.apply_options(axes)?;
        }
        if let Some(effects) = &options.effects {
            self.effects.apply_options(effects)?;
        }
        Ok(())
    }

    /// Sparse projection: exactly the explicitly-set properties.
    pub fn to_options(&self) -> ChartOptions {
        ChartOptions {
            chart_type: (self.chart_type != ChartKind::Column).then_some(self.chart_type),
            title: (!self.title.is_empty()).then(|| self.title.clone()),
            legend: {
                let legend = self.legend.to_options();
                (!legend.is_default()).then_some(legend)
            },
            axes: {
                let axes = self.axes.to_options();
                (!axes.is_default()).then_some(axes)
            },
            effects: {
                let effects = self.effects.to_options();
                (!effects.is_default()).then_some(effects)
            },
        }
    }

    /// Serialize to an XML `<chart>` fragment; default properties are
    /// omitted.
    pub fn to_xml(&self) -> Result<String> {
        quick_xml::se::to_string_with_root("chart", self).map_err(|e| Error::Xml(e.to_string()))
    }

    /// Deserialize from an XML fragment, validating every value.
    pub fn from_xml(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml).map_err(|e| Error::Xml(e.to_string()))
    }

    /// Serialize to JSON; default properties are omitted.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Json(e.to_string()))
    }

    /// Deserialize from JSON, validating every value.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Json(e.to_string()))
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Chart {
    /// Deep copy with fresh identity: sub-nodes are cloned and re-attached
    /// to the new chart node; the chart's own parent link is reset.
    fn clone(&self) -> Self {
        let mut chart = Self {
            chart_type: self.chart_type,
            title: self.title.clone(),
            legend: self.legend.clone(),
            axes: self.axes.clone(),
            effects: self.effects.clone(),
            id: NodeId::fresh(),
            parent: None,
        };
        chart.attach_children();
        chart
    }
}

impl PartialEq for Chart {
    /// Structural equality over configuration values; identity and parent
    /// links are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.chart_type == other.chart_type
            && self.title == other.title
            && self.legend == other.legend
            && self.axes == other.axes
            && self.effects == other.effects
    }
}

impl Serialize for Chart {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_options().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Chart {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let options = ChartOptions::deserialize(deserializer)?;
        let mut chart = Self::new();
        chart.apply_options(&options).map_err(D::Error::custom)?;
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::types::LegendPosition;

    #[test]
    fn test_new_chart_is_default_and_wired() {
        let chart = Chart::new();
        assert!(chart.is_default());
        assert_eq!(chart.parent(), None);
        assert_eq!(chart.axes().parent(), Some(chart.id()));
        assert_eq!(chart.legend().parent(), Some(chart.id()));
        assert_eq!(chart.axes().category().parent(), Some(chart.axes().id()));
        assert_eq!(chart.axes().value().parent(), Some(chart.axes().id()));
    }

    #[test]
    fn test_clone_rewires_children_to_the_clone() {
        let mut chart = Chart::new();
        chart.set_title("Sales".to_string()).unwrap();

        let mut copy = chart.clone();
        assert_eq!(copy, chart);
        assert_ne!(copy.id(), chart.id());
        assert_eq!(copy.axes().parent(), Some(copy.id()));
        assert_eq!(copy.axes().category().parent(), Some(copy.axes().id()));

        // No aliasing: mutating the clone leaves the original untouched.
        copy.axes_mut().value_mut().set_range(0.0, 10.0).unwrap();
        assert_eq!(*chart.axes().value().min(), None);
    }

    #[test]
    fn test_combine_recurses_into_sub_nodes() {
        let mut reference = Chart::new();
        reference.set_chart_type(ChartKind::Line).unwrap();
        reference.legend_mut().set_position(LegendPosition::Bottom).unwrap();
        reference
            .axes_mut()
            .value_mut()
            .gridlines_mut()
            .set_show_major(true)
            .unwrap();

        let mut chart = Chart::new();
        chart.legend_mut().set_position(LegendPosition::Top).unwrap();

        chart.combine(&reference);
        assert_eq!(chart.chart_type(), ChartKind::Line);
        assert_eq!(*chart.legend().position(), LegendPosition::Top);
        assert!(*chart.axes().value().gridlines().show_major());
    }

    #[test]
    fn test_options_overlay() {
        let mut chart = Chart::new();
        let options = ChartOptions {
            chart_type: Some(ChartKind::Pie),
            title: Some("Share".to_string()),
            ..Default::default()
        };
        chart.apply_options(&options).unwrap();
        assert_eq!(chart.chart_type(), ChartKind::Pie);
        assert_eq!(chart.title(), "Share");
        assert!(chart.legend().is_default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut chart = Chart::new();
        chart.set_chart_type(ChartKind::Scatter).unwrap();
        chart.set_title("Trend".to_string()).unwrap();
        chart.axes_mut().value_mut().set_log_base(Some(10.0)).unwrap();

        let json = chart.to_json().unwrap();
        let back = Chart::from_json(&json).unwrap();
        assert_eq!(back, chart);
        // Deserialization wires the tree exactly like construction.
        assert_eq!(back.axes().parent(), Some(back.id()));
    }

    #[test]
    fn test_default_chart_serializes_empty() {
        assert_eq!(Chart::new().to_json().unwrap(), "{}");
    }
}
