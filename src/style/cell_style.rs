//! Named cell styles.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::common::error::{Error, Result};
use crate::node::{validate, NodeId};
use crate::style::alignment::{Alignment, AlignmentOptions};
use crate::style::border::{Border, BorderOptions};
use crate::style::fill::{Fill, FillOptions};
use crate::style::font::{Font, FontOptions};
use crate::style::number_format;

/// A named, reusable cell style.
///
/// A cell style aggregates the formatting of one cell template: font,
/// border, fill, alignment and number format. Styles are held in a
/// [`StyleRegistry`](crate::style::StyleRegistry) keyed by name, and may
/// declare that they inherit from another registered style; resolution walks
/// that chain so that an explicit value beats an inherited one, which beats
/// the default.
///
/// The style's `name` is identity, not formatting: it is set at
/// construction, never copied by [`combine`](Self::combine), and excluded
/// from [`is_default`](Self::is_default).
///
/// This type carries the same contract as the schema-generated nodes; it is
/// written out by hand because of the identity and registry-owner state.
#[derive(Debug)]
pub struct CellStyle {
    name: String,
    inherits: Option<String>,
    number_format: String,
    font: Font,
    border: Border,
    fill: Fill,
    alignment: Alignment,
    id: NodeId,
    parent: Option<NodeId>,
    owner: Option<NodeId>,
}

/// Sparse overlay for [`CellStyle`]: every field optional, unset fields
/// change nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyleOptions {
    /// Style name.
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name of the style this style inherits from.
    #[serde(rename = "inherits", skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,
    /// Number format code.
    #[serde(rename = "number-format", skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
    /// Font overrides.
    #[serde(rename = "font", skip_serializing_if = "Option::is_none")]
    pub font: Option<FontOptions>,
    /// Border overrides.
    #[serde(rename = "border", skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderOptions>,
    /// Fill overrides.
    #[serde(rename = "fill", skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillOptions>,
    /// Alignment overrides.
    #[serde(rename = "alignment", skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AlignmentOptions>,
}

impl CellStyleOptions {
    /// True when no field is set.
    pub fn is_default(&self) -> bool {
        self.name.is_none()
            && self.inherits.is_none()
            && self.number_format.is_none()
            && self.font.as_ref().is_none_or(|o| o.is_default())
            && self.border.as_ref().is_none_or(|o| o.is_default())
            && self.fill.as_ref().is_none_or(|o| o.is_default())
            && self.alignment.as_ref().is_none_or(|o| o.is_default())
    }
}

impl CellStyle {
    /// Create a named style with every property at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Style name. Empty for an anonymous (unregistered) style.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the style. Renaming a style that is already registered is not
    /// supported; register a copy under the new name instead.
    pub fn set_name(&mut self, name: String) -> Result<()> {
        validate::non_empty(&name).map_err(|reason| Error::Validation {
            property: "name",
            reason,
        })?;
        self.name = name;
        Ok(())
    }

    /// Name of the style this style inherits from, if any.
    #[inline]
    pub fn inherits(&self) -> Option<&str> {
        self.inherits.as_deref()
    }

    /// Set or clear the inheritance link.
    pub fn set_inherits(&mut self, inherits: Option<String>) -> Result<()> {
        validate::style_name(&inherits).map_err(|reason| Error::Validation {
            property: "inherits",
            reason,
        })?;
        self.inherits = inherits;
        Ok(())
    }

    /// Number format code.
    #[inline]
    pub fn number_format(&self) -> &str {
        &self.number_format
    }

    /// Set the number format code.
    pub fn set_number_format(&mut self, code: String) -> Result<()> {
        validate::non_empty(&code).map_err(|reason| Error::Validation {
            property: "number-format",
            reason,
        })?;
        self.number_format = code;
        Ok(())
    }

    /// Font settings.
    #[inline]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Mutable access to the font settings.
    #[inline]
    pub fn font_mut(&mut self) -> &mut Font {
        &mut self.font
    }

    /// Border settings.
    #[inline]
    pub fn border(&self) -> &Border {
        &self.border
    }

    /// Mutable access to the border settings.
    #[inline]
    pub fn border_mut(&mut self) -> &mut Border {
        &mut self.border
    }

    /// Fill settings.
    #[inline]
    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    /// Mutable access to the fill settings.
    #[inline]
    pub fn fill_mut(&mut self) -> &mut Fill {
        &mut self.fill
    }

    /// Alignment settings.
    #[inline]
    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// Mutable access to the alignment settings.
    #[inline]
    pub fn alignment_mut(&mut self) -> &mut Alignment {
        &mut self.alignment
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

    #[allow(dead_code)]
    #[inline]
    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    /// The registry this style is registered in, if any.
    #[inline]
    pub fn owner(&self) -> Option<NodeId> {
        self.owner
    }

    #[inline]
    pub(crate) fn set_owner(&mut self, owner: NodeId) {
        self.owner = Some(owner);
    }

    /// True iff every formatting property is at its default and no
    /// inheritance link is set. The name is identity and not considered.
    pub fn is_default(&self) -> bool {
        self.inherits.is_none()
            && self.number_format == number_format::GENERAL
            && self.font.is_default()
            && self.border.is_default()
            && self.fill.is_default()
            && self.alignment.is_default()
    }

    /// Fill still-default formatting from `reference`; explicit values win.
    ///
    /// The name is never copied: combining keeps registry keys stable.
    pub fn combine(&mut self, reference: &Self) {
        if self.inherits.is_none() {
            self.inherits = reference.inherits.clone();
        }
        if self.number_format == number_format::GENERAL {
            self.number_format = reference.number_format.clone();
        }
        self.font.combine(&reference.font);
        self.border.combine(&reference.border);
        self.fill.combine(&reference.fill);
        self.alignment.combine(&reference.alignment);
    }

    /// Overlay the explicitly-set options fields through the validating
    /// setters.
    pub fn apply_options(&mut self, options: &CellStyleOptions) -> Result<()> {
        if options.is_default() {
            return Ok(());
        }
        if let Some(name) = &options.name {
            self.set_name(name.clone())?;
        }
        if let Some(inherits) = &options.inherits {
            self.set_inherits(Some(inherits.clone()))?;
        }
        if let Some(code) = &options.number_format {
            self.set_number_format(code.clone())?;
        }
        if let Some(font) = &options.font {
            self.font.apply_options(font)?;
        }
        if let Some(border) = &options.border {
            self.border.apply_options(border)?;
        }
        if let Some(fill) = &options.fill {
            self.fill.apply_options(fill)?;
        }
        if let Some(alignment) = &options.alignment {
            self.alignment.apply_options(alignment)?;
        }
        Ok(())
    }

    /// Sparse projection: exactly the explicitly-set properties, plus the
    /// name when the style has one.
    pub fn to_options(&self) -> CellStyleOptions {
        CellStyleOptions {
            name: (!self.name.is_empty()).then(|| self.name.clone()),
            inherits: self.inherits.clone(),
            number_format: (self.number_format != number_format::GENERAL)
                .then(|| self.number_format.clone()),
            font: {
                let font = self.font.to_options();
                (!font.is_default()).then_some(font)
            },
            border: {
                let border = self.border.to_options();
                (!border.is_default()).then_some(border)
            },
            fill: {
                let fill = self.fill.to_options();
                (!fill.is_default()).then_some(fill)
            },
            alignment: {
                let alignment = self.alignment.to_options();
                (!alignment.is_default()).then_some(alignment)
            },
        }
    }

    /// Serialize to an XML `<cell-style>` fragment; default properties are
    /// omitted.
    pub fn to_xml(&self) -> Result<String> {
        quick_xml::se::to_string_with_root("cell-style", self)
            .map_err(|e| Error::Xml(e.to_string()))
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

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            name: String::new(),
            inherits: None,
            number_format: number_format::GENERAL.to_string(),
            font: Font::default(),
            border: Border::default(),
            fill: Fill::default(),
            alignment: Alignment::default(),
            id: NodeId::fresh(),
            parent: None,
            owner: None,
        }
    }
}

impl Clone for CellStyle {
    /// Deep copy with fresh identity; the parent and owner links are reset
    /// so the clone can be re-registered or re-attached.
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            inherits: self.inherits.clone(),
            number_format: self.number_format.clone(),
            font: self.font.clone(),
            border: self.border.clone(),
            fill: self.fill.clone(),
            alignment: self.alignment.clone(),
            id: NodeId::fresh(),
            parent: None,
            owner: None,
        }
    }
}

impl PartialEq for CellStyle {
    /// Structural equality over name and configuration values; identity,
    /// parent, and owner links are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.inherits == other.inherits
            && self.number_format == other.number_format
            && self.font == other.font
            && self.border == other.border
            && self.fill == other.fill
            && self.alignment == other.alignment
    }
}

impl Serialize for CellStyle {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_options().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CellStyle {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let options = CellStyleOptions::deserialize(deserializer)?;
        let mut style = Self::default();
        style.apply_options(&options).map_err(D::Error::custom)?;
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::border::LineStyle;

    #[test]
    fn test_new_style_is_default() {
        let style = CellStyle::new("Normal");
        assert!(style.is_default());
        assert_eq!(style.name(), "Normal");
        assert_eq!(style.number_format(), "General");
    }

    #[test]
    fn test_combine_keeps_name_and_explicit_values() {
        let mut reference = CellStyle::new("Base");
        reference.font_mut().set_bold(true).unwrap();
        reference.set_number_format("0.00".to_string()).unwrap();

        let mut style = CellStyle::new("Derived");
        style.set_number_format("0%".to_string()).unwrap();

        style.combine(&reference);

        assert_eq!(style.name(), "Derived");
        assert_eq!(style.number_format(), "0%");
        assert!(*style.font().bold());
    }

    #[test]
    fn test_combine_is_idempotent() {
        let mut reference = CellStyle::new("Base");
        reference.font_mut().set_size(14.0).unwrap();
        reference.border_mut().set_outline(LineStyle::Thin).unwrap();

        let mut style = CellStyle::new("Derived");
        style.combine(&reference);
        let once = style.clone();
        style.combine(&reference);
        assert_eq!(style, once);
    }

    #[test]
    fn test_apply_options_validates_through_setters() {
        let mut style = CellStyle::new("Report");
        let options = CellStyleOptions {
            font: Some(FontOptions {
                size: Some(500.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            style.apply_options(&options),
            Err(Error::Validation { property: "size", .. })
        ));
    }

    #[test]
    fn test_clone_resets_owner_and_does_not_alias() {
        let mut style = CellStyle::new("Report");
        style.set_owner(NodeId::fresh());
        style.font_mut().set_bold(true).unwrap();

        let mut copy = style.clone();
        assert_eq!(copy.owner(), None);
        copy.font_mut().set_bold(false).unwrap();
        copy.fill_mut().set_pattern(crate::style::PatternType::Solid).unwrap();

        assert!(*style.font().bold());
        assert!(!style.fill().is_visible());
    }

    #[test]
    fn test_json_round_trip() {
        let mut style = CellStyle::new("Heading");
        style.set_inherits(Some("Normal".to_string())).unwrap();
        style.font_mut().set_bold(true).unwrap();
        style.font_mut().set_size(15.0).unwrap();
        style.alignment_mut().set_wrap_text(true).unwrap();

        let json = style.to_json().unwrap();
        let back = CellStyle::from_json(&json).unwrap();
        assert_eq!(back, style);
        assert_eq!(back.is_default(), style.is_default());
        assert_eq!(back.inherits(), Some("Normal"));
    }

    #[test]
    fn test_xml_round_trip() {
        let mut style = CellStyle::new("Accent");
        style
            .fill_mut()
            .set_pattern(crate::style::PatternType::Solid)
            .unwrap();
        style
            .fill_mut()
            .set_foreground(crate::Color::new(0x44, 0x72, 0xC4))
            .unwrap();

        let xml = style.to_xml().unwrap();
        assert!(xml.starts_with("<cell-style>"));
        assert!(xml.contains("<name>Accent</name>"));
        let back = CellStyle::from_xml(&xml).unwrap();
        assert_eq!(back, style);
    }

    #[test]
    fn test_default_style_serializes_empty() {
        assert_eq!(CellStyle::default().to_json().unwrap(), "{}");
    }
}
