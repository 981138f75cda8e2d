//! Longan - a declarative presentation model for Excel documents
//!
//! This library describes how a workbook looks — cell styles, borders,
//! fonts, fills, charts, mini-charts, axes, shadows, sheet settings — as a
//! tree of *configuration nodes*, and resolves the effective value of every
//! property from up to three competing sources:
//!
//! - **Explicit local value**: set through a validating setter, always wins.
//! - **Combined reference**: `combine` fills still-default properties from a
//!   baseline tree, never overwriting an explicit value.
//! - **Named-style inheritance**: a [`CellStyle`] may inherit from another
//!   registered style; the [`StyleRegistry`] resolves properties lazily
//!   through that chain, guarding against cycles.
//!
//! Sparse overrides arrive through *options* values — fully-optional shadows
//! of each node — applied with `apply_options`. Serialization (JSON and XML)
//! goes through the same sparse shape, so default values never reach the
//! wire and malformed wire values fail validation on the way in.
//!
//! # Example - resolving a derived style
//!
//! ```rust
//! use longan::{CellStyle, StyleRegistry};
//!
//! # fn main() -> Result<(), longan::Error> {
//! let mut registry = StyleRegistry::new();
//!
//! let mut base = CellStyle::new("Base");
//! base.font_mut().set_bold(true)?;
//! registry.add(base)?;
//!
//! let mut derived = CellStyle::new("Derived");
//! derived.set_inherits(Some("Base".to_string()))?;
//! registry.add(derived)?;
//!
//! let effective = registry.effective_style("Derived").unwrap();
//! assert!(*effective.font().bold());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - sparse overrides from JSON
//!
//! ```rust
//! use longan::style::{Font, FontOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut font = Font::new();
//! font.set_size(9.0)?;
//!
//! // Only the fields present in the payload change.
//! let overrides: FontOptions = serde_json::from_str(r#"{"bold":true}"#)?;
//! font.apply_options(&overrides)?;
//!
//! assert!(*font.bold());
//! assert_eq!(*font.size(), 9.0);
//! # Ok(())
//! # }
//! ```

/// Shared primitives: the error type and the color value type.
pub mod common;

/// The configuration-node engine: node identity and the schema macro that
/// generates the default/combine/overlay/clone contract per node type.
pub mod node;

/// Cell styles: fonts, fills, borders, alignment, shape effects, named
/// styles and the style registry.
pub mod style;

/// Chart presentation: charts, axes, legends and mini-charts.
pub mod chart;

/// Worksheet presentation settings.
pub mod sheet;

// Re-export the types most callers need.
pub use common::{Color, Error, Result};
pub use node::NodeId;
pub use style::{CellStyle, CellStyleOptions, StyleRegistry};
