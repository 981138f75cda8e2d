//! Cell styles and formatting.
//!
//! This module contains the concrete formatting nodes for cells — fonts,
//! fills, borders, alignment, shape effects — plus the named
//! [`CellStyle`] and the [`StyleRegistry`] that resolves style
//! inheritance.
//!
//! # Example
//!
//! ```rust
//! use longan::{CellStyle, StyleRegistry};
//!
//! let mut registry = StyleRegistry::with_builtins();
//!
//! let mut emphasis = CellStyle::new("Emphasis");
//! emphasis.set_inherits(Some("Heading 1".to_string()))?;
//! emphasis.font_mut().set_italic(true)?;
//! registry.add(emphasis)?;
//!
//! // Bold is inherited from "Heading 1", italic is set locally.
//! let style = registry.effective_style("Emphasis").unwrap();
//! assert!(*style.font().bold());
//! assert!(*style.font().italic());
//! # Ok::<(), longan::Error>(())
//! ```

mod alignment;
mod border;
mod cell_style;
mod effects;
mod fill;
mod font;
pub mod number_format;
mod registry;

pub use alignment::{Alignment, AlignmentOptions, HorizontalAlignment, VerticalAlignment};
pub use border::{Border, BorderEdge, BorderEdgeOptions, BorderOptions, DiagonalDirection, LineStyle};
pub use cell_style::{CellStyle, CellStyleOptions};
pub use effects::{
    Glow, GlowOptions, ShapeEffects, ShapeEffectsOptions, Shadow, ShadowOptions, SoftEdge,
    SoftEdgeOptions,
};
pub use fill::{Fill, FillOptions, PatternType};
pub use font::{Font, FontOptions, Underline};
pub use registry::StyleRegistry;
