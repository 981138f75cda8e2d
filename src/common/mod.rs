//! Shared primitives used across the presentation model.
//!
//! This module provides the unified error type and the color value type that
//! every other module builds on.

pub mod color;
pub mod error;

pub use color::Color;
pub use error::{Error, Result};
