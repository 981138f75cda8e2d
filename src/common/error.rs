//! Unified error types for the Longan library.
//!
//! Every mutating entry point of the presentation model (direct setters,
//! `apply_options`, registry insertion) reports failures through the same
//! [`Error`] type, so callers see one consistent API.
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A property setter rejected an out-of-domain value.
    ///
    /// `property` is the wire name of the property, `reason` names the
    /// accepted range or domain. Raised at the point of assignment, whether
    /// the value arrives through a direct setter or an options overlay.
    #[error("invalid value for '{property}': {reason}")]
    Validation {
        /// Wire name of the rejected property.
        property: &'static str,
        /// Accepted range or domain, and the offending value.
        reason: String,
    },

    /// A style with the same name is already registered.
    #[error("style '{0}' is already defined")]
    DuplicateStyle(String),

    /// No style with this name is registered.
    #[error("style '{0}' is not defined")]
    UnknownStyle(String),

    /// XML serialization or deserialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
