//! Property validators used by the schema tables.
//!
//! A validator takes the candidate value and either accepts it or returns a
//! message naming the accepted domain. The generated setters wrap rejections
//! into [`Error::Validation`](crate::Error::Validation) together with the
//! property's wire name. Validators never clamp or coerce.

/// Accept any value. Used for flags and closed enum types, whose domain is
/// already exhaustive.
pub(crate) fn any<T>(_: &T) -> Result<(), String> {
    Ok(())
}

/// Require a non-empty string.
pub(crate) fn non_empty(value: &String) -> Result<(), String> {
    if value.is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(())
    }
}

/// Font size in points, 1-409 (the range Excel accepts).
pub(crate) fn font_size(value: &f64) -> Result<(), String> {
    if value.is_finite() && (1.0..=409.0).contains(value) {
        Ok(())
    } else {
        Err(format!("must be between 1 and 409 points, got {value}"))
    }
}

/// Text rotation in degrees, 0-180.
pub(crate) fn text_rotation(value: &u16) -> Result<(), String> {
    if *value <= 180 {
        Ok(())
    } else {
        Err(format!("must be between 0 and 180 degrees, got {value}"))
    }
}

/// Cell indent level, 0-250.
pub(crate) fn indent(value: &u8) -> Result<(), String> {
    if *value <= 250 {
        Ok(())
    } else {
        Err(format!("must be between 0 and 250, got {value}"))
    }
}

/// Sheet zoom scale in percent, 10-400.
pub(crate) fn zoom(value: &u16) -> Result<(), String> {
    if (10..=400).contains(value) {
        Ok(())
    } else {
        Err(format!("must be between 10 and 400 percent, got {value}"))
    }
}

/// A fraction of one, 0.0-1.0 (transparency and similar ratios).
pub(crate) fn fraction(value: &f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=1.0).contains(value) {
        Ok(())
    } else {
        Err(format!("must be between 0.0 and 1.0, got {value}"))
    }
}

/// A percentage, 0-100 (blur and edge radii in points share this range).
pub(crate) fn percentage(value: &f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=100.0).contains(value) {
        Ok(())
    } else {
        Err(format!("must be between 0 and 100, got {value}"))
    }
}

/// A shadow offset in points, -100 to 100.
pub(crate) fn offset(value: &f64) -> Result<(), String> {
    if value.is_finite() && (-100.0..=100.0).contains(value) {
        Ok(())
    } else {
        Err(format!("must be between -100 and 100 points, got {value}"))
    }
}

/// Column width in characters, 0-255.
pub(crate) fn column_width(value: &f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=255.0).contains(value) {
        Ok(())
    } else {
        Err(format!("must be between 0 and 255 characters, got {value}"))
    }
}

/// Row height in points, 0-409.
pub(crate) fn row_height(value: &f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=409.0).contains(value) {
        Ok(())
    } else {
        Err(format!("must be between 0 and 409 points, got {value}"))
    }
}

/// Sparkline line weight in points, 0-3.
pub(crate) fn line_weight(value: &f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=3.0).contains(value) {
        Ok(())
    } else {
        Err(format!("must be between 0 and 3 points, got {value}"))
    }
}

/// Category axis label offset in percent of the default, 0-1000.
pub(crate) fn label_offset(value: &u16) -> Result<(), String> {
    if *value <= 1000 {
        Ok(())
    } else {
        Err(format!("must be between 0 and 1000, got {value}"))
    }
}

/// An optional finite axis bound.
pub(crate) fn axis_bound(value: &Option<f64>) -> Result<(), String> {
    match value {
        Some(v) if !v.is_finite() => Err(format!("must be finite, got {v}")),
        _ => Ok(()),
    }
}

/// An optional strictly positive axis unit.
pub(crate) fn axis_unit(value: &Option<f64>) -> Result<(), String> {
    match value {
        Some(v) if !(v.is_finite() && *v > 0.0) => {
            Err(format!("must be a positive number, got {v}"))
        },
        _ => Ok(()),
    }
}

/// An optional logarithm base, 2-1000 (the range Excel accepts).
pub(crate) fn log_base(value: &Option<f64>) -> Result<(), String> {
    match value {
        Some(v) if !(v.is_finite() && (2.0..=1000.0).contains(v)) => {
            Err(format!("must be between 2 and 1000, got {v}"))
        },
        _ => Ok(()),
    }
}

/// An optional non-empty style name.
pub(crate) fn style_name(value: &Option<String>) -> Result<(), String> {
    match value {
        Some(name) if name.is_empty() => Err("must not be empty".to_string()),
        _ => Ok(()),
    }
}
