//! The named-style registry and inheritance resolver.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use crate::common::error::{Error, Result};
use crate::node::NodeId;
use crate::style::cell_style::{CellStyle, CellStyleOptions};
use crate::style::font::FontOptions;

/// Expected depth of style inheritance chains; longer chains spill to the
/// heap.
const TYPICAL_CHAIN_DEPTH: usize = 8;

static BUILTIN_STYLES: Lazy<Vec<CellStyle>> = Lazy::new(|| {
    let heading = |name: &str, size: f64| {
        builtin(
            name,
            CellStyleOptions {
                font: Some(FontOptions {
                    bold: Some(true),
                    size: Some(size),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
    };
    vec![
        builtin("Normal", CellStyleOptions::default()),
        heading("Heading 1", 15.0),
        heading("Heading 2", 13.0),
        builtin(
            "Total",
            CellStyleOptions {
                font: Some(FontOptions {
                    bold: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ),
    ]
});

fn builtin(name: &str, options: CellStyleOptions) -> CellStyle {
    let mut style = CellStyle::new(name);
    style
        .apply_options(&options)
        .expect("built-in style values are within domain");
    style
}

/// A keyed collection of named [`CellStyle`]s with inheritance resolution.
///
/// Lookups are case-sensitive exact matches. A registered style may declare
/// that it inherits from another entry by name; [`resolve`](Self::resolve)
/// and [`effective_style`](Self::effective_style) walk that chain so that an
/// explicit value beats an inherited one, which beats the default. The
/// registry is populated while building the document model and read-only
/// afterwards.
///
/// # Examples
///
/// ```rust
/// use longan::{CellStyle, StyleRegistry};
///
/// let mut registry = StyleRegistry::new();
///
/// let mut base = CellStyle::new("Base");
/// base.font_mut().set_bold(true)?;
/// registry.add(base)?;
///
/// let mut derived = CellStyle::new("Derived");
/// derived.set_inherits(Some("Base".to_string()))?;
/// registry.add(derived)?;
///
/// // "Derived" sets nothing itself, so bold resolves through "Base".
/// let bold = registry.resolve("Derived", |s| s.font.as_ref().and_then(|f| f.bold));
/// assert_eq!(bold, Some(true));
/// # Ok::<(), longan::Error>(())
/// ```
#[derive(Debug)]
pub struct StyleRegistry {
    id: NodeId,
    styles: Vec<CellStyle>,
    index: HashMap<String, usize>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            id: NodeId::fresh(),
            styles: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a registry seeded with Excel's built-in styles
    /// ("Normal", "Heading 1", "Heading 2", "Total").
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for style in BUILTIN_STYLES.iter() {
            registry
                .add(style.clone())
                .expect("built-in style names are unique");
        }
        registry
    }

    /// Identity of this registry; registered styles carry it as their owner.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Register a style under its name.
    ///
    /// Fails with [`Error::DuplicateStyle`] if the name is taken and with a
    /// validation error if the style has no name. The style's owner link is
    /// set to this registry.
    pub fn add(&mut self, mut style: CellStyle) -> Result<()> {
        if style.name().is_empty() {
            return Err(Error::Validation {
                property: "name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.index.contains_key(style.name()) {
            return Err(Error::DuplicateStyle(style.name().to_string()));
        }
        style.set_owner(self.id);
        self.index.insert(style.name().to_string(), self.styles.len());
        self.styles.push(style);
        Ok(())
    }

    /// Look up a style by exact name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&CellStyle> {
        self.index.get(name).map(|&slot| &self.styles[slot])
    }

    /// Look up a style by exact name, failing with
    /// [`Error::UnknownStyle`] when absent.
    pub fn require(&self, name: &str) -> Result<&CellStyle> {
        self.get(name)
            .ok_or_else(|| Error::UnknownStyle(name.to_string()))
    }

    /// Check whether a style name is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered styles.
    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check whether the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate over the registered styles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CellStyle> {
        self.styles.iter()
    }

    /// Resolve one property through the inheritance chain of `name`.
    ///
    /// The lens inspects a style's sparse projection — the fields a style
    /// sets explicitly — and returns the property when present. Resolution
    /// returns the first hit walking from the named style up its `inherits`
    /// chain; `None` means no style in the chain sets the property and the
    /// caller falls back to the property's own default.
    ///
    /// A chain link naming an unregistered style ends the walk. A cyclic
    /// chain is reported at warn level and likewise falls back to the
    /// default; resolution always terminates.
    pub fn resolve<T>(
        &self,
        name: &str,
        lens: impl Fn(&CellStyleOptions) -> Option<T>,
    ) -> Option<T> {
        let mut visited: SmallVec<[&str; TYPICAL_CHAIN_DEPTH]> = SmallVec::new();
        let mut current = self.get(name)?;
        loop {
            if let Some(value) = lens(&current.to_options()) {
                return Some(value);
            }
            let next = current.inherits()?;
            if visited.iter().any(|&seen| seen == next) || next == current.name() {
                tracing::warn!(
                    style = name,
                    via = next,
                    "cyclic style inheritance chain; falling back to defaults"
                );
                return None;
            }
            visited.push(current.name());
            current = self.get(next)?;
        }
    }

    /// Materialize the effective style of `name`: a detached copy with every
    /// still-default property filled from its inheritance chain.
    ///
    /// Agrees with [`resolve`](Self::resolve) on every property, including
    /// the cycle fallback.
    pub fn effective_style(&self, name: &str) -> Option<CellStyle> {
        let first = self.get(name)?;
        let mut effective = first.clone();
        let mut visited: SmallVec<[&str; TYPICAL_CHAIN_DEPTH]> = SmallVec::new();
        visited.push(first.name());
        let mut current = first;
        while let Some(next) = current.inherits() {
            if visited.iter().any(|&seen| seen == next) {
                tracing::warn!(
                    style = name,
                    via = next,
                    "cyclic style inheritance chain; falling back to defaults"
                );
                break;
            }
            let Some(target) = self.get(next) else {
                break;
            };
            effective.combine(target);
            visited.push(target.name());
            current = target;
        }
        Some(effective)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::font::Font;

    fn registry_with(styles: Vec<CellStyle>) -> StyleRegistry {
        let mut registry = StyleRegistry::new();
        for style in styles {
            registry.add(style).unwrap();
        }
        registry
    }

    #[test]
    fn test_add_rejects_duplicates_and_anonymous_styles() {
        let mut registry = StyleRegistry::new();
        registry.add(CellStyle::new("Report")).unwrap();
        assert!(matches!(
            registry.add(CellStyle::new("Report")),
            Err(Error::DuplicateStyle(_))
        ));
        assert!(matches!(
            registry.add(CellStyle::default()),
            Err(Error::Validation { property: "name", .. })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = registry_with(vec![CellStyle::new("Report")]);
        assert!(registry.contains("Report"));
        assert!(!registry.contains("report"));
        assert!(matches!(
            registry.require("REPORT"),
            Err(Error::UnknownStyle(_))
        ));
    }

    #[test]
    fn test_add_sets_owner() {
        let mut registry = StyleRegistry::new();
        registry.add(CellStyle::new("Report")).unwrap();
        assert_eq!(registry.get("Report").unwrap().owner(), Some(registry.id()));
    }

    #[test]
    fn test_resolve_explicit_beats_inherited_beats_default() {
        let mut base = CellStyle::new("Base");
        base.font_mut().set_bold(true).unwrap();
        base.font_mut().set_size(14.0).unwrap();

        let mut derived = CellStyle::new("Derived");
        derived.set_inherits(Some("Base".to_string())).unwrap();
        derived.font_mut().set_size(9.0).unwrap();

        let registry = registry_with(vec![base, derived]);

        // Explicit local value wins.
        assert_eq!(
            registry.resolve("Derived", |s| s.font.as_ref().and_then(|f| f.size)),
            Some(9.0)
        );
        // Inherited value fills the gap.
        assert_eq!(
            registry.resolve("Derived", |s| s.font.as_ref().and_then(|f| f.bold)),
            Some(true)
        );
        // Nobody in the chain set italic: fall back to the default.
        assert_eq!(
            registry.resolve("Derived", |s| s.font.as_ref().and_then(|f| f.italic)),
            None
        );
    }

    #[test]
    fn test_resolve_base_derived_font_scenario() {
        // "Base" sets Font.Bold explicitly and leaves Font.Size default;
        // "Derived" inherits "Base" and sets nothing.
        let mut base = CellStyle::new("Base");
        base.font_mut().set_bold(true).unwrap();
        let mut derived = CellStyle::new("Derived");
        derived.set_inherits(Some("Base".to_string())).unwrap();

        let registry = registry_with(vec![base, derived]);

        assert_eq!(
            registry.resolve("Derived", |s| s.font.as_ref().and_then(|f| f.bold)),
            Some(true)
        );
        // Size resolves to the global default, not anything of "Base"'s.
        let size = registry
            .resolve("Derived", |s| s.font.as_ref().and_then(|f| f.size))
            .unwrap_or(Font::DEFAULT_SIZE);
        assert_eq!(size, Font::DEFAULT_SIZE);
    }

    #[test]
    fn test_resolve_missing_inherits_target_falls_back() {
        let mut orphan = CellStyle::new("Orphan");
        orphan.set_inherits(Some("Gone".to_string())).unwrap();
        let registry = registry_with(vec![orphan]);

        assert_eq!(
            registry.resolve("Orphan", |s| s.font.as_ref().and_then(|f| f.bold)),
            None
        );
    }

    #[test]
    fn test_resolve_terminates_on_cycle() {
        let mut a = CellStyle::new("A");
        a.set_inherits(Some("B".to_string())).unwrap();
        let mut b = CellStyle::new("B");
        b.set_inherits(Some("A".to_string())).unwrap();
        let registry = registry_with(vec![a, b]);

        assert_eq!(
            registry.resolve("A", |s| s.font.as_ref().and_then(|f| f.bold)),
            None
        );
    }

    #[test]
    fn test_resolve_terminates_on_self_inheritance() {
        let mut a = CellStyle::new("A");
        a.set_inherits(Some("A".to_string())).unwrap();
        let registry = registry_with(vec![a]);

        assert_eq!(
            registry.resolve("A", |s| s.font.as_ref().and_then(|f| f.bold)),
            None
        );
    }

    #[test]
    fn test_effective_style_agrees_with_resolve() {
        let mut root = CellStyle::new("Root");
        root.font_mut().set_size(16.0).unwrap();
        root.set_number_format("0.00".to_string()).unwrap();

        let mut mid = CellStyle::new("Mid");
        mid.set_inherits(Some("Root".to_string())).unwrap();
        mid.font_mut().set_bold(true).unwrap();

        let mut leaf = CellStyle::new("Leaf");
        leaf.set_inherits(Some("Mid".to_string())).unwrap();
        leaf.font_mut().set_size(9.0).unwrap();

        let registry = registry_with(vec![root, mid, leaf]);
        let effective = registry.effective_style("Leaf").unwrap();

        assert_eq!(effective.name(), "Leaf");
        assert_eq!(*effective.font().size(), 9.0);
        assert!(*effective.font().bold());
        assert_eq!(effective.number_format(), "0.00");
        // The materialized copy is detached from the registry.
        assert_eq!(effective.owner(), None);
    }

    #[test]
    fn test_effective_style_terminates_on_cycle() {
        let mut a = CellStyle::new("A");
        a.set_inherits(Some("B".to_string())).unwrap();
        a.font_mut().set_italic(true).unwrap();
        let mut b = CellStyle::new("B");
        b.set_inherits(Some("A".to_string())).unwrap();
        b.font_mut().set_bold(true).unwrap();
        let registry = registry_with(vec![a, b]);

        let effective = registry.effective_style("A").unwrap();
        // The walk visits B once, then stops.
        assert!(*effective.font().italic());
        assert!(*effective.font().bold());
    }

    #[test]
    fn test_builtin_styles() {
        let registry = StyleRegistry::with_builtins();
        assert!(registry.contains("Normal"));
        assert!(registry.get("Normal").unwrap().is_default());
        let heading = registry.get("Heading 1").unwrap();
        assert!(*heading.font().bold());
        assert_eq!(*heading.font().size(), 15.0);
    }
}
