//! The configuration-node engine.
//!
//! Every configurable object in the presentation model (a font, a border, an
//! axis, a sheet view) is a *configuration node*: a struct whose fields all
//! carry a compile-time-known default, together with a parallel *options*
//! struct whose fields are all optional. Nodes follow one contract:
//!
//! - `is_default()` is true iff every owned property equals its default and
//!   every nested node is itself default. It is computed, never stored.
//! - `combine(&reference)` fills only still-default properties from
//!   `reference` and recurses into every nested node unconditionally; an
//!   explicitly-set local value always wins. Combining with a fully-default
//!   reference is a no-op, and a second combine with the same reference
//!   changes nothing.
//! - `apply_options(&options)` overlays exactly the options fields that are
//!   set, going through the same validating setters as direct assignment.
//!   Unset fields never reset a property back to its default, and a
//!   fully-unset options value is a no-op with no validation side effects.
//! - `Clone` produces a structurally equal node with fresh identity: scalar
//!   fields copied, nested nodes deep-cloned, and the parent link reset to
//!   `None`. Whatever re-attaches the clone to a tree re-establishes the
//!   link. Two live nodes never share nested mutable state.
//! - `to_options()` is the sparse projection: an options value holding
//!   exactly the explicitly-set (non-default) properties. Serialization goes
//!   through this projection, so default values are suppressed on the wire.
//!
//! The per-node implementation of this contract is generated by the
//! [`config_node!`] schema macro from a property table (name, type, wire
//! name, default, validator), so the rules above are written once rather
//! than per concrete type. `CellStyle` and `Chart` implement the same
//! contract by hand because they carry identity and ownership state the
//! table does not model.

use std::sync::atomic::{AtomicU64, Ordering};

pub(crate) mod macros;
pub(crate) mod validate;

pub(crate) use macros::config_node;

/// Identity of a configuration node.
///
/// A `NodeId` is a non-owning handle: parent and owner links between nodes
/// are stored as ids rather than references, set once when a node is
/// attached to a tree and reset to `None` by `Clone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocate a fresh, process-unique id.
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}
