//! Domain values exposed to callers.
//!
//! # Core Concepts
//!
//! ## Persisted values
//!
//! - [`Project`]: Top-level container of models. Archived or active, depending on
//!   which listing returned it.
//! - [`Model`]: A class-like entity nested under exactly one project.
//! - [`ModelAttribute`] and [`ModelAssociation`]: Typed members of a model,
//!   identified by name within it.
//! - [`AttributeType`]: Independent catalog entry, not nested.
//!
//! ## Drafts
//!
//! Every persisted value has a `New*` counterpart without an identity. Identities
//! (`slug` or `name`) are only ever assigned by the gateway backend on creation.
//!
//! ## Partial updates
//!
//! [`ProjectPatch`] and [`AttributeTypePatch`] record which fields the caller
//! changed in a [`FieldMask`]. Nothing diffs against a previous snapshot.

mod association;
mod attribute;
mod attribute_type;
mod field_mask;
mod model;
mod project;

pub use association::*;
pub use attribute::*;
pub use attribute_type::*;
pub use field_mask::*;
pub use model::*;
pub use project::*;

/// Outcome of an idempotent delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The resource existed and is gone now.
    Removed,
    /// Nothing matched the identity; nothing changed.
    Absent,
}

impl Deletion {
    pub fn removed(&self) -> bool {
        matches!(self, Self::Removed)
    }
}
