use super::Model;

/// A relationship from one model to another model of the same project.
///
/// `associated_model` carries the referenced model when the backend could
/// resolve `associated_model_slug`; the slug itself is never checked client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAssociation {
    pub name: String,
    pub description: Option<String>,
    pub kind: AssociationKind,
    pub associated_model_slug: String,
    pub associated_model: Option<Model>,
}

/// An association that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModelAssociation {
    pub name: String,
    pub description: Option<String>,
    pub kind: AssociationKind,
    pub associated_model_slug: String,
}

impl NewModelAssociation {
    pub fn new(
        name: impl Into<String>,
        kind: AssociationKind,
        associated_model_slug: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            associated_model_slug: associated_model_slug.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Cardinality of an association.
///
/// Unknown wire kinds decode to [`AssociationKind::BelongsTo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationKind {
    BelongsTo,
    HasOne,
    HasMany,
}

impl AssociationKind {
    pub const ALL: [AssociationKind; 3] = [Self::BelongsTo, Self::HasOne, Self::HasMany];
}
