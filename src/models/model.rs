use super::{ModelAssociation, ModelAttribute};

/// A model nested under a project.
///
/// Models are immutable once created, apart from deletion. Deleting the
/// owning project removes them too; that cascade happens on the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Unique within the owning project.
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

/// A model that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModel {
    pub name: String,
    pub description: Option<String>,
}

impl NewModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A model with its attributes and associations, as returned by `get_model`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOverview {
    pub model: Model,
    pub attributes: Vec<ModelAttribute>,
    pub associations: Vec<ModelAssociation>,
}
