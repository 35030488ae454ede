use chrono::{DateTime, Utc};

use super::{FieldMask, MaskField};

/// A project containing models.
///
/// Projects are the top-level organizational unit. The lifecycle state
/// (active or archived) is not part of the value: it is implied by whether
/// `list_projects` or `list_archived_projects` returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Server-assigned identity, derived from the name at creation and stable afterwards.
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub create_time: DateTime<Utc>,
}

/// A project that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
}

impl NewProject {
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

/// Updatable project fields, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectField {
    Name,
    Description,
}

impl MaskField for ProjectField {
    fn path(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
        }
    }

    fn from_path(path: &str) -> Option<Self> {
        match path {
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            _ => None,
        }
    }
}

/// Partial update of a project. Only fields set through the builder are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    name: Option<String>,
    description: Option<String>,
    mask: FieldMask<ProjectField>,
}

impl ProjectPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.mask.insert(ProjectField::Name);
        self
    }

    /// Replace the description. `None` clears it.
    pub fn describe(mut self, description: Option<String>) -> Self {
        self.description = description;
        self.mask.insert(ProjectField::Description);
        self
    }

    pub fn mask(&self) -> &FieldMask<ProjectField> {
        &self.mask
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Apply the masked fields onto an existing project.
    pub fn apply(&self, project: &mut Project) {
        for field in self.mask.iter() {
            match field {
                ProjectField::Name => {
                    if let Some(name) = &self.name {
                        project.name = name.clone();
                    }
                }
                ProjectField::Description => project.description = self.description.clone(),
            }
        }
    }
}
