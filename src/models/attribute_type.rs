use super::{FieldMask, MaskField};

/// A catalog entry describing a reusable attribute type, e.g. "Timestamp".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeType {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

/// An attribute type that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttributeType {
    pub name: String,
    pub description: Option<String>,
}

impl NewAttributeType {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeTypeField {
    Name,
    Description,
}

impl MaskField for AttributeTypeField {
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

/// Partial update of an attribute type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTypePatch {
    name: Option<String>,
    description: Option<String>,
    mask: FieldMask<AttributeTypeField>,
}

impl AttributeTypePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.mask.insert(AttributeTypeField::Name);
        self
    }

    pub fn describe(mut self, description: Option<String>) -> Self {
        self.description = description;
        self.mask.insert(AttributeTypeField::Description);
        self
    }

    pub fn mask(&self) -> &FieldMask<AttributeTypeField> {
        &self.mask
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn apply(&self, attribute_type: &mut AttributeType) {
        for field in self.mask.iter() {
            match field {
                AttributeTypeField::Name => {
                    if let Some(name) = &self.name {
                        attribute_type.name = name.clone();
                    }
                }
                AttributeTypeField::Description => {
                    attribute_type.description = self.description.clone()
                }
            }
        }
    }
}
