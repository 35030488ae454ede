/// A typed attribute of a model, identified by its name within that model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAttribute {
    pub name: String,
    pub description: Option<String>,
    pub kind: AttributeKind,
}

/// An attribute that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModelAttribute {
    pub name: String,
    pub description: Option<String>,
    pub kind: AttributeKind,
}

impl NewModelAttribute {
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The value type of a model attribute.
///
/// Unknown wire kinds decode to [`AttributeKind::String`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    String,
    Integer,
    Boolean,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 3] = [Self::String, Self::Integer, Self::Boolean];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}
