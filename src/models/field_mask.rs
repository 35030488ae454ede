use std::collections::BTreeSet;

/// A field that can appear in a partial-update mask.
///
/// The `Ord` implementation must follow field-declaration order, since masks
/// are emitted in that order.
pub trait MaskField: Copy + Ord {
    /// Wire path of the field, e.g. `"name"`.
    fn path(&self) -> &'static str;

    fn from_path(path: &str) -> Option<Self>;
}

/// Ordered set of fields a partial update intends to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMask<F: MaskField> {
    fields: BTreeSet<F>,
}

impl<F: MaskField> Default for FieldMask<F> {
    fn default() -> Self {
        Self {
            fields: BTreeSet::new(),
        }
    }
}

impl<F: MaskField> FieldMask<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F) {
        self.fields.insert(field);
    }

    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().copied()
    }

    /// Wire paths in declaration order.
    pub fn paths(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.path().to_string()).collect()
    }

    /// Parse wire paths, returning the first unknown path on failure.
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Result<Self, String> {
        let mut mask = Self::new();
        for path in paths {
            let path = path.as_ref();
            let field = F::from_path(path).ok_or_else(|| path.to_string())?;
            mask.insert(field);
        }
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectField;

    #[test]
    fn paths_follow_declaration_order_not_insertion_order() {
        let mut mask = FieldMask::new();
        mask.insert(ProjectField::Description);
        mask.insert(ProjectField::Name);
        mask.insert(ProjectField::Description);

        assert_eq!(mask.paths(), vec!["name", "description"]);
    }

    #[test]
    fn from_paths_rejects_unknown_fields() {
        let err = FieldMask::<ProjectField>::from_paths(&["name", "slug"]).unwrap_err();
        assert_eq!(err, "slug");
    }
}
