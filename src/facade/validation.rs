//! Local validation run before any gateway call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest accepted name, in bytes.
pub const MAX_NAME_LENGTH: usize = 50;

/// A field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "limit")]
pub enum FieldErrorKind {
    /// Blank value for a required field.
    Required,
    /// Value longer than the given number of bytes.
    MaxLength(usize),
    /// Field named in an update mask that cannot be updated.
    UnknownField,
}

impl FieldError {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldErrorKind::Required,
        }
    }

    pub fn unknown_field(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldErrorKind::UnknownField,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Required => write!(f, "{} can't be blank", self.field),
            FieldErrorKind::MaxLength(max) => write!(
                f,
                "{} is too long, maximum length is {} bytes",
                self.field, max
            ),
            FieldErrorKind::UnknownField => write!(f, "{} can't be updated", self.field),
        }
    }
}

/// Accumulates field errors.
///
/// ```
/// use atelier::facade::validation::Validator;
///
/// let errors = Validator::new()
///     .required("name", "")
///     .max_length("name", "Book store", 50)
///     .finish();
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whitespace-only values count as blank.
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::required(field));
        }
        self
    }

    pub fn max_length(mut self, field: &str, value: &str, max: usize) -> Self {
        if value.len() > max {
            self.errors.push(FieldError {
                field: field.to_string(),
                kind: FieldErrorKind::MaxLength(max),
            });
        }
        self
    }

    /// Required and at most [`MAX_NAME_LENGTH`] bytes.
    pub fn name(self, field: &str, value: &str) -> Self {
        self.required(field, value)
            .max_length(field, value, MAX_NAME_LENGTH)
    }

    pub fn finish(self) -> Vec<FieldError> {
        self.errors
    }

    /// `Err(Error::Validation)` when anything failed.
    pub fn into_result(self) -> crate::Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(crate::Error::Validation(self.errors))
        }
    }
}
