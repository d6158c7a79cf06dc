//! Error types for decoding records.

use crate::symbol::UnknownEnumValue;
use thiserror::Error;

/// Why a single member of a JSON object could not be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldErrorKind {
    /// The JSON value had the wrong shape for a recognized field.
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    /// An enum-valued string outside the enum's table.
    #[error(transparent)]
    UnrecognizedEnum(#[from] UnknownEnumValue),

    /// An `id` member that is empty or blank.
    #[error("invalid id {0:?}")]
    InvalidId(String),

    /// The timestamp parser rejected the text.
    #[error("malformed timestamp {0:?}")]
    MalformedTimestamp(String),

    /// The `type` member disagrees with the kind being decoded.
    #[error("expected kind {expected:?}, found {found:?}")]
    KindMismatch {
        expected: &'static str,
        found: String,
    },

    /// Nested entities went deeper than the configured limit.
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),

    /// One element of an array failed.
    #[error("element {index}: {source}")]
    InElement {
        index: usize,
        source: Box<FieldErrorKind>,
    },
}

/// A field-scoped decode failure.
///
/// `path` locates the member from the root of the decoded object, e.g.
/// `parent.created_at` or `path_collection.entries[2].name`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("field `{path}`: {kind}")]
pub struct FieldError {
    pub path: String,
    pub kind: FieldErrorKind,
}

/// Failures that prevent a record from being decoded at all.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The input was valid JSON but not an object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// The input text was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A discriminator was registered twice in one registry.
    #[error("kind {0:?} is already registered")]
    DuplicateKind(String),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// A decoded value together with the field errors met along the way.
///
/// Decoding is best-effort: members that fail are left out of the record and
/// reported here, everything else is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub errors: Vec<FieldError>,
}

impl<T> Decoded<T> {
    pub fn new(value: T, errors: Vec<FieldError>) -> Self {
        Self { value, errors }
    }

    /// True when every member decoded cleanly.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_parts(self) -> (T, Vec<FieldError>) {
        (self.value, self.errors)
    }

    /// Returns the value, discarding any field errors.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the value only if no field failed.
    pub fn into_complete(self) -> Result<T, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(self.errors)
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            errors: self.errors,
        }
    }
}

/// Human-readable name of a JSON value's shape, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

