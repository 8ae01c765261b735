use super::{Error, ErrorCode, ErrorKind};

/// Error when a schema is structurally inconsistent.
///
/// This occurs when:
/// - A field's tag is invalid (the tag error is the cause)
/// - No primary key can be resolved, or more than one is declared
/// - Two fields map to the same backend name
/// - A relation points at a model that is not part of the schema
/// - Inferred relations are ambiguous
///
/// Fatal to schema initialization. A failed build publishes nothing.
#[derive(Debug, Clone)]
pub(super) struct BuildError {
    code: ErrorCode,
    message: Box<str>,
}

impl BuildError {
    pub(super) fn code(&self) -> ErrorCode {
        self.code
    }
}

impl std::error::Error for BuildError {}

impl core::fmt::Display for BuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    fn build(code: ErrorCode, message: String) -> Error {
        Error::from(ErrorKind::Build(BuildError {
            code,
            message: message.into(),
        }))
    }

    /// Wraps the failure of a single field's descriptor. Use with
    /// [`Error::context`] so the tag error stays reachable as the cause.
    pub fn build_field_info(model: &str, field: &str) -> Error {
        Error::build(
            ErrorCode::BuildFieldInfoError,
            format!("failed to build field `{model}::{field}`"),
        )
    }

    pub fn primary_key_not_found(model: &str) -> Error {
        Error::build(
            ErrorCode::PrimaryKeyNotFound,
            format!("model `{model}` has no `primary-key` field and no field named `id`"),
        )
    }

    pub fn multiple_primary_keys(model: &str, fields: &[&str]) -> Error {
        Error::build(
            ErrorCode::MultiplePrimaryKeys,
            format!(
                "model `{model}` declares more than one primary key: {}",
                fields.join(", ")
            ),
        )
    }

    pub fn duplicate_backend_name(model: &str, backend_name: &str, fields: [&str; 2]) -> Error {
        Error::build(
            ErrorCode::DuplicateBackendName,
            format!(
                "model `{model}`: fields `{}` and `{}` both map to `{backend_name}`",
                fields[0], fields[1]
            ),
        )
    }

    pub fn duplicate_collection(collection: &str) -> Error {
        Error::build(
            ErrorCode::DuplicateCollection,
            format!("collection `{collection}` is already registered"),
        )
    }

    /// A relation targets a type that is not registered in the schema.
    pub fn unknown_collection(model: &str, field: &str, target: &str) -> Error {
        Error::build(
            ErrorCode::UnknownCollection,
            format!("relation `{model}::{field}` targets `{target}`, which is not registered"),
        )
    }

    pub fn ambiguous_relation(model: &str, target: &str, fields: &[&str]) -> Error {
        Error::build(
            ErrorCode::AmbiguousRelation,
            format!(
                "model `{model}` has several inferred relations to `{target}` ({}); \
                 tag them with explicit `belongs-to:<local>:<foreign>` pairings",
                fields.join(", ")
            ),
        )
    }

    pub fn schema_already_installed() -> Error {
        Error::build(
            ErrorCode::SchemaAlreadyInstalled,
            "a schema has already been installed for this process".to_string(),
        )
    }

    /// Returns `true` if this error is a build error.
    pub fn is_build_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Build(_))
    }
}
