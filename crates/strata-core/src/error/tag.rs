use super::{Error, ErrorCode, ErrorKind};

/// Error when a field annotation is malformed.
///
/// Raised by the tag parser, and by the relationship resolver when an
/// explicit `has-one`/`belongs-to` pairing names a field that does not
/// exist. Surfaces while the schema is being built, never at query time.
#[derive(Debug, Clone)]
pub(super) struct TagError {
    code: ErrorCode,
    message: Box<str>,
}

impl TagError {
    pub(super) fn code(&self) -> ErrorCode {
        self.code
    }
}

impl std::error::Error for TagError {}

impl core::fmt::Display for TagError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid tag: {}", self.message)
    }
}

impl Error {
    fn tag(code: ErrorCode, message: String) -> Error {
        Error::from(ErrorKind::Tag(TagError {
            code,
            message: message.into(),
        }))
    }

    /// `name` was given without a backend name.
    pub fn invalid_name(clause: &str) -> Error {
        Error::tag(
            ErrorCode::InvalidName,
            format!("`{clause}` requires a value, as in `name:<backend_name>`"),
        )
    }

    /// A `has-one` pairing is malformed or names a missing field.
    pub fn invalid_has_one(message: impl Into<String>) -> Error {
        Error::tag(ErrorCode::InvalidHasOne, message.into())
    }

    /// A `belongs-to` pairing is malformed or names a missing field.
    pub fn invalid_belongs_to(message: impl Into<String>) -> Error {
        Error::tag(ErrorCode::InvalidBelongsTo, message.into())
    }

    pub fn unknown_tag_option(option: &str) -> Error {
        Error::tag(
            ErrorCode::UnknownTagOption,
            format!("unknown option `{option}`"),
        )
    }

    /// Two options that cannot be combined on one field.
    pub fn conflicting_tag_options(first: &str, second: &str) -> Error {
        Error::tag(
            ErrorCode::ConflictingTagOptions,
            format!("`{first}` cannot be combined with `{second}`"),
        )
    }

    /// Returns `true` if this error is a tag error.
    pub fn is_tag_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Tag(_))
    }
}
