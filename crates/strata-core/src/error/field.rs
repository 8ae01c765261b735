use super::{Error, ErrorCode, ErrorKind};

/// Error when structural access names a field the record lacks, or a value
/// does not fit the field it is written to.
///
/// Local to the single operation; the caller may retry with a corrected
/// field name or value.
#[derive(Debug, Clone)]
pub(super) struct FieldError {
    code: ErrorCode,
    message: Box<str>,
}

impl FieldError {
    pub(super) fn code(&self) -> ErrorCode {
        self.code
    }
}

impl std::error::Error for FieldError {}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    fn field(code: ErrorCode, message: String) -> Error {
        Error::from(ErrorKind::Field(FieldError {
            code,
            message: message.into(),
        }))
    }

    /// Reading a field the record does not have.
    pub fn field_not_found(field: &str) -> Error {
        Error::field(ErrorCode::FieldNotFound, format!("field not found: `{field}`"))
    }

    /// Writing a field the record does not have.
    pub fn unknown_field(field: &str) -> Error {
        Error::field(ErrorCode::UnknownField, format!("unknown field: `{field}`"))
    }

    pub fn unsupported_field_type(field: &str, ty: impl core::fmt::Display) -> Error {
        Error::field(
            ErrorCode::UnsupportedFieldType,
            format!("field `{field}` has unsupported type `{ty}`"),
        )
    }

    /// A value's runtime type does not match the type it is assigned to.
    pub fn type_mismatch(
        expected: impl core::fmt::Display,
        found: impl core::fmt::Display,
    ) -> Error {
        Error::field(
            ErrorCode::TypeMismatch,
            format!("type mismatch: expected `{expected}`, found `{found}`"),
        )
    }

    /// Returns `true` if this error is a field access error.
    pub fn is_field_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Field(_))
    }
}
