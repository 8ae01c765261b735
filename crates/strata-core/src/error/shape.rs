use super::{Error, ErrorCode, ErrorKind};

/// Error when an argument does not have the structural shape an operation
/// requires.
///
/// This occurs when:
/// - A record (or a reference to one) is required but a scalar was given
/// - Assignment needs a reference to a record to write through
/// - A sequence is required, or its elements do not implement `Model`
///
/// Always fixable by the caller; never worth retrying.
#[derive(Debug, Clone)]
pub(super) struct ShapeError {
    code: ErrorCode,
    found: Box<str>,
}

impl ShapeError {
    pub(super) fn code(&self) -> ErrorCode {
        self.code
    }
}

impl std::error::Error for ShapeError {}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let expected = match self.code {
            ErrorCode::StructExpected => "expected a record",
            ErrorCode::PointerExpected => "expected a reference",
            ErrorCode::PointerOrStructExpected => "expected a record or a reference to one",
            ErrorCode::PointerToStructExpected => "expected a reference to a record",
            ErrorCode::SliceExpected => "expected a sequence",
            _ => "sequence elements do not implement `Model`",
        };
        write!(f, "{expected}; found `{}`", self.found)
    }
}

impl Error {
    fn shape(code: ErrorCode, found: impl core::fmt::Display) -> Error {
        Error::from(ErrorKind::Shape(ShapeError {
            code,
            found: found.to_string().into(),
        }))
    }

    /// A record value or a reference to one was required.
    pub fn struct_expected(found: impl core::fmt::Display) -> Error {
        Error::shape(ErrorCode::StructExpected, found)
    }

    /// A reference was required to write through.
    pub fn pointer_expected(found: impl core::fmt::Display) -> Error {
        Error::shape(ErrorCode::PointerExpected, found)
    }

    /// Nothing (null) was given where a record or reference was required.
    pub fn pointer_or_struct_expected(found: impl core::fmt::Display) -> Error {
        Error::shape(ErrorCode::PointerOrStructExpected, found)
    }

    /// A reference was given but it does not point at a record.
    pub fn pointer_to_struct_expected(found: impl core::fmt::Display) -> Error {
        Error::shape(ErrorCode::PointerToStructExpected, found)
    }

    pub fn slice_expected(found: impl core::fmt::Display) -> Error {
        Error::shape(ErrorCode::SliceExpected, found)
    }

    /// A sequence element is not a record implementing `Model`.
    pub fn elements_not_model(found: impl core::fmt::Display) -> Error {
        Error::shape(ErrorCode::ElementsNotModel, found)
    }

    /// Returns `true` if this error is a shape error.
    pub fn is_shape_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Shape(_))
    }
}
