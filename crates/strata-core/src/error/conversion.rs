use super::{Error, ErrorCode, ErrorKind};
use crate::reflect::Kind;

/// Error when a value cannot be converted or compared.
///
/// This occurs when:
/// - A string is converted to a kind that has no string form
/// - Numeric text is malformed, or a number does not fit its target
/// - Two values of unrelated kinds are compared
#[derive(Debug, Clone)]
pub(super) struct ConversionError {
    code: ErrorCode,
    message: Box<str>,
}

impl ConversionError {
    pub(super) fn code(&self) -> ErrorCode {
        self.code
    }
}

impl std::error::Error for ConversionError {}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "conversion failed: {}", self.message)
    }
}

impl Error {
    fn conversion(code: ErrorCode, message: String) -> Error {
        Error::from(ErrorKind::Conversion(ConversionError {
            code,
            message: message.into(),
        }))
    }

    /// The requested kind has no conversion from a string.
    pub fn cannot_convert_to(kind: Kind) -> Error {
        Error::conversion(
            ErrorCode::CannotConvertTo(kind),
            format!("strings cannot be converted to `{kind}`"),
        )
    }

    pub fn parse_number(raw: &str, kind: Kind, reason: impl core::fmt::Display) -> Error {
        Error::conversion(
            ErrorCode::ParseNumber,
            format!("`{raw}` is not a valid `{kind}`: {reason}"),
        )
    }

    pub fn value_out_of_range(value: impl core::fmt::Display, kind: Kind) -> Error {
        Error::conversion(
            ErrorCode::ValueOutOfRange,
            format!("`{value}` does not fit in `{kind}`"),
        )
    }

    pub fn incomparable_values(lhs: Kind, rhs: Kind) -> Error {
        Error::conversion(
            ErrorCode::IncomparableValues,
            format!("cannot compare `{lhs}` with `{rhs}`"),
        )
    }

    /// Returns `true` if this error is a conversion error.
    pub fn is_conversion_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Conversion(_))
    }
}
