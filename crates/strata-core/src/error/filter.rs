use super::{Error, ErrorCode, ErrorKind};

/// Error when a filter operator name is not recognized.
#[derive(Debug, Clone)]
pub(super) struct FilterError {
    operator: Box<str>,
}

impl FilterError {
    pub(super) fn code(&self) -> ErrorCode {
        ErrorCode::UnknownFilter
    }
}

impl std::error::Error for FilterError {}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown filter operator `{}`", self.operator)
    }
}

impl Error {
    pub fn unknown_filter(operator: &str) -> Error {
        Error::from(ErrorKind::Filter(FilterError {
            operator: operator.into(),
        }))
    }

    /// Returns `true` if this error is an unknown filter operator error.
    pub fn is_unknown_filter(&self) -> bool {
        matches!(self.kind(), ErrorKind::Filter(_))
    }
}
