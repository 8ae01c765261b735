mod build;
mod code;
mod conversion;
mod field;
mod filter;
mod shape;
mod tag;

pub use code::{ErrorClass, ErrorCode};

use build::BuildError;
use conversion::ConversionError;
use field::FieldError;
use filter::FilterError;
use shape::ShapeError;
use std::sync::Arc;
use tag::TagError;

/// An error that can occur in strata.
///
/// Every error carries a stable [`ErrorCode`] so callers can branch on the
/// failure without matching on messages. Errors are cheap to clone and may
/// wrap a cause (see [`Error::context`]).
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug, Clone)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug, Clone)]
enum ErrorKind {
    Shape(ShapeError),
    Tag(TagError),
    Build(BuildError),
    Field(FieldError),
    Conversion(ConversionError),
    Filter(FilterError),
}

impl Error {
    /// Adds context to this error.
    ///
    /// `consequent` becomes the outer error and `self` its cause. Context is
    /// displayed outermost first, ending with the root cause.
    pub fn context(self, consequent: Error) -> Error {
        let mut inner = Arc::unwrap_or_clone(consequent.inner);
        debug_assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        inner.cause = Some(self);
        Error {
            inner: Arc::new(inner),
        }
    }

    /// The stable, machine-readable code of the outermost error.
    pub fn code(&self) -> ErrorCode {
        self.kind().code()
    }

    /// The class the outermost error belongs to.
    pub fn class(&self) -> ErrorClass {
        self.code().class()
    }

    /// The error this one wraps, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.inner.cause.as_ref()
    }

    /// The innermost error of the chain. Returns `self` when there is no
    /// cause.
    pub fn root_cause(&self) -> &Error {
        self.chain().fold(self, |_, err| err)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl ErrorKind {
    fn code(&self) -> ErrorCode {
        match self {
            ErrorKind::Shape(err) => err.code(),
            ErrorKind::Tag(err) => err.code(),
            ErrorKind::Build(err) => err.code(),
            ErrorKind::Field(err) => err.code(),
            ErrorKind::Conversion(err) => err.code(),
            ErrorKind::Filter(err) => err.code(),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .cause
            .as_ref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("code", &self.code())
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            ErrorKind::Shape(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Tag(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Build(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Field(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Conversion(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Filter(err) => core::fmt::Display::fmt(err, f),
        }
    }
}
