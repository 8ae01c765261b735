mod error;
pub use error::{Error, ErrorClass, ErrorCode};

pub mod filter;
pub use filter::Filter;

pub mod reflect;
pub use reflect::{Kind, Model, Record, Reflect, Type, Value};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses strata's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
