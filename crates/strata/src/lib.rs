//! Model metadata for record types.
//!
//! Derive [`Record`] or [`Model`] on a struct with named fields, then
//! register the models with a [`schema::Builder`] to get their field
//! metadata, primary keys and relations.
//!
//! ```ignore
//! #[derive(Debug, Default, Clone, strata::Model)]
//! struct User {
//!     id: u64,
//!     #[db("name:user_name;not-null")]
//!     name: String,
//!     #[db("belongs-to:id:user_id")]
//!     posts: Vec<Post>,
//! }
//! ```

pub use strata_core::{
    filter, reflect, schema, Error, ErrorClass, ErrorCode, Filter, Kind, Model, Record, Reflect,
    Result, Schema, Type, Value,
};

pub use strata_macros::{Model, Record};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, Model, Record, Reflect, Result, Type, Value};
    pub use std::{any::Any, boxed::Box, clone::Clone, option::Option, sync::OnceLock};
    pub use strata_core::reflect::{record_from_value, FieldShape, RecordType, Shape};
}
