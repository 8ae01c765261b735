//! Structural reflection over derived records.
//!
//! Records describe themselves through a static [`Shape`] and expose their
//! fields as dynamic [`Value`]s. The free functions here operate on any
//! record without knowing its concrete type.

mod access;
pub use access::{get_field_value, set_field_value_from_string, set_record_field_from_string};

mod cmp;
pub use cmp::{compare_numeric_values, compare_string_values, compare_values, CmpOp};

mod convert;
pub use convert::convert_string_to_type;

mod instance;
pub use instance::{new_instance, new_sequence};

mod kind;
pub use kind::Kind;

mod model;
pub use model::Model;

mod primitive;
pub use primitive::Reflect;

mod record;
pub use record::{record_from_value, FieldShape, Record, Shape};

mod sequence;
pub use sequence::{
    coerce_to_record_sequence, model_field_values, set_collection_field,
    set_record_collection_field,
};

mod sort;
pub use sort::{sort_by_field, sort_records};

mod ty;
pub use ty::{RecordType, Type};

mod value;
pub use value::{List, Value};
