use super::{convert_string_to_type, Record, Type, Value};
use crate::{Error, Result};

/// Reads the named field of a record, or of a record behind one reference.
///
/// Null fails with `pointer_or_struct_expected`, any other non-record with
/// `struct_expected`, and a missing field with `field_not_found`.
pub fn get_field_value(record: &Value, field: &str) -> Result<Value> {
    match record.strip_ref() {
        Value::Record(record) => record
            .field(field)
            .ok_or_else(|| Error::field_not_found(field)),
        Value::Null => Err(Error::pointer_or_struct_expected(record.kind())),
        other => Err(Error::struct_expected(other.kind())),
    }
}

/// Parses `raw` into the type of the named field and assigns it.
///
/// `target` must be a reference to a record: anything else fails with
/// `pointer_expected`, and a reference to a non-record with
/// `pointer_to_struct_expected`.
pub fn set_field_value_from_string(target: &mut Value, field: &str, raw: &str) -> Result<()> {
    let Value::Ref(inner) = target else {
        return Err(Error::pointer_expected(target.kind()));
    };

    match &mut **inner {
        Value::Record(record) => set_record_field_from_string(&mut **record, field, raw),
        other => Err(Error::pointer_to_struct_expected(other.kind())),
    }
}

/// Like [`set_field_value_from_string`], on a record borrowed directly.
pub fn set_record_field_from_string(record: &mut dyn Record, field: &str, raw: &str) -> Result<()> {
    let Some(shape) = record.shape().find_field(field) else {
        return Err(Error::unknown_field(field));
    };

    // Optional scalars are typed as their inner scalar.
    let kind = match &shape.ty {
        Type::Ref(inner) => inner.kind(),
        ty => ty.kind(),
    };

    let value = convert_string_to_type(raw, kind)?;
    record.set_field(field, value)
}
