use super::{Kind, List, Type, Value};
use crate::{Error, Result};

/// A zero-valued record of the same type as `sample`, held by reference.
///
/// `sample` may be a record, a reference to one, or a list whose elements
/// are (references to) records, in which case the element type is used.
pub fn new_instance(sample: &Value) -> Result<Value> {
    let ty = match sample {
        Value::List(list) => Some(list.ty.clone()),
        sample => sample.ty(),
    };

    let Some(record) = ty.as_ref().and_then(Type::record_type) else {
        return Err(Error::struct_expected(sample.kind()));
    };

    Ok(Value::reference(Value::Record(record.shape().new_record())))
}

/// An empty list whose element type is the runtime type of `sample`.
///
/// A reference sample yields a list of references, a plain value a list of
/// values.
pub fn new_sequence(sample: &Value) -> Result<Value> {
    match sample.ty() {
        Some(ty) => Ok(Value::List(List::new(ty))),
        None => Err(Error::pointer_or_struct_expected(Kind::Null)),
    }
}
