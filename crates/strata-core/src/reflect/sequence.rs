use super::{List, Model, Record, Type, Value};
use crate::{Error, Result};

/// Turns a list (or a reference to one) of records into boxed models.
///
/// Fails with `slice_expected` when `value` is not list-shaped and with
/// `elements_not_model` when the element type is not a model.
pub fn coerce_to_record_sequence(value: Value) -> Result<Vec<Box<dyn Model>>> {
    let list = match value {
        Value::List(list) => list,
        Value::Ref(inner) => match *inner {
            Value::List(list) => list,
            other => return Err(Error::slice_expected(other.kind())),
        },
        other => return Err(Error::slice_expected(other.kind())),
    };

    let is_model = list
        .ty
        .record_type()
        .is_some_and(|record| record.shape().is_model());
    if !is_model {
        return Err(Error::elements_not_model(&list.ty));
    }

    list.items
        .into_iter()
        .map(|item| {
            let kind = item.kind();
            let record = item
                .into_record()
                .ok_or_else(|| Error::elements_not_model(kind))?;
            record
                .into_model()
                .map_err(|record| Error::elements_not_model(record.shape().name))
        })
        .collect()
}

/// The value of `field` for every model, in order.
pub fn model_field_values(models: &[Box<dyn Model>], field: &str) -> Result<Vec<Value>> {
    models
        .iter()
        .map(|model| {
            model
                .field(field)
                .ok_or_else(|| Error::field_not_found(field))
        })
        .collect()
}

/// Assigns related records to a relation field of the record `target`
/// references.
///
/// See [`set_record_collection_field`] for the accepted field shapes.
pub fn set_collection_field(target: &mut Value, field: &str, values: Vec<Value>) -> Result<()> {
    let Value::Ref(inner) = target else {
        return Err(Error::pointer_expected(target.kind()));
    };

    match &mut **inner {
        Value::Record(record) => set_record_collection_field(&mut **record, field, values),
        other => Err(Error::pointer_to_struct_expected(other.kind())),
    }
}

/// Assigns related records to a relation field.
///
/// The field may be a record, a reference to one, a list of records or a
/// list of references. Each value must be a record (or a reference to one)
/// of the field's element type, and is re-wrapped to match the field.
/// Singular fields take the first value, or reset to zero when `values` is
/// empty. Any other field type fails with `unsupported_field_type`.
pub fn set_record_collection_field(
    record: &mut dyn Record,
    field: &str,
    values: Vec<Value>,
) -> Result<()> {
    let Some(shape) = record.shape().find_field(field) else {
        return Err(Error::unknown_field(field));
    };

    let (elem, many) = match &shape.ty {
        Type::List(elem) => (&**elem, true),
        ty => (ty, false),
    };
    let (target, by_ref) = match elem {
        Type::Record(target) => (*target, false),
        Type::Ref(inner) => match &**inner {
            Type::Record(target) => (*target, true),
            _ => return Err(Error::unsupported_field_type(field, &shape.ty)),
        },
        _ => return Err(Error::unsupported_field_type(field, &shape.ty)),
    };

    let items = values
        .into_iter()
        .map(|value| {
            let kind = value.kind();
            let Some(item) = value.into_record() else {
                return Err(Error::type_mismatch(target.name(), kind));
            };
            if item.shape().type_id() != target.type_id() {
                return Err(Error::type_mismatch(target.name(), item.shape().name));
            }
            let item = Value::Record(item);
            Ok(if by_ref { Value::reference(item) } else { item })
        })
        .collect::<Result<Vec<_>>>()?;

    let value = if many {
        Value::List(List {
            ty: elem.clone(),
            items,
        })
    } else {
        items.into_iter().next().unwrap_or_else(|| shape.ty.zero())
    };

    record.set_field(field, value)
}
