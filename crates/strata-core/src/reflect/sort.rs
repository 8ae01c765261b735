use super::{get_field_value, Kind, Record, Shape, Type, Value};
use crate::{Error, Result};

use std::cmp::Ordering;

/// Stable in-place sort of records by the value of a named field.
///
/// Elements may be records or references to records. The field's declared
/// type must be a number or a string (optionally behind `Option` or `Box`);
/// records whose keys mix numbers and strings fail with
/// `incomparable_values`. Ascending order puts null keys first and NaN
/// after every other number; descending order reverses both.
///
/// Keys are read and validated before anything is moved, so a failed sort
/// leaves `records` untouched.
pub fn sort_records(records: &mut [Value], field: &str, ascending: bool) -> Result<()> {
    let keys = records
        .iter()
        .map(|record| {
            let value = get_field_value(record, field)?;
            match record.strip_ref() {
                Value::Record(inner) => SortKey::new(inner.shape(), field, value),
                other => Err(Error::struct_expected(other.kind())),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let order = sorted_order(keys, ascending)?;
    let mut taken: Vec<Value> = records.iter_mut().map(std::mem::take).collect();

    for (slot, index) in records.iter_mut().zip(order) {
        *slot = std::mem::take(&mut taken[index]);
    }

    Ok(())
}

/// Stable in-place sort of concrete records by a named field. Ordering
/// follows [`sort_records`].
pub fn sort_by_field<T: Record>(records: &mut [T], field: &str, ascending: bool) -> Result<()> {
    let keys = records
        .iter()
        .map(|record| {
            let value = record
                .field(field)
                .ok_or_else(|| Error::field_not_found(field))?;
            SortKey::new(record.shape(), field, value)
        })
        .collect::<Result<Vec<_>>>()?;

    let order = sorted_order(keys, ascending)?;

    // Apply the permutation by swapping each element into place.
    let mut position: Vec<usize> = (0..records.len()).collect();
    let mut current: Vec<usize> = (0..records.len()).collect();
    for (target, &source) in order.iter().enumerate() {
        let from = position[source];
        records.swap(target, from);
        let displaced = current[target];
        current.swap(target, from);
        position[displaced] = from;
        position[source] = target;
    }

    Ok(())
}

/// A field value reduced to something with a total order.
#[derive(Debug)]
struct SortKey {
    /// Kind of the runtime value, for error reporting
    kind: Kind,
    ord: KeyValue,
}

#[derive(Debug)]
enum KeyValue {
    Null,
    Int(i128),
    Float(f64),
    String(String),
}

impl SortKey {
    fn new(shape: &Shape, field: &str, value: Value) -> Result<SortKey> {
        let ty = shape
            .find_field(field)
            .map(|field| &field.ty)
            .ok_or_else(|| Error::field_not_found(field))?;

        let declared = match ty {
            Type::Ref(inner) => inner.kind(),
            ty => ty.kind(),
        };
        if !declared.is_orderable() {
            return Err(Error::unsupported_field_type(field, ty));
        }

        let value = value.strip_ref();
        let ord = match value {
            Value::Null => KeyValue::Null,
            Value::String(value) => KeyValue::String(value.clone()),
            Value::F32(value) => KeyValue::Float((*value).into()),
            Value::F64(value) => KeyValue::Float(*value),
            value => match value.to_i128() {
                Some(value) => KeyValue::Int(value),
                None => return Err(Error::unsupported_field_type(field, value.kind())),
            },
        };

        Ok(SortKey {
            kind: value.kind(),
            ord,
        })
    }

    fn is_number(&self) -> bool {
        matches!(self.ord, KeyValue::Int(_) | KeyValue::Float(_))
    }
}

/// Indices of `keys` in sorted order.
///
/// Non-null keys must all be numbers or all be strings. When any number is
/// a float, integers are compared as floats too, so the comparator is total.
fn sorted_order(mut keys: Vec<SortKey>, ascending: bool) -> Result<Vec<usize>> {
    let mut present = keys.iter().filter(|key| !matches!(key.ord, KeyValue::Null));
    if let Some(first) = present.next() {
        if let Some(other) = present.find(|key| key.is_number() != first.is_number()) {
            return Err(Error::incomparable_values(first.kind, other.kind));
        }
    }

    if keys.iter().any(|key| matches!(key.ord, KeyValue::Float(_))) {
        for key in &mut keys {
            if let KeyValue::Int(value) = key.ord {
                key.ord = KeyValue::Float(value as f64);
            }
        }
    }

    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| {
        let ordering = total_cmp(&keys[a].ord, &keys[b].ord);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    Ok(order)
}

fn total_cmp(lhs: &KeyValue, rhs: &KeyValue) -> Ordering {
    match (lhs, rhs) {
        (KeyValue::Null, KeyValue::Null) => Ordering::Equal,
        (KeyValue::Null, _) => Ordering::Less,
        (_, KeyValue::Null) => Ordering::Greater,
        (KeyValue::Int(lhs), KeyValue::Int(rhs)) => lhs.cmp(rhs),
        (KeyValue::Float(lhs), KeyValue::Float(rhs)) => match (lhs.is_nan(), rhs.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => lhs.total_cmp(rhs),
        },
        (KeyValue::String(lhs), KeyValue::String(rhs)) => lhs.cmp(rhs),
        // Mixed kinds were rejected by `sorted_order`.
        _ => Ordering::Equal,
    }
}
