use super::Value;
use crate::{Error, Result};

use std::cmp::Ordering;
use std::str::FromStr;

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    /// The operator name as written in filters: `eq`, `neq`, `lt`, `lte`,
    /// `gt`, `gte`.
    pub fn as_str(self) -> &'static str {
        match self {
            CmpOp::Eq => "eq",
            CmpOp::Ne => "neq",
            CmpOp::Lt => "lt",
            CmpOp::Le => "lte",
            CmpOp::Gt => "gt",
            CmpOp::Ge => "gte",
        }
    }

    /// Whether `ordering` (of lhs relative to rhs) satisfies the operator.
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            CmpOp::Eq => ordering.is_eq(),
            CmpOp::Ne => ordering.is_ne(),
            CmpOp::Lt => ordering.is_lt(),
            CmpOp::Le => ordering.is_le(),
            CmpOp::Gt => ordering.is_gt(),
            CmpOp::Ge => ordering.is_ge(),
        }
    }
}

impl FromStr for CmpOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<CmpOp> {
        Ok(match s {
            "eq" => CmpOp::Eq,
            "neq" => CmpOp::Ne,
            "lt" => CmpOp::Lt,
            "lte" => CmpOp::Le,
            "gt" => CmpOp::Gt,
            "gte" => CmpOp::Ge,
            _ => return Err(Error::unknown_filter(s)),
        })
    }
}

impl core::fmt::Display for CmpOp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A number normalized for comparison across widths and signedness.
#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn from_value(value: &Value) -> Option<Number> {
        match value {
            Value::F32(v) => Some(Number::Float((*v).into())),
            Value::F64(v) => Some(Number::Float(*v)),
            value => value.to_i128().map(Number::Int),
        }
    }

    fn partial_cmp(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(lhs), Number::Int(rhs)) => Some(lhs.cmp(&rhs)),
            (lhs, rhs) => lhs.to_f64().partial_cmp(&rhs.to_f64()),
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

/// Compares two values with `op`.
///
/// References are looked through. Numbers compare by value whatever their
/// width or signedness, strings lexicographically, booleans with
/// `false < true`, and two nulls are equal. Other combinations fail with
/// `incomparable_values`.
pub fn compare_values(op: CmpOp, lhs: &Value, rhs: &Value) -> Result<bool> {
    Ok(match order_values(lhs, rhs)? {
        Some(ordering) => op.matches(ordering),
        // NaN is unequal to everything
        None => op == CmpOp::Ne,
    })
}

/// Compares two numeric values. Fails if either operand is not a number.
pub fn compare_numeric_values(op: CmpOp, lhs: &Value, rhs: &Value) -> Result<bool> {
    let lhs = lhs.strip_ref();
    let rhs = rhs.strip_ref();

    match (Number::from_value(lhs), Number::from_value(rhs)) {
        (Some(l), Some(r)) => Ok(match l.partial_cmp(r) {
            Some(ordering) => op.matches(ordering),
            None => op == CmpOp::Ne,
        }),
        _ => Err(Error::incomparable_values(lhs.kind(), rhs.kind())),
    }
}

/// Compares two string values. Fails if either operand is not a string.
pub fn compare_string_values(op: CmpOp, lhs: &Value, rhs: &Value) -> Result<bool> {
    match (lhs.strip_ref(), rhs.strip_ref()) {
        (Value::String(l), Value::String(r)) => Ok(op.matches(l.cmp(r))),
        (l, r) => Err(Error::incomparable_values(l.kind(), r.kind())),
    }
}

/// Orders two values under the rules of [`compare_values`]. `Ok(None)`
/// means the values are comparable but unordered (NaN).
pub(crate) fn order_values(lhs: &Value, rhs: &Value) -> Result<Option<Ordering>> {
    let lhs = lhs.strip_ref();
    let rhs = rhs.strip_ref();

    if let (Some(l), Some(r)) = (Number::from_value(lhs), Number::from_value(rhs)) {
        return Ok(l.partial_cmp(r));
    }

    match (lhs, rhs) {
        (Value::String(l), Value::String(r)) => Ok(Some(l.cmp(r))),
        (Value::Bool(l), Value::Bool(r)) => Ok(Some(l.cmp(r))),
        (Value::Null, Value::Null) => Ok(Some(Ordering::Equal)),
        (l, r) => Err(Error::incomparable_values(l.kind(), r.kind())),
    }
}
