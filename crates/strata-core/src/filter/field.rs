use super::{Filter, Operator};
use crate::reflect::Value;

/// A leaf comparing one field with a value.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterField {
    field: String,
    op: Operator,
    value: Value,
}

impl FilterField {
    pub(super) fn new(field: String, op: Operator, value: Value) -> FilterField {
        FilterField { field, op, value }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl From<FilterField> for Filter {
    fn from(value: FilterField) -> Self {
        Filter::Field(value)
    }
}
