use super::Filter;

use std::ops;

/// Disjunction: at least one operand must hold.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOr {
    operands: Vec<Filter>,
}

impl FilterOr {
    pub(super) fn new(operands: Vec<Filter>) -> FilterOr {
        FilterOr { operands }
    }

    pub fn operands(&self) -> &[Filter] {
        &self.operands
    }

    /// Consumes the node, returning it with `operand` appended.
    pub(super) fn push(mut self, operand: Filter) -> FilterOr {
        self.operands.push(operand);
        self
    }
}

impl ops::Deref for FilterOr {
    type Target = [Filter];

    fn deref(&self) -> &Self::Target {
        &self.operands
    }
}

impl<'a> IntoIterator for &'a FilterOr {
    type IntoIter = std::slice::Iter<'a, Filter>;
    type Item = &'a Filter;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<FilterOr> for Filter {
    fn from(value: FilterOr) -> Self {
        Filter::Or(value)
    }
}
