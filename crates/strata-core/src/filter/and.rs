use super::Filter;

use std::ops;

/// Conjunction: every operand must hold.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterAnd {
    operands: Vec<Filter>,
}

impl FilterAnd {
    pub(super) fn new(operands: Vec<Filter>) -> FilterAnd {
        FilterAnd { operands }
    }

    pub fn operands(&self) -> &[Filter] {
        &self.operands
    }

    /// Consumes the node, returning it with `operand` appended.
    pub(super) fn push(mut self, operand: Filter) -> FilterAnd {
        self.operands.push(operand);
        self
    }
}

impl ops::Deref for FilterAnd {
    type Target = [Filter];

    fn deref(&self) -> &Self::Target {
        &self.operands
    }
}

impl<'a> IntoIterator for &'a FilterAnd {
    type IntoIter = std::slice::Iter<'a, Filter>;
    type Item = &'a Filter;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<FilterAnd> for Filter {
    fn from(value: FilterAnd) -> Self {
        Filter::And(value)
    }
}
