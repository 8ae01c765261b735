//! Declarative query predicates.
//!
//! A [`Filter`] is an immutable tree of `(field, operator, value)` leaves
//! joined by conjunctions and disjunctions. Nothing here evaluates a filter;
//! storage backends translate it, using [`Operator::condition_token`] for
//! the comparison operators.

mod and;
pub use and::FilterAnd;

mod field;
pub use field::FilterField;

mod op;
pub use op::{operator_to_condition_token, Operator};

mod or;
pub use or::FilterOr;

use crate::reflect::{Reflect, Value};
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Compares one field with a value
    Field(FilterField),

    /// All operands must hold
    And(FilterAnd),

    /// At least one operand must hold
    Or(FilterOr),
}

impl Filter {
    pub fn new(field: impl Into<String>, op: Operator, value: impl Into<Value>) -> Filter {
        FilterField::new(field.into(), op, value.into()).into()
    }

    /// Builds a leaf from an operator name such as `"gte"`. Unknown names
    /// fail with `unknown_filter`.
    pub fn parse(field: impl Into<String>, op: &str, value: impl Into<Value>) -> Result<Filter> {
        Ok(Filter::new(field, op.parse()?, value))
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::new(field, Operator::Eq, value)
    }

    pub fn neq(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::new(field, Operator::Ne, value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::new(field, Operator::Lt, value)
    }

    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::new(field, Operator::Le, value)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::new(field, Operator::Gt, value)
    }

    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::new(field, Operator::Ge, value)
    }

    /// Pattern match; the pattern syntax is the backend's.
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Filter {
        Filter::new(field, Operator::Like, Value::String(pattern.into()))
    }

    /// Membership in a list of values.
    pub fn in_list<T: Reflect>(field: impl Into<String>, values: Vec<T>) -> Filter {
        Filter::new(field, Operator::In, values.to_value())
    }

    /// A conjunction of `operands`, kept exactly as given.
    pub fn and(operands: impl IntoIterator<Item = Filter>) -> Filter {
        FilterAnd::new(operands.into_iter().collect()).into()
    }

    /// A disjunction of `operands`, kept exactly as given.
    pub fn or(operands: impl IntoIterator<Item = Filter>) -> Filter {
        FilterOr::new(operands.into_iter().collect()).into()
    }

    /// Adds `other` as an alternative.
    ///
    /// When `self` is already a disjunction, `other` joins its operands;
    /// otherwise a new two-operand disjunction is built. `other` itself is
    /// never flattened.
    pub fn fold_or(self, other: Filter) -> Filter {
        match self {
            Filter::Or(or) => or.push(other).into(),
            filter => Filter::or([filter, other]),
        }
    }

    /// Adds `other` as a further requirement, joining an existing top-level
    /// conjunction the way [`Filter::fold_or`] does.
    pub fn fold_and(self, other: Filter) -> Filter {
        match self {
            Filter::And(and) => and.push(other).into(),
            filter => Filter::and([filter, other]),
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Filter::Field(_))
    }

    pub fn is_and(&self) -> bool {
        matches!(self, Filter::And(_))
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Filter::Or(_))
    }

    pub fn as_field(&self) -> Option<&FilterField> {
        match self {
            Filter::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Child filters of a conjunction or disjunction. Empty for leaves.
    pub fn operands(&self) -> &[Filter] {
        match self {
            Filter::Field(_) => &[],
            Filter::And(and) => and.operands(),
            Filter::Or(or) => or.operands(),
        }
    }

    /// Every field name referenced by the tree, depth-first, repeats
    /// included.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names = vec![];
        self.collect_field_names(&mut names);
        names
    }

    fn collect_field_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Filter::Field(field) => names.push(field.field()),
            filter => {
                for operand in filter.operands() {
                    operand.collect_field_names(names);
                }
            }
        }
    }
}
