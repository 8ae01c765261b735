use crate::reflect::CmpOp;
use crate::{Error, Result};

use std::fmt;
use std::str::FromStr;

/// Filter operator.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
    In,
}

impl Operator {
    /// The operator name: `eq`, `neq`, `lt`, `lte`, `gt`, `gte`, `like`
    /// or `in`.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "neq",
            Operator::Lt => "lt",
            Operator::Le => "lte",
            Operator::Gt => "gt",
            Operator::Ge => "gte",
            Operator::Like => "like",
            Operator::In => "in",
        }
    }

    /// Backend-neutral condition token.
    pub fn condition_token(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Like => "LIKE",
            Operator::In => "IN",
        }
    }

    /// The equivalent value comparison, for the ordering operators.
    pub fn as_cmp(self) -> Option<CmpOp> {
        Some(match self {
            Operator::Eq => CmpOp::Eq,
            Operator::Ne => CmpOp::Ne,
            Operator::Lt => CmpOp::Lt,
            Operator::Le => CmpOp::Le,
            Operator::Gt => CmpOp::Gt,
            Operator::Ge => CmpOp::Ge,
            Operator::Like | Operator::In => return None,
        })
    }
}

/// Maps an operator name to its condition token.
pub fn operator_to_condition_token(op: &str) -> Result<&'static str> {
    op.parse::<Operator>().map(Operator::condition_token)
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Operator> {
        Ok(match s {
            "eq" => Operator::Eq,
            "neq" => Operator::Ne,
            "lt" => Operator::Lt,
            "lte" => Operator::Le,
            "gt" => Operator::Gt,
            "gte" => Operator::Ge,
            "like" => Operator::Like,
            "in" => Operator::In,
            _ => return Err(Error::unknown_filter(s)),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.condition_token())
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
