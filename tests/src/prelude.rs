//! Common imports for test files
//!
//! `use tests::prelude::*;` brings in the fixtures, the helper macros and
//! the strata types most tests touch.

pub use crate::fixtures::{Address, Customer, TestModel, TestParent};
pub use crate::init_logging;
pub use crate::{assert_names, models};

pub use std_util::prelude::*;

pub use strata::{ErrorCode, Kind, Model, Record, Reflect, Schema, Value};
