pub mod result;
pub mod str;

pub mod prelude {
    pub use crate::{assert_err, assert_err_code, assert_ok};
}
