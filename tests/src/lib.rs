
pub mod fixtures;
pub mod prelude;

pub use std_util::*;

/// Routes `log` output through the test harness. Safe to call from every
/// test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
