/// Initializes the logger with the `env_logger` crate.
///
/// Filtering follows `RUST_LOG`, e.g. `RUST_LOG=bitbuf=debug` to see append
/// previews and underflow warnings.
pub fn init_logger() {
    let _ = env_logger::try_init();
}

/// Initializes an `env_logger` writing to the test harness output.
///
/// Safe to call from many tests; only the first call installs the logger.
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
