/*!
 * Common test utilities shared across the test suite
 */

use std::sync::Once;

pub mod mock_api;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests; honors RUST_LOG
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
