pub mod auth_test_utils;
pub mod fixtures;
pub mod http_test_utils;
pub mod test_logging;
