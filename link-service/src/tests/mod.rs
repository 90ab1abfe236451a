mod capture_handlers_test;

use axum::Router;
use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::routes::create_router_with_store;
use eventlink_shared::store::memory::MemoryCaptureStore;
use eventlink_shared::test_utils::test_logging::init_test_logging;

pub const TEST_LINK_HOST: &str = "events.test";

// Helper to set up the test application without a route prefix
pub fn create_test_app() -> (Router, Arc<MemoryCaptureStore>) {
    init_test_logging();

    let config = ServiceConfig {
        link_host: TEST_LINK_HOST.to_string(),
        ..ServiceConfig::default()
    };
    let store = Arc::new(MemoryCaptureStore::new());
    let app = create_router_with_store(store.clone(), &config);
    (app, store)
}
