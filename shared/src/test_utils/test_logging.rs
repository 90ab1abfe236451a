use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

fn level_from_env() -> LevelFilter {
    match std::env::var("LOG_LEVEL").as_deref() {
        Ok("warn") => LevelFilter::Warn,
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        _ => LevelFilter::Error,
    }
}

/// Initialize test logging once per test binary.
///
/// Defaults to errors only; set LOG_LEVEL=debug (or trace) to see parser and
/// store diagnostics while a test runs.
pub fn init_test_logging() {
    INIT.call_once(|| {
        // try_init: another harness may already have installed a logger
        let _ = Builder::from_default_env()
            .filter_level(level_from_env())
            .is_test(true)
            .try_init();
    });
}
